//! Monolith Lexer
//!
//! Tokenizes `.mon` source files into a flat stream of classified tokens.
//! Handles offside-rule indentation (INDENT/DEDENT), literal classification
//! (strings, chars, radix/scientific/float/int numbers, `True`/`False`/`None`),
//! punctuators, word operators and keywords. Malformed lines become
//! diagnostics and scanning resumes on the next line.
//!
//! # Example
//!
//! ```
//! use monolith_lexer::{Scanner, TokenKind};
//!
//! let lexed = Scanner::tokenize("x = 1\n");
//! assert_eq!(
//!     lexed.kinds(),
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Symbol,
//!         TokenKind::IntLiteral,
//!         TokenKind::NewLine,
//!     ]
//! );
//! assert!(lexed.passed());
//! ```

pub mod cursor;
pub mod diagnostic;
pub mod dump;
pub mod indent;
pub mod literal;
pub mod scanner;
pub mod source;
pub mod symbol;
pub mod token;

pub use cursor::SourceCursor;
pub use diagnostic::Diagnostic;
pub use indent::IndentTracker;
pub use scanner::{Lexed, Scanner};
pub use source::{SourceError, SourceFile};
pub use token::{Token, TokenKind};

/// Hard failure of a classifier whose signature already matched.
///
/// `column` is relative to the start of the token being classified; the
/// scanner turns it into a caret position on the rendered line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (column {column})")]
pub struct ScanError {
    pub message: String,
    pub column: usize,
}

impl ScanError {
    pub fn new(message: impl Into<String>, column: usize) -> Self {
        Self {
            message: message.into(),
            column,
        }
    }
}

/// Outcome of a single classifier: a token, a decline (`Ok(None)`, cursor
/// untouched), or a hard failure.
pub type ScanResult<'src> = Result<Option<Token<'src>>, ScanError>;
