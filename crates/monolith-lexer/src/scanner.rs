use tracing::{debug, trace};

use crate::cursor::{line_text, SourceCursor};
use crate::diagnostic::Diagnostic;
use crate::indent::IndentTracker;
use crate::token::{Token, TokenKind};
use crate::{literal, symbol, ScanError};

/// Result of scanning one source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Vec<Diagnostic>,
    /// Blocks still open at end of input. No DEDENTs are synthesized for them.
    pub indent_depth: usize,
}

impl Lexed<'_> {
    /// True when no diagnostic was recorded.
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

/// Monolith source scanner.
///
/// Runs one eager pass over the buffer. At each position the classifiers are
/// tried in a fixed order: literals, symbols, keywords, newline, identifier.
/// When all of them decline the position starts a comment, which runs to the
/// end of the line and swallows its newline. After every NEW_LINE the next
/// line's indentation is checked; a comment-only line passes that check on
/// to the line after it.
///
/// A classifier failure never aborts the scan: it becomes a [`Diagnostic`]
/// and the rest of the physical line is dropped. Scanning resumes on the
/// next line without an indentation check.
pub struct Scanner<'src> {
    cursor: SourceCursor<'src>,
    tokens: Vec<Token<'src>>,
    diagnostics: Vec<Diagnostic>,
    indent: IndentTracker,
    indent_pending: bool,
    /// The pending check hit a comment-only line.
    indent_deferred: bool,
    line: usize,
    line_start: usize,
    /// Bracket depth when the current line started, restored on recovery.
    line_brackets: usize,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: SourceCursor::new(source),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            indent: IndentTracker::new(),
            indent_pending: false,
            indent_deferred: false,
            line: 1,
            line_start: 0,
            line_brackets: 0,
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(source: &'src str) -> Lexed<'src> {
        Scanner::new(source).scan()
    }

    /// Scan until the end of the buffer.
    pub fn scan(mut self) -> Lexed<'src> {
        while !self.cursor.is_at_end() {
            let result = if self.indent_pending {
                self.indent_pending = false;
                self.check_indentation()
            } else {
                self.scan_token()
            };

            if let Err(error) = result {
                self.recover(error);
            }
        }

        trace!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            open_blocks = self.indent.depth(),
            "scan finished"
        );

        Lexed {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
            indent_depth: self.indent.depth(),
        }
    }

    /// Scan the next token.
    fn scan_token(&mut self) -> Result<(), ScanError> {
        self.cursor.skip_horizontal_whitespace();

        if let Some(token) = literal::classify(&mut self.cursor)? {
            if token.kind == TokenKind::String3Literal {
                self.note_line_breaks(token.content);
            }
            self.tokens.push(token);
            return Ok(());
        }

        if let Some(token) = symbol::symbol(&mut self.cursor, &mut self.indent) {
            self.tokens.push(token);
            return Ok(());
        }

        if let Some(token) = symbol::keyword(&mut self.cursor) {
            self.tokens.push(token);
            return Ok(());
        }

        if self.cursor.peek() == Some(b'\n') {
            self.cursor.bump(1);
            self.tokens.push(Token::layout(TokenKind::NewLine));
            self.start_line();
            self.indent_pending = true;
            return Ok(());
        }

        if let Some(token) = symbol::identifier(&mut self.cursor)? {
            self.tokens.push(token);
            return Ok(());
        }

        // Comment: drop the rest of the line including its newline.
        self.cursor.advance_to_next_line();
        self.start_line();
        self.indent_pending = std::mem::take(&mut self.indent_deferred);
        Ok(())
    }

    // --- Indentation ---

    fn check_indentation(&mut self) -> Result<(), ScanError> {
        let line = line_text(self.cursor.rest());
        self.indent_deferred = line.trim_start_matches([' ', '\t']).starts_with('#');
        self.indent.check_line(line, &mut self.tokens)
    }

    // --- Line bookkeeping ---

    /// The cursor sits at the start of a new physical line.
    fn start_line(&mut self) {
        self.line += 1;
        self.line_start = self.cursor.offset();
        self.line_brackets = self.indent.bracket_depth();
    }

    /// Account for newlines inside a token that was just consumed.
    fn note_line_breaks(&mut self, content: &str) {
        let Some(last) = content.rfind('\n') else {
            return;
        };
        let start = self.cursor.offset() - content.len();
        self.line += content.matches('\n').count();
        self.line_start = start + last + 1;
        self.line_brackets = self.indent.bracket_depth();
    }

    // --- Error recovery ---

    /// Record `error` against the current line and resume on the next one.
    fn recover(&mut self, error: ScanError) {
        let line = line_text(&self.cursor.source()[self.line_start..]);
        let source_line = line.trim_start_matches([' ', '\t']);
        let stripped_start = self.line_start + (line.len() - source_line.len());
        let column = self.cursor.offset().saturating_sub(stripped_start) + error.column;

        debug!(
            line = self.line,
            column,
            message = %error.message,
            "lexical error"
        );
        self.diagnostics.push(Diagnostic {
            line: self.line,
            source_line: source_line.to_string(),
            column,
            message: error.message,
        });

        self.cursor.advance_to_next_line();
        self.indent.set_bracket_depth(self.line_brackets);
        self.start_line();
    }
}
