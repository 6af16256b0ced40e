use std::fmt;

/// Token classification for Monolith source.
///
/// The kind set is closed: the dump renderer matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    String3Literal, // """Hello, World"""
    StringLiteral,  // "Hello, World!"
    CharLiteral,    // 'H'
    HexLiteral,     // 0xABCD
    BinLiteral,     // 0b0101
    OctLiteral,     // 0o01234567
    SciLiteral,     // 1e-3
    FloatLiteral,   // 1234.1234
    IntLiteral,     // 1234
    BoolLiteral,    // True, False
    NoneLiteral,    // None

    // Constants
    Symbol,  // +=, -, >>, (, and, or
    Keyword, // if, for, def

    // Structure
    NewLine,
    Indent,
    Dedent,

    Identifier,
}

impl TokenKind {
    /// Stable upper-case name used by the token dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::String3Literal => "STRING3_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::HexLiteral => "HEX_LITERAL",
            TokenKind::BinLiteral => "BIN_LITERAL",
            TokenKind::OctLiteral => "OCT_LITERAL",
            TokenKind::SciLiteral => "SCI_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::BoolLiteral => "BOOL_LITERAL",
            TokenKind::NoneLiteral => "NONE_LITERAL",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::NewLine => "NEW_LINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }

    /// Structural tokens carry no content and end a dump line.
    pub fn is_layout(self) -> bool {
        matches!(self, TokenKind::NewLine | TokenKind::Indent | TokenKind::Dedent)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the Monolith lexer.
///
/// `content` borrows from the scanned source buffer, so the buffer must
/// outlive every token taken from it. Tokens carry no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub content: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, content: &'src str) -> Self {
        Self { kind, content }
    }

    /// A layout token (NEW_LINE, INDENT, DEDENT) with empty content.
    pub fn layout(kind: TokenKind) -> Self {
        debug_assert!(kind.is_layout());
        Self { kind, content: "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::String3Literal.name(), "STRING3_LITERAL");
        assert_eq!(TokenKind::NewLine.to_string(), "NEW_LINE");
        assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
    }

    #[test]
    fn test_layout_kinds() {
        assert!(TokenKind::Indent.is_layout());
        assert!(TokenKind::Dedent.is_layout());
        assert!(TokenKind::NewLine.is_layout());
        assert!(!TokenKind::Symbol.is_layout());
        assert_eq!(Token::layout(TokenKind::Indent).content, "");
    }
}
