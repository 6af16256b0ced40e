//! Table-driven symbol, keyword and identifier classifiers.

use crate::cursor::{word_run, SourceCursor};
use crate::indent::IndentTracker;
use crate::literal::reserved_word;
use crate::token::{Token, TokenKind};
use crate::{ScanError, ScanResult};

/// Operators spelled as words. Disjoint from [`KEYWORDS`].
pub const WORD_OPERATORS: [&str; 5] = ["and", "or", "not", "is", "as"];

pub const PUNCTUATORS_3: [&str; 3] = ["<<=", ">>=", "..."];

pub const PUNCTUATORS_2: [&str; 18] = [
    "++", "+=", "--", "-=", "*=", "/=", "%=", ">=", "<=", ">>", "<<", "|=", "&=", "^=", "==",
    "!=", "->", "::",
];

pub const PUNCTUATORS_1: [u8; 20] = [
    b'+', b'-', b'*', b'/', b'%', b'<', b'>', b'|', b'&', b'^', b'~', b'=', b'.', b',', b'(',
    b')', b'[', b']', b'?', b':',
];

#[rustfmt::skip]
pub const KEYWORDS: [&str; 35] = [
    "if", "elif", "else",
    "for", "while", "switch", "case", "default",
    "break", "continue",
    "label", "goto",
    "def", "return", "class",
    "const", "static",
    "int8", "uint8",
    "int16", "uint16",
    "int32", "uint32",
    "int64", "uint64",
    "float", "double",
    "import",
    "ptr", "ref", "dref", "arr",
    "enum", "namespace", "typedef",
];

/// Word operators first, then punctuators longest-first so that `>>=` is
/// never split into `>>` and `=`.
///
/// Brackets update the tracker's suppression depth.
pub fn symbol<'src>(
    cursor: &mut SourceCursor<'src>,
    indent: &mut IndentTracker,
) -> Option<Token<'src>> {
    let line = cursor.remaining_on_line()?;

    // A word that is not an operator belongs to the keyword/identifier chain.
    if !word_run(line).is_empty() {
        return reserved_word(cursor, &WORD_OPERATORS, TokenKind::Symbol);
    }

    let len = if PUNCTUATORS_3.iter().any(|p| line.starts_with(p)) {
        3
    } else if PUNCTUATORS_2.iter().any(|p| line.starts_with(p)) {
        2
    } else if PUNCTUATORS_1.contains(&line.as_bytes()[0]) {
        match line.as_bytes()[0] {
            b'(' | b'[' => indent.open_bracket(),
            b')' | b']' => indent.close_bracket(),
            _ => {}
        }
        1
    } else {
        return None;
    };

    Some(Token::new(TokenKind::Symbol, cursor.bump(len)))
}

/// Reserved words from [`KEYWORDS`], matched on the whole word.
pub fn keyword<'src>(cursor: &mut SourceCursor<'src>) -> Option<Token<'src>> {
    reserved_word(cursor, &KEYWORDS, TokenKind::Keyword)
}

/// Fallback for names. Declines on `#`, which starts a comment.
pub fn identifier<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    let Some(line) = cursor.remaining_on_line() else {
        return Ok(None);
    };

    match line.as_bytes()[0] {
        b'#' => Ok(None),
        b if b.is_ascii_alphanumeric() || b == b'_' => {
            let name = word_run(line);
            Ok(Some(Token::new(TokenKind::Identifier, cursor.bump(name.len()))))
        }
        _ => Err(ScanError::new("Invalid character", 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sym(source: &str) -> Option<&str> {
        let mut cursor = SourceCursor::new(source);
        let mut indent = IndentTracker::new();
        symbol(&mut cursor, &mut indent).map(|t| t.content)
    }

    #[test]
    fn test_tables_are_disjoint() {
        for word in WORD_OPERATORS {
            assert!(!KEYWORDS.contains(&word), "{word} is both");
        }
    }

    #[test]
    fn test_word_operators() {
        for word in WORD_OPERATORS {
            assert_eq!(sym(&format!("{word} x")), Some(word));
        }
    }

    #[test]
    fn test_word_operator_needs_whole_word() {
        assert_eq!(sym("android"), None);
        assert_eq!(sym("is_ok"), None);
    }

    #[test]
    fn test_longest_punctuator_wins() {
        assert_eq!(sym(">>= 1"), Some(">>="));
        assert_eq!(sym("<<=1"), Some("<<="));
        assert_eq!(sym(">> 1"), Some(">>"));
        assert_eq!(sym("> 1"), Some(">"));
        assert_eq!(sym("...x"), Some("..."));
        assert_eq!(sym("->int"), Some("->"));
        assert_eq!(sym("::"), Some("::"));
    }

    #[test]
    fn test_every_two_char_punctuator() {
        for p in PUNCTUATORS_2 {
            assert_eq!(sym(p), Some(p));
        }
    }

    #[test]
    fn test_unknown_punctuation_declines() {
        assert_eq!(sym("!x"), None);
        assert_eq!(sym("{"), None);
        assert_eq!(sym("#x"), None);
    }

    #[test]
    fn test_brackets_track_depth() {
        let mut cursor = SourceCursor::new("([)])");
        let mut indent = IndentTracker::new();
        symbol(&mut cursor, &mut indent);
        symbol(&mut cursor, &mut indent);
        assert_eq!(indent.bracket_depth(), 2);
        symbol(&mut cursor, &mut indent);
        assert!(indent.is_suppressed());
        symbol(&mut cursor, &mut indent);
        assert!(!indent.is_suppressed());
        symbol(&mut cursor, &mut indent);
        assert_eq!(indent.bracket_depth(), 0);
    }

    #[test]
    fn test_keywords() {
        let mut cursor = SourceCursor::new("while x");
        assert_eq!(keyword(&mut cursor).map(|t| t.content), Some("while"));
        assert_eq!(cursor.rest(), " x");
    }

    #[test]
    fn test_keyword_prefix_is_not_keyword() {
        let mut cursor = SourceCursor::new("iffy");
        assert_eq!(keyword(&mut cursor), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_identifier() {
        let mut cursor = SourceCursor::new("_my_var2 = 1");
        let token = identifier(&mut cursor).unwrap().unwrap();
        assert_eq!(token, Token::new(TokenKind::Identifier, "_my_var2"));
    }

    #[test]
    fn test_identifier_declines_on_comment() {
        let mut cursor = SourceCursor::new("# note");
        assert_eq!(identifier(&mut cursor).unwrap(), None);
    }

    #[test]
    fn test_identifier_rejects_stray_character() {
        let mut cursor = SourceCursor::new("$x");
        let err = identifier(&mut cursor).unwrap_err();
        assert_eq!(err, ScanError::new("Invalid character", 0));
    }
}
