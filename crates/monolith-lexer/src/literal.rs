//! Literal classifiers.
//!
//! Each classifier inspects the cursor position and either declines
//! (`Ok(None)`, cursor unchanged), consumes one literal, or fails hard once
//! its signature has matched. [`LITERAL_CLASSIFIERS`] lists them in priority
//! order; the first match wins.

use crate::cursor::{alnum_run, number_run, word_run, SourceCursor};
use crate::token::{Token, TokenKind};
use crate::{ScanError, ScanResult};

const TRIPLE_QUOTE: &str = "\"\"\"";

/// A literal classifier.
pub type Classifier = for<'src> fn(&mut SourceCursor<'src>) -> ScanResult<'src>;

/// All literal classifiers in the order the scanner tries them.
pub const LITERAL_CLASSIFIERS: [Classifier; 11] = [
    string3_literal,
    string_literal,
    char_literal,
    hex_literal,
    bin_literal,
    oct_literal,
    sci_literal,
    float_literal,
    int_literal,
    bool_literal,
    none_literal,
];

/// Try every literal classifier in priority order.
pub fn classify<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    for classifier in LITERAL_CLASSIFIERS {
        if let Some(token) = classifier(cursor)? {
            return Ok(Some(token));
        }
    }
    Ok(None)
}

// --- Strings ---

/// `"""..."""`. The only literal allowed to span lines.
pub fn string3_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    let rest = cursor.rest();
    if !rest.starts_with(TRIPLE_QUOTE) {
        return Ok(None);
    }

    let body_len = rest[TRIPLE_QUOTE.len()..]
        .find(TRIPLE_QUOTE)
        .ok_or_else(|| ScanError::new("Triple string literal does not end", 0))?;

    let len = body_len + 2 * TRIPLE_QUOTE.len();
    Ok(Some(Token::new(TokenKind::String3Literal, cursor.bump(len))))
}

/// `"..."` on a single line. A `"""` opening belongs to [`string3_literal`].
pub fn string_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    if cursor.rest().starts_with(TRIPLE_QUOTE) {
        return Ok(None);
    }
    quoted(
        cursor,
        b'"',
        TokenKind::StringLiteral,
        "String literal does not end at current line",
    )
}

/// `'c'` on a single line, holding exactly one (possibly escaped) character.
pub fn char_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    let Some(token) = quoted(
        cursor,
        b'\'',
        TokenKind::CharLiteral,
        "Character literal does not end at current line",
    )?
    else {
        return Ok(None);
    };

    let body = &token.content[1..token.content.len() - 1];
    let single = match body.strip_prefix('\\') {
        Some(escaped) => escaped.chars().count() == 1,
        None => body.chars().count() == 1,
    };
    if !single {
        return Err(ScanError::new(
            "Character literal must contain exactly one character",
            1,
        ));
    }
    Ok(Some(token))
}

/// A quote preceded by `\` never closes the literal.
fn quoted<'src>(
    cursor: &mut SourceCursor<'src>,
    quote: u8,
    kind: TokenKind,
    unterminated: &str,
) -> ScanResult<'src> {
    let Some(line) = cursor.remaining_on_line() else {
        return Ok(None);
    };
    let bytes = line.as_bytes();
    if bytes[0] != quote {
        return Ok(None);
    }

    let close = bytes
        .windows(2)
        .position(|pair| pair[1] == quote && pair[0] != b'\\')
        .map(|i| i + 1)
        .ok_or_else(|| ScanError::new(unterminated, 0))?;
    Ok(Some(Token::new(kind, cursor.bump(close + 1))))
}

// --- Radix integers ---

pub fn hex_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    radix(
        cursor,
        b'x',
        |b| b.is_ascii_hexdigit(),
        TokenKind::HexLiteral,
        "Invalid hexadecimal literal",
    )
}

pub fn bin_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    radix(
        cursor,
        b'b',
        |b| matches!(b, b'0' | b'1'),
        TokenKind::BinLiteral,
        "Invalid binary literal",
    )
}

pub fn oct_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    radix(
        cursor,
        b'o',
        |b| matches!(b, b'0'..=b'7'),
        TokenKind::OctLiteral,
        "Invalid octal literal",
    )
}

/// `0<marker><digits>` where the marker is case-insensitive.
fn radix<'src>(
    cursor: &mut SourceCursor<'src>,
    marker: u8,
    is_digit: fn(u8) -> bool,
    kind: TokenKind,
    message: &str,
) -> ScanResult<'src> {
    let Some(line) = cursor.remaining_on_line() else {
        return Ok(None);
    };
    let bytes = line.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' || bytes[1].to_ascii_lowercase() != marker {
        return Ok(None);
    }

    const PREFIX: usize = 2;
    let digits = alnum_run(&line[PREFIX..]);
    if digits.is_empty() {
        return Err(ScanError::new(message, PREFIX));
    }
    if let Some(bad) = digits.bytes().position(|b| !is_digit(b)) {
        return Err(ScanError::new(message, PREFIX + bad));
    }

    Ok(Some(Token::new(kind, cursor.bump(PREFIX + digits.len()))))
}

// --- Decimal numbers ---

/// A decimal number starts with a digit, or with `.` directly followed by one.
fn starts_number(bytes: &[u8]) -> bool {
    match bytes {
        [first, ..] if first.is_ascii_digit() => true,
        [b'.', second, ..] => second.is_ascii_digit(),
        _ => false,
    }
}

/// `<mantissa>e[+-]<digits>`, where the mantissa holds at most one `.`.
pub fn sci_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    const MESSAGE: &str = "Invalid scientific notation literal";

    let Some(line) = cursor.remaining_on_line() else {
        return Ok(None);
    };
    let bytes = line.as_bytes();
    if !starts_number(bytes) {
        return Ok(None);
    }

    let mut seen_dot = false;
    let mut i = 0;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        i += 1;
    }
    if !matches!(bytes.get(i), Some(b'e' | b'E')) {
        return Ok(None);
    }

    let mut exponent = i + 1;
    if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
        exponent += 1;
    }

    let digits = alnum_run(&line[exponent..]);
    if digits.is_empty() {
        return Err(ScanError::new(MESSAGE, exponent));
    }
    if let Some(bad) = digits.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(ScanError::new(MESSAGE, exponent + bad));
    }
    // A fractional exponent such as `1e5.3`.
    let end = exponent + digits.len();
    if bytes.get(end) == Some(&b'.') {
        return Err(ScanError::new(MESSAGE, end));
    }

    Ok(Some(Token::new(
        TokenKind::SciLiteral,
        cursor.bump(end),
    )))
}

/// Digits with exactly one `.`. Declines when there is no `.` at all.
pub fn float_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    const MESSAGE: &str = "Invalid float literal";

    let Some(line) = cursor.remaining_on_line() else {
        return Ok(None);
    };
    if !starts_number(line.as_bytes()) {
        return Ok(None);
    }

    let candidate = number_run(line);
    if !candidate.contains('.') {
        return Ok(None);
    }

    let mut seen_dot = false;
    for (i, b) in candidate.bytes().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => return Err(ScanError::new(MESSAGE, i)),
        }
    }

    Ok(Some(Token::new(
        TokenKind::FloatLiteral,
        cursor.bump(candidate.len()),
    )))
}

pub fn int_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    let Some(line) = cursor.remaining_on_line() else {
        return Ok(None);
    };
    if !line.as_bytes()[0].is_ascii_digit() {
        return Ok(None);
    }

    let candidate = number_run(line);
    if let Some(bad) = candidate.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(ScanError::new("Invalid integer literal", bad));
    }

    Ok(Some(Token::new(
        TokenKind::IntLiteral,
        cursor.bump(candidate.len()),
    )))
}

// --- Reserved-word literals ---

pub fn bool_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    Ok(reserved_word(cursor, &["True", "False"], TokenKind::BoolLiteral))
}

pub fn none_literal<'src>(cursor: &mut SourceCursor<'src>) -> ScanResult<'src> {
    Ok(reserved_word(cursor, &["None"], TokenKind::NoneLiteral))
}

/// Match a whole identifier-shaped word against `words`.
pub(crate) fn reserved_word<'src>(
    cursor: &mut SourceCursor<'src>,
    words: &[&str],
    kind: TokenKind,
) -> Option<Token<'src>> {
    let word = word_run(cursor.remaining_on_line()?);
    if word.is_empty() || !words.contains(&word) {
        return None;
    }
    Some(Token::new(kind, cursor.bump(word.len())))
}
