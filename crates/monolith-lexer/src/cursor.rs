//! Byte cursor over the unscanned remainder of a source buffer.
//!
//! Classifiers never look past the current physical line except the
//! triple-quoted string matcher and the newline matcher, so most queries here
//! are line-scoped.

/// A forward-only view over the remaining source.
///
/// Every slice handed out borrows from the original buffer, never from the
/// cursor itself, so tokens outlive the cursor that produced them.
#[derive(Debug, Clone)]
pub struct SourceCursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> SourceCursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// The whole buffer, independent of the cursor position.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the cursor from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Everything not yet consumed, across lines.
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Text from the cursor up to the next `\n` (exclusive), or `None` when
    /// that would be empty.
    pub fn remaining_on_line(&self) -> Option<&'src str> {
        let line = line_text(self.rest());
        (!line.is_empty()).then_some(line)
    }

    /// Consume `len` bytes and return them.
    pub fn bump(&mut self, len: usize) -> &'src str {
        let end = (self.pos + len).min(self.source.len());
        let consumed = &self.source[self.pos..end];
        self.pos = end;
        consumed
    }

    /// Skip spaces and tabs. A `\r` directly before `\n` counts as part of
    /// the line terminator and is skipped as well.
    pub fn skip_horizontal_whitespace(&mut self) {
        let bytes = self.source.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b' ' | b'\t' => self.pos += 1,
                b'\r' if bytes.get(self.pos + 1) == Some(&b'\n') => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Consume up to, not including, the next `\n`.
    pub fn skip_to_line_end(&mut self) {
        self.pos = match self.rest().find('\n') {
            Some(idx) => self.pos + idx,
            None => self.source.len(),
        };
    }

    /// Consume up to and including the next `\n`.
    pub fn advance_to_next_line(&mut self) {
        self.skip_to_line_end();
        if self.peek() == Some(b'\n') {
            self.pos += 1;
        }
    }
}

/// The physical line at the start of `text`, without its terminator.
pub(crate) fn line_text(text: &str) -> &str {
    let line = match text.find('\n') {
        Some(idx) => &text[..idx],
        None => text,
    };
    line.strip_suffix('\r').unwrap_or(line)
}

/// Leading run of ASCII alphanumerics.
pub(crate) fn alnum_run(text: &str) -> &str {
    take_while(text, |b| b.is_ascii_alphanumeric())
}

/// Leading run of ASCII alphanumerics and `_`, the shape shared by
/// identifiers, keywords, word operators and the bool/none literals.
pub(crate) fn word_run(text: &str) -> &str {
    take_while(text, |b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Leading run of ASCII alphanumerics and `.`, the extent of a numeric
/// literal candidate.
pub(crate) fn number_run(text: &str) -> &str {
    take_while(text, |b| b.is_ascii_alphanumeric() || b == b'.')
}

fn take_while(text: &str, pred: impl Fn(u8) -> bool) -> &str {
    let end = text.bytes().position(|b| !pred(b)).unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_remaining_on_line() {
        let cursor = SourceCursor::new("abc def\nghi");
        assert_eq!(cursor.remaining_on_line(), Some("abc def"));
    }

    #[test]
    fn test_remaining_on_line_at_newline_is_none() {
        let cursor = SourceCursor::new("\nabc");
        assert_eq!(cursor.remaining_on_line(), None);
    }

    #[test]
    fn test_remaining_on_line_at_end_is_none() {
        let mut cursor = SourceCursor::new("ab");
        cursor.bump(2);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining_on_line(), None);
    }

    #[test]
    fn test_remaining_on_line_strips_carriage_return() {
        let cursor = SourceCursor::new("abc\r\nx");
        assert_eq!(cursor.remaining_on_line(), Some("abc"));
    }

    #[test]
    fn test_skip_horizontal_whitespace() {
        let mut cursor = SourceCursor::new(" \t x");
        cursor.skip_horizontal_whitespace();
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_skip_whitespace_stops_at_newline() {
        let mut cursor = SourceCursor::new("  \r\n  x");
        cursor.skip_horizontal_whitespace();
        assert_eq!(cursor.rest(), "\n  x");
    }

    #[test]
    fn test_lone_carriage_return_is_not_whitespace() {
        let mut cursor = SourceCursor::new("\rx");
        cursor.skip_horizontal_whitespace();
        assert_eq!(cursor.peek(), Some(b'\r'));
    }

    #[test]
    fn test_advance_to_next_line() {
        let mut cursor = SourceCursor::new("abc\ndef");
        cursor.advance_to_next_line();
        assert_eq!(cursor.rest(), "def");
        cursor.advance_to_next_line();
        assert!(cursor.is_at_end());
        cursor.advance_to_next_line();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_skip_to_line_end_keeps_newline() {
        let mut cursor = SourceCursor::new("# note\nx");
        cursor.skip_to_line_end();
        assert_eq!(cursor.rest(), "\nx");
    }

    #[test]
    fn test_bump_never_passes_end() {
        let mut cursor = SourceCursor::new("ab");
        assert_eq!(cursor.bump(5), "ab");
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_runs() {
        assert_eq!(alnum_run("ab1_c"), "ab1");
        assert_eq!(word_run("ab1_c d"), "ab1_c");
        assert_eq!(number_run("1.5e3)"), "1.5e3");
        assert_eq!(word_run("+x"), "");
    }
}
