use std::fmt;

/// A recoverable lexical error anchored to one source line.
///
/// Renders as
///
/// ```text
/// At line: 3
/// Error: Invalid hexadecimal literal
/// x = 0x1G
///        ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based physical line number.
    pub line: usize,
    /// The offending line with its leading whitespace stripped.
    pub source_line: String,
    /// Caret position within `source_line`.
    pub column: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At line: {}\nError: {}\n{}\n{:width$}^",
            self.line,
            self.message,
            self.source_line,
            "",
            width = self.column
        )
    }
}
