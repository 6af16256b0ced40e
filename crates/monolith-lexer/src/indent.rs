//! Offside-rule indentation tracking.

use tracing::trace;

use crate::token::{Token, TokenKind};
use crate::ScanError;

/// Weight of a space in leading whitespace.
pub const SPACE_WEIGHT: usize = 1;
/// Weight of a tab in leading whitespace.
pub const TAB_WEIGHT: usize = 2;

/// Converts the leading whitespace of each line into INDENT/DEDENT tokens.
///
/// The stack holds the weights of the open blocks, strictly increasing from
/// bottom to top. An empty stack is top level, whose weight is 0. While a
/// `(` or `[` is open, indentation is ignored.
#[derive(Debug, Default)]
pub struct IndentTracker {
    stack: Vec<usize>,
    bracket_depth: usize,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Weight of the innermost open block.
    pub fn current_weight(&self) -> usize {
        self.stack.last().copied().unwrap_or(0)
    }

    pub fn bracket_depth(&self) -> usize {
        self.bracket_depth
    }

    /// Indentation is ignored inside brackets.
    pub fn is_suppressed(&self) -> bool {
        self.bracket_depth > 0
    }

    pub fn open_bracket(&mut self) {
        self.bracket_depth += 1;
    }

    pub fn close_bracket(&mut self) {
        self.bracket_depth = self.bracket_depth.saturating_sub(1);
    }

    pub(crate) fn set_bracket_depth(&mut self, depth: usize) {
        self.bracket_depth = depth;
    }

    /// Check the indentation of a physical line (without its terminator).
    ///
    /// Blank and comment-only lines, and lines inside brackets, are skipped.
    pub fn check_line<'src>(
        &mut self,
        line: &str,
        out: &mut Vec<Token<'src>>,
    ) -> Result<(), ScanError> {
        if self.is_suppressed() {
            return Ok(());
        }
        let body = line.trim_start_matches([' ', '\t']);
        if body.is_empty() || body.starts_with('#') {
            return Ok(());
        }
        self.track(indentation_weight(line), out)
    }

    /// Apply one line's weight: push and INDENT, nothing, or pop and DEDENT.
    ///
    /// DEDENTs for the levels popped are emitted even when the new weight then
    /// fails to match an outer level.
    pub fn track<'src>(
        &mut self,
        weight: usize,
        out: &mut Vec<Token<'src>>,
    ) -> Result<(), ScanError> {
        let current = self.current_weight();

        if weight > current {
            trace!(weight, depth = self.stack.len() + 1, "indent");
            self.stack.push(weight);
            out.push(Token::layout(TokenKind::Indent));
            return Ok(());
        }
        if weight == current {
            return Ok(());
        }

        while self.stack.last().is_some_and(|&top| top > weight) {
            self.stack.pop();
            out.push(Token::layout(TokenKind::Dedent));
        }
        trace!(weight, depth = self.stack.len(), "dedent");

        if self.current_weight() != weight {
            return Err(ScanError::new(
                "Indent (spacing) doesn't match previous indents",
                0,
            ));
        }
        Ok(())
    }
}

/// Sum of leading whitespace weights: space 1, tab 2.
pub fn indentation_weight(line: &str) -> usize {
    line.bytes()
        .map_while(|b| match b {
            b' ' => Some(SPACE_WEIGHT),
            b'\t' => Some(TAB_WEIGHT),
            _ => None,
        })
        .sum()
}
