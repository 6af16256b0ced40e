//! Textual token dump.
//!
//! Tokens render as `[KIND: 'content'] `. Layout tokens render as
//! `[NEW_LINE]`, `[INDENT]` or `[DEDENT]` on a line of their own, and the
//! token after one of them is re-indented with tabs by the current dump
//! depth. This depth is cosmetic and independent of the scanner's indent
//! stack. Diagnostics, if any, follow the tokens.

use std::fmt::Display;
use std::path::Path;

use crate::scanner::Lexed;
use crate::source::SourceError;
use crate::token::Token;

/// Per-render state. Created fresh for every dump.
#[derive(Debug, Default)]
pub struct DumpContext {
    depth: usize,
    at_line_start: bool,
}

impl DumpContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current re-indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Append one token to `out`.
    pub fn write_token(&mut self, out: &mut String, token: &Token<'_>) {
        use crate::token::TokenKind::{Dedent, Indent};

        if self.at_line_start {
            match token.kind {
                Indent => self.depth += 1,
                Dedent => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
            out.extend(std::iter::repeat('\t').take(self.depth));
        }

        if token.kind.is_layout() {
            self.at_line_start = true;
            out.push_str(&format!("[{}]\n", token.kind));
        } else {
            self.at_line_start = false;
            out.push_str(&format!("[{}: '{}'] ", token.kind, token.content));
        }
    }
}

/// Render a scan result: tokens, then diagnostics attributed to `path`.
pub fn render(path: &Path, lexed: &Lexed<'_>) -> String {
    let mut out = String::new();
    let mut context = DumpContext::new();
    for token in &lexed.tokens {
        context.write_token(&mut out, token);
    }
    write_messages(&mut out, path, &lexed.diagnostics);
    out
}

/// Render a run that failed before scanning: no tokens, one message.
pub fn render_source_error(error: &SourceError) -> String {
    let mut out = String::new();
    write_messages(&mut out, error.path(), std::slice::from_ref(error));
    out
}

fn write_messages<M: Display>(out: &mut String, path: &Path, messages: &[M]) {
    if messages.is_empty() {
        return;
    }
    out.push_str(&format!("\nAt file: {}\n\n", path.display()));
    for message in messages {
        out.push_str(&format!("{message}\n"));
    }
}
