//! User-facing output for readme-gen.
//!
//! Everything the user reads (prompts, validation complaints, the final
//! summary) goes through an [`OutputSink`] passed in by the caller. The
//! console sink styles text with `colored`; the buffer sink records lines so
//! tests and the self-test runner can inspect exactly what was shown.

use colored::Colorize;
use std::io::{self, Write};

/// Destination for user-facing messages.
pub trait OutputSink {
    /// Plain informational line.
    fn print(&mut self, message: &str);

    /// Error or warning line.
    fn print_error(&mut self, message: &str);

    /// Confirmation line (file written, tests passed).
    fn print_success(&mut self, message: &str);

    /// Prompt text shown right before reading an answer; no newline.
    fn prompt(&mut self, message: &str);
}

/// Terminal sink: stdout for prompts and info, stderr for errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn print(&mut self, message: &str) {
        println!("{}", message);
    }

    fn print_error(&mut self, message: &str) {
        eprintln!("{}", message.red().bold());
    }

    fn print_success(&mut self, message: &str) {
        println!("{}", message.green().bold());
    }

    fn prompt(&mut self, message: &str) {
        print!("{} ", message);
        // A failed flush only delays the prompt text; reading still works.
        let _ = io::stdout().flush();
    }
}

/// Kind of a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Info,
    Error,
    Success,
    Prompt,
}

/// In-memory sink recording every message in order.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    pub lines: Vec<(LineKind, String)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of one kind, in order.
    pub fn of_kind(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Whether any message of `kind` contains `needle`.
    pub fn contains(&self, kind: LineKind, needle: &str) -> bool {
        self.of_kind(kind).iter().any(|line| line.contains(needle))
    }
}

impl OutputSink for BufferSink {
    fn print(&mut self, message: &str) {
        self.lines.push((LineKind::Info, message.to_string()));
    }

    fn print_error(&mut self, message: &str) {
        self.lines.push((LineKind::Error, message.to_string()));
    }

    fn print_success(&mut self, message: &str) {
        self.lines.push((LineKind::Success, message.to_string()));
    }

    fn prompt(&mut self, message: &str) {
        self.lines.push((LineKind::Prompt, message.to_string()));
    }
}
