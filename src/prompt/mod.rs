//! Interactive prompting for readme-gen.
//!
//! [`Prompter`] pairs an input stream with an [`OutputSink`] and offers the
//! per-field collection primitives: required, optional, multi-line, URL,
//! dependency list, and a single free-form choice. Invalid answers are
//! reported through the sink and asked again; they never surface as errors.
//! Lines that are not valid UTF-8 are treated the same way. The only errors
//! are a closed or unreadable input stream.

pub mod validation;


use crate::config::DependencyPolicy;
use crate::error::{ReadmeError, Result};
use crate::output::OutputSink;
use std::io::BufRead;

pub use validation::{SENTINEL, is_sentinel, is_valid_url, parse_dependencies};

const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty. Please try again.";
const INVALID_URL_MESSAGE: &str = "Invalid URL. Please enter a valid URL.";
const EMPTY_DEPENDENCIES_MESSAGE: &str = "Dependency list cannot be empty. Please try again.";
const INVALID_ENCODING_MESSAGE: &str = "Input is not valid UTF-8. Please enter it again.";

/// Reads answers from `input`, writing prompts and complaints to `sink`.
pub struct Prompter<R, S> {
    input: R,
    sink: S,
}

impl<R: BufRead, S: OutputSink> Prompter<R, S> {
    pub fn new(input: R, sink: S) -> Self {
        Self { input, sink }
    }

    /// The sink prompts are written to.
    pub fn sink(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the prompter and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Ask until a non-blank answer is given. The answer is trimmed.
    pub fn required_text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.sink.print_error(EMPTY_INPUT_MESSAGE);
        }
    }

    /// Ask once and return the trimmed answer, which may be empty.
    pub fn optional_text(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }

    /// Read lines until the sentinel and join them with `\n`.
    ///
    /// Lines are kept as typed. A blank result is re-asked unless
    /// `allow_empty`; this loops for as long as the user keeps entering
    /// nothing but the sentinel.
    pub fn multiline_text(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        loop {
            self.sink.print(&format!(
                "{} (Type '{}' on a new line to finish input):",
                prompt, SENTINEL
            ));

            let mut lines = Vec::new();
            loop {
                let line = self.read_line(prompt)?;
                if is_sentinel(&line) {
                    break;
                }
                lines.push(line);
            }

            let text = lines.join("\n");
            if allow_empty || !text.trim().is_empty() {
                return Ok(text);
            }
            self.sink.print_error(EMPTY_INPUT_MESSAGE);
        }
    }

    /// Ask until the answer is a valid absolute URL.
    ///
    /// With `allow_empty`, a blank answer returns `None` right away. The URL
    /// is returned as typed (trimmed), not normalized.
    pub fn validated_url(&mut self, prompt: &str, allow_empty: bool) -> Result<Option<String>> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() && allow_empty {
                return Ok(None);
            }
            if is_valid_url(&answer) {
                return Ok(Some(answer));
            }
            self.sink.print_error(INVALID_URL_MESSAGE);
        }
    }

    /// Ask for a comma-separated dependency list.
    ///
    /// Under [`DependencyPolicy::AcceptEmpty`] a blank answer or the sentinel
    /// yields an empty list; under [`DependencyPolicy::Strict`] it is re-asked.
    pub fn dependency_list(&mut self, prompt: &str, policy: DependencyPolicy) -> Result<Vec<String>> {
        loop {
            let answer = self.ask(prompt)?;
            let dependencies = parse_dependencies(&answer);
            if !dependencies.is_empty() || policy == DependencyPolicy::AcceptEmpty {
                return Ok(dependencies);
            }
            self.sink.print_error(EMPTY_DEPENDENCIES_MESSAGE);
        }
    }

    /// Ask once and return the trimmed, lowercased answer.
    pub fn choice(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask(prompt)?.to_lowercase())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.sink.prompt(prompt);
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Read one line without its terminator. End of input is an error.
    ///
    /// A line that is not valid UTF-8 is reported and read again.
    fn read_line(&mut self, waiting_for: &str) -> Result<String> {
        loop {
            let mut bytes = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut bytes)
                .map_err(|e| ReadmeError::UserError(format!("failed to read input: {}", e)))?;

            if read == 0 {
                return Err(ReadmeError::InputClosed(waiting_for.to_string()));
            }

            match String::from_utf8(bytes) {
                Ok(mut line) => {
                    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                    line.truncate(trimmed_len);
                    return Ok(line);
                }
                Err(_) => {
                    tracing::debug!("discarding non-UTF-8 line while waiting for {}", waiting_for);
                    self.sink.print_error(INVALID_ENCODING_MESSAGE);
                }
            }
        }
    }
}
