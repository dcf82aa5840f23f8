//! # Terminal Collaborator
//!
//! The seam between the flows and the console.
//!
//! Flows never touch stdin/stdout directly: they talk to the [`Terminal`]
//! trait, which keeps every flow testable with a scripted double and keeps
//! rendering details out of the business logic.
//!
//! ## Contract
//! - `read_line` / `read_integer` block until a full line is available
//! - non-numeric input where an integer is expected surfaces as a
//!   recoverable [`CoreError::InvalidInput`], never a panic
//! - a closed or failed input stream surfaces as [`AppError::Io`], which
//!   ends the session cleanly

use std::io::{self, BufRead, Write as IoWrite};

use ashkana_core::CoreError;

use crate::error::{AppError, AppResult};

// =============================================================================
// Terminal Trait
// =============================================================================

/// Blocking console interaction used by all flows.
pub trait Terminal {
    /// Displays text verbatim (no trailing newline is added).
    fn write(&mut self, text: &str);

    /// Prompts, then reads one line, trimmed.
    fn read_line(&mut self, prompt: &str) -> AppResult<String>;

    /// Prompts, then reads one line and parses it as an integer.
    ///
    /// Malformed input is an [`CoreError::InvalidInput`] the caller reports
    /// and recovers from; only stream failure propagates as I/O.
    fn read_integer(&mut self, prompt: &str) -> AppResult<i64> {
        let line = self.read_line(prompt)?;
        line.parse::<i64>().map_err(|_| {
            AppError::Core(CoreError::InvalidInput { input: line })
        })
    }
}

// =============================================================================
// Stdin/Stdout Implementation
// =============================================================================

/// The real console: locked stdin reader plus stdout.
pub struct StdTerminal {
    input: io::BufReader<io::Stdin>,
    output: io::Stdout,
}

impl StdTerminal {
    /// Creates a terminal over the process's stdin and stdout.
    pub fn new() -> Self {
        StdTerminal {
            input: io::BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        StdTerminal::new()
    }
}

impl Terminal for StdTerminal {
    fn write(&mut self, text: &str) {
        // Display is best-effort; a broken stdout must not take the
        // process down mid-transaction.
        let _ = self.output.write_all(text.as_bytes());
        let _ = self.output.flush();
    }

    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        self.write(prompt);

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // EOF: the session is over.
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }

        Ok(line.trim().to_string())
    }
}

// =============================================================================
// Scripted Double (tests only)
// =============================================================================

/// Terminal fed from a fixed input script, capturing all output.
///
/// Used by flow tests to drive whole transactions end-to-end.
#[cfg(test)]
pub(crate) struct ScriptedTerminal {
    inputs: std::collections::VecDeque<String>,
    pub output: String,
}

#[cfg(test)]
impl ScriptedTerminal {
    pub fn new(inputs: &[&str]) -> Self {
        ScriptedTerminal {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: String::new(),
        }
    }
}

#[cfg(test)]
impl Terminal for ScriptedTerminal {
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        self.write(prompt);
        self.inputs
            .pop_front()
            .map(|line| line.trim().to_string())
            .ok_or_else(|| {
                AppError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "script exhausted",
                ))
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integer_parses() {
        let mut term = ScriptedTerminal::new(&["42"]);
        assert_eq!(term.read_integer("> ").unwrap(), 42);
        assert_eq!(term.output, "> ");
    }

    #[test]
    fn test_read_integer_rejects_text_as_invalid_input() {
        let mut term = ScriptedTerminal::new(&["three"]);
        let err = term.read_integer("> ").unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_read_integer_accepts_sentinels() {
        let mut term = ScriptedTerminal::new(&["-1", "0"]);
        assert_eq!(term.read_integer("").unwrap(), -1);
        assert_eq!(term.read_integer("").unwrap(), 0);
    }

    #[test]
    fn test_exhausted_script_is_io_error() {
        let mut term = ScriptedTerminal::new(&[]);
        assert!(matches!(term.read_line("> "), Err(AppError::Io(_))));
    }
}
