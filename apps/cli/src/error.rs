//! # App Error Type
//!
//! Unified error type for the terminal application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Ashkana POS                            │
//! │                                                                         │
//! │  Core(CoreError)  ──► recoverable: rendered to the terminal and the    │
//! │                       enclosing selection/panel loop continues          │
//! │                                                                         │
//! │  Io(io::Error)    ──► fatal for the session: propagates out of every   │
//! │                       loop and ends the REPL cleanly (no panic)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use ashkana_core::CoreError;

/// Errors surfaced by flows and the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    /// A domain error. Always recoverable: report and continue.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The terminal input stream failed or closed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_message_passes_through() {
        let err = AppError::from(CoreError::InvalidSelection { id: 42 });
        assert_eq!(err.to_string(), "Invalid selection: 42");
    }

    #[test]
    fn test_io_error_is_prefixed() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "end of input");
        let err = AppError::from(io);
        assert!(err.to_string().starts_with("terminal error:"));
    }
}
