//! Error types and handling infrastructure for rcalc.
//!
//! Two layers of errors live here:
//!
//! - [`CalcError`] is the closed taxonomy of calculation failures produced by the engine.
//!   Every variant collapses to the same `Error` display, but callers can still branch on
//!   the kind.
//! - [`RcalcError`] covers everything around the engine: terminal I/O, configuration and
//!   command-line arguments.

use thiserror::Error;

/// Calculation failures raised by the evaluator and the input state machine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// A character outside `[0-9.+\-*/]` or a malformed operator/operand sequence
    #[error("invalid expression")]
    InvalidExpression,

    /// The right-hand operand of `/` was exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// Square root requested for a negative operand
    #[error("square root of a negative number")]
    NegativeSqrtOperand,

    /// Sign toggle, square root or percent applied to an empty or malformed operand
    #[error("no number to operate on")]
    UnparsableSegment,
}

/// The main error type for rcalc operations outside the calculation engine.
#[derive(Error, Debug)]
pub enum RcalcError {
    /// Terminal or file system I/O failure
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be located or parsed
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A calculation surfaced outside the interactive session (one-shot evaluation)
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalcError),
}

/// Standard Result type for rcalc operations.
pub type Result<T> = std::result::Result<T, RcalcError>;

impl RcalcError {
    /// Create an Io error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for RcalcError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::Io {
            message: message.to_string(),
            source: err,
        }
    }
}
