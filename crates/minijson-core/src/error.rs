//! Error types for JSON parsing.

use thiserror::Error;

/// Errors produced while parsing JSON text.
///
/// Both variants carry the byte offset into the input at which the problem
/// was detected. Serialization has no error type: it is a pure tree walk
/// into an in-memory string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input violates the supported grammar (bad literal, unterminated
    /// string or container, missing `:` after an object key, ...).
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// The input is valid JSON but uses a construct outside the supported
    /// subset (`\uXXXX` escapes, negative numbers, fractions, exponents).
    /// Reported distinctly so callers can tell "malformed" from "too rich".
    #[error("unsupported construct at offset {offset}: {message}")]
    Unsupported { offset: usize, message: String },
}

impl JsonError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            JsonError::Syntax { offset, .. } | JsonError::Unsupported { offset, .. } => *offset,
        }
    }
}

/// Convenience alias used throughout minijson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
