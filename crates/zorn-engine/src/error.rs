//! Engine error types.

use thiserror::Error;

/// Errors raised before any frame is produced.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The note list or configuration cannot be rendered.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
