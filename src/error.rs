//! Error types for fx-graph

use thiserror::Error;

/// Main error type for fx-graph
///
/// Missing symbols are deliberately not an error: lookups return `Option` and
/// mutations degrade to no-ops, so callers can branch without error handling.
#[derive(Error, Debug)]
pub enum FxGraphError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for fx-graph operations
pub type Result<T> = std::result::Result<T, FxGraphError>;
