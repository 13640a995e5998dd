use thiserror::Error;

/// Custom error type for the ScalarGrad framework.
///
/// The graph operators themselves are total and never return this type; it covers the
/// layers built on top of them (network composition, optimisation, training, data loading).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Dimension mismatch during {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Node {index} is not a leaf (produced by '{operator}'), its value cannot be assigned")]
    NotALeaf { index: usize, operator: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot run a training iteration on an empty batch")]
    EmptyBatch,

    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    // io::Error is neither Clone nor PartialEq, so only its rendering is kept.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ScalarGradError {
    fn from(err: std::io::Error) -> Self {
        ScalarGradError::Io(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScalarGradError>;
