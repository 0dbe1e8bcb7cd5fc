use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors raised before any graph is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Non-integer input, or an integer below the documented minimum.
    #[error("{0}")]
    InvalidArgument(String),

    /// The vertex count does not fit in `usize`.
    #[error("graph with {columns} columns and {rows} rows is too large")]
    TooLarge { columns: usize, rows: usize },
}

impl GenerateError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GenerateError::InvalidArgument(msg.into())
    }
}
