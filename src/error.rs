//! Error types for the SparkSQL dialect.

use thiserror::Error;

/// The main error type for dialect operations.
#[derive(Debug, Error)]
pub enum DialectError {
    /// The table (or the schema it was looked up in) does not exist.
    #[error("No such table: {0}")]
    NoSuchTable(String),

    /// The engine cannot describe the table, typically because a column
    /// uses a hive-only type string SparkSQL does not recognize.
    /// Callers checking existence treat this the same as not-found.
    #[error("Table cannot be reflected: {0}")]
    Unreflectable(String),

    /// Statement execution failed. Carries the engine's error text verbatim;
    /// `Connection` implementors wrap their driver errors in this variant.
    #[error("Execution error: {0}")]
    Execution(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DialectError {
    /// Create an execution error from engine error text.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// The engine error text, if this error carries any.
    pub fn engine_message(&self) -> Option<&str> {
        match self {
            Self::Execution(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Result type alias for dialect operations.
pub type DialectResult<T> = Result<T, DialectError>;
