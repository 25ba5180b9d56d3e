//! Error types for schema building and JSON output.

use thiserror::Error;

/// Errors returned while building or writing a function schema.
#[derive(Debug, Error)]
pub enum ScribeError {
    /// A parameter descriptor lacks a required key.
    #[error("parameter `{parameter}` is missing `{field}`")]
    MissingField {
        parameter: String,
        field: &'static str,
    },
    /// A parameter descriptor has the wrong shape.
    #[error("invalid descriptor for parameter `{parameter}`: {message}")]
    InvalidDescriptor { parameter: String, message: String },
    /// Writing the destination file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The value could not be rendered as JSON.
    #[error("failed to serialize json: {0}")]
    Serialize(#[from] serde_json::Error),
}
