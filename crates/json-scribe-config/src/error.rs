//! Error types for definition loading.

use thiserror::Error;

/// Errors returned while loading a function definition.
///
/// `origin` names where the definition came from: a file path, or
/// `<inline>` for raw contents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a definition file failed.
    #[error("failed to read definition {origin}: {source}")]
    ReadFailed {
        origin: String,
        source: std::io::Error,
    },
    /// The contents are not valid JSON5.
    #[error("failed to parse definition {origin}: {source}")]
    ParseFailed {
        origin: String,
        source: json5::Error,
    },
    /// The contents do not decode into a definition.
    #[error("failed to decode definition {origin}: {source}")]
    DecodeFailed {
        origin: String,
        source: serde_json::Error,
    },
    /// A specific key failed validation.
    #[error("invalid definition {origin} at `{key}`: {message}")]
    InvalidField {
        origin: String,
        key: String,
        message: String,
    },
    /// The definition as a whole failed validation.
    #[error("invalid definition {origin}: {message}")]
    Invalid { origin: String, message: String },
}
