//! Function definitions fed to the schema builder.
//!
//! A definition either comes from the built-in example or from a JSON5 file
//! on disk. Descriptor contents are left for the builder to check.

mod definition;
mod error;

/// Function definition model and loaders.
pub use definition::{DEFAULT_OUTPUT_FILE, FunctionDefinition};
/// Public error type returned by definition loading.
pub use error::ConfigError;
