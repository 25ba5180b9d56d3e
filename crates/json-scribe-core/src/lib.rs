//! Function-call schema model, builder, and JSON writer.

mod error;
pub mod schema;
pub mod writer;

/// Error type shared by the builder and the writer.
pub use error::ScribeError;
/// Schema model types and builder functions.
pub use schema::{
    FunctionSchema, ParameterDescriptor, ParametersSchema, PropertySchema, build_function_schema,
    create_function_call_schema,
};
/// JSON rendering helpers.
pub use writer::{DEFAULT_INDENT, to_json_string, write_json_file};
