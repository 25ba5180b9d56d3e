//! Function definition model and JSON5 loading.

use crate::ConfigError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::Path;

/// File written when no destination is given.
pub const DEFAULT_OUTPUT_FILE: &str = "example_function_schema.json";

/// Origin label for definitions loaded from raw contents.
const INLINE_ORIGIN: &str = "<inline>";

/// Top-level keys accepted in a definition file.
const KNOWN_KEYS: &[&str] = &["$schema", "name", "description", "parameters", "required"];

/// Everything the builder needs to produce one function schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    #[serde(default, rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: String,
    /// Descriptor objects keyed by parameter name, in file order.
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Required parameter names, in file order.
    #[serde(default)]
    pub required: Vec<String>,
}

impl FunctionDefinition {
    /// The built-in example definition.
    pub fn example() -> Self {
        let mut parameters = Map::new();
        parameters.insert(
            "param1".to_string(),
            json!({
                "type": "string",
                "description": "A string parameter."
            }),
        );
        parameters.insert(
            "param2".to_string(),
            json!({
                "type": "integer",
                "description": "An integer parameter.",
                "default": 42
            }),
        );
        Self {
            schema: None,
            name: "example_function".to_string(),
            description: "An example function that does something.".to_string(),
            parameters,
            required: vec!["param1".to_string()],
        }
    }

    /// Load a definition from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading definition from path: {}", path.display());
        let origin = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            origin: origin.clone(),
            source,
        })?;
        parse_definition(&contents, origin)
    }

    /// Load a definition from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading definition from raw contents (len={})", contents.len());
        parse_definition(contents, INLINE_ORIGIN.to_string())
    }
}

fn parse_definition(contents: &str, origin: String) -> Result<FunctionDefinition, ConfigError> {
    let value: Value = match json5::from_str(contents) {
        Ok(value) => value,
        Err(source) => return Err(ConfigError::ParseFailed { origin, source }),
    };
    validate_shape(&value, &origin)?;
    let definition: FunctionDefinition = match serde_json::from_value(value) {
        Ok(definition) => definition,
        Err(source) => return Err(ConfigError::DecodeFailed { origin, source }),
    };
    debug!(
        "loaded definition (origin={}, name={}, parameters={}, required={})",
        origin,
        definition.name,
        definition.parameters.len(),
        definition.required.len()
    );
    Ok(definition)
}

fn validate_shape(value: &Value, origin: &str) -> Result<(), ConfigError> {
    let object = value.as_object().ok_or_else(|| ConfigError::Invalid {
        origin: origin.to_string(),
        message: "expected an object at the top level".to_string(),
    })?;
    if let Some(key) = object
        .keys()
        .find(|key| !KNOWN_KEYS.contains(&key.as_str()))
    {
        return Err(ConfigError::InvalidField {
            origin: origin.to_string(),
            key: key.clone(),
            message: "unknown key".to_string(),
        });
    }
    match object.get("parameters") {
        Some(parameters) if !parameters.is_object() => Err(ConfigError::InvalidField {
            origin: origin.to_string(),
            key: "parameters".to_string(),
            message: "expected an object".to_string(),
        }),
        _ => Ok(()),
    }
}
