//! Function-call schema model and builder.
//!
//! A schema is assembled from named parameter descriptors and rendered in the
//! shape function-calling APIs consume:
//! `{ name, description, parameters: { type: "object", properties, required } }`.

use crate::ScribeError;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON type tag used for the top-level `parameters` object.
const OBJECT_TYPE: &str = "object";

/// Input record describing one parameter.
///
/// `type` and `description` are carried as raw JSON so union types such as
/// `["string", "null"]` pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// JSON type tag, e.g. `"string"` or `["integer", "null"]`.
    #[serde(rename = "type")]
    pub kind: Value,
    /// Free-text description.
    pub description: Value,
    /// Optional default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParameterDescriptor {
    /// Create a descriptor without a default.
    pub fn new(kind: impl Into<Value>, description: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            default: None,
        }
    }

    /// Attach a default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Read a descriptor from a loosely-typed JSON object.
    ///
    /// `type` and `description` must be present; their values are copied as-is.
    /// Other keys are ignored.
    pub fn from_value(parameter: &str, value: &Value) -> Result<Self, ScribeError> {
        let object = value
            .as_object()
            .ok_or_else(|| ScribeError::InvalidDescriptor {
                parameter: parameter.to_string(),
                message: "expected an object".to_string(),
            })?;
        Ok(Self {
            kind: required_field(parameter, object, "type")?,
            description: required_field(parameter, object, "description")?,
            default: object.get("default").cloned(),
        })
    }
}

fn required_field(
    parameter: &str,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Value, ScribeError> {
    object
        .get(field)
        .cloned()
        .ok_or_else(|| ScribeError::MissingField {
            parameter: parameter.to_string(),
            field,
        })
}

/// Output record for one parameter; always carries all three keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySchema {
    /// JSON type tag.
    #[serde(rename = "type")]
    pub kind: Value,
    /// Free-text description.
    pub description: Value,
    /// Default value, `null` when the descriptor had none.
    pub default: Value,
}

impl From<ParameterDescriptor> for PropertySchema {
    fn from(descriptor: ParameterDescriptor) -> Self {
        Self {
            kind: descriptor.kind,
            description: descriptor.description,
            default: descriptor.default.unwrap_or(Value::Null),
        }
    }
}

/// The `parameters` object of a function schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSchema {
    /// Always `object`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Property records keyed by parameter name, in insertion order.
    pub properties: IndexMap<String, PropertySchema>,
    /// Required parameter names, in caller order.
    pub required: Vec<String>,
}

impl ParametersSchema {
    /// Look up a property by parameter name.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }
}

/// A callable function's name, description, and parameter contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: String,
    /// Parameter contract.
    pub parameters: ParametersSchema,
}

impl FunctionSchema {
    /// Required names with no matching property.
    pub fn undeclared_required(&self) -> Vec<&str> {
        self.parameters
            .required
            .iter()
            .filter(|name| !self.parameters.properties.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Build the single-element schema list from typed descriptors.
///
/// `required` is copied verbatim and is not checked against the descriptors.
pub fn build_function_schema<I, S, R>(
    function_name: impl Into<String>,
    function_description: impl Into<String>,
    descriptors: I,
    required_parameters: R,
) -> Vec<FunctionSchema>
where
    I: IntoIterator<Item = (S, ParameterDescriptor)>,
    S: Into<String>,
    R: IntoIterator,
    R::Item: Into<String>,
{
    let properties = descriptors
        .into_iter()
        .map(|(name, descriptor)| {
            let name: String = name.into();
            (name, PropertySchema::from(descriptor))
        })
        .collect::<IndexMap<String, PropertySchema>>();
    let schema = FunctionSchema {
        name: function_name.into(),
        description: function_description.into(),
        parameters: ParametersSchema {
            kind: OBJECT_TYPE.to_string(),
            properties,
            required: required_parameters
                .into_iter()
                .map(Into::<String>::into)
                .collect(),
        },
    };
    debug!(
        "built function schema (name={}, properties={}, required={})",
        schema.name,
        schema.parameters.properties.len(),
        schema.parameters.required.len()
    );
    let undeclared = schema.undeclared_required();
    if !undeclared.is_empty() {
        warn!(
            "required parameters not declared in properties (name={}, missing={:?})",
            schema.name, undeclared
        );
    }
    vec![schema]
}

/// Build the single-element schema list from a JSON mapping of descriptors.
///
/// Fails when a descriptor is not an object or lacks `type` / `description`.
pub fn create_function_call_schema(
    function_name: &str,
    function_description: &str,
    parameters: &Map<String, Value>,
    required_parameters: &[String],
) -> Result<Vec<FunctionSchema>, ScribeError> {
    let descriptors = parameters
        .iter()
        .map(|(name, value)| {
            ParameterDescriptor::from_value(name, value)
                .map(|descriptor| (name.clone(), descriptor))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_function_schema(
        function_name,
        function_description,
        descriptors,
        required_parameters.iter().cloned(),
    ))
}
