//! Payload validation against a tool descriptor
//!
//! A pure, synchronous check: descriptor + candidate payload in, normalized
//! arguments or a structured error out. Identical inputs always produce
//! identical results, so callers may validate concurrently without
//! coordination.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::descriptor::{PropertyType, ToolDescriptor};

use super::args::{ArgValue, ValidatedCall};

/// Why a call payload was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Payload was not a JSON object
    #[error("payload must be a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// A key listed in `required` was absent from the payload
    #[error("missing required field '{field}'")]
    MissingRequiredField { field: String },

    /// A present key's value did not match its declared type
    #[error("field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: PropertyType,
        actual: &'static str,
    },

    /// A present key's value fell outside its enumerated set
    #[error("field '{field}' must be one of {allowed:?}, got '{value}'")]
    InvalidEnumValue {
        field: String,
        allowed: Vec<String>,
        value: String,
    },
}

/// JSON type name for error reporting
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate a candidate call payload against a descriptor's input schema.
///
/// Checks run in passes: presence of every required key, then type
/// conformance of every present declared key, then enum membership. The
/// first violation is returned; the `required` list fixes which missing
/// key is reported when several are absent. Keys the schema does not
/// declare are ignored and excluded from the normalized output.
pub fn validate(descriptor: &ToolDescriptor, payload: &Value) -> Result<ValidatedCall, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject {
        actual: json_type_name(payload),
    })?;
    let schema = &descriptor.input_schema;

    for field in &schema.required {
        if !object.contains_key(field) {
            return Err(ValidationError::MissingRequiredField {
                field: field.clone(),
            });
        }
    }

    for (name, property) in &schema.properties {
        if let Some(value) = object.get(name) {
            if !property.property_type.matches(value) {
                return Err(ValidationError::TypeMismatch {
                    field: name.clone(),
                    expected: property.property_type,
                    actual: json_type_name(value),
                });
            }
        }
    }

    for (name, property) in &schema.properties {
        if let (Some(value), Some(allowed)) = (object.get(name), property.enum_values.as_ref()) {
            // Type conformance already holds; enums only constrain strings.
            if let Some(text) = value.as_str() {
                if !allowed.iter().any(|candidate| candidate == text) {
                    return Err(ValidationError::InvalidEnumValue {
                        field: name.clone(),
                        allowed: allowed.clone(),
                        value: text.to_string(),
                    });
                }
            }
        }
    }

    let mut args = BTreeMap::new();
    for name in schema.properties.keys() {
        if let Some(value) = object.get(name) {
            if let Some(arg) = ArgValue::from_json(value) {
                args.insert(name.clone(), arg);
            }
        }
    }

    Ok(ValidatedCall {
        tool: descriptor.name.clone(),
        args,
    })
}
