//! Input schema model for tool descriptors
//!
//! Typed representation of the `inputSchema` block: an object schema with
//! primitive-typed properties, optional enum constraints, and an ordered
//! `required` list.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive type a tool parameter may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Integer,
    Boolean,
}

impl PropertyType {
    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Check whether a JSON value inhabits this type
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema for a single named property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Declared primitive type
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed literals, when the property is enum-constrained
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl PropertySchema {
    /// Create a property schema with the given type and description
    pub fn new(property_type: PropertyType, description: impl Into<String>) -> Self {
        Self {
            property_type,
            description: Some(description.into()),
            enum_values: None,
        }
    }

    /// Create a string property
    pub fn string(description: impl Into<String>) -> Self {
        Self::new(PropertyType::String, description)
    }

    /// Create a number property
    pub fn number(description: impl Into<String>) -> Self {
        Self::new(PropertyType::Number, description)
    }

    /// Create an integer property
    pub fn integer(description: impl Into<String>) -> Self {
        Self::new(PropertyType::Integer, description)
    }

    /// Create a boolean property
    pub fn boolean(description: impl Into<String>) -> Self {
        Self::new(PropertyType::Boolean, description)
    }

    /// Constrain the property to an enumerated set of literals
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Object schema describing the arguments a tool accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Schema type, always "object" for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Named properties
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    /// Names that must be present in a call payload, in declaration order
    #[serde(default)]
    pub required: Vec<String>,
}

impl InputSchema {
    /// Create an empty object schema
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a named property
    pub fn with_property(mut self, name: impl Into<String>, property: PropertySchema) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Set the required property names
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }

    /// Check whether a property name is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }
}

impl Default for InputSchema {
    fn default() -> Self {
        Self::object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_type_as_str() {
        assert_eq!(PropertyType::String.as_str(), "string");
        assert_eq!(PropertyType::Number.as_str(), "number");
        assert_eq!(PropertyType::Integer.as_str(), "integer");
        assert_eq!(PropertyType::Boolean.as_str(), "boolean");
    }

    #[test]
    fn test_property_type_matches_string() {
        assert!(PropertyType::String.matches(&json!("hello")));
        assert!(!PropertyType::String.matches(&json!(42)));
        assert!(!PropertyType::String.matches(&json!(true)));
        assert!(!PropertyType::String.matches(&json!(null)));
    }

    #[test]
    fn test_property_type_matches_number() {
        assert!(PropertyType::Number.matches(&json!(42)));
        assert!(PropertyType::Number.matches(&json!(4.2)));
        assert!(PropertyType::Number.matches(&json!(-1)));
        assert!(!PropertyType::Number.matches(&json!("42")));
    }

    #[test]
    fn test_property_type_matches_integer() {
        assert!(PropertyType::Integer.matches(&json!(42)));
        assert!(PropertyType::Integer.matches(&json!(-7)));
        assert!(!PropertyType::Integer.matches(&json!(4.2)));
        assert!(!PropertyType::Integer.matches(&json!("42")));
    }

    #[test]
    fn test_property_type_matches_boolean() {
        assert!(PropertyType::Boolean.matches(&json!(true)));
        assert!(PropertyType::Boolean.matches(&json!(false)));
        assert!(!PropertyType::Boolean.matches(&json!(0)));
    }

    #[test]
    fn test_property_type_serialization() {
        assert_eq!(serde_json::to_string(&PropertyType::String).unwrap(), "\"string\"");
        assert_eq!(serde_json::to_string(&PropertyType::Number).unwrap(), "\"number\"");
    }

    #[test]
    fn test_property_type_deserialization() {
        let parsed: PropertyType = serde_json::from_str("\"integer\"").unwrap();
        assert_eq!(parsed, PropertyType::Integer);
    }

    #[test]
    fn test_property_schema_builders() {
        let prop = PropertySchema::string("Repository owner");
        assert_eq!(prop.property_type, PropertyType::String);
        assert_eq!(prop.description.as_deref(), Some("Repository owner"));
        assert!(prop.enum_values.is_none());
    }

    #[test]
    fn test_property_schema_with_enum() {
        let prop = PropertySchema::string("The event to perform").with_enum(["A", "B"]);
        assert_eq!(prop.enum_values.as_deref(), Some(&["A".to_string(), "B".to_string()][..]));
    }

    #[test]
    fn test_property_schema_wire_shape() {
        let prop = PropertySchema::string("desc").with_enum(["X"]);
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(
            json,
            json!({"type": "string", "description": "desc", "enum": ["X"]})
        );
    }

    #[test]
    fn test_property_schema_enum_omitted_when_absent() {
        let prop = PropertySchema::number("count");
        let json = serde_json::to_string(&prop).unwrap();
        assert!(!json.contains("enum"));
    }

    #[test]
    fn test_input_schema_object() {
        let schema = InputSchema::object();
        assert_eq!(schema.schema_type, "object");
        assert!(schema.properties.is_empty());
        assert!(schema.required.is_empty());
    }

    #[test]
    fn test_input_schema_builder() {
        let schema = InputSchema::object()
            .with_property("owner", PropertySchema::string("Repository owner"))
            .with_property("pullNumber", PropertySchema::number("Pull request number"))
            .with_required(["owner", "pullNumber"]);

        assert_eq!(schema.properties.len(), 2);
        assert!(schema.property("owner").is_some());
        assert!(schema.is_required("owner"));
        assert!(schema.is_required("pullNumber"));
        assert!(!schema.is_required("body"));
    }

    #[test]
    fn test_input_schema_required_order_preserved() {
        let schema = InputSchema::object().with_required(["owner", "repo", "pullNumber", "event"]);
        assert_eq!(schema.required, vec!["owner", "repo", "pullNumber", "event"]);
    }

    #[test]
    fn test_input_schema_deserialization() {
        let json = r#"{
            "type": "object",
            "properties": {
                "message": {"type": "string", "description": "Message to echo"}
            },
            "required": ["message"]
        }"#;

        let schema: InputSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.schema_type, "object");
        assert_eq!(schema.property("message").unwrap().property_type, PropertyType::String);
        assert_eq!(schema.required, vec!["message"]);
    }

    #[test]
    fn test_input_schema_deserialization_defaults() {
        let schema: InputSchema = serde_json::from_str(r#"{"type": "object"}"#).unwrap();
        assert!(schema.properties.is_empty());
        assert!(schema.required.is_empty());
    }

    #[test]
    fn test_input_schema_roundtrip() {
        let schema = InputSchema::object()
            .with_property("event", PropertySchema::string("Event").with_enum(["GO", "STOP"]))
            .with_required(["event"]);

        let json = serde_json::to_string(&schema).unwrap();
        let restored: InputSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, restored);
    }
}
