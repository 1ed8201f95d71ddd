//! Tool descriptor model
//!
//! A tool descriptor is the declaration of one callable operation an MCP
//! server exposes: name, description, display annotations, and the schema
//! its call payloads must satisfy. The serde shape matches the MCP wire
//! format (`inputSchema`, `readOnlyHint`), so descriptors round-trip
//! against hosts built from the published schema.

mod schema;

pub use schema::{InputSchema, PropertySchema, PropertyType};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Display metadata flags attached to a descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// Display title for UIs
    pub title: String,
    /// Hint that the operation does not mutate remote state
    pub read_only_hint: bool,
}

/// A callable operation a host may invoke against a remote server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique identifier within a server's tool collection
    pub name: String,
    /// Human-readable explanation of intent and usage preconditions
    pub description: String,
    /// Display metadata, absent on servers that don't publish it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
    /// Schema the call payload must satisfy
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

impl ToolDescriptor {
    /// Create a descriptor with an empty object schema
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            annotations: None,
            input_schema: InputSchema::object(),
        }
    }

    /// Attach display annotations
    pub fn with_annotations(mut self, title: impl Into<String>, read_only_hint: bool) -> Self {
        self.annotations = Some(ToolAnnotations {
            title: title.into(),
            read_only_hint,
        });
        self
    }

    /// Set the input schema
    pub fn with_schema(mut self, schema: InputSchema) -> Self {
        self.input_schema = schema;
        self
    }

    /// Whether the descriptor hints that the operation is read-only.
    /// Absent annotations count as not read-only.
    pub fn read_only(&self) -> bool {
        self.annotations
            .as_ref()
            .map(|annotations| annotations.read_only_hint)
            .unwrap_or(false)
    }

    /// Hex SHA-256 over the canonical JSON serialization.
    ///
    /// Stable across loads of the same descriptor, so callers can detect
    /// when a server changed a tool between catalog snapshots.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_descriptor() -> ToolDescriptor {
        ToolDescriptor::new("echo", "Echo a message back")
            .with_annotations("Echo", true)
            .with_schema(
                InputSchema::object()
                    .with_property("message", PropertySchema::string("Message to echo"))
                    .with_required(["message"]),
            )
    }

    #[test]
    fn test_descriptor_new() {
        let descriptor = ToolDescriptor::new("ping", "Health check");
        assert_eq!(descriptor.name, "ping");
        assert_eq!(descriptor.description, "Health check");
        assert!(descriptor.annotations.is_none());
        assert!(descriptor.input_schema.properties.is_empty());
    }

    #[test]
    fn test_descriptor_builder() {
        let descriptor = sample_descriptor();
        assert_eq!(descriptor.name, "echo");
        let annotations = descriptor.annotations.as_ref().unwrap();
        assert_eq!(annotations.title, "Echo");
        assert!(annotations.read_only_hint);
        assert!(descriptor.input_schema.is_required("message"));
    }

    #[test]
    fn test_descriptor_read_only() {
        assert!(sample_descriptor().read_only());
        assert!(!ToolDescriptor::new("ping", "Health check").read_only());
        assert!(
            !ToolDescriptor::new("write", "Mutates state")
                .with_annotations("Write", false)
                .read_only()
        );
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let descriptor = sample_descriptor();
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "echo",
                "description": "Echo a message back",
                "annotations": {"title": "Echo", "readOnlyHint": true},
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "message": {"type": "string", "description": "Message to echo"}
                    },
                    "required": ["message"]
                }
            })
        );
    }

    #[test]
    fn test_descriptor_annotations_omitted_when_absent() {
        let descriptor = ToolDescriptor::new("ping", "Health check");
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(!json.contains("annotations"));
    }

    #[test]
    fn test_descriptor_deserialization() {
        let json = r#"{
            "name": "ping",
            "description": "Health check; echoes a message.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "message": {"type": "string"}
                }
            }
        }"#;

        let descriptor: ToolDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.name, "ping");
        assert!(descriptor.annotations.is_none());
        let message = descriptor.input_schema.property("message").unwrap();
        assert_eq!(message.property_type, PropertyType::String);
        assert!(message.description.is_none());
    }

    #[test]
    fn test_descriptor_roundtrip() {
        let descriptor = sample_descriptor();
        let json = serde_json::to_string(&descriptor).unwrap();
        let restored: ToolDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(descriptor, restored);
    }

    #[test]
    fn test_fingerprint_stable() {
        let first = sample_descriptor().fingerprint();
        let second = sample_descriptor().fingerprint();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_changes_with_schema() {
        let base = sample_descriptor();
        let changed = sample_descriptor().with_schema(
            InputSchema::object()
                .with_property("message", PropertySchema::string("Message to echo"))
                .with_property("count", PropertySchema::integer("Repeat count"))
                .with_required(["message"]),
        );
        assert_ne!(base.fingerprint(), changed.fingerprint());
    }
}
