//! Tool catalog loading from descriptor JSON files
//!
//! Loads tool descriptors in their wire form and provides lookup methods.
//! A catalog is read-only configuration: loaded once at startup, then only
//! read, so it can be shared across threads without coordination.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::descriptor::ToolDescriptor;
use crate::error::{Result, ToolvetError};

/// Catalog of tool descriptors, keyed by tool name
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: HashMap<String, ToolDescriptor>,
    loaded_at: DateTime<Utc>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Load a catalog from a JSON string holding one descriptor object or
    /// an array of them
    pub fn from_json(content: &str) -> Result<Self> {
        let parsed: Value = serde_json::from_str(content)
            .map_err(|e| ToolvetError::Catalog(format!("Failed to parse descriptor JSON: {}", e)))?;

        let mut catalog = Self::new();
        catalog.register_value(parsed)?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ToolvetError::Catalog(format!("Failed to read {}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&content)?;
        log::info!("Loaded {} tool descriptor(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load a catalog from every `*.json` file in a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let pattern = dir.as_ref().join("*.json");
        let entries = glob::glob(&pattern.to_string_lossy())
            .map_err(|e| ToolvetError::Catalog(format!("Bad catalog glob pattern: {}", e)))?;

        let mut catalog = Self::new();
        let mut files = 0usize;
        for entry in entries {
            let path = entry.map_err(|e| ToolvetError::Catalog(format!("Unreadable catalog entry: {}", e)))?;
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ToolvetError::Catalog(format!("Failed to read {}: {}", path.display(), e)))?;
            let parsed: Value = serde_json::from_str(&content).map_err(|e| {
                ToolvetError::Catalog(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            catalog.register_value(parsed)?;
            files += 1;
        }

        log::info!(
            "Loaded {} tool descriptor(s) from {} file(s) in {}",
            catalog.len(),
            files,
            dir.as_ref().display()
        );
        Ok(catalog)
    }

    /// Register descriptors parsed from a JSON value (object or array)
    fn register_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Array(items) => {
                for item in items {
                    let descriptor: ToolDescriptor = serde_json::from_value(item)
                        .map_err(|e| ToolvetError::Catalog(format!("Bad descriptor: {}", e)))?;
                    self.register(descriptor)?;
                }
            }
            item @ Value::Object(_) => {
                let descriptor: ToolDescriptor = serde_json::from_value(item)
                    .map_err(|e| ToolvetError::Catalog(format!("Bad descriptor: {}", e)))?;
                self.register(descriptor)?;
            }
            other => {
                return Err(ToolvetError::Catalog(format!(
                    "Expected a descriptor object or array, got {}",
                    match other {
                        Value::String(_) => "a string",
                        Value::Number(_) => "a number",
                        Value::Bool(_) => "a boolean",
                        Value::Null => "null",
                        _ => "something else",
                    }
                )));
            }
        }
        Ok(())
    }

    /// Add a descriptor to the catalog.
    /// Names are unique within a catalog; a second descriptor under an
    /// existing name is rejected rather than overwriting.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<()> {
        if self.tools.contains_key(&descriptor.name) {
            return Err(ToolvetError::DuplicateTool(descriptor.name));
        }
        self.tools.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Get a descriptor by name
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get all descriptors
    pub fn all(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }

    /// Get number of descriptors
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// When this catalog snapshot was created
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}
