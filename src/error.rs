//! Error types for Toolvet
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::validate::ValidationError;

/// All error types that can occur in Toolvet
#[derive(Debug, Error)]
pub enum ToolvetError {
    /// Tool not present in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Attempt to register a second descriptor under an existing name
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    /// Catalog loading/parsing error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Call payload rejected by the validator
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Tool dispatch error
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Toolvet operations
pub type Result<T> = std::result::Result<T, ToolvetError>;
