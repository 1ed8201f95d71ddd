//! Tool dispatch behind a validation gate
//!
//! Defines the ToolDispatcher trait for forwarding validated calls and the
//! DispatchGate that fronts a dispatcher with catalog lookup + payload
//! validation. The dispatcher implementation is where an MCP SDK plugs in;
//! transport, auth, and retries live on that side of the seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::catalog::ToolCatalog;
use crate::error::{Result, ToolvetError};
use crate::validate::{ValidatedCall, validate};

/// Trait for forwarding validated tool calls to an executor
#[async_trait]
pub trait ToolDispatcher: Send + Sync {
    /// Forward a validated call and return its outcome
    async fn dispatch(&self, call: ValidatedCall) -> Result<DispatchResult>;

    /// Get list of tool names this dispatcher can reach
    fn available_tools(&self) -> Vec<String>;
}

/// Outcome of a dispatched tool call
#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub content: String,
    pub is_error: bool,
}

impl DispatchResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// Validation gate in front of a dispatcher.
///
/// Every call is looked up in the catalog and validated before it reaches
/// the inner dispatcher, so the executor only ever sees well-formed
/// arguments. The gate holds no mutable state; concurrent calls are
/// independent and unordered.
pub struct DispatchGate<D> {
    catalog: ToolCatalog,
    inner: D,
}

impl<D: ToolDispatcher> DispatchGate<D> {
    /// Create a gate over a catalog and an inner dispatcher
    pub fn new(catalog: ToolCatalog, inner: D) -> Self {
        Self { catalog, inner }
    }

    /// The catalog this gate validates against
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Validate a raw payload for the named tool and forward it
    pub async fn call(&self, tool: &str, payload: &Value) -> Result<DispatchResult> {
        let descriptor = self
            .catalog
            .get(tool)
            .ok_or_else(|| ToolvetError::UnknownTool(tool.to_string()))?;

        let call = validate(descriptor, payload)?;
        tracing::debug!(tool, args = call.len(), "payload validated, dispatching");

        self.inner.dispatch(call).await
    }
}
