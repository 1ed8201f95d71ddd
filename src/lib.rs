//! Toolvet - tool descriptor catalog and call-payload validation for MCP hosts
//!
//! Toolvet models MCP tool descriptors in their wire shape, keeps them in a
//! name-unique catalog, and vets candidate call payloads before they reach a
//! dispatcher. Transport, auth, and the rest of the protocol belong to the
//! MCP SDK behind the dispatch seam.

pub mod catalog;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod review;
pub mod validate;

pub use error::{Result, ToolvetError};
