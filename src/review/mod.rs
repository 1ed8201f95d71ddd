//! submit_pending_pull_request_review - typed call surface
//!
//! The GitHub remote MCP server's pending-review submission tool, carried
//! here as a built-in descriptor plus a typed argument record. The review
//! outcome is a closed variant so call sites that branch on it get
//! exhaustiveness checking from the compiler instead of comparing strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::{InputSchema, PropertySchema, PropertyType, ToolDescriptor};
use crate::validate::{ValidatedCall, ValidationError, validate};

/// Wire name of the tool
pub const SUBMIT_REVIEW_TOOL: &str = "submit_pending_pull_request_review";

/// Outcome of a pull request review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    Approve,
    RequestChanges,
    Comment,
}

impl ReviewEvent {
    /// Every admissible event, in wire order
    pub const ALL: [ReviewEvent; 3] = [Self::Approve, Self::RequestChanges, Self::Comment];

    /// Wire literal for this event
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::RequestChanges => "REQUEST_CHANGES",
            Self::Comment => "COMMENT",
        }
    }

    /// Parse from the wire literal
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "APPROVE" => Some(Self::Approve),
            "REQUEST_CHANGES" => Some(Self::RequestChanges),
            "COMMENT" => Some(Self::Comment),
            _ => None,
        }
    }

    fn allowed_literals() -> Vec<String> {
        Self::ALL.iter().map(|event| event.as_str().to_string()).collect()
    }
}

/// Built-in descriptor matching the published GitHub schema
pub fn submit_review_descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        SUBMIT_REVIEW_TOOL,
        "Submit a pending pull request review. Create the pending review and add \
         comments to it first, unless you already know the pending review and its \
         comments are in place.",
    )
    .with_annotations("Submit the requested pull request review", false)
    .with_schema(
        InputSchema::object()
            .with_property("owner", PropertySchema::string("Repository owner"))
            .with_property("repo", PropertySchema::string("Repository name"))
            .with_property("pullNumber", PropertySchema::number("Pull request number"))
            .with_property(
                "event",
                PropertySchema::string("The event to perform").with_enum(ReviewEvent::allowed_literals()),
            )
            .with_property("body", PropertySchema::string("The text of the review comment"))
            .with_required(["owner", "repo", "pullNumber", "event"]),
    )
}

/// Validated, typed arguments for a review submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReviewArgs {
    pub owner: String,
    pub repo: String,
    pub pull_number: u64,
    pub event: ReviewEvent,
    pub body: Option<String>,
}

impl SubmitReviewArgs {
    /// Validate a raw payload against the built-in descriptor and lift the
    /// normalized arguments into the typed record.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let descriptor = submit_review_descriptor();
        let call = validate(&descriptor, payload)?;
        Self::from_call(&call)
    }

    /// Lift an already-validated call into the typed record.
    ///
    /// The wire schema declares `pullNumber` as `number`; the typed record
    /// narrows it to a non-negative integer and rejects fractional or
    /// negative values as a type mismatch.
    pub fn from_call(call: &ValidatedCall) -> Result<Self, ValidationError> {
        let owner = required_str(call, "owner")?;
        let repo = required_str(call, "repo")?;

        let pull_number = call.u64_arg("pullNumber").ok_or_else(|| ValidationError::TypeMismatch {
            field: "pullNumber".to_string(),
            expected: PropertyType::Integer,
            actual: "number",
        })?;

        let event_literal = required_str(call, "event")?;
        let event = ReviewEvent::from_str(&event_literal).ok_or_else(|| ValidationError::InvalidEnumValue {
            field: "event".to_string(),
            allowed: ReviewEvent::allowed_literals(),
            value: event_literal,
        })?;

        let body = call.str_arg("body").map(String::from);

        Ok(Self {
            owner,
            repo,
            pull_number,
            event,
            body,
        })
    }
}

fn required_str(call: &ValidatedCall, field: &str) -> Result<String, ValidationError> {
    call.str_arg(field)
        .map(String::from)
        .ok_or_else(|| ValidationError::MissingRequiredField {
            field: field.to_string(),
        })
}
