//! Normalized argument values produced by the validator

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Number, Value};

/// A typed argument value extracted from a validated payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Str(String),
    Num(Number),
    Bool(bool),
}

impl ArgValue {
    /// Lift a JSON value into an argument value.
    /// Returns None for nulls, arrays, and objects, which no declared
    /// primitive type admits.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Str(text.clone())),
            Value::Number(number) => Some(Self::Num(number.clone())),
            Value::Bool(flag) => Some(Self::Bool(*flag)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Num(number) => number.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(number) => number.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

/// A call payload that passed validation against a descriptor.
///
/// Holds only the declared arguments; unrecognized payload keys are
/// dropped during normalization. The map is ordered by argument name so
/// iteration and serialization are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedCall {
    /// Name of the tool the payload was validated against
    pub tool: String,
    /// Normalized arguments, keyed by property name
    pub args: BTreeMap<String, ArgValue>,
}

impl ValidatedCall {
    /// Get an argument by name
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }

    /// Check whether an argument is present
    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Get a string argument by name
    pub fn str_arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).and_then(ArgValue::as_str)
    }

    /// Get a numeric argument by name as u64
    pub fn u64_arg(&self, name: &str) -> Option<u64> {
        self.args.get(name).and_then(ArgValue::as_u64)
    }

    /// Get a numeric argument by name as f64
    pub fn f64_arg(&self, name: &str) -> Option<f64> {
        self.args.get(name).and_then(ArgValue::as_f64)
    }

    /// Get a boolean argument by name
    pub fn bool_arg(&self, name: &str) -> Option<bool> {
        self.args.get(name).and_then(ArgValue::as_bool)
    }

    /// Number of normalized arguments
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments were captured
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}
