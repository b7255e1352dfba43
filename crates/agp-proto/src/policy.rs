//! Policy values — the attributes providers declare and callers constrain on.
//!
//! A provider's *policy profile* and a caller's *policy constraints* share one
//! representation: a map from attribute name to a tagged [`PolicyValue`].
//! The value's kind decides how a constraint is evaluated (see `agp-core`'s
//! policy evaluator), so the kind is part of the contract, not a hint.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Attribute name → value. Keys are unique and iterate in sorted order.
pub type PolicyMap = BTreeMap<String, PolicyValue>;

/// A single policy attribute value.
///
/// Serialized untagged: `true`, `5`, and `"eu-west"` become
/// `Boolean`, `Number`, and `Text` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PolicyValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

/// The kind of a [`PolicyValue`], used to pick an evaluation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Boolean,
    Number,
    Text,
}

impl PolicyValue {
    pub fn kind(&self) -> PolicyKind {
        match self {
            PolicyValue::Boolean(_) => PolicyKind::Boolean,
            PolicyValue::Number(_) => PolicyKind::Number,
            PolicyValue::Text(_) => PolicyKind::Text,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PolicyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PolicyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PolicyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a command-line literal.
    ///
    /// `true`/`false` become booleans, anything `f64` accepts becomes a
    /// number, and everything else is kept as text.
    pub fn parse_literal(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "true" => PolicyValue::Boolean(true),
            "false" => PolicyValue::Boolean(false),
            _ => match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => PolicyValue::Number(n),
                _ => PolicyValue::Text(trimmed.to_string()),
            },
        }
    }
}

impl From<bool> for PolicyValue {
    fn from(value: bool) -> Self {
        PolicyValue::Boolean(value)
    }
}

impl From<f64> for PolicyValue {
    fn from(value: f64) -> Self {
        PolicyValue::Number(value)
    }
}

impl From<i32> for PolicyValue {
    fn from(value: i32) -> Self {
        PolicyValue::Number(f64::from(value))
    }
}

impl From<&str> for PolicyValue {
    fn from(value: &str) -> Self {
        PolicyValue::Text(value.to_string())
    }
}

impl From<String> for PolicyValue {
    fn from(value: String) -> Self {
        PolicyValue::Text(value)
    }
}

impl fmt::Display for PolicyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyValue::Boolean(b) => write!(f, "{b}"),
            PolicyValue::Number(n) => write!(f, "{n}"),
            PolicyValue::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Boolean => write!(f, "boolean"),
            PolicyKind::Number => write!(f, "number"),
            PolicyKind::Text => write!(f, "text"),
        }
    }
}
