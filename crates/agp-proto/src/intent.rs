//! Intent — a caller's request for a capability.
//!
//! Intents are ephemeral: built by the caller, consumed by one routing call,
//! then dropped. The payload travels with the intent but is never inspected
//! by the gateway; dispatching it to the selected route is the caller's job.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::policy::{PolicyMap, PolicyValue};

/// A request for a capability plus the constraints its provider must meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Intent {
    /// Capability being requested.
    pub target_capability: String,

    /// Opaque payload for the selected provider.
    #[serde(default)]
    pub payload: serde_json::Value,

    /// Requirements every feasible provider must satisfy.
    #[serde(default)]
    pub policy_constraints: PolicyMap,
}

impl Intent {
    /// Create an intent with no payload and no constraints.
    pub fn new(target_capability: impl Into<String>) -> Self {
        Self {
            target_capability: target_capability.into(),
            payload: serde_json::Value::Null,
            policy_constraints: PolicyMap::new(),
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Add a constraint. A repeated key overwrites the earlier requirement.
    pub fn require(mut self, key: impl Into<String>, value: impl Into<PolicyValue>) -> Self {
        self.policy_constraints.insert(key.into(), value.into());
        self
    }

    pub fn with_constraints(mut self, constraints: PolicyMap) -> Self {
        self.policy_constraints.extend(constraints);
        self
    }
}
