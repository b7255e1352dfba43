//! Announcement — a provider's offer to service a capability.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AgpError, AgpResult};
use crate::policy::{PolicyMap, PolicyValue};

/// One provider's offer: a capability, at a cost, under a policy profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Announcement {
    /// Capability name (e.g., "infra:provision:vm"). Never empty once registered.
    pub capability: String,

    /// Provider-defined version string.
    #[serde(default)]
    pub version: String,

    /// Cost of one invocation. Never negative once registered.
    pub cost: f64,

    /// Declared policy profile.
    #[serde(default)]
    pub policy: PolicyMap,
}

impl Announcement {
    /// Start building an announcement for `capability`.
    pub fn builder(capability: impl Into<String>) -> AnnouncementBuilder {
        AnnouncementBuilder::new(capability)
    }

    /// Check the registration invariants.
    ///
    /// The capability must be non-empty and the cost a finite number `>= 0`.
    pub fn validate(&self) -> AgpResult<()> {
        if self.capability.is_empty() {
            return Err(AgpError::invalid("capability name must not be empty"));
        }
        if !self.cost.is_finite() {
            return Err(AgpError::invalid(format!(
                "cost for '{}' must be a finite number, got {}",
                self.capability, self.cost
            )));
        }
        if self.cost < 0.0 {
            return Err(AgpError::invalid(format!(
                "cost for '{}' must not be negative, got {}",
                self.capability, self.cost
            )));
        }
        Ok(())
    }
}

/// Builder for announcements with a fluent API.
#[derive(Debug)]
pub struct AnnouncementBuilder {
    capability: String,
    version: String,
    cost: f64,
    policy: PolicyMap,
}

impl AnnouncementBuilder {
    pub fn new(capability: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            version: "1.0.0".into(),
            cost: 0.0,
            policy: PolicyMap::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Declare one policy attribute. A repeated key overwrites the earlier value.
    pub fn policy(mut self, key: impl Into<String>, value: impl Into<PolicyValue>) -> Self {
        self.policy.insert(key.into(), value.into());
        self
    }

    pub fn policies(mut self, policy: PolicyMap) -> Self {
        self.policy.extend(policy);
        self
    }

    pub fn build(self) -> Announcement {
        Announcement {
            capability: self.capability,
            version: self.version,
            cost: self.cost,
            policy: self.policy,
        }
    }
}
