//! Route — an announcement bound to a concrete provider address.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::announcement::Announcement;
use crate::error::{AgpError, AgpResult};

/// An announcement bound to the provider that serves it.
///
/// Routes are immutable once created; the gateway shares them behind `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Route {
    /// What the provider offers.
    pub announcement: Announcement,

    /// Opaque provider address or identifier. Never empty.
    pub path: String,

    /// Human-readable owner of the provider.
    pub squad_name: String,
}

impl Route {
    /// Bind an announcement to a provider, checking the registration invariants.
    pub fn new(
        announcement: Announcement,
        path: impl Into<String>,
        squad_name: impl Into<String>,
    ) -> AgpResult<Self> {
        announcement.validate()?;
        let path = path.into();
        if path.is_empty() {
            return Err(AgpError::invalid(format!(
                "provider path for '{}' must not be empty",
                announcement.capability
            )));
        }
        Ok(Self {
            announcement,
            path,
            squad_name: squad_name.into(),
        })
    }

    pub fn capability(&self) -> &str {
        &self.announcement.capability
    }

    pub fn cost(&self) -> f64 {
        self.announcement.cost
    }
}
