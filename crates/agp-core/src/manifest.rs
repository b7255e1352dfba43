//! Manifest — declarative provider announcements in TOML.
//!
//! ```toml
//! [[provider]]
//! capability = "infra:provision:vm"
//! version = "1.0.0"
//! cost = 0.10
//! path = "agents/engineering-vm"
//! squad_name = "Engineering"
//!
//! [provider.policy]
//! security_level = 5
//! requires_PII = true
//! ```

use std::path::Path;

use agp_proto::{AgpError, AgpResult, Announcement, PolicyMap, PolicyValue};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::gateway::Gateway;

/// One `[[provider]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderEntry {
    pub capability: String,
    #[serde(default)]
    pub version: String,
    pub cost: f64,
    pub path: String,
    #[serde(default)]
    pub squad_name: String,
    #[serde(default)]
    pub policy: PolicyMap,
}

impl ProviderEntry {
    pub fn announcement(&self) -> Announcement {
        Announcement {
            capability: self.capability.clone(),
            version: self.version.clone(),
            cost: self.cost,
            policy: self.policy.clone(),
        }
    }
}

/// A list of providers to announce, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "provider")]
    pub providers: Vec<ProviderEntry>,
}

impl Manifest {
    pub fn from_toml_str(raw: &str) -> AgpResult<Self> {
        toml::from_str(raw).map_err(|e| AgpError::Manifest(e.to_string()))
    }

    pub fn load(path: &Path) -> AgpResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AgpError::Manifest(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Announce every provider into `gateway`, in order.
    ///
    /// Stops at the first invalid entry; entries before it stay registered.
    /// Returns the number of routes announced.
    pub fn announce_into(&self, gateway: &Gateway) -> AgpResult<usize> {
        for (index, entry) in self.providers.iter().enumerate() {
            gateway
                .announce_capability(
                    entry.announcement(),
                    entry.path.clone(),
                    entry.squad_name.clone(),
                )
                .map_err(|e| match e {
                    AgpError::InvalidAnnouncement { reason } => AgpError::InvalidAnnouncement {
                        reason: format!("provider #{index}: {reason}"),
                    },
                    other => other,
                })?;
        }
        info!(providers = self.providers.len(), "manifest announced");
        Ok(self.providers.len())
    }

    /// The reference simulation: an in-house and a vendor provider for VM
    /// provisioning with different security profiles and prices.
    pub fn reference() -> Self {
        let entry = |cost: f64, path: &str, squad: &str, level: i32, pii: bool| ProviderEntry {
            capability: "infra:provision:vm".into(),
            version: "1.0.0".into(),
            cost,
            path: path.into(),
            squad_name: squad.into(),
            policy: [
                ("security_level".to_string(), PolicyValue::from(level)),
                ("requires_PII".to_string(), PolicyValue::from(pii)),
            ]
            .into_iter()
            .collect(),
        };
        Self {
            providers: vec![
                entry(0.10, "agents/engineering-vm", "Engineering", 5, true),
                entry(0.05, "agents/vendor-vm", "Vendor", 3, false),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agp_proto::Intent;

    const MANIFEST: &str = r#"
        [[provider]]
        capability = "infra:provision:vm"
        version = "1.0.0"
        cost = 0.10
        path = "agents/engineering-vm"
        squad_name = "Engineering"

        [provider.policy]
        security_level = 5
        requires_PII = true

        [[provider]]
        capability = "infra:provision:vm"
        cost = 0.05
        path = "agents/vendor-vm"
        squad_name = "Vendor"

        [provider.policy]
        security_level = 3
        requires_PII = false
        region = "eu-west"
    "#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_toml_str(MANIFEST).unwrap();
        assert_eq!(manifest.providers.len(), 2);
        let vendor = &manifest.providers[1];
        assert_eq!(vendor.version, "");
        assert_eq!(vendor.policy["security_level"], PolicyValue::Number(3.0));
        assert_eq!(vendor.policy["requires_PII"], PolicyValue::Boolean(false));
        assert_eq!(vendor.policy["region"], PolicyValue::Text("eu-west".into()));
    }

    #[test]
    fn test_announce_into() {
        let gateway = Gateway::new();
        let count = Manifest::from_toml_str(MANIFEST)
            .unwrap()
            .announce_into(&gateway)
            .unwrap();
        assert_eq!(count, 2);

        let route = gateway
            .route_intent(&Intent::new("infra:provision:vm").require("region", "eu-west"))
            .unwrap();
        assert_eq!(route.squad_name, "Vendor");
    }

    #[test]
    fn test_invalid_entry_reports_index() {
        let manifest = Manifest::from_toml_str(
            r#"
            [[provider]]
            capability = "ok"
            cost = 1.0
            path = "a"

            [[provider]]
            capability = "bad"
            cost = -2.0
            path = "b"
            "#,
        )
        .unwrap();
        let gateway = Gateway::new();
        let err = manifest.announce_into(&gateway).unwrap_err();
        match err {
            AgpError::InvalidAnnouncement { reason } => assert!(reason.starts_with("provider #1:")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(gateway.registry().len(), 1);
    }

    #[test]
    fn test_malformed_manifest() {
        let err = Manifest::from_toml_str("[[provider]]\ncost = 1.0").unwrap_err();
        assert!(matches!(err, AgpError::Manifest(_)));
    }

    #[test]
    fn test_reference_manifest() {
        let manifest = Manifest::reference();
        assert_eq!(manifest.providers.len(), 2);
        assert_eq!(manifest.providers[0].squad_name, "Engineering");
    }
}
