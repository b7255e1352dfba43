//! # agp-core
//!
//! Routing engine for the Agent Gateway Protocol (AGP).
//!
//! This crate provides:
//! - A capability registry of provider routes, safe for concurrent
//!   announcements and lookups
//! - A policy evaluator (numeric sufficiency, boolean/text exact match)
//! - A gateway that routes an intent to the cheapest feasible provider
//! - Configuration, TOML provider manifests, and telemetry setup
//!
//! ## Quick Start
//!
//! ```rust
//! use agp_core::{Announcement, Gateway, Intent};
//!
//! let gateway = Gateway::new();
//! gateway.announce_capability(
//!     Announcement::builder("infra:provision:vm")
//!         .cost(0.10)
//!         .policy("security_level", 5)
//!         .policy("requires_PII", true)
//!         .build(),
//!     "agents/engineering-vm",
//!     "Engineering",
//! )?;
//! gateway.announce_capability(
//!     Announcement::builder("infra:provision:vm")
//!         .cost(0.05)
//!         .policy("security_level", 3)
//!         .build(),
//!     "agents/vendor-vm",
//!     "Vendor",
//! )?;
//!
//! let route = gateway.route_intent(&Intent::new("infra:provision:vm").require("security_level", 3))?;
//! assert_eq!(route.squad_name, "Vendor");
//! # Ok::<(), agp_core::AgpError>(())
//! ```

pub mod config;
pub mod gateway;
pub mod manifest;
pub mod policy;
pub mod registry;
pub mod telemetry;

// Re-exports
pub use config::{AgpConfig, TelemetryConfig};
pub use gateway::Gateway;
pub use manifest::{Manifest, ProviderEntry};
pub use policy::{PolicyEvaluator, Rule, Semantics};
pub use registry::{CapabilityRegistry, RouteList};
pub use telemetry::TelemetryGuard;

// Re-export the protocol types for convenience
pub use agp_proto;
pub use agp_proto::{
    AgpError, AgpResult, Announcement, Intent, PolicyKind, PolicyMap, PolicyValue, Route,
};
