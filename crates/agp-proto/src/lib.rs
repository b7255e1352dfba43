//! # agp-proto
//!
//! Canonical data model for the Agent Gateway Protocol (AGP).
//!
//! AGP lets providers announce the capabilities they serve, at a cost and
//! under a declared policy profile, and lets callers route an intent to the
//! cheapest provider whose profile satisfies their constraints.
//!
//! This crate only defines the protocol types. The registry and the routing
//! decision live in `agp-core`; transports are up to the embedding service.
//!
//! ## Quick Start
//!
//! ```rust
//! use agp_proto::{Announcement, Intent, Route};
//!
//! let announcement = Announcement::builder("infra:provision:vm")
//!     .version("1.0.0")
//!     .cost(0.05)
//!     .policy("security_level", 3)
//!     .policy("requires_PII", false)
//!     .build();
//!
//! let route = Route::new(announcement, "agents/vendor-vm", "Vendor").unwrap();
//! assert_eq!(route.cost(), 0.05);
//!
//! let intent = Intent::new("infra:provision:vm").require("security_level", 3);
//! assert_eq!(intent.policy_constraints.len(), 1);
//! ```

pub mod announcement;
pub mod error;
pub mod intent;
pub mod policy;
pub mod route;

// Re-export primary types
pub use announcement::{Announcement, AnnouncementBuilder};
pub use error::{AgpError, AgpResult};
pub use intent::Intent;
pub use policy::{PolicyKind, PolicyMap, PolicyValue};
pub use route::Route;
