//! AGP error types.

use thiserror::Error;

use crate::policy::PolicyMap;

/// Errors returned by the Agent Gateway Protocol core.
///
/// Every variant is terminal for the call that produced it: nothing is retried
/// internally and a failed call leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgpError {
    /// The announcement is malformed (empty capability, negative or non-finite cost).
    #[error("invalid announcement: {reason}")]
    InvalidAnnouncement { reason: String },

    /// No provider has ever announced the requested capability.
    #[error("unknown capability: {capability}")]
    UnknownCapability { capability: String },

    /// Providers exist for the capability, but none satisfies every constraint.
    #[error(
        "no provider for '{capability}' satisfies the policy constraints \
         ({candidates_considered} candidates considered, unmet: {unmet:?})"
    )]
    PolicyMismatch {
        capability: String,
        constraints: PolicyMap,
        candidates_considered: usize,
        /// Union of the constraint keys that rejected any candidate, sorted.
        /// A key listed here did not necessarily exclude every candidate.
        unmet: Vec<String>,
    },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A provider manifest could not be read, parsed, or announced.
    #[error("manifest error: {0}")]
    Manifest(String),
}

impl AgpError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AgpError::InvalidAnnouncement {
            reason: reason.into(),
        }
    }

    /// Whether this error came out of `route_intent`.
    pub fn is_routing_failure(&self) -> bool {
        matches!(
            self,
            AgpError::UnknownCapability { .. } | AgpError::PolicyMismatch { .. }
        )
    }

    /// Whether the same request could succeed with fewer or weaker constraints.
    ///
    /// An unknown capability never becomes routable by relaxing constraints.
    pub fn is_retryable_with_relaxed_constraints(&self) -> bool {
        matches!(self, AgpError::PolicyMismatch { .. })
    }
}

/// AGP Result type alias.
pub type AgpResult<T> = Result<T, AgpError>;
