//! Gateway — announces provider capabilities and routes intents.
//!
//! The gateway composes a [`CapabilityRegistry`] with the [`PolicyEvaluator`]:
//! it filters the routes registered for the requested capability down to the
//! ones whose policy profile satisfies the intent's constraints, then picks
//! the cheapest. Equal-cost ties go to the route registered first.
//!
//! Routing is a single-shot decision over a point-in-time snapshot of the
//! registry. It performs no I/O; dispatching the payload to the selected
//! route's `path` is the caller's job.

use std::collections::BTreeSet;
use std::sync::Arc;

use agp_proto::{AgpError, AgpResult, Announcement, Intent, Route};
use tracing::{debug, info, instrument, warn};

use crate::policy::PolicyEvaluator;
use crate::registry::{CapabilityRegistry, RouteList};

/// Policy-constrained, cost-optimizing router over a capability registry.
#[derive(Debug, Clone, Default)]
pub struct Gateway {
    registry: Arc<CapabilityRegistry>,
}

impl Gateway {
    /// Create a gateway that owns a fresh, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway over an existing (possibly shared) registry.
    pub fn with_registry(registry: Arc<CapabilityRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        &self.registry
    }

    // ── Announcements ────────────────────────────────────────

    /// Bind `announcement` to a provider and register it.
    pub fn announce_capability(
        &self,
        announcement: Announcement,
        path: impl Into<String>,
        squad_name: impl Into<String>,
    ) -> AgpResult<Arc<Route>> {
        let route = Route::new(announcement, path, squad_name)?;
        self.registry.register(route)
    }

    // ── Routing ──────────────────────────────────────────────

    /// Current routes for `capability`, in registration order.
    pub fn candidates(&self, capability: &str) -> RouteList {
        self.registry.lookup(capability)
    }

    /// Select the cheapest route for `intent` whose policy satisfies every
    /// constraint.
    ///
    /// Fails with `UnknownCapability` when nothing was ever announced for the
    /// capability (whatever the constraints), and with `PolicyMismatch` when
    /// routes exist but none is feasible.
    #[instrument(skip_all, fields(capability = %intent.target_capability))]
    pub fn route_intent(&self, intent: &Intent) -> AgpResult<Arc<Route>> {
        let capability = &intent.target_capability;
        let candidates = self.registry.lookup(capability);
        if candidates.is_empty() {
            warn!("no provider announced for capability");
            return Err(AgpError::UnknownCapability {
                capability: capability.clone(),
            });
        }

        let mut selected: Option<&Arc<Route>> = None;
        let mut unmet = BTreeSet::new();

        for candidate in candidates.iter() {
            let failing =
                PolicyEvaluator::unmet(&candidate.announcement.policy, &intent.policy_constraints);
            if !failing.is_empty() {
                debug!(path = %candidate.path, unmet = ?failing, "candidate rejected");
                unmet.extend(failing);
                continue;
            }

            debug!(path = %candidate.path, cost = candidate.cost(), "candidate feasible");
            // Strictly cheaper only: the earliest registration wins a tie.
            match selected {
                Some(best) if best.cost() <= candidate.cost() => {}
                _ => selected = Some(candidate),
            }
        }

        match selected {
            Some(route) => {
                info!(
                    path = %route.path,
                    squad = %route.squad_name,
                    cost = route.cost(),
                    candidates = candidates.len(),
                    "intent routed"
                );
                Ok(Arc::clone(route))
            }
            None => {
                warn!(
                    candidates = candidates.len(),
                    unmet = ?unmet,
                    "no candidate satisfies the policy constraints"
                );
                Err(AgpError::PolicyMismatch {
                    capability: capability.clone(),
                    constraints: intent.policy_constraints.clone(),
                    candidates_considered: candidates.len(),
                    unmet: unmet.into_iter().collect(),
                })
            }
        }
    }
}
