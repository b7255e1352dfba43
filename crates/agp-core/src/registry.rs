//! Capability Registry — stores provider routes by capability name.
//!
//! Readers take a lock-free snapshot of the whole table; writers are
//! serialized and publish a fresh table on every registration
//! (copy-on-write), so a reader never observes a half-appended list.
//! Route lists keep registration order, which is the router's tie-break.

use std::collections::HashMap;
use std::sync::Arc;

use agp_proto::{AgpResult, Route};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::debug;

/// The routes registered for one capability, in registration order.
pub type RouteList = Arc<Vec<Arc<Route>>>;

type RouteTable = HashMap<String, RouteList>;

/// Thread-safe, append-only registry of provider routes.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    table: ArcSwap<RouteTable>,
    /// Serializes writers; readers never take it.
    mutation: Mutex<()>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `route` to the list for its capability.
    ///
    /// Fails with `InvalidAnnouncement` when the capability is empty or the
    /// cost is negative; the registry is left unchanged in that case.
    /// Duplicate routes are kept as-is.
    pub fn register(&self, route: Route) -> AgpResult<Arc<Route>> {
        route.announcement.validate()?;
        let route = Arc::new(route);

        let _guard = self.mutation.lock();
        let current = self.table.load();
        let mut next: RouteTable = (**current).clone();

        let list = next.entry(route.capability().to_string()).or_default();
        let mut appended = Vec::with_capacity(list.len() + 1);
        appended.extend(list.iter().cloned());
        appended.push(Arc::clone(&route));
        let position = appended.len();
        *list = Arc::new(appended);

        self.table.store(Arc::new(next));

        debug!(
            capability = %route.capability(),
            path = %route.path,
            squad = %route.squad_name,
            cost = route.cost(),
            position,
            "route registered"
        );
        Ok(route)
    }

    /// Routes registered under `capability`, in registration order.
    ///
    /// An unknown capability yields an empty list, never an error.
    pub fn lookup(&self, capability: &str) -> RouteList {
        self.table
            .load()
            .get(capability)
            .cloned()
            .unwrap_or_default()
    }

    /// All capability names with at least one route, sorted.
    pub fn capabilities(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table.load().keys().cloned().collect();
        names.sort();
        names
    }

    /// Total number of registered routes across all capabilities.
    pub fn len(&self) -> usize {
        self.table.load().values().map(|routes| routes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.table.load().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agp_proto::{AgpError, Announcement};

    fn route(capability: &str, cost: f64, path: &str) -> Route {
        Route {
            announcement: Announcement::builder(capability).cost(cost).build(),
            path: path.into(),
            squad_name: "Platform".into(),
        }
    }

    #[test]
    fn test_register_and_lookup_preserves_order() {
        let registry = CapabilityRegistry::new();
        registry.register(route("infra:provision:vm", 0.10, "a")).unwrap();
        registry.register(route("infra:provision:vm", 0.05, "b")).unwrap();
        registry.register(route("infra:provision:vm", 0.10, "a")).unwrap();
        registry.register(route("hr:onboard", 1.0, "c")).unwrap();

        let vm = registry.lookup("infra:provision:vm");
        let paths: Vec<&str> = vm.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "b", "a"]);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.capabilities(), vec!["hr:onboard", "infra:provision:vm"]);
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let registry = CapabilityRegistry::new();
        assert!(registry.lookup("nothing").is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_registration_leaves_registry_unchanged() {
        let registry = CapabilityRegistry::new();
        registry.register(route("infra:provision:vm", 0.10, "a")).unwrap();

        let err = registry.register(route("", 1.0, "b")).unwrap_err();
        assert!(matches!(err, AgpError::InvalidAnnouncement { .. }));

        let err = registry
            .register(route("infra:provision:vm", -1.0, "c"))
            .unwrap_err();
        assert!(matches!(err, AgpError::InvalidAnnouncement { .. }));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.capabilities(), vec!["infra:provision:vm"]);
    }

    #[test]
    fn test_snapshot_is_stable_across_writes() {
        let registry = CapabilityRegistry::new();
        registry.register(route("cap", 1.0, "first")).unwrap();

        let snapshot = registry.lookup("cap");
        registry.register(route("cap", 2.0, "second")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.lookup("cap").len(), 2);
    }
}
