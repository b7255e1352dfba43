use std::sync::Arc;

use agp_core::{AgpError, Announcement, Gateway, Intent, Manifest};
use pretty_assertions::assert_eq;

const VM: &str = "infra:provision:vm";

fn reference_gateway() -> Gateway {
    let gateway = Gateway::new();
    Manifest::reference().announce_into(&gateway).unwrap();
    gateway
}

#[test]
fn reference_scenarios() {
    let gateway = reference_gateway();

    let low_security = Intent::new(VM)
        .with_payload(serde_json::json!({"size": "small"}))
        .require("security_level", 3);
    let route = gateway.route_intent(&low_security).unwrap();
    assert_eq!(route.squad_name, "Vendor");
    assert_eq!(route.cost(), 0.05);

    let pii = Intent::new(VM)
        .require("security_level", 5)
        .require("requires_PII", true);
    let route = gateway.route_intent(&pii).unwrap();
    assert_eq!(route.squad_name, "Engineering");
    assert_eq!(route.cost(), 0.10);

    let too_strict = Intent::new(VM).require("security_level", 7);
    assert!(matches!(
        gateway.route_intent(&too_strict),
        Err(AgpError::PolicyMismatch {
            candidates_considered: 2,
            ..
        })
    ));

    let unknown = Intent::new("hr:onboard:new_hire");
    assert!(matches!(
        gateway.route_intent(&unknown),
        Err(AgpError::UnknownCapability { .. })
    ));
}

#[test]
fn announced_route_is_visible() {
    let gateway = Gateway::new();
    let announced = gateway
        .announce_capability(
            Announcement::builder("docs:summarize").cost(0.3).build(),
            "agents/summarizer",
            "Docs",
        )
        .unwrap();

    let route = gateway.route_intent(&Intent::new("docs:summarize")).unwrap();
    assert!(Arc::ptr_eq(&announced, &route));
}

#[test]
fn routing_is_deterministic() {
    let gateway = reference_gateway();
    let intent = Intent::new(VM).require("security_level", 2);
    let first = gateway.route_intent(&intent).unwrap();
    for _ in 0..20 {
        assert!(Arc::ptr_eq(&first, &gateway.route_intent(&intent).unwrap()));
    }
}

#[test]
fn cheaper_feasible_route_always_wins() {
    let gateway = Gateway::new();
    let costs = [0.9, 0.4, 0.7, 0.2, 0.5];
    for (i, cost) in costs.iter().enumerate() {
        gateway
            .announce_capability(
                Announcement::builder("search").cost(*cost).build(),
                format!("agents/search-{i}"),
                "Search",
            )
            .unwrap();
    }
    // An expensive-but-only-feasible route is still chosen under a constraint.
    gateway
        .announce_capability(
            Announcement::builder("search")
                .cost(5.0)
                .policy("security_level", 9)
                .build(),
            "agents/search-secure",
            "Security",
        )
        .unwrap();

    let route = gateway.route_intent(&Intent::new("search")).unwrap();
    assert_eq!(route.path, "agents/search-3");

    let route = gateway
        .route_intent(&Intent::new("search").require("security_level", 1))
        .unwrap();
    assert_eq!(route.path, "agents/search-secure");
}

#[test]
fn unknown_capability_ignores_constraints() {
    let gateway = reference_gateway();
    for intent in [
        Intent::new("billing:invoice"),
        Intent::new("billing:invoice").require("security_level", 1),
    ] {
        assert_eq!(
            gateway.route_intent(&intent).unwrap_err(),
            AgpError::UnknownCapability {
                capability: "billing:invoice".into()
            }
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_announce_and_route() {
    let gateway = Arc::new(reference_gateway());
    let mut handles = Vec::new();

    for i in 0..8 {
        let gateway = Arc::clone(&gateway);
        handles.push(tokio::spawn(async move {
            for j in 0..25 {
                gateway
                    .announce_capability(
                        Announcement::builder(VM)
                            .cost(1.0 + f64::from(i * 25 + j))
                            .policy("security_level", 1)
                            .build(),
                        format!("agents/worker-{i}-{j}"),
                        "Workers",
                    )
                    .unwrap();
            }
        }));
    }

    for _ in 0..8 {
        let gateway = Arc::clone(&gateway);
        handles.push(tokio::spawn(async move {
            for _ in 0..50 {
                let route = gateway
                    .route_intent(&Intent::new(VM).require("security_level", 1))
                    .unwrap();
                // The reference vendor is cheaper than anything the workers add.
                assert_eq!(route.squad_name, "Vendor");
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(gateway.candidates(VM).len(), 2 + 8 * 25);
    assert_eq!(gateway.registry().len(), 2 + 8 * 25);
}
