//! `agp providers` — list announced routes.

use agp_core::{Gateway, PolicyMap, Route};
use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::OutputFormat;

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "CAPABILITY")]
    capability: String,
    #[tabled(rename = "SQUAD")]
    squad: String,
    #[tabled(rename = "PATH")]
    path: String,
    #[tabled(rename = "VERSION")]
    version: String,
    #[tabled(rename = "COST")]
    cost: String,
    #[tabled(rename = "POLICY")]
    policy: String,
}

pub fn execute(gateway: &Gateway, output: OutputFormat) -> anyhow::Result<()> {
    let routes: Vec<_> = gateway
        .registry()
        .capabilities()
        .iter()
        .flat_map(|capability| gateway.candidates(capability).to_vec())
        .collect();

    if let OutputFormat::Json = output {
        let plain: Vec<&Route> = routes.iter().map(|r| &**r).collect();
        println!("{}", serde_json::to_string_pretty(&plain)?);
        return Ok(());
    }

    println!("\n  📋 Announced routes:\n");
    if routes.is_empty() {
        println!("  (no providers announced — pass a manifest with `--manifest`)");
        return Ok(());
    }

    let rows = routes.iter().map(|r| RouteRow {
        capability: r.capability().to_string(),
        squad: r.squad_name.clone(),
        path: r.path.clone(),
        version: r.announcement.version.clone(),
        cost: format!("{:.4}", r.cost()),
        policy: format_policy(&r.announcement.policy),
    });
    let table = Table::new(rows).with(Style::rounded()).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
    println!("\n  {} {} route(s)", "→".dimmed(), routes.len());
    Ok(())
}

pub(crate) fn format_policy(policy: &PolicyMap) -> String {
    if policy.is_empty() {
        return "-".into();
    }
    policy
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}
