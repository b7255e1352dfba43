//! `agp route` — route an intent to the cheapest feasible provider.

use std::sync::Arc;

use agp_core::{AgpError, AgpResult, Gateway, Intent, PolicyValue, Route};
use clap::Args;
use colored::Colorize;

use super::providers::format_policy;
use super::OutputFormat;

#[derive(Args)]
pub struct RouteArgs {
    /// Capability to route (e.g., "infra:provision:vm").
    pub capability: String,

    /// Policy constraint as key=value (repeatable), e.g. `-c security_level=5`.
    #[arg(long = "constraint", short = 'c', value_parser = parse_constraint)]
    pub constraints: Vec<(String, PolicyValue)>,

    /// Payload as a JSON string (forwarded untouched by the caller).
    #[arg(long)]
    pub payload: Option<String>,
}

pub fn execute(args: RouteArgs, gateway: &Gateway, output: OutputFormat) -> anyhow::Result<()> {
    let mut intent = Intent::new(args.capability);
    if let Some(raw) = &args.payload {
        intent = intent.with_payload(serde_json::from_str(raw)?);
    }
    for (key, value) in args.constraints {
        intent = intent.require(key, value);
    }

    let result = gateway.route_intent(&intent);
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome_json(&intent, &result))?)
        }
        OutputFormat::Text => print_outcome(&intent, &result),
    }
    Ok(())
}

fn parse_constraint(raw: &str) -> Result<(String, PolicyValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("constraint key is empty in '{raw}'"));
    }
    Ok((key.to_string(), PolicyValue::parse_literal(value)))
}

pub(crate) fn print_outcome(intent: &Intent, result: &AgpResult<Arc<Route>>) {
    println!(
        "\n  🧭 {} [{}]",
        intent.target_capability.bold(),
        format_policy(&intent.policy_constraints).dimmed()
    );
    match result {
        Ok(route) => {
            println!(
                "  {} Routed to {} ({}) at cost {:.4}",
                "✓".green().bold(),
                route.squad_name.cyan(),
                route.path,
                route.cost()
            );
        }
        Err(err @ AgpError::PolicyMismatch { .. }) => {
            println!("  {} {}", "✗".red().bold(), err);
            println!(
                "  {} Relax the listed constraints and retry.",
                "→".dimmed()
            );
        }
        Err(err) => println!("  {} {}", "✗".red().bold(), err),
    }
}

pub(crate) fn outcome_json(intent: &Intent, result: &AgpResult<Arc<Route>>) -> serde_json::Value {
    match result {
        Ok(route) => serde_json::json!({
            "intent": intent,
            "route": {
                "path": route.path,
                "squad_name": route.squad_name,
                "cost": route.cost(),
            },
        }),
        Err(err) => serde_json::json!({
            "intent": intent,
            "error": error_kind(err),
            "message": err.to_string(),
        }),
    }
}

fn error_kind(err: &AgpError) -> &'static str {
    match err {
        AgpError::InvalidAnnouncement { .. } => "invalid_announcement",
        AgpError::UnknownCapability { .. } => "unknown_capability",
        AgpError::PolicyMismatch { .. } => "policy_mismatch",
        AgpError::Config(_) => "config",
        AgpError::Manifest(_) => "manifest",
    }
}
