//! `agp simulate` — run the reference routing scenarios.
//!
//! Engineering (security 5, handles PII, 0.10) and Vendor (security 3, no PII,
//! 0.05) both provide `infra:provision:vm`; four intents exercise the cheap
//! path, the policy-forced expensive path, an unsatisfiable constraint, and an
//! unknown capability.

use agp_core::{Gateway, Intent, Manifest};
use colored::Colorize;

use super::route::{outcome_json, print_outcome};
use super::OutputFormat;

fn scenarios() -> Vec<Intent> {
    vec![
        Intent::new("infra:provision:vm").require("security_level", 3),
        Intent::new("infra:provision:vm")
            .require("security_level", 5)
            .require("requires_PII", true),
        Intent::new("infra:provision:vm").require("security_level", 7),
        Intent::new("hr:onboard:new_hire"),
    ]
}

pub fn execute(output: OutputFormat) -> anyhow::Result<()> {
    let gateway = Gateway::new();
    let announced = Manifest::reference().announce_into(&gateway)?;

    let outcomes: Vec<_> = scenarios()
        .into_iter()
        .map(|intent| {
            let result = gateway.route_intent(&intent);
            (intent, result)
        })
        .collect();

    match output {
        OutputFormat::Json => {
            let report: Vec<_> = outcomes
                .iter()
                .map(|(intent, result)| outcome_json(intent, result))
                .collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "\n  🧪 Reference simulation ({} providers announced)",
                announced.to_string().bold()
            );
            for (intent, result) in &outcomes {
                print_outcome(intent, result);
            }
            println!();
        }
    }
    Ok(())
}
