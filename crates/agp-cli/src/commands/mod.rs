//! CLI command definitions and dispatch.

pub mod providers;
pub mod route;
pub mod simulate;

use std::path::{Path, PathBuf};

use agp_core::{telemetry, AgpConfig, Gateway, Manifest};
use clap::{Parser, Subcommand};

const BANNER: &str = r#"
   🧭 AGP
   Route intents to the cheapest provider that meets your policy.
"#;

/// AGP CLI — the Agent Gateway Protocol router.
#[derive(Parser)]
#[command(
    name = "agp",
    version,
    about = "🧭 AGP — Policy-constrained, cost-optimizing capability routing",
    long_about = BANNER,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ~/.agp/config.toml).
    #[arg(long, global = true, env = "AGP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Provider manifest to announce (overrides config and AGP_MANIFEST).
    /// The reference providers are used when none is given.
    #[arg(long, short = 'm', global = true)]
    pub manifest: Option<PathBuf>,

    /// Emit structured JSON logs (and OTLP spans if enabled in config).
    #[arg(long, global = true)]
    pub trace: bool,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📋 List the routes announced by the manifest.
    Providers,

    /// 🧭 Route an intent to a provider.
    Route(route::RouteArgs),

    /// 🧪 Run the reference routing scenarios.
    Simulate,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Execute the CLI command.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = AgpConfig::load(cli.config.as_deref())?;
    // Held until the command returns so buffered spans are flushed.
    let _telemetry = if cli.trace {
        Some(telemetry::init_telemetry(&config.telemetry)?)
    } else {
        None
    };

    match cli.command {
        Commands::Providers => {
            let gateway = load_gateway(cli.manifest.as_deref(), &config)?;
            providers::execute(&gateway, cli.output)
        }
        Commands::Route(args) => {
            let gateway = load_gateway(cli.manifest.as_deref(), &config)?;
            route::execute(args, &gateway, cli.output)
        }
        Commands::Simulate => simulate::execute(cli.output),
    }
}

/// Build a gateway and announce the selected manifest into it.
fn load_gateway(manifest: Option<&Path>, config: &AgpConfig) -> anyhow::Result<Gateway> {
    let manifest = match manifest.map(Path::to_path_buf).or_else(|| config.manifest_path()) {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::reference(),
    };
    let gateway = Gateway::new();
    manifest.announce_into(&gateway)?;
    Ok(gateway)
}
