//! AGP CLI — announce providers and route intents from the terminal.
//!
//! `agp` — a demonstration driver for the Agent Gateway Protocol router.

mod commands;

use clap::Parser;
use commands::{execute, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli)
}
