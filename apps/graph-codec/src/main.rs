use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod catalog;
mod config;
mod decode;
mod logging;
mod tags;

use config::AppConfig;

/// Decode, re-encode and inspect Graph beta payloads
#[derive(Parser)]
#[command(name = "graph-codec")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Indent encoded output (overrides config)
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a payload as a model and print it re-encoded
    Decode(decode::DecodeArgs),
    /// List the discriminator tags of a polymorphic base
    Tags(tags::TagsArgs),
    /// List the models `--model` accepts
    Models,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (GRAPH_CODEC__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.pretty);

    logging::init(&config.logging, cli.verbose);

    match &cli.command {
        Commands::Decode(decode) => decode.run(&config),
        Commands::Tags(tags) => tags.run(),
        Commands::Models => tags::list_models(),
    }
}
