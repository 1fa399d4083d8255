//! # SIP API Main Entry Point
//!
//! Runs the HTTP server by default; the `seed` command populates the
//! store with the reference dataset and exits.

use anyhow::Context;
use clap::{Parser, Subcommand};

use sip_api::config::ConfigLoader;
use sip_api::db::{close_store, open_store};
use sip_api::seeds::seed_reference_data;
use sip_api::server::run_server;
use sip_api::telemetry::init_tracing;

#[derive(Parser)]
#[command(name = "sip-api")]
#[command(version)]
#[command(about = "Read API and seeding for the sovereign intelligence platform demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (the default when no command is given)
    Serve,
    /// Seed the store with the reference dataset and exit
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;
    init_tracing(&config)?;

    // The store must be reachable before anything else runs.
    let db = open_store(&config).await.context("opening sqlite store")?;

    let outcome = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run_server(config, db.clone()).await,
        Command::Seed => seed_reference_data(&db)
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from),
    };

    close_store(db).await.context("closing sqlite store")?;
    outcome
}
