//! # Board CLI
//!
//! Command-line front end for the post board: login, post management and
//! dashboard datasets, all served by the mock API over a local data directory.

use clap::Parser;

mod cli;
mod config;
mod error;
mod telemetry;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    Cli::parse().run().await
}
