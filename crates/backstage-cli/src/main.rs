//! `backstage` — browse and manage the Backstage Software Catalog from the
//! terminal.

mod commands;
mod output;

use clap::Parser;
use commands::{execute, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli).await
}
