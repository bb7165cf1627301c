//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "lexalign")]
#[command(about = "Merge entity analysis into word-level speech transcripts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Align entities onto the timed terms and write the merged document
    Align(crate::align::Args),

    /// Write the unmerged per-word term document (no entity merge)
    Terms(crate::terms::Args),
}

/// Execute CLI command - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Align(args) => crate::align::execute(args.try_into()?),
        Commands::Terms(args) => crate::terms::execute(args.try_into()?),
    }
}
