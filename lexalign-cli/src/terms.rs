//! Terms subcommand - write the unmerged per-word term document.

use crate::io;
use eyre::Result;
use lexalign_core::term::{TermDocument, build_terms};
use std::path::PathBuf;

/// CLI arguments for term building without entity merge.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the recognizer response JSON (word-level timestamps)
    pub recognition: PathBuf,

    /// Output path (default: recognition path with `terms.json` extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Resolved configuration for a terms run.
#[derive(Debug)]
pub struct Config {
    pub recognition: PathBuf,
    pub output: PathBuf,
    pub pretty: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = args
            .output
            .unwrap_or_else(|| args.recognition.with_extension("terms.json"));

        Ok(Self {
            recognition: args.recognition,
            output,
            pretty: args.pretty,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let utterance = io::load_utterance(&config.recognition)?;

    let document = TermDocument {
        terms: build_terms(&utterance.tokens),
    };

    tracing::info!(
        terms = document.terms.len(),
        output = ?config.output.display(),
        "writing term document"
    );

    io::write_document(&config.output, &document, config.pretty)
}
