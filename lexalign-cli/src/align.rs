//! Align subcommand - merge located entities into the term document.

use crate::io;
use crate::preview;
use eyre::Result;
use lexalign_core::pipeline::align;
use lexalign_core::term::TermDocument;
use std::path::PathBuf;
use std::time::Instant;

/// CLI arguments for entity alignment.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the recognizer response JSON (word-level timestamps)
    pub recognition: PathBuf,

    /// Path to the entity-analysis response JSON
    pub entities: PathBuf,

    /// Output path (default: recognition path with `terms.json` extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Print the first and last terms to stdout
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for an align run.
#[derive(Debug)]
pub struct Config {
    pub recognition: PathBuf,
    pub entities: PathBuf,
    pub output: PathBuf,
    pub pretty: bool,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = args
            .output
            .unwrap_or_else(|| args.recognition.with_extension("terms.json"));

        Ok(Self {
            recognition: args.recognition,
            entities: args.entities,
            output,
            pretty: args.pretty,
            preview: args.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        recognition = ?config.recognition.display(),
        entities = ?config.entities.display(),
        output = ?config.output.display(),
        "aligning terms"
    );

    let utterance = io::load_utterance(&config.recognition)?;
    let entities = io::load_entities(&config.entities)?;

    let s = Instant::now();

    let alignment = align(&utterance.tokens, &utterance.transcript, &entities);

    tracing::info!(
        terms = alignment.terms.len(),
        skipped = alignment.skipped.len(),
        elapsed = ?s.elapsed(),
        "alignment completed"
    );

    for skip in &alignment.skipped {
        tracing::warn!(entity = %skip.name, reason = %skip.reason, "entity skipped");
    }

    let document = TermDocument {
        terms: alignment.terms,
    };

    io::write_document(&config.output, &document, config.pretty)?;

    if config.preview {
        print!("{}", preview::preview_terms(&document.terms, 3, 3));
    }

    Ok(())
}
