//! File loading and saving for the CLI.

use eyre::{Result, WrapErr};
use lexalign_core::input::{AnalyzeEntitiesResponse, RecognizeResponse};
use lexalign_core::term::TermDocument;
use lexalign_core::types::{Entity, Utterance};
use std::path::Path;

/// Load and validate a recognizer response file.
pub fn load_utterance(path: &Path) -> Result<Utterance> {
    let data = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read recognition: {:?}", path.display()))?;

    let response: RecognizeResponse = serde_json::from_str(&data)
        .wrap_err_with(|| format!("malformed recognition json: {:?}", path.display()))?;

    response
        .into_utterance()
        .wrap_err_with(|| format!("invalid recognition: {:?}", path.display()))
}

/// Load an entity-analysis response file.
pub fn load_entities(path: &Path) -> Result<Vec<Entity>> {
    let data = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read entities: {:?}", path.display()))?;

    let response: AnalyzeEntitiesResponse = serde_json::from_str(&data)
        .wrap_err_with(|| format!("malformed entities json: {:?}", path.display()))?;

    Ok(response.into_entities())
}

/// Write the term document as JSON.
pub fn write_document(path: &Path, document: &TermDocument, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .wrap_err("failed to serialize term document")?;

    std::fs::write(path, json)
        .wrap_err_with(|| format!("failed to write terms: {:?}", path.display()))
}
