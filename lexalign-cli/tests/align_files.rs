//! Integration tests for the lexalign CLI.

use clap::Parser;
use lexalign_cli::cli::{Cli, run};
use lexalign_core::term::TermDocument;
use std::path::PathBuf;

const RECOGNITION: &str = r#"{
    "results": [{
        "alternatives": [{
            "transcript": "Hong Kong",
            "words": [
                {
                    "word": "Hong",
                    "startTime": {},
                    "endTime": {"nanos": 500000000},
                    "confidence": 0.9
                },
                {
                    "word": "Kong",
                    "startTime": {"nanos": 500000000},
                    "endTime": {"seconds": 1},
                    "confidence": 0.8
                }
            ]
        }]
    }]
}"#;

const ENTITIES: &str = r#"{"entities": [{"name": "Hong Kong", "type": "LOCATION"}]}"#;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("lexalign-cli-test").join(name);

    // Clean up previous test run
    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");

    dir
}

#[test]
fn align_merges_and_writes_document() {
    let dir = temp_dir("align");
    let recognition = dir.join("speech.json");
    let entities = dir.join("entities.json");
    let output = dir.join("merged.json");

    std::fs::write(&recognition, RECOGNITION).expect("failed to write recognition");
    std::fs::write(&entities, ENTITIES).expect("failed to write entities");

    let cli = Cli::parse_from([
        "lexalign",
        "align",
        recognition.to_str().unwrap(),
        entities.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    run(cli).expect("failed to align");

    let data = std::fs::read_to_string(&output).expect("output not written");
    let document: TermDocument = serde_json::from_str(&data).expect("malformed output");

    assert_eq!(document.terms.len(), 1);
    assert_eq!(document.terms[0].best.word, "Hong Kong");
    assert!((document.terms[0].duration - 1.0).abs() < 1e-9);
    assert!((document.terms[0].best.score - 850.0).abs() < 1e-6);
}

#[test]
fn terms_writes_unmerged_document_to_default_path() {
    let dir = temp_dir("terms");
    let recognition = dir.join("speech.json");

    std::fs::write(&recognition, RECOGNITION).expect("failed to write recognition");

    let cli = Cli::parse_from(["lexalign", "terms", recognition.to_str().unwrap()]);

    run(cli).expect("failed to build terms");

    let output = dir.join("speech.terms.json");
    let data = std::fs::read_to_string(&output).expect("output not written");
    let document: TermDocument = serde_json::from_str(&data).expect("malformed output");

    assert_eq!(document.terms.len(), 2);
    assert_eq!(document.terms[0].best.word, "Hong");
    assert_eq!(document.terms[1].best.word, "Kong");
}

#[test]
fn align_fails_on_missing_input() {
    let dir = temp_dir("missing");
    let recognition = dir.join("absent.json");
    let entities = dir.join("entities.json");

    std::fs::write(&entities, ENTITIES).expect("failed to write entities");

    let cli = Cli::parse_from([
        "lexalign",
        "align",
        recognition.to_str().unwrap(),
        entities.to_str().unwrap(),
    ]);

    assert!(run(cli).is_err());
}
