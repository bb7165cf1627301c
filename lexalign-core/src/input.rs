//! Wire formats: the consumed subset of the upstream recognizer and
//! entity-analysis responses.
//!
//! Field names follow the JSON those services emit (camelCase, protobuf
//! JSON mapping). Unknown fields are ignored, so richer responses
//! deserialize unchanged.

use serde::Deserialize;

use crate::error::{InputError, Result};
use crate::types::{Entity, Token, Utterance};

/// Word-level recognition response.
#[derive(Debug, Default, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<RecognizeResult>,
}

#[derive(Debug, Deserialize)]
pub struct RecognizeResult {
    #[serde(default)]
    pub alternatives: Vec<RecognizeAlternative>,
}

/// One recognition hypothesis: the transcript plus its timed words.
#[derive(Debug, Deserialize)]
pub struct RecognizeAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub words: Vec<WordInfo>,
}

/// One timed word.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    pub word: String,
    #[serde(default)]
    pub start_time: TimeOffset,
    #[serde(default)]
    pub end_time: TimeOffset,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub speaker_tag: i32,
}

/// Rational seconds: integer seconds plus nanosecond remainder.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub struct TimeOffset {
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl TimeOffset {
    /// Decimal seconds.
    pub fn as_secs(self) -> f64 {
        self.seconds as f64 + f64::from(self.nanos) / 1e9
    }
}

/// Entity-analysis response; only entity names are consumed.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeEntitiesResponse {
    #[serde(default)]
    pub entities: Vec<EntityInfo>,
}

#[derive(Debug, Deserialize)]
pub struct EntityInfo {
    pub name: String,
}

impl RecognizeResponse {
    /// Extract the utterance to align: the first alternative of the first
    /// result, validated word by word.
    pub fn into_utterance(self) -> Result<Utterance> {
        let alternative = self
            .results
            .into_iter()
            .next()
            .and_then(|result| result.alternatives.into_iter().next())
            .ok_or(InputError::EmptyRecognition)?;

        let mut tokens: Vec<Token> = Vec::with_capacity(alternative.words.len());

        for (index, word) in alternative.words.into_iter().enumerate() {
            let start = word.start_time.as_secs();
            let end = word.end_time.as_secs();

            if !(0.0..=1.0).contains(&word.confidence) {
                return Err(InputError::ConfidenceRange {
                    index,
                    value: word.confidence,
                });
            }
            if end < start {
                return Err(InputError::TimeOrder { index, start, end });
            }
            if let Some(prev) = tokens.last()
                && start < prev.start
            {
                tracing::warn!(index, "word start precedes previous word start");
            }

            tokens.push(Token {
                text: word.word,
                start,
                end,
                confidence: word.confidence,
                speaker_tag: word.speaker_tag,
            });
        }

        Ok(Utterance {
            tokens,
            transcript: alternative.transcript,
        })
    }
}

impl AnalyzeEntitiesResponse {
    /// Extract the entity list, preserving response order.
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
            .into_iter()
            .map(|info| Entity { name: info.name })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECOGNITION: &str = r#"{
        "results": [{
            "alternatives": [{
                "transcript": "Hong Kong",
                "words": [
                    {
                        "word": "Hong",
                        "startTime": {"seconds": 0, "nanos": 0},
                        "endTime": {"nanos": 500000000},
                        "confidence": 0.9,
                        "speakerTag": 1
                    },
                    {
                        "word": "Kong",
                        "startTime": {"nanos": 500000000},
                        "endTime": {"seconds": 1},
                        "confidence": 0.8,
                        "speakerTag": 1
                    }
                ]
            }]
        }]
    }"#;

    #[test]
    fn parses_recognizer_response() {
        let response: RecognizeResponse = serde_json::from_str(RECOGNITION).unwrap();

        let utterance = response.into_utterance().unwrap();

        assert_eq!(utterance.transcript, "Hong Kong");
        assert_eq!(utterance.tokens.len(), 2);
        assert_eq!(utterance.tokens[0].text, "Hong");
        assert!((utterance.tokens[0].end - 0.5).abs() < 1e-9);
        assert!((utterance.tokens[1].start - 0.5).abs() < 1e-9);
        assert_eq!(utterance.tokens[1].speaker_tag, 1);
    }

    #[test]
    fn converts_rational_seconds() {
        let offset = TimeOffset {
            seconds: 3,
            nanos: 500_000_000,
        };

        assert!((offset.as_secs() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn missing_fields_default() {
        let word: WordInfo = serde_json::from_str(r#"{"word": "去"}"#).unwrap();

        assert_eq!(word.confidence, 0.0);
        assert_eq!(word.speaker_tag, 0);
        assert_eq!(word.start_time, TimeOffset::default());
    }

    #[test]
    fn empty_response_is_an_error() {
        let response: RecognizeResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();

        assert_eq!(
            response.into_utterance().unwrap_err(),
            InputError::EmptyRecognition
        );
    }

    #[test]
    fn out_of_range_confidence_is_an_error() {
        let response: RecognizeResponse = serde_json::from_str(
            r#"{"results": [{"alternatives": [{
                "transcript": "x",
                "words": [{"word": "x", "confidence": 1.2}]
            }]}]}"#,
        )
        .unwrap();

        assert_eq!(
            response.into_utterance().unwrap_err(),
            InputError::ConfidenceRange {
                index: 0,
                value: 1.2
            }
        );
    }

    #[test]
    fn end_before_start_is_an_error() {
        let response: RecognizeResponse = serde_json::from_str(
            r#"{"results": [{"alternatives": [{
                "transcript": "x",
                "words": [{
                    "word": "x",
                    "startTime": {"seconds": 2},
                    "endTime": {"seconds": 1},
                    "confidence": 0.5
                }]
            }]}]}"#,
        )
        .unwrap();

        assert_eq!(
            response.into_utterance().unwrap_err(),
            InputError::TimeOrder {
                index: 0,
                start: 2.0,
                end: 1.0
            }
        );
    }

    #[test]
    fn parses_entities_ignoring_extra_fields() {
        let response: AnalyzeEntitiesResponse = serde_json::from_str(
            r#"{"entities": [
                {"name": "香港", "type": "LOCATION", "salience": 0.7},
                {"name": "Hong Kong", "mentions": []}
            ]}"#,
        )
        .unwrap();

        let entities = response.into_entities();

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "香港");
        assert_eq!(entities[1].name, "Hong Kong");
    }
}
