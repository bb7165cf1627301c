//! Term records: the rows of the merged output document.

use serde::{Deserialize, Serialize};

use crate::types::Token;

/// Scale factor from recognizer confidence in [0, 1] to term score.
pub(crate) const SCORE_SCALE: f64 = 1000.0;

/// Best hypothesis for a term: its text plus the scaled score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Best {
    pub word: String,
    pub score: f64,
}

/// One row of the output: a timed, confidence-scored span of the
/// utterance, merged or unmerged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Start time in seconds
    pub start: f64,
    /// Duration in seconds, rounded to one decimal place
    pub duration: f64,
    /// Propagated speaker tag; 0 for merged spans
    pub speaker: i32,
    pub best: Best,
    /// Reserved; alternative hypotheses are not produced
    pub alternatives: Vec<Best>,
}

impl Term {
    /// Build the unmerged term for a single token.
    pub fn from_token(token: &Token) -> Self {
        Self {
            start: token.start,
            duration: round_tenths(token.end - token.start),
            speaker: token.speaker_tag,
            best: Best {
                word: token.text.clone(),
                score: token.confidence * SCORE_SCALE,
            },
            alternatives: Vec::new(),
        }
    }
}

/// Output wrapper: the ordered term list under the single `terms` field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TermDocument {
    pub terms: Vec<Term>,
}

/// Map each token to its unmerged term, in order.
///
/// Never fails; an empty token list yields an empty term list.
pub fn build_terms(tokens: &[Token]) -> Vec<Term> {
    tokens.iter().map(Term::from_token).collect()
}

/// Round seconds to one decimal place.
pub(crate) fn round_tenths(secs: f64) -> f64 {
    (secs * 10.0).round() / 10.0
}
