//! Span merging: collapse a located token span into one term.

use crate::term::{Best, SCORE_SCALE, Term, round_tenths};
use crate::types::{Span, Token};

/// Merge the tokens covered by `span` into a single term carrying the
/// entity name.
///
/// Timing spans from the first covered token's start to the last covered
/// token's end; confidence is the mean of the covered tokens' confidence;
/// the speaker tag is cleared, since a merged span may cross speakers.
///
/// Returns `None` when the span is empty or leaves the token array, so a
/// stale span can never cause a partial write.
pub fn merge_span(tokens: &[Token], span: Span, name: &str) -> Option<Term> {
    let covered = tokens.get(span.start..span.end())?;

    let (first, last) = match covered {
        [] => return None,
        [only] => (only, only),
        [first, .., last] => (first, last),
    };

    let confidence = covered.iter().map(|t| t.confidence).sum::<f64>() / covered.len() as f64;

    Some(Term {
        start: first.start,
        duration: round_tenths(last.end - first.start),
        speaker: 0,
        best: Best {
            word: name.to_owned(),
            score: confidence * SCORE_SCALE,
        },
        alternatives: Vec::new(),
    })
}
