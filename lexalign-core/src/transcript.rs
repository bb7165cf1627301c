//! Transcript normalization: collapse multi-character tokens so that
//! character offsets map 1:1 to token indices.

use crate::types::Token;

/// Placeholder written over each multi-character token occurrence.
pub const PLACEHOLDER: char = '\u{fffc}';

const PLACEHOLDER_STR: &str = "\u{fffc}";

/// Produce a position-stable transcript in which every multi-character
/// token occupies exactly one character.
///
/// Multi-character words and single-character tokens occupy different
/// widths in the raw transcript, which blocks index arithmetic between
/// character offsets and token positions. Collapsing each multi-character
/// token to [`PLACEHOLDER`] makes the two coordinate spaces line up,
/// provided the recognizer emits no separator characters between tokens
/// (logographic locales do not). Single-character tokens already occupy
/// one position and are left untouched.
///
/// Each qualifying token consumes the *first remaining* occurrence of its
/// text. When the same text also appears earlier in the transcript than
/// the token's true position, the replacement binds to that earlier
/// occurrence. This is a known limitation of the heuristic and is not
/// corrected here.
pub fn normalize(tokens: &[Token], transcript: &str) -> String {
    let mut normalized = transcript.to_owned();

    for token in tokens {
        if token.width() <= 1 {
            continue;
        }

        match normalized.find(&token.text) {
            Some(at) => normalized.replace_range(at..at + token.text.len(), PLACEHOLDER_STR),
            None => tracing::debug!(text = %token.text, "token text absent from transcript"),
        }
    }

    normalized
}
