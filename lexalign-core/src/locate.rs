//! Entity location: recover the token span an entity name covers.

use crate::types::{Entity, Span, Token};

/// Outcome of locating one entity in the token coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Located {
    /// The name equals one token's text; it is already represented by a
    /// single term and needs no merge.
    Aligned,
    /// Recovered token span to merge.
    Span(Span),
    /// The name cannot be reconciled with the token coordinate space.
    NotFound,
}

/// Locate `entity` against the token array and the normalized transcript.
///
/// Policy, by entity shape:
/// - a name equal to some token's text is already aligned;
/// - a space-containing name is split into constituent words and anchored
///   at the leftmost token matching the first word, with span length equal
///   to the word count (only the first word is checked, a known limitation
///   of the upstream heuristic);
/// - a space-free multi-character name is searched as a substring of the
///   normalized transcript, whose character offsets equal token indices.
///
/// The leftmost match always wins. Spans are not bound-checked here; the
/// pipeline rejects spans that leave the token array.
pub fn locate_entity(entity: &Entity, normalized: &str, tokens: &[Token]) -> Located {
    let name = entity.name.as_str();

    if name.is_empty() {
        return Located::NotFound;
    }

    if tokens.iter().any(|t| t.text == name) {
        return Located::Aligned;
    }

    if name.contains(' ') {
        locate_phrase(name, tokens)
    } else {
        locate_run(name, normalized)
    }
}

/// Anchor a space-joined phrase at the leftmost token matching its first
/// constituent word.
fn locate_phrase(name: &str, tokens: &[Token]) -> Located {
    let mut words = name.split_whitespace();

    let Some(first) = words.next() else {
        return Located::NotFound;
    };

    match tokens.iter().position(|t| t.text == first) {
        Some(start) => Located::Span(Span::new(start, 1 + words.count())),
        None => Located::NotFound,
    }
}

/// Search a separator-free run in the normalized transcript. The char
/// offset of a hit equals the starting token index, and the char count of
/// the name equals the span length.
fn locate_run(name: &str, normalized: &str) -> Located {
    match normalized.find(name) {
        Some(at) => {
            let start = normalized[..at].chars().count();
            Located::Span(Span::new(start, name.chars().count()))
        }
        None => Located::NotFound,
    }
}
