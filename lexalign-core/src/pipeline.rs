//! Alignment pipeline: locate every entity, then build the merged term
//! sequence in a single pass.

use crate::error::SkipReason;
use crate::locate::{Located, locate_entity};
use crate::merge::merge_span;
use crate::term::Term;
use crate::transcript::normalize;
use crate::types::{Entity, Span, Token};

/// Result of one alignment run.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    /// Ordered term sequence, merged where entities were located
    pub terms: Vec<Term>,
    /// Entities that were not merged, with the reason
    pub skipped: Vec<SkippedEntity>,
}

/// One entity that was not merged.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedEntity {
    pub name: String,
    pub reason: SkipReason,
}

/// A located merge waiting to be applied.
#[derive(Debug)]
struct Planned {
    span: Span,
    name: String,
}

/// Align `entities` onto `tokens`, producing the merged term sequence.
///
/// All spans are located against the immutable token array first; a span
/// that leaves the array or overlaps an already-accepted span is rejected
/// and reported in [`Alignment::skipped`] (first accepted wins). The term
/// sequence is then built in one pass, so no index is ever interpreted
/// against a shrunk array. A failed entity never aborts the rest of the
/// run.
pub fn align(tokens: &[Token], transcript: &str, entities: &[Entity]) -> Alignment {
    let mut skipped = Vec::new();

    if tokens.is_empty() {
        return Alignment {
            terms: Vec::new(),
            skipped,
        };
    }

    let normalized = normalize(tokens, transcript);
    let mut plan: Vec<Planned> = Vec::new();

    for entity in entities {
        match locate_entity(entity, &normalized, tokens) {
            Located::Aligned => {
                tracing::debug!(entity = %entity.name, "already a single token, no merge");
            }
            Located::NotFound => {
                skipped.push(SkippedEntity {
                    name: entity.name.clone(),
                    reason: SkipReason::NotLocatable,
                });
            }
            Located::Span(span) => {
                if span.end() > tokens.len() {
                    skipped.push(SkippedEntity {
                        name: entity.name.clone(),
                        reason: SkipReason::OutOfBounds,
                    });
                } else if plan.iter().any(|planned| planned.span.overlaps(span)) {
                    skipped.push(SkippedEntity {
                        name: entity.name.clone(),
                        reason: SkipReason::Overlap,
                    });
                } else {
                    tracing::debug!(
                        entity = %entity.name,
                        start = span.start,
                        len = span.len,
                        "merge planned"
                    );
                    plan.push(Planned {
                        span,
                        name: entity.name.clone(),
                    });
                }
            }
        }
    }

    plan.sort_by_key(|planned| planned.span.start);

    tracing::debug!(
        tokens = tokens.len(),
        merges = plan.len(),
        skipped = skipped.len(),
        "alignment planned"
    );

    Alignment {
        terms: apply(tokens, &plan),
        skipped,
    }
}

/// Emit the final term sequence: per-token terms outside planned spans,
/// one merged term per planned span.
fn apply(tokens: &[Token], plan: &[Planned]) -> Vec<Term> {
    let mut terms = Vec::with_capacity(tokens.len());
    let mut index = 0;

    for planned in plan {
        terms.extend(tokens[index..planned.span.start].iter().map(Term::from_token));
        index = planned.span.start;

        // Spans were validated during planning; a failed merge degrades to
        // the unmerged per-token terms on the next extend.
        if let Some(term) = merge_span(tokens, planned.span, &planned.name) {
            terms.push(term);
            index = planned.span.end();
        }
    }

    terms.extend(tokens[index..].iter().map(Term::from_token));

    terms
}
