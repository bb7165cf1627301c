//! Error types for the alignment core.

use thiserror::Error;

/// Validation errors raised while converting recognizer output into
/// tokens.
///
/// Malformed wire input is a caller bug and fails the run; per-entity
/// alignment failures are not errors (see [`SkipReason`]).
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    /// Response carried no result alternative to align against
    #[error("recognizer response contains no alternatives")]
    EmptyRecognition,

    /// Word confidence outside the valid range
    #[error("word {index}: confidence {value} outside [0, 1]")]
    ConfidenceRange { index: usize, value: f64 },

    /// Word end time precedes its start time
    #[error("word {index}: end {end}s precedes start {start}s")]
    TimeOrder { index: usize, start: f64, end: f64 },
}

/// Why an entity was left unmerged.
///
/// Never fatal: the pipeline records the skip and continues with the
/// remaining entities, producing best-effort output.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither first-token nor substring search recovered a span
    #[error("no token span could be recovered")]
    NotLocatable,

    /// The located span leaves the token array
    #[error("span leaves the token array bounds")]
    OutOfBounds,

    /// The located span overlaps an already-accepted merge
    #[error("span overlaps an earlier accepted merge")]
    Overlap,
}

/// Result type alias for wire-boundary operations.
pub type Result<T, E = InputError> = std::result::Result<T, E>;
