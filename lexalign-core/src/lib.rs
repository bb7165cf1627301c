//! lexalign-core: entity-aware term alignment for word-level transcripts.
//!
//! This crate aligns two independent annotation layers over one spoken
//! utterance: a word-level transcription (ordered tokens with timestamps,
//! confidence, and speaker tags) and an entity-extraction pass over the
//! assembled transcript text (named entities with no timing or position).
//! Entities are merged back into single timed, confidence-scored spans,
//! replacing the word-level terms they subsume.
//!
//! # Architecture
//!
//! The pipeline is a pure, synchronous transformation built from small
//! stages:
//!
//! - [`term::build_terms`]: one unmerged term per token
//! - [`transcript::normalize`]: collapse multi-character tokens so that
//!   character offsets map 1:1 to token indices
//! - [`locate::locate_entity`]: recover the token span an entity covers
//! - [`merge::merge_span`]: collapse a located span into one term
//! - [`pipeline::align`]: orchestrate the above and report skips
//!
//! The [`input`] module models the consumed subset of the upstream
//! recognizer and entity-analysis JSON responses.
//!
//! # Quick start
//!
//! ```
//! use lexalign_core::pipeline::align;
//! use lexalign_core::types::{Entity, Token};
//!
//! let tokens = vec![
//!     Token::new("Hong", 0.0, 0.5, 0.9),
//!     Token::new("Kong", 0.5, 1.0, 0.8),
//! ];
//! let entities = vec![Entity::new("Hong Kong")];
//!
//! let alignment = align(&tokens, "Hong Kong", &entities);
//!
//! assert_eq!(alignment.terms.len(), 1);
//! assert_eq!(alignment.terms[0].best.word, "Hong Kong");
//! ```

pub mod error;
pub mod input;
pub mod locate;
pub mod merge;
pub mod pipeline;
pub mod term;
pub mod transcript;
pub mod types;
