//! Longest-match rewriting between surface text and a lemma alphabet.
//!
//! A [`Mapping`](mapping::Mapping) pairs a surface representation (kana or
//! romaji) with the underlying lemma tokens and converts in both directions.
//! Table text and TOML configuration are turned into pair lists by
//! [`table`].

pub mod mapping;
pub mod table;
pub mod unicode;

pub use mapping::{Direction, Mapping, MappingError, Segment, Segments};
