//! Bidirectional longest-match mapping between surface text and lemmas.
//!
//! A `Mapping` is built once from a base pair set (used in both directions)
//! and two one-directional override sets. Each direction gets its own
//! [`KeyTrie`]; rewriting walks the input left to right, replacing the
//! longest key found at each position and passing unmatched characters
//! through unchanged.

#[cfg(test)]
mod tests;
mod trie;

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, debug_span};

use trie::KeyTrie;

/// Which of the two tables of a [`Mapping`] an operation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// surface → underlying
    Parse,
    /// underlying → surface
    Emit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Parse => f.write_str("parse"),
            Direction::Emit => f.write_str("emit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("empty key in {direction} table")]
    EmptyKey { direction: Direction },

    #[error("conflicting {direction} entries for {key:?}: {first:?} and {second:?}")]
    DuplicateKey {
        direction: Direction,
        key: String,
        first: String,
        second: String,
    },
}

pub struct Mapping {
    surface_to_underlying: BTreeMap<String, String>,
    underlying_to_surface: BTreeMap<String, String>,
    parser: KeyTrie,
    emitter: KeyTrie,
}

impl Mapping {
    /// Build a mapping from `base` pairs (surface, underlying), plus `in_map`
    /// entries that only apply to parsing and `out_map` entries that only
    /// apply to emitting.
    ///
    /// Overrides replace base entries with the same key. Within one input
    /// set, repeating a key with a different value is an error unless an
    /// override decides that key; this includes a base whose inversion maps
    /// two surfaces onto one underlying token.
    pub fn new<K, V>(
        base: impl IntoIterator<Item = (K, V)>,
        in_map: impl IntoIterator<Item = (K, V)>,
        out_map: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, MappingError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let _span = debug_span!("build_mapping").entered();

        let base: Vec<(String, String)> = base
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let in_map = collect_unique(Direction::Parse, into_pairs(in_map))?;
        let out_map = collect_unique(Direction::Emit, into_pairs(out_map))?;

        let mut surface_to_underlying = collect_unique(
            Direction::Parse,
            base.iter()
                .filter(|(surface, _)| !in_map.contains_key(surface))
                .cloned(),
        )?;
        let mut underlying_to_surface = collect_unique(
            Direction::Emit,
            base.into_iter()
                .map(|(surface, underlying)| (underlying, surface))
                .filter(|(underlying, _)| !out_map.contains_key(underlying)),
        )?;

        surface_to_underlying.extend(in_map);
        underlying_to_surface.extend(out_map);

        let parser = KeyTrie::build(
            surface_to_underlying
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        let emitter = KeyTrie::build(
            underlying_to_surface
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );

        debug!(
            parse_keys = surface_to_underlying.len(),
            emit_keys = underlying_to_surface.len()
        );
        Ok(Self {
            surface_to_underlying,
            underlying_to_surface,
            parser,
            emitter,
        })
    }

    /// Build a mapping with no one-directional overrides.
    pub fn bidirectional<K, V>(
        base: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, MappingError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(base, Vec::new(), Vec::new())
    }

    /// Return `input` with every recognised surface span replaced by its
    /// underlying token. Unrecognised characters are kept as-is.
    pub fn parse(&self, input: &str) -> String {
        self.rewrite(Direction::Parse, input)
    }

    /// Return `input` with every recognised underlying token replaced by its
    /// surface form. Unrecognised characters are kept as-is.
    pub fn emit(&self, input: &str) -> String {
        self.rewrite(Direction::Emit, input)
    }

    fn rewrite(&self, direction: Direction, input: &str) -> String {
        if self.trie(direction).is_empty() {
            return input.to_string();
        }
        let mut out = String::with_capacity(input.len());
        for segment in self.segments(direction, input) {
            out.push_str(segment.output());
        }
        out
    }

    /// Lazily tokenize `input` against one direction's keys.
    pub fn segments<'s>(&self, direction: Direction, input: &'s str) -> Segments<'_, 's> {
        Segments {
            trie: self.trie(direction),
            rest: input,
        }
    }

    /// True if the whole of `input` can be split into surface keys.
    pub fn matches_surface_form(&self, input: &str) -> bool {
        self.matches(Direction::Parse, input)
    }

    /// True if the whole of `input` can be split into underlying keys.
    pub fn matches_underlying_form(&self, input: &str) -> bool {
        self.matches(Direction::Emit, input)
    }

    /// Reachability over byte offsets: an offset is reachable if some key
    /// ends there starting from a reachable offset. Unlike the rewrite scan,
    /// this finds a split even where the longest key at a position is a dead
    /// end.
    fn matches(&self, direction: Direction, input: &str) -> bool {
        let trie = self.trie(direction);
        let mut reachable = vec![false; input.len() + 1];
        reachable[0] = true;
        for start in 0..input.len() {
            if !reachable[start] || !input.is_char_boundary(start) {
                continue;
            }
            for len in trie.prefix_lengths(&input[start..]) {
                reachable[start + len] = true;
            }
        }
        reachable[input.len()]
    }

    pub fn accepted_surface_keys(&self) -> impl Iterator<Item = &str> {
        self.surface_to_underlying.keys().map(String::as_str)
    }

    pub fn accepted_underlying_keys(&self) -> impl Iterator<Item = &str> {
        self.underlying_to_surface.keys().map(String::as_str)
    }

    pub fn produced_surface_values(&self) -> impl Iterator<Item = &str> {
        self.underlying_to_surface.values().map(String::as_str)
    }

    pub fn produced_underlying_values(&self) -> impl Iterator<Item = &str> {
        self.surface_to_underlying.values().map(String::as_str)
    }

    /// Exact lookup of a single key in one direction's table.
    pub fn get(&self, direction: Direction, key: &str) -> Option<&str> {
        let table = match direction {
            Direction::Parse => &self.surface_to_underlying,
            Direction::Emit => &self.underlying_to_surface,
        };
        table.get(key).map(String::as_str)
    }

    /// All `(key, value)` pairs of one direction, in ascending key order.
    pub fn pairs(&self, direction: Direction) -> impl Iterator<Item = (&str, &str)> {
        let table = match direction {
            Direction::Parse => &self.surface_to_underlying,
            Direction::Emit => &self.underlying_to_surface,
        };
        table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn trie(&self, direction: Direction) -> &KeyTrie {
        match direction {
            Direction::Parse => &self.parser,
            Direction::Emit => &self.emitter,
        }
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("parse_keys", &self.surface_to_underlying.len())
            .field("emit_keys", &self.underlying_to_surface.len())
            .finish()
    }
}

fn into_pairs<K, V>(
    pairs: impl IntoIterator<Item = (K, V)>,
) -> impl Iterator<Item = (String, String)>
where
    K: Into<String>,
    V: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into()))
}

fn collect_unique(
    direction: Direction,
    pairs: impl IntoIterator<Item = (String, String)>,
) -> Result<BTreeMap<String, String>, MappingError> {
    let mut table: BTreeMap<String, String> = BTreeMap::new();
    for (key, value) in pairs {
        if key.is_empty() {
            return Err(MappingError::EmptyKey { direction });
        }
        if let Some(first) = table.get(&key) {
            if *first != value {
                return Err(MappingError::DuplicateKey {
                    direction,
                    first: first.clone(),
                    key,
                    second: value,
                });
            }
            continue;
        }
        table.insert(key, value);
    }
    Ok(table)
}

/// One step of a left-to-right longest-match scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'m, 's> {
    /// `source` is a key of the table and rewrites to `target`.
    Matched { source: &'s str, target: &'m str },
    /// A single character no key starts with.
    Unmatched(&'s str),
}

impl Segment<'_, '_> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Segment::Matched { .. })
    }

    /// The text this segment contributes to a rewrite.
    pub fn output(&self) -> &str {
        match self {
            Segment::Matched { target, .. } => *target,
            Segment::Unmatched(ch) => *ch,
        }
    }
}

/// Iterator returned by [`Mapping::segments`].
pub struct Segments<'m, 's> {
    trie: &'m KeyTrie,
    rest: &'s str,
}

impl<'m, 's> Iterator for Segments<'m, 's> {
    type Item = Segment<'m, 's>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let trie = self.trie;
        let ch = rest.chars().next()?;
        let (len, segment) = match trie.longest_prefix(rest) {
            Some((len, target)) => (
                len,
                Segment::Matched {
                    source: &rest[..len],
                    target,
                },
            ),
            None => {
                let len = ch.len_utf8();
                (len, Segment::Unmatched(&rest[..len]))
            }
        };
        self.rest = &rest[len..];
        Some(segment)
    }
}
