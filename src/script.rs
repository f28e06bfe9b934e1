//! Per-script mapping singletons.
//!
//! - `init_custom(script, toml)` installs a custom table before first use
//! - `mapping(script)` returns `&'static Mapping` (lazy-init singleton)
//! - Without a custom table, the built-in tables from [`crate::tables`] are used

use std::fmt;
use std::sync::OnceLock;

use romaji_core::table::{parse_mapping_toml, ConfigError};
use romaji_core::{Mapping, MappingError};
use tracing::debug;

use crate::tables;

/// A surface representation of the shared lemma alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Hiragana,
    Katakana,
    /// Kunrei-style romaji as typed on a word processor.
    Wapuro,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::Hiragana, Script::Katakana, Script::Wapuro];

    /// Build this script's mapping from the built-in tables.
    pub fn default_mapping(self) -> Result<Mapping, MappingError> {
        match self {
            Script::Hiragana => kana_mapping(
                tables::hiragana_pairs(),
                tables::small_hiragana_pairs(),
            ),
            Script::Katakana => kana_mapping(
                tables::katakana_pairs(),
                tables::small_katakana_pairs(),
            ),
            Script::Wapuro => {
                // Small-kana spellings (xa, xtu, ...) map to themselves in both
                // directions instead of reading as x + vowel.
                let small: Vec<(String, String)> = tables::small_hiragana_pairs()
                    .into_iter()
                    .map(|(_, wapuro)| (wapuro.clone(), wapuro))
                    .collect();
                Mapping::new(tables::wapuro_pairs(), small.clone(), small)
            }
        }
    }

    fn slot(self) -> &'static OnceLock<Mapping> {
        static HIRAGANA: OnceLock<Mapping> = OnceLock::new();
        static KATAKANA: OnceLock<Mapping> = OnceLock::new();
        static WAPURO: OnceLock<Mapping> = OnceLock::new();
        match self {
            Script::Hiragana => &HIRAGANA,
            Script::Katakana => &KATAKANA,
            Script::Wapuro => &WAPURO,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Hiragana => f.write_str("hiragana"),
            Script::Katakana => f.write_str("katakana"),
            Script::Wapuro => f.write_str("wapuro"),
        }
    }
}

/// Small kana parse to their wapuro spelling and are emitted back from it;
/// they stay out of the bidirectional base so that the lemma list is exactly
/// the set of base lemmas.
fn kana_mapping(
    base: Vec<(String, String)>,
    small: Vec<(String, String)>,
) -> Result<Mapping, MappingError> {
    let out_map: Vec<(String, String)> = small
        .iter()
        .map(|(kana, wapuro)| (wapuro.clone(), kana.clone()))
        .collect();
    Mapping::new(base, small, out_map)
}

/// Install a custom TOML table for `script` before its first `mapping()` call.
///
/// Fails with `AlreadyInitialized` once the script's mapping exists, whether
/// it came from an earlier `init_custom` or from the built-in tables.
pub fn init_custom(script: Script, toml_content: String) -> Result<(), ConfigError> {
    install(script.slot(), &toml_content)?;
    debug!(%script, "custom mapping installed");
    Ok(())
}

fn install(slot: &OnceLock<Mapping>, toml_content: &str) -> Result<(), ConfigError> {
    let custom = parse_mapping_toml(toml_content)?.build()?;
    slot.set(custom).map_err(|_| ConfigError::AlreadyInitialized)
}

/// Get or initialize the mapping for `script`.
pub fn mapping(script: Script) -> &'static Mapping {
    script.slot().get_or_init(|| {
        script
            .default_mapping()
            .expect("built-in tables must be valid")
    })
}
