//! Built-in phoneme tables.
//!
//! Lemmas are unambiguous, upper-case, wapuro-style Kunrei-shiki tokens, one
//! per mora (or geminated mora). The kana tables map each lemma to its
//! hiragana spelling; katakana is derived from hiragana.

use romaji_core::table::{parse_pair_table, parse_token_list};
use romaji_core::unicode::hiragana_to_katakana;

/// Native moras, dakuon, handakuon, yōon and the common geminates.
pub const LEMMA_TAB_BASIC: &str = include_str!("lemmas_basic.txt");
/// Loanword and archaic moras, their geminates, and the prolonged sound mark.
pub const LEMMA_TAB_EXTENDED: &str = include_str!("lemmas_extended.txt");
/// Hiragana spelling of every lemma that is not a geminate.
pub const HIRAGANA_TAB: &str = include_str!("hiragana.txt");
/// Small kana written on their own, paired with their wapuro spelling.
pub const SMALL_KANA_TAB: &str = include_str!("small_kana.txt");

/// Initial consonants that are doubled after a sokuon (っ).
pub const SOKUON_CONSONANTS: &str = "kgsztdhfbp";
pub const HIRAGANA_SOKUON: char = 'っ';

/// Every lemma, basic table first.
pub fn lemmas() -> Vec<String> {
    let mut lemmas = parse_token_list(LEMMA_TAB_BASIC);
    lemmas.extend(parse_token_list(LEMMA_TAB_EXTENDED));
    lemmas
}

/// `(hiragana, lemma)` pairs, geminates included.
pub fn hiragana_pairs() -> Vec<(String, String)> {
    let mut pairs = embedded_pairs(HIRAGANA_TAB);
    let geminates: Vec<(String, String)> = pairs.iter().filter_map(geminate).collect();
    pairs.extend(geminates);
    pairs
}

/// `(small hiragana, wapuro)` pairs for small kana standing alone.
pub fn small_hiragana_pairs() -> Vec<(String, String)> {
    embedded_pairs(SMALL_KANA_TAB)
}

pub fn katakana_pairs() -> Vec<(String, String)> {
    to_katakana_pairs(hiragana_pairs())
}

pub fn small_katakana_pairs() -> Vec<(String, String)> {
    to_katakana_pairs(small_hiragana_pairs())
}

/// `(wapuro, lemma)` pairs: the lower-cased lemma is its own wapuro spelling.
pub fn wapuro_pairs() -> Vec<(String, String)> {
    lemmas()
        .into_iter()
        .map(|lemma| (lemma.to_lowercase(), lemma))
        .collect()
}

/// っ + kana → doubled lemma, e.g. `("か", "KA")` → `("っか", "KKA")`.
fn geminate((kana, lemma): &(String, String)) -> Option<(String, String)> {
    let initial = lemma.chars().next()?;
    if !SOKUON_CONSONANTS.contains(initial.to_ascii_lowercase()) {
        return None;
    }
    Some((
        format!("{HIRAGANA_SOKUON}{kana}"),
        format!("{initial}{lemma}"),
    ))
}

fn to_katakana_pairs(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .map(|(kana, lemma)| (hiragana_to_katakana(&kana), lemma))
        .collect()
}

fn embedded_pairs(table: &str) -> Vec<(String, String)> {
    // Embedded tables are checked for pairing by build.rs.
    parse_pair_table(table).expect("embedded table must be paired")
}
