use romaji_core::Mapping;
use tracing::debug_span;

use crate::script::{mapping, Script};

/// Chains mappings through the shared lemma form: each source parses in
/// turn, then the target emits.
pub struct Converter<'a> {
    sources: Vec<&'a Mapping>,
    target: &'a Mapping,
}

impl<'a> Converter<'a> {
    pub fn new(source: &'a Mapping, target: &'a Mapping) -> Self {
        Self {
            sources: vec![source],
            target,
        }
    }

    /// Add another parse stage, applied after the existing ones. Used to
    /// accept text that mixes several surface scripts.
    pub fn with_source(mut self, source: &'a Mapping) -> Self {
        self.sources.push(source);
        self
    }

    /// Text in the lemma form, before the target emits.
    pub fn to_underlying(&self, text: &str) -> String {
        self.sources
            .iter()
            .fold(text.to_string(), |acc, source| source.parse(&acc))
    }

    pub fn convert(&self, text: &str) -> String {
        let _span =
            debug_span!("convert", sources = self.sources.len(), len = text.len()).entered();
        self.target.emit(&self.to_underlying(text))
    }

    /// True if the sources turn all of `text` into the target's lemma form,
    /// so that nothing is left in the source script.
    pub fn is_convertible(&self, text: &str) -> bool {
        self.target.matches_underlying_form(&self.to_underlying(text))
    }
}

/// Convert `text` from one script to another.
pub fn convert(text: &str, from: Script, to: Script) -> String {
    Converter::new(mapping(from), mapping(to)).convert(text)
}

/// Kana of either script → wapuro romaji.
pub fn to_wapuro(text: &str) -> String {
    Converter::new(mapping(Script::Hiragana), mapping(Script::Wapuro))
        .with_source(mapping(Script::Katakana))
        .convert(text)
}

/// Wapuro romaji or katakana → hiragana.
pub fn to_hiragana(text: &str) -> String {
    Converter::new(mapping(Script::Wapuro), mapping(Script::Hiragana))
        .with_source(mapping(Script::Katakana))
        .convert(text)
}

/// Wapuro romaji or hiragana → katakana.
pub fn to_katakana(text: &str) -> String {
    Converter::new(mapping(Script::Wapuro), mapping(Script::Katakana))
        .with_source(mapping(Script::Hiragana))
        .convert(text)
}
