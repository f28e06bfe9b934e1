//! Conversion between kana, wapuro romaji and a shared lemma alphabet.
//!
//! Each [`Script`] is a [`Mapping`] between its surface text and the lemma
//! form; [`Converter`] chains mappings to go from one script to another.
//!
//! ```
//! assert_eq!(romajitools::to_wapuro("ひらがな"), "hiragana");
//! assert_eq!(romajitools::to_katakana("kyakka"), "キャッカ");
//! ```

mod convert;
mod script;
pub mod tables;
mod trace_init;

pub use convert::{convert, to_hiragana, to_katakana, to_wapuro, Converter};
pub use romaji_core::table::{ConfigError, MappingConfig};
pub use romaji_core::{Direction, Mapping, MappingError};
pub use script::{init_custom, mapping, Script};
pub use trace_init::init_tracing;
