//! Loading pair lists for [`Mapping`](crate::Mapping) construction.
//!
//! Built-in tables are flat text: whitespace-separated tokens, read two at a
//! time as `(surface, underlying)` pairs. Layout (line breaks, column
//! alignment) carries no meaning. Custom tables come from TOML, see
//! [`config`].

pub mod config;

pub use config::{load_mapping_file, parse_mapping_toml, ConfigError, MappingConfig};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("unpaired token at end of table: {token:?}")]
    UnpairedToken { token: String },
}

/// Split a pair table into `(first, second)` pairs in table order.
pub fn parse_pair_table(text: &str) -> Result<Vec<(String, String)>, TableError> {
    let mut tokens = text.split_whitespace();
    let mut pairs = Vec::new();
    while let Some(first) = tokens.next() {
        let Some(second) = tokens.next() else {
            return Err(TableError::UnpairedToken {
                token: first.to_string(),
            });
        };
        pairs.push((first.to_string(), second.to_string()));
    }
    Ok(pairs)
}

/// Split a token list (e.g. a lemma table) into its tokens in table order.
pub fn parse_token_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
