use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::{MappingError, MappingTable};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_tamil.toml");

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingConfig {
    stop: StopConfig,
    #[serde(default)]
    vowels: Vec<VowelConfig>,
    #[serde(default)]
    consonants: Vec<ConsonantConfig>,
    #[serde(default)]
    exceptions: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StopConfig {
    token: String,
    virama: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VowelConfig {
    key: String,
    independent: String,
    #[serde(default)]
    combining: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsonantConfig {
    key: String,
    glyph: String,
    #[serde(default)]
    grantha: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Invalid(#[from] MappingError),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Returns the embedded default (Tamil) mapping TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Parse mapping TOML and build a validated [`MappingTable`].
pub fn parse_mapping_toml(toml_str: &str) -> Result<MappingTable, MappingConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    let mut builder = MappingTable::builder().stop_marker(config.stop.token, config.stop.virama);
    for v in config.vowels {
        builder = builder.vowel(v.key, v.independent, v.combining);
    }
    for c in config.consonants {
        builder = if c.grantha {
            builder.grantha(c.key, c.glyph)
        } else {
            builder.consonant(c.key, c.glyph)
        };
    }
    for (key, output) in config.exceptions {
        builder = builder.exception(key, output);
    }

    Ok(builder.build()?)
}
