//! Token-to-glyph mapping table.
//!
//! Authored as TOML (see `default_tamil.toml`), validated once at build time,
//! and immutable afterwards. Vowel and consonant keys are matched as prefixes
//! of the remaining input, longest first; exceptions match whole words only.

mod config;
mod table;

pub use config::{default_toml, parse_mapping_toml, MappingConfigError};
pub use table::{
    Category, ConsonantEntry, MappingError, MappingTable, MappingTableBuilder, StopMarker,
    TableEntry, VowelEntry,
};
