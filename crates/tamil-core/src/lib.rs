//! Phonetic-to-Tamil transliteration core.
//!
//! [`mapping::MappingTable`] holds the token table, [`translit`] resolves a
//! single word, and [`convert::convert_text`] handles whole texts and the
//! enable/disable gate. Everything here is pure and thread-safe.

pub mod convert;
pub mod mapping;
pub mod reference;
pub mod settings;
pub mod translit;
pub mod unicode;

pub use convert::{convert_text, Conversion};
pub use mapping::MappingTable;
pub use translit::{transliterate, Rule, ScanEvent, Transliteration, Transliterator};
