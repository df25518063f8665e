//! Whole-text conversion: split on whitespace, transliterate, rejoin.

use tracing::debug_span;

use crate::mapping::MappingTable;
use crate::translit::{ScanEvent, Transliterator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    /// Event reported by the final word, if any.
    pub status: Option<ScanEvent>,
}

/// Convert `text` word by word.
///
/// With `enabled == false` the text is returned untouched. Otherwise runs of
/// whitespace collapse to a single space, and leading/trailing whitespace is
/// dropped.
pub fn convert_text(table: &MappingTable, text: &str, enabled: bool) -> Conversion {
    if !enabled {
        return Conversion {
            text: text.to_string(),
            status: None,
        };
    }

    let _span = debug_span!("convert_text", len = text.len()).entered();
    let engine = Transliterator::new(table);
    let mut out = String::with_capacity(text.len() * 3);
    let mut status = None;
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let t = engine.transliterate(word);
        out.push_str(&t.output);
        status = t.event;
    }

    Conversion { text: out, status }
}
