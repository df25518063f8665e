use std::fs;

use tamil_core::mapping::{self, Category, MappingTable};
use tamil_core::settings;
use tamil_core::unicode::is_tamil;

pub fn mapping_export() {
    print!("{}", mapping::default_toml());
}

pub fn mapping_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(mapping::parse_mapping_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels, {} consonants, {} exceptions, stop marker {:?}",
        table.keys_by_length(Category::Vowel).len(),
        table.keys_by_length(Category::Consonant).len(),
        table.keys_by_length(Category::Exception).len(),
        table.stop_marker().token,
    );
    let foreign = non_tamil_outputs(&table);
    if !foreign.is_empty() {
        println!(
            "note: {} outputs contain non-Tamil characters: {}",
            foreign.len(),
            foreign.join(", ")
        );
    }
}

/// Keys whose output has a character outside the Tamil block.
fn non_tamil_outputs(table: &MappingTable) -> Vec<String> {
    let vowels = table
        .vowels()
        .map(|(k, v)| (k, format!("{}{}", v.independent, v.combining)));
    let consonants = table.consonants().map(|(k, c)| (k, c.glyph.clone()));
    let exceptions = table.exceptions().map(|(k, out)| (k, out.to_string()));
    let stop = table.stop_marker();
    let stop = std::iter::once((stop.token.as_str(), stop.virama.clone()));

    vowels
        .chain(consonants)
        .chain(exceptions)
        .chain(stop)
        .filter(|(_, out)| !out.chars().all(is_tamil))
        .map(|(k, _)| k.to_string())
        .collect()
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: mode.start_enabled={}, reference.vowel_columns={}, reference.consonant_columns={}, output.default_extension={}",
        s.mode.start_enabled,
        s.reference.vowel_columns,
        s.reference.consonant_columns,
        s.output.default_extension
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_all_tamil() {
        assert!(non_tamil_outputs(&MappingTable::tamil()).is_empty());
    }

    #[test]
    fn foreign_outputs_are_listed() {
        let table = MappingTable::builder()
            .vowel("a", "அ", "")
            .consonant("k", "K")
            .exception("ok", "சரி")
            .stop_marker(";", "்")
            .build()
            .unwrap();
        assert_eq!(non_tamil_outputs(&table), vec!["k"]);
    }
}
