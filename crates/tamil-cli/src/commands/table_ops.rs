use serde::Serialize;

use tamil_core::mapping::MappingTable;
use tamil_core::reference::{
    consonant_cells, consonant_grid, exception_cells, format_grid, grid, vowel_cells,
    vowel_grid, ReferenceCell,
};
use tamil_core::settings::settings;

#[derive(Debug, Serialize)]
struct ReferenceReport {
    vowels: Vec<ReferenceCell>,
    consonants: Vec<ReferenceCell>,
    exceptions: Vec<ReferenceCell>,
}

pub fn table_cmd(table: &MappingTable, json: bool) {
    if json {
        let report = ReferenceReport {
            vowels: vowel_cells(table),
            consonants: consonant_cells(table),
            exceptions: exception_cells(table),
        };
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&report),
                "JSON serialization failed: {}"
            )
        );
        return;
    }
    print!("{}", format_reference(table));
}

/// Text form of the reference grids, laid out with the configured widths.
pub fn format_reference(table: &MappingTable) -> String {
    let columns = &settings().reference;
    let mut out = String::from("=== Vowels ===\n");
    out.push_str(&format_grid(&vowel_grid(table, columns.vowel_columns)));
    out.push_str("\n=== Consonants (* = Grantha) ===\n");
    out.push_str(&format_grid(&consonant_grid(table, columns.consonant_columns)));

    let exceptions = exception_cells(table);
    if !exceptions.is_empty() {
        out.push_str("\n=== Whole words ===\n");
        out.push_str(&format_grid(&grid(exceptions, columns.vowel_columns)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_lists_every_section() {
        let text = format_reference(&MappingTable::tamil());
        assert!(text.starts_with("=== Vowels ===\n"));
        assert!(text.contains("\n=== Consonants (* = Grantha) ===\n"));
        assert!(text.contains("\n=== Whole words ===\n"));
        assert!(text.contains("ksh*"));
        assert!(text.contains("\u{25CC}\u{0BCD}"));
    }

    #[test]
    fn consonant_rows_follow_configured_width() {
        let table = MappingTable::tamil();
        let text = format_reference(&table);
        let consonants = text
            .split("=== Consonants (* = Grantha) ===\n")
            .nth(1)
            .and_then(|rest| rest.split("\n=== Whole words").next())
            .unwrap();
        let first_keys = consonants.lines().next().unwrap();
        assert_eq!(
            first_keys.split_whitespace().count(),
            settings().reference.consonant_columns
        );
    }
}
