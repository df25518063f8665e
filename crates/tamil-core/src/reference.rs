//! Reference grids of a mapping table: what to type for each letter.
//!
//! Cells come out in declaration order. Vowels show the independent letter
//! followed by the combining sign, and the vowel grid ends with the stop
//! marker. Grantha consonants are flagged so hosts can highlight them.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::mapping::MappingTable;
use crate::unicode::display_form;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceCell {
    pub key: String,
    pub display: String,
    pub grantha: bool,
}

impl ReferenceCell {
    fn new(key: &str, display: String, grantha: bool) -> Self {
        Self {
            key: key.to_string(),
            display,
            grantha,
        }
    }

    /// Key as printed in text grids; grantha keys carry a `*`.
    pub fn label(&self) -> String {
        if self.grantha {
            format!("{}*", self.key)
        } else {
            self.key.clone()
        }
    }
}

pub type Grid = Vec<Vec<ReferenceCell>>;

pub fn vowel_cells(table: &MappingTable) -> Vec<ReferenceCell> {
    let mut cells: Vec<ReferenceCell> = table
        .vowels()
        .map(|(key, v)| {
            let display = if v.is_inherent() {
                v.independent.clone()
            } else {
                format!("{} {}", v.independent, display_form(&v.combining))
            };
            ReferenceCell::new(key, display, false)
        })
        .collect();
    let stop = table.stop_marker();
    cells.push(ReferenceCell::new(&stop.token, display_form(&stop.virama), false));
    cells
}

pub fn consonant_cells(table: &MappingTable) -> Vec<ReferenceCell> {
    table
        .consonants()
        .map(|(key, c)| ReferenceCell::new(key, c.glyph.clone(), c.grantha))
        .collect()
}

pub fn exception_cells(table: &MappingTable) -> Vec<ReferenceCell> {
    table
        .exceptions()
        .map(|(key, output)| ReferenceCell::new(key, output.to_string(), false))
        .collect()
}

/// Split `cells` into rows of `columns` (at least one).
pub fn grid(cells: Vec<ReferenceCell>, columns: usize) -> Grid {
    cells
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect()
}

pub fn vowel_grid(table: &MappingTable, columns: usize) -> Grid {
    grid(vowel_cells(table), columns)
}

pub fn consonant_grid(table: &MappingTable, columns: usize) -> Grid {
    grid(consonant_cells(table), columns)
}

/// Render a grid as text: per row, one line of keys and one line of glyphs,
/// padded to a common display width.
pub fn format_grid(grid: &[Vec<ReferenceCell>]) -> String {
    let width = grid
        .iter()
        .flatten()
        .map(|c| c.label().width().max(c.display.width()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in grid {
        let keys: Vec<String> = row.iter().map(|c| pad(&c.label(), width)).collect();
        let glyphs: Vec<String> = row.iter().map(|c| pad(&c.display, width)).collect();
        out.push_str(keys.join("  ").trim_end());
        out.push('\n');
        out.push_str(glyphs.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}
