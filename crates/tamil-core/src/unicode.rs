//! Character-level Unicode classification for Tamil text.

/// Dotted circle, the conventional base for showing a lone combining sign.
pub const DOTTED_CIRCLE: char = '\u{25CC}';

/// Check the full Tamil block (U+0B80..U+0BFF). Includes unassigned
/// codepoints, which never appear in mapping tables.
pub fn is_tamil(c: char) -> bool {
    ('\u{0B80}'..='\u{0BFF}').contains(&c)
}

/// Dependent vowel signs (U+0BBE..U+0BCC), the pulli (U+0BCD) and the
/// au length mark (U+0BD7).
pub fn is_tamil_sign(c: char) -> bool {
    ('\u{0BBE}'..='\u{0BCD}').contains(&c) || c == '\u{0BD7}'
}

/// Form of `glyph` suitable for display on its own: a glyph starting with a
/// combining sign is drawn on a dotted circle.
pub fn display_form(glyph: &str) -> String {
    match glyph.chars().next() {
        Some(c) if is_tamil_sign(c) => format!("{DOTTED_CIRCLE}{glyph}"),
        _ => glyph.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_tamil('க'));
        assert!(is_tamil('்'));
        assert!(!is_tamil('k'));
        assert!(!is_tamil('あ'));
        assert!(is_tamil_sign('ா'));
        assert!(is_tamil_sign('ௌ'));
        assert!(is_tamil_sign('்'));
        assert!(!is_tamil_sign('க'));
        assert!(!is_tamil_sign('அ'));
    }

    #[test]
    fn test_display_form() {
        assert_eq!(display_form("ா"), "◌ா");
        assert_eq!(display_form("்"), "◌்");
        assert_eq!(display_form("க"), "க");
        assert_eq!(display_form(""), "");
    }
}
