pub mod date;

pub use date::*;

use html_escape::decode_html_entities;

/// Clean and normalize text by removing extra whitespace and decoding HTML entities
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs_to_single_spaces() {
        assert_eq!(clean_text(" a \n  b "), "a b");
        assert_eq!(clean_text("one\ttwo\r\nthree"), "one two three");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
    }

    #[test]
    fn decodes_html_entities() {
        assert_eq!(clean_text("Sales &amp;  Marketing"), "Sales & Marketing");
    }
}
