//! Plain-text formatting for flat fields such as titles and summaries.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- ").unwrap());
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## ").unwrap());
static HEADING_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# ").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Glyph that replaces a leading `- ` bullet marker
pub const BULLET_GLYPH: &str = "• ";

/// Strip bold, italic, heading and code markup, turn bullets into glyphs,
/// and trim the result.
///
/// Substitutions run in a fixed order. Bold is stripped before italic.
pub fn format_plain(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = BOLD.replace_all(text, "${1}");
    let text = ITALIC.replace_all(&text, "${1}");
    let text = BULLET.replace_all(&text, BULLET_GLYPH);
    let text = HEADING_2.replace_all(&text, "");
    let text = HEADING_1.replace_all(&text, "");
    let text = CODE.replace_all(&text, "${1}");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_inline_markup() {
        assert_eq!(
            format_plain("**Bold** and *italic* and `code`"),
            "Bold and italic and code"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_plain(""), "");
        assert_eq!(format_plain("   \n "), "");
    }

    #[test]
    fn test_bullets_become_glyphs() {
        assert_eq!(format_plain("- one\n- two"), "• one\n• two");
    }

    #[test]
    fn test_heading_markers_removed() {
        assert_eq!(format_plain("# Title\n## Sub"), "Title\nSub");
    }

    #[test]
    fn test_only_line_start_markers() {
        assert_eq!(format_plain("a - b # c"), "a - b # c");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(format_plain("  **Fix** login  "), "Fix login");
    }

    #[test]
    fn test_unpaired_markers_kept() {
        assert_eq!(format_plain("2 * 3 = `6"), "2 * 3 = `6");
    }

    #[test]
    fn test_spans_do_not_cross_lines() {
        assert_eq!(format_plain("*a\nb*"), "*a\nb*");
    }
}
