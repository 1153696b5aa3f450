//! Escaped line-break normalization
//!
//! Text reaching the converter may have been escaped any number of times
//! by transport layers, so `\n`, `\\n`, `\\\n` ... all stand for a real
//! line break.

use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPED_LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\+n").unwrap());

/// Replace every run of backslashes followed by `n` with a real line break.
///
/// Passes are bounded by the input length.
pub fn normalize(text: &str) -> String {
    normalize_bounded(text, text.len())
}

/// Like [`normalize`] with an explicit cap on the number of passes.
pub fn normalize_bounded(text: &str, max_passes: usize) -> String {
    let mut normalized = text.to_string();
    let mut passes = 0;

    while passes < max_passes && normalized.contains("\\n") {
        normalized = ESCAPED_LINE_BREAK
            .replace_all(&normalized, "\n")
            .into_owned();
        passes += 1;
    }

    if passes > 0 {
        tracing::trace!(passes, "unescaped line breaks");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_escape() {
        assert_eq!(normalize("a\\nb"), "a\nb");
    }

    #[test]
    fn test_double_escape() {
        assert_eq!(normalize("a\\\\nb"), "a\nb");
    }

    #[test]
    fn test_deep_escape_collapses_to_one_break() {
        assert_eq!(normalize("a\\\\\\\\\\nb\\nc"), "a\nb\nc");
    }

    #[test]
    fn test_real_line_breaks_untouched() {
        assert_eq!(normalize("a\nb\n\nc"), "a\nb\n\nc");
    }

    #[test]
    fn test_other_escapes_untouched() {
        assert_eq!(normalize("C:\\temp \\t \\\\"), "C:\\temp \\t \\\\");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("x\\\\ny\\nz");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_zero_passes_leaves_text() {
        assert_eq!(normalize_bounded("a\\nb", 0), "a\\nb");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }
}
