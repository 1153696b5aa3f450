//! Inline formatting: bold spans within one line
//!
//! Only `**bold**` is recognized. Italic and inline-code markers pass
//! through as literal characters.

use adfmark_core::TextRun;

const STRONG_DELIMITER: &str = "**";

/// Split one line into plain and bold runs.
///
/// Spans are non-nested: the first closing `**` after an opening one ends
/// the span. An opening `**` with no closing partner stays literal text.
pub fn format_inline(line: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut pos = 0;

    while let Some(open) = line[pos..].find(STRONG_DELIMITER).map(|i| pos + i) {
        let content_start = open + STRONG_DELIMITER.len();
        let Some(close) = line[content_start..]
            .find(STRONG_DELIMITER)
            .map(|i| content_start + i)
        else {
            break;
        };

        if open > pos {
            runs.push(TextRun::plain(&line[pos..open]));
        }
        runs.push(TextRun::strong(&line[content_start..close]));
        pos = close + STRONG_DELIMITER.len();
    }

    if pos < line.len() {
        runs.push(TextRun::plain(&line[pos..]));
    }

    if runs.is_empty() {
        runs.push(TextRun::plain(line));
    }
    runs
}
