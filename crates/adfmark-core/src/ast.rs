//! Rich-text document tree
//!
//! Every node is an owned value built fresh per conversion. The tree is
//! strict ownership: a `Document` owns its blocks, lists own their items,
//! and items and paragraphs own their runs.

use std::collections::BTreeSet;

/// Root node of a converted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Always [`Document::VERSION`]
    pub version: u32,
    pub blocks: Vec<Block>,
}

impl Document {
    pub const VERSION: u32 = 1;

    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            version: Self::VERSION,
            blocks,
        }
    }

    /// A document with no blocks, produced for empty or blank input
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// A top-level structural unit of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    BulletList(BulletList),
    Paragraph(Paragraph),
}

/// Heading depth; only the two outermost levels are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    One,
    Two,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
        }
    }
}

/// Heading with exactly one unstyled run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub run: TextRun,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            run: TextRun::plain(text),
        }
    }
}

/// Consecutive bullet items. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletList {
    items: Vec<ListItem>,
}

impl BulletList {
    /// Open a list with its first item
    pub fn new(first: ListItem) -> Self {
        Self { items: vec![first] }
    }

    pub fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A list item wrapping exactly one paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub paragraph: Paragraph,
}

impl ListItem {
    pub fn new(paragraph: Paragraph) -> Self {
        Self { paragraph }
    }

    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self::new(Paragraph::from_runs(runs))
    }
}

/// A paragraph of inline runs. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    runs: Vec<TextRun>,
}

impl Paragraph {
    /// Build a paragraph from runs; an empty run list becomes a single
    /// empty plain run so the paragraph is never contentless.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        if runs.is_empty() {
            return Self::plain("");
        }
        Self { runs }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
        }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<TextRun> {
        self.runs
    }
}

/// Structural style annotation on a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Bold
    Strong,
}

impl Mark {
    /// Name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Strong => "strong",
        }
    }
}

/// An inline span of text with its marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub marks: BTreeSet<Mark>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: BTreeSet::new(),
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::plain(text).with_mark(Mark::Strong)
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.insert(mark);
        self
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks.contains(&mark)
    }

    pub fn is_plain(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_version_one() {
        let doc = Document::default();
        assert_eq!(doc.version, 1);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_paragraph_never_empty() {
        let paragraph = Paragraph::from_runs(Vec::new());
        assert_eq!(paragraph.runs(), &[TextRun::plain("")]);
    }

    #[test]
    fn test_bullet_list_accumulates() {
        let mut list = BulletList::new(ListItem::from_runs(vec![TextRun::plain("a")]));
        list.push(ListItem::from_runs(vec![TextRun::plain("b")]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[1].paragraph.runs()[0].text, "b");
    }

    #[test]
    fn test_strong_run_marks() {
        let run = TextRun::strong("bold").with_mark(Mark::Strong);
        assert!(run.has_mark(Mark::Strong));
        assert_eq!(run.marks.len(), 1);
        assert!(TextRun::plain("x").is_plain());
    }

    #[test]
    fn test_heading_level_numbers() {
        assert_eq!(HeadingLevel::One.as_u8(), 1);
        assert_eq!(HeadingLevel::Two.as_u8(), 2);
    }
}
