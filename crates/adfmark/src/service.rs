//! AdfService - the main entry point for text conversion.

use adfmark_core::{Block, Document, Options, Paragraph, ParseMode};

use crate::blocks::parse_blocks;
use crate::compose::compose_description;
use crate::normalize::normalize_bounded;
use crate::plain::format_plain;
use crate::Result;

/// Converts operator-authored text into documents and plain text
#[derive(Debug, Clone, Default)]
pub struct AdfService {
    options: Options,
}

impl AdfService {
    /// Create an AdfService with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create an AdfService with custom options
    pub fn with_options(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Convert text to a document
    pub fn convert(&self, text: &str) -> Document {
        let passes = self.options.max_unescape_passes.unwrap_or(text.len());
        let normalized = normalize_bounded(text, passes);

        let blocks = match self.options.mode {
            ParseMode::Blocks => parse_blocks(&normalized),
            ParseMode::SingleParagraph => single_paragraph(&normalized),
        };

        tracing::debug!(mode = ?self.options.mode, blocks = blocks.len(), "converted text");
        Document::new(blocks)
    }

    /// Convert an optional field; absent text yields an empty document
    pub fn convert_field(&self, text: Option<&str>) -> Document {
        text.map(|t| self.convert(t)).unwrap_or_default()
    }

    /// Convert text and encode the document as compact JSON
    pub fn convert_to_json(&self, text: &str) -> Result<String> {
        adfmark_core::to_json(&self.convert(text))
    }

    /// Flatten text for single-line fields
    pub fn plain(&self, text: Option<&str>) -> String {
        text.map(format_plain).unwrap_or_default()
    }

    /// Build a story description from a body and optional acceptance criteria
    pub fn story_description(
        &self,
        description: Option<&str>,
        acceptance_criteria: Option<&str>,
    ) -> Document {
        let composed = compose_description(
            description,
            acceptance_criteria,
            &self.options.acceptance_criteria_heading,
        );
        self.convert(&composed)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }
}

/// Whole text as one unstyled paragraph, markup stripped
fn single_paragraph(text: &str) -> Vec<Block> {
    let flat = format_plain(text);
    if flat.is_empty() {
        return Vec::new();
    }
    vec![Block::Paragraph(Paragraph::plain(flat))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use adfmark_core::{Heading, HeadingLevel, TextRun};

    #[test]
    fn test_empty_text() {
        let service = AdfService::new();
        assert_eq!(service.convert(""), Document::empty());
        assert_eq!(service.convert_field(None), Document::empty());
    }

    #[test]
    fn test_escaped_breaks_split_blocks() {
        let service = AdfService::new();
        let doc = service.convert("## Title\\nBody");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading(Heading::new(HeadingLevel::Two, "Title")),
                Block::Paragraph(Paragraph::plain("Body")),
            ]
        );
    }

    #[test]
    fn test_unescaping_disabled() {
        let options = Options {
            max_unescape_passes: Some(0),
            ..Default::default()
        };
        let service = AdfService::with_options(options).unwrap();
        let doc = service.convert("a\\nb");
        assert_eq!(doc.blocks, vec![Block::Paragraph(Paragraph::plain("a\\nb"))]);
    }

    #[test]
    fn test_single_paragraph_mode() {
        let service = AdfService::with_options(Options::single_paragraph()).unwrap();
        let doc = service.convert("# Title\\n- **one**");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(Paragraph::plain("Title\n• one"))]
        );
    }

    #[test]
    fn test_single_paragraph_mode_blank() {
        let service = AdfService::with_options(Options::single_paragraph()).unwrap();
        assert!(service.convert("  ").is_empty());
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = Options {
            acceptance_criteria_heading: String::new(),
            ..Default::default()
        };
        assert!(AdfService::with_options(options).is_err());
    }

    #[test]
    fn test_plain() {
        let service = AdfService::new();
        assert_eq!(service.plain(Some("**Fix** `login`")), "Fix login");
        assert_eq!(service.plain(None), "");
    }

    #[test]
    fn test_story_description() {
        let service = AdfService::new();
        let doc = service.story_description(Some("As a user"), Some("- **it** works"));
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(
            doc.blocks[1],
            Block::Heading(Heading::new(HeadingLevel::Two, "Acceptance Criteria"))
        );
        let Block::BulletList(list) = &doc.blocks[2] else {
            panic!("expected bullet list, got {:?}", doc.blocks[2]);
        };
        assert_eq!(
            list.items()[0].paragraph.runs(),
            &[TextRun::strong("it"), TextRun::plain(" works")]
        );
    }

    #[test]
    fn test_convert_to_json() {
        let service = AdfService::new();
        let json = service.convert_to_json("hi").unwrap();
        assert_eq!(
            json,
            r#"{"type":"doc","version":1,"content":[{"type":"paragraph","content":[{"type":"text","text":"hi"}]}]}"#
        );
    }
}
