//! Configuration options for text conversion

use crate::{AdfError, Result};

/// Heading label used when acceptance criteria are appended to a description
pub const DEFAULT_ACCEPTANCE_CRITERIA_HEADING: &str = "Acceptance Criteria";

/// How raw text is turned into blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Recognize headings, bullet lists and bold runs
    #[default]
    Blocks,
    /// Strip markup and emit the whole text as one paragraph
    SingleParagraph,
}

/// Options for text conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Block parsing mode
    pub mode: ParseMode,

    /// Upper bound on escaped line-break unescaping passes.
    /// `None` bounds the passes by the input length.
    pub max_unescape_passes: Option<usize>,

    /// Heading placed above appended acceptance criteria
    pub acceptance_criteria_heading: String,
}

impl Options {
    /// Options for the simplified single-paragraph builder
    pub fn single_paragraph() -> Self {
        Self {
            mode: ParseMode::SingleParagraph,
            ..Self::default()
        }
    }

    /// Check option values that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        let heading = self.acceptance_criteria_heading.trim();
        if heading.is_empty() {
            return Err(AdfError::InvalidOptions(
                "acceptance criteria heading must not be blank".to_string(),
            ));
        }
        if heading.contains('\n') {
            return Err(AdfError::InvalidOptions(
                "acceptance criteria heading must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: ParseMode::Blocks,
            max_unescape_passes: None,
            acceptance_criteria_heading: DEFAULT_ACCEPTANCE_CRITERIA_HEADING.to_string(),
        }
    }
}
