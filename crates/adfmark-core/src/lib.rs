//! adfmark-core - rich-text document tree and wire serialization
//!
//! This crate provides the document model produced by `adfmark` and its
//! JSON serialization in the shape expected by issue-tracker rich-text
//! fields (`{"type": "doc", "version": 1, "content": [...]}`).
//!
//! # Architecture
//!
//! ```text
//! raw text ──normalize──▶ lines ──blocks──▶ ┌──────────┐
//!                                            │ Document │ ──▶ wire JSON
//!                                            └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use adfmark_core::{Block, Document, Heading, HeadingLevel, Paragraph, TextRun};
//!
//! let doc = Document::new(vec![
//!     Block::Heading(Heading::new(HeadingLevel::Two, "Summary")),
//!     Block::Paragraph(Paragraph::from_runs(vec![
//!         TextRun::plain("This is "),
//!         TextRun::strong("bold"),
//!     ])),
//! ]);
//!
//! let json = adfmark_core::to_json(&doc).unwrap();
//! assert!(json.starts_with(r#"{"type":"doc","version":1"#));
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{Block, BulletList, Document, Heading, HeadingLevel, ListItem, Mark, Paragraph, TextRun};
pub use options::{Options, ParseMode, DEFAULT_ACCEPTANCE_CRITERIA_HEADING};
pub use serialize::{to_json, to_json_pretty, to_value};

/// Error type for document encoding and option validation
#[derive(Debug, thiserror::Error)]
pub enum AdfError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, AdfError>;
