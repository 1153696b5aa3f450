//! # adfmark
//!
//! Convert operator-authored text with lightweight markup into the
//! rich-text document tree used by issue-tracker description and comment
//! fields, or flatten it into plain text for titles.
//!
//! ## Markup
//!
//! - `# ` and `## ` at the start of a line open level-1 and level-2 headings
//! - `- ` at the start of a line is a bullet item; consecutive items form one list
//! - `**bold**` inside paragraphs and bullet items becomes a strong run
//! - literal `\n` sequences, escaped any number of times, are line breaks
//!
//! Every transform is total: malformed markup degrades to literal text.
//!
//! ## Example
//!
//! ```rust
//! use adfmark::{AdfService, Block};
//!
//! let service = AdfService::new();
//! let doc = service.convert("## Steps\n- **open** the app\n- log in");
//!
//! assert_eq!(doc.blocks.len(), 2);
//! assert!(matches!(doc.blocks[1], Block::BulletList(_)));
//! assert_eq!(service.plain(Some("**Fix** `login`")), "Fix login");
//! ```

pub mod blocks;
mod compose;
pub mod inline;
pub mod normalize;
pub mod plain;
mod service;

pub use adfmark_core::{
    to_json, to_json_pretty, to_value, AdfError, Block, BulletList, Document, Heading,
    HeadingLevel, ListItem, Mark, Options, Paragraph, ParseMode, Result, TextRun,
    DEFAULT_ACCEPTANCE_CRITERIA_HEADING,
};
pub use compose::compose_description;
pub use inline::format_inline;
pub use normalize::{normalize, normalize_bounded};
pub use plain::format_plain;
pub use service::AdfService;

/// Convert an optional field with default options
pub fn to_document(text: Option<&str>) -> Document {
    AdfService::new().convert_field(text)
}
