//! Block parsing
//!
//! Splits normalized text into lines and groups them into headings,
//! bullet lists and paragraphs.

use adfmark_core::{Block, BulletList, Heading, HeadingLevel, ListItem, Paragraph};

use crate::inline::format_inline;

/// Checked before [`HEADING_1_MARKER`].
pub const HEADING_2_MARKER: &str = "## ";
pub const HEADING_1_MARKER: &str = "# ";
pub const BULLET_MARKER: &str = "- ";

/// Parse normalized text into blocks
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();

    for line in text.split('\n') {
        builder.push_line(line.trim());
    }

    builder.finish()
}

/// Accumulates blocks, holding the bullet list currently being extended
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    open_list: Option<BulletList>,
}

impl BlockBuilder {
    fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.close_list();
        } else if let Some(rest) = line.strip_prefix(HEADING_2_MARKER) {
            self.push_block(Block::Heading(Heading::new(HeadingLevel::Two, rest.trim())));
        } else if let Some(rest) = line.strip_prefix(HEADING_1_MARKER) {
            self.push_block(Block::Heading(Heading::new(HeadingLevel::One, rest.trim())));
        } else if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
            let item = ListItem::from_runs(format_inline(rest.trim()));
            match &mut self.open_list {
                Some(list) => list.push(item),
                None => self.open_list = Some(BulletList::new(item)),
            }
        } else {
            self.push_block(Block::Paragraph(Paragraph::from_runs(format_inline(line))));
        }
    }

    /// Append a non-list block, flushing any open list first
    fn push_block(&mut self, block: Block) {
        self.close_list();
        self.blocks.push(block);
    }

    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take() {
            self.blocks.push(Block::BulletList(list));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_list();
        self.blocks
    }
}
