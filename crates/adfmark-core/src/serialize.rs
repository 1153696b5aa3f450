//! Wire serialization
//!
//! Encodes the document tree as the rich-text JSON shape consumed by the
//! issue tracker. Field order is fixed: `type` first, then attributes,
//! then `content`.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::ast::{Block, BulletList, Document, Heading, ListItem, Mark, Paragraph, TextRun};
use crate::Result;

/// Encode a document as compact JSON
pub fn to_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string(document)?)
}

/// Encode a document as indented JSON
pub fn to_json_pretty(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Encode a document as a JSON value, ready to embed in a request payload
pub fn to_value(document: &Document) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(document)?)
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("Document", 3)?;
        node.serialize_field("type", "doc")?;
        node.serialize_field("version", &self.version)?;
        node.serialize_field("content", &self.blocks)?;
        node.end()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Block::Heading(heading) => heading.serialize(serializer),
            Block::BulletList(list) => list.serialize(serializer),
            Block::Paragraph(paragraph) => paragraph.serialize(serializer),
        }
    }
}

#[derive(Serialize)]
struct HeadingAttrs {
    level: u8,
}

impl Serialize for Heading {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("Heading", 3)?;
        node.serialize_field("type", "heading")?;
        node.serialize_field(
            "attrs",
            &HeadingAttrs {
                level: self.level.as_u8(),
            },
        )?;
        node.serialize_field("content", std::slice::from_ref(&self.run))?;
        node.end()
    }
}

impl Serialize for BulletList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("BulletList", 2)?;
        node.serialize_field("type", "bulletList")?;
        node.serialize_field("content", self.items())?;
        node.end()
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("ListItem", 2)?;
        node.serialize_field("type", "listItem")?;
        node.serialize_field("content", std::slice::from_ref(&self.paragraph))?;
        node.end()
    }
}

impl Serialize for Paragraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("Paragraph", 2)?;
        node.serialize_field("type", "paragraph")?;
        node.serialize_field("content", self.runs())?;
        node.end()
    }
}

impl Serialize for TextRun {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // Plain runs carry no `marks` key at all
        let len = if self.marks.is_empty() { 2 } else { 3 };
        let mut node = serializer.serialize_struct("TextRun", len)?;
        node.serialize_field("type", "text")?;
        node.serialize_field("text", &self.text)?;
        if !self.marks.is_empty() {
            node.serialize_field("marks", &self.marks)?;
        }
        node.end()
    }
}

impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("Mark", 1)?;
        node.serialize_field("type", self.as_str())?;
        node.end()
    }
}
