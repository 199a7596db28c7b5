//! Block model: the unit of editable content

use crate::rich_text::RichText;
use core_types::BlockId;
use serde::{Deserialize, Serialize};

/// Closed enumeration of block types
///
/// Every variant carries its own rendering/behavior contract in the view
/// layer. The structural model is flat: `ToggleList` and `Page` exist as
/// types but no tree nesting is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletList,
    NumberedList,
    TodoList,
    ToggleList,
    Page,
    LinkToPage,
    Callout,
    Quote,
    CodeBlock,
    Table,
    Image,
    Divider,
}

impl BlockType {
    /// Stable wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading1 => "heading1",
            BlockType::Heading2 => "heading2",
            BlockType::Heading3 => "heading3",
            BlockType::BulletList => "bulletList",
            BlockType::NumberedList => "numberedList",
            BlockType::TodoList => "todoList",
            BlockType::ToggleList => "toggleList",
            BlockType::Page => "page",
            BlockType::LinkToPage => "linkToPage",
            BlockType::Callout => "callout",
            BlockType::Quote => "quote",
            BlockType::CodeBlock => "codeBlock",
            BlockType::Table => "table",
            BlockType::Image => "image",
            BlockType::Divider => "divider",
        }
    }

    /// True for types whose text region is editable
    ///
    /// `Divider` renders a rule and `Image` a placeholder; neither carries
    /// text content.
    pub fn has_text(&self) -> bool {
        !matches!(self, BlockType::Divider | BlockType::Image)
    }
}

/// A single content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identity, also the view correlation key
    pub id: BlockId,
    pub kind: BlockType,
    /// Rich text content; unused for `Divider`/`Image`
    pub text: RichText,
    /// Checkbox state, meaningful only for `TodoList`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Nesting depth; declared but consumed by no transform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl Block {
    /// Creates an empty block of the given type
    pub fn new(kind: BlockType) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            text: RichText::new(),
            checked: None,
            level: None,
        }
    }

    /// Creates a block with plain text content
    pub fn with_text(kind: BlockType, text: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            text: RichText::from_plain(text),
            checked: None,
            level: None,
        }
    }

    /// Plain text content of the block
    pub fn content(&self) -> String {
        self.text.plain()
    }

    /// True when the block has no text content
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_is_empty_with_fresh_id() {
        let a = Block::new(BlockType::Paragraph);
        let b = Block::new(BlockType::Paragraph);
        assert!(a.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.checked.is_none());
    }

    #[test]
    fn test_with_text() {
        let block = Block::with_text(BlockType::Quote, "stay hungry");
        assert_eq!(block.kind, BlockType::Quote);
        assert_eq!(block.content(), "stay hungry");
    }

    #[test]
    fn test_type_wire_names() {
        assert_eq!(BlockType::Heading2.as_str(), "heading2");
        assert_eq!(BlockType::NumberedList.as_str(), "numberedList");
        assert_eq!(BlockType::Divider.as_str(), "divider");
    }

    #[test]
    fn test_text_bearing_types() {
        assert!(BlockType::Paragraph.has_text());
        assert!(BlockType::TodoList.has_text());
        assert!(!BlockType::Divider.has_text());
        assert!(!BlockType::Image.has_text());
    }

    #[test]
    fn test_block_serde_uses_camel_case_types() {
        let block = Block::new(BlockType::BulletList);
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"bulletList\""));
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
