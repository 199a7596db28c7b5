//! # Slash Menu Service
//!
//! The block-type palette: a filterable catalog of insertable block types,
//! opened either by typing `/` inside a block or from a block's add button.
//!
//! ## Philosophy
//!
//! - **Deterministic**: the palette is a pure view over a fixed catalog
//! - **Invocation-aware**: the same selection converts the typing block or
//!   inserts after the anchor, depending on how the palette was opened
//! - **Testable**: filtering and resolution carry no view state
//!
//! ## Non-Goals
//!
//! - Keyboard highlight tracking (the host owns list selection)
//! - User-extensible catalogs

use core_types::BlockId;
use editor_core::BlockType;
use serde::{Deserialize, Serialize};

/// One selectable palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub kind: BlockType,
    pub label: &'static str,
    pub description: &'static str,
}

/// The fixed catalog, in display order
pub const CATALOG: &[MenuEntry] = &[
    MenuEntry {
        kind: BlockType::Paragraph,
        label: "Text",
        description: "Just start writing with plain text.",
    },
    MenuEntry {
        kind: BlockType::Heading1,
        label: "Heading 1",
        description: "Big section heading.",
    },
    MenuEntry {
        kind: BlockType::Heading2,
        label: "Heading 2",
        description: "Medium section heading.",
    },
    MenuEntry {
        kind: BlockType::Heading3,
        label: "Heading 3",
        description: "Small section heading.",
    },
    MenuEntry {
        kind: BlockType::BulletList,
        label: "Bulleted list",
        description: "Create a simple bulleted list.",
    },
    MenuEntry {
        kind: BlockType::NumberedList,
        label: "Numbered list",
        description: "Create a list with numbering.",
    },
    MenuEntry {
        kind: BlockType::TodoList,
        label: "To-do list",
        description: "Track tasks with a to-do list.",
    },
    MenuEntry {
        kind: BlockType::Quote,
        label: "Quote",
        description: "Capture a quote.",
    },
    MenuEntry {
        kind: BlockType::Divider,
        label: "Divider",
        description: "Visually divide blocks.",
    },
    MenuEntry {
        kind: BlockType::Image,
        label: "Image",
        description: "Upload or embed with a link.",
    },
];

/// How the palette was opened
///
/// Determines what confirming a selection does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Invocation {
    /// Typed `/` inside a block: selection converts that block
    Inline { block: BlockId },
    /// Opened from a block's add button: selection inserts after the anchor
    Button { anchor: BlockId },
}

/// The structural edit a confirmed selection maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlashAction {
    /// Convert `block` in place and strip the typed `/query` suffix
    ConvertBlock { block: BlockId, kind: BlockType },
    /// Insert a new empty block of `kind` after `anchor`
    InsertBlock { anchor: BlockId, kind: BlockType },
}

/// The slash menu: catalog plus filter and resolution rules
pub struct SlashMenu;

impl SlashMenu {
    /// Every catalog entry, in display order
    pub fn entries() -> &'static [MenuEntry] {
        CATALOG
    }

    /// Filters the catalog by case-insensitive substring match
    ///
    /// An entry matches when the query appears in its label or description.
    /// The empty query returns the full catalog.
    pub fn filter(query: &str) -> Vec<&'static MenuEntry> {
        let query = query.to_lowercase();
        CATALOG
            .iter()
            .filter(|entry| {
                entry.label.to_lowercase().contains(&query)
                    || entry.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Maps a confirmed selection to the structural edit it implies
    pub fn resolve(invocation: Invocation, kind: BlockType) -> SlashAction {
        match invocation {
            Invocation::Inline { block } => SlashAction::ConvertBlock { block, kind },
            Invocation::Button { anchor } => SlashAction::InsertBlock { anchor, kind },
        }
    }
}
