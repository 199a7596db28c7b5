//! Host-independent key events for the editor

use serde::{Deserialize, Serialize};

/// Key event routed to the focused block
///
/// Only the keys with structural meaning appear here; plain character input
/// reaches the document through `Document::set_content` after the host's
/// editable region has applied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorKey {
    /// Insert a block, or demote an empty typed block to paragraph
    Enter,
    /// Delete or demote at the start of a block
    Backspace,
    /// Move focus to the previous block
    ArrowUp,
    /// Move focus to the next block
    ArrowDown,
    /// Close an open slash palette
    Escape,
    /// Evaluate markdown shortcuts against the current text
    Space,
}

/// Caret position inside the focused block at the time of a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaretState {
    /// Character offset of the caret
    pub offset: usize,
    /// Whether a non-empty selection exists
    pub has_selection: bool,
}

impl CaretState {
    /// Collapsed caret at the given offset
    pub const fn collapsed(offset: usize) -> Self {
        Self {
            offset,
            has_selection: false,
        }
    }

    /// Collapsed caret at the start of the block
    pub const fn start() -> Self {
        Self::collapsed(0)
    }

    /// True when the caret is a collapsed selection at offset zero
    pub fn at_start(&self) -> bool {
        self.offset == 0 && !self.has_selection
    }
}
