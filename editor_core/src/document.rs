//! Document state machine
//!
//! Owns the ordered block sequence and every rule that mutates it: insert,
//! remove, reorder, content/type swaps, markdown shortcuts, slash-command
//! detection and key navigation.

use crate::{
    block::{Block, BlockType},
    key::{CaretState, EditorKey},
    markdown::shortcut_for,
    rich_text::Mark,
    snapshot::{BlockSnapshot, DocumentSnapshot},
};
use core_types::BlockId;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Open slash palette, anchored to the block that typed `/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashState {
    pub block: BlockId,
    /// Live filter query: the text after the last `/`
    pub query: String,
}

/// Where focus must land after a structural edit
///
/// Set by the controller, consumed and cleared by the view layer via
/// `Document::take_focus_intent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusIntent {
    pub block: BlockId,
    pub offset: usize,
}

/// Outcome from applying a key to the focused block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Key had no structural meaning here
    Ignored,
    /// A new block was inserted after the focused one
    Inserted { block: BlockId },
    /// The focused block was removed
    Removed { focus: BlockId },
    /// The focused block changed type
    Converted { kind: BlockType },
    /// Focus moved to an adjacent block
    FocusMoved { block: BlockId },
    /// An open slash palette was closed
    PaletteClosed,
}

/// The block sequence controller
///
/// Invariants:
/// - the sequence never becomes empty
/// - block ids are unique and never reused
/// - reorder preserves the id multiset
pub struct Document {
    blocks: Vec<Block>,
    slash: Option<SlashState>,
    pending_focus: Option<FocusIntent>,
    revision: u64,
}

impl Document {
    /// Creates a document holding a single empty paragraph
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::new(BlockType::Paragraph)],
            slash: None,
            pending_focus: None,
            revision: 0,
        }
    }

    /// Replaces the whole sequence (menu navigation path)
    ///
    /// Uncommitted edits to the previous content are discarded. An empty
    /// input seeds one empty paragraph so the non-empty invariant holds.
    pub fn load(&mut self, blocks: Vec<Block>) {
        self.blocks = if blocks.is_empty() {
            vec![Block::new(BlockType::Paragraph)]
        } else {
            blocks
        };
        self.slash = None;
        self.pending_focus = None;
        self.revision += 1;
    }

    // Accessors

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        // The sequence invariant makes this always false; kept for API shape
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == *id)
    }

    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == *id)
    }

    pub fn block_ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    pub fn slash_state(&self) -> Option<&SlashState> {
        self.slash.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Takes and clears the pending focus intent
    pub fn take_focus_intent(&mut self) -> Option<FocusIntent> {
        self.pending_focus.take()
    }

    // Mutations

    /// Inserts a new empty block of `kind` right after `anchor`
    ///
    /// Returns the new block's id, or `None` when the anchor is unknown.
    /// The new block receives the focus intent.
    pub fn insert_after(&mut self, anchor: &BlockId, kind: BlockType) -> Option<BlockId> {
        let index = self.index_of(anchor)?;
        let block = Block::new(kind);
        let id = block.id;
        self.blocks.insert(index + 1, block);
        self.pending_focus = Some(FocusIntent {
            block: id,
            offset: 0,
        });
        self.revision += 1;
        Some(id)
    }

    /// Replaces a block's plain text and runs slash-command detection
    ///
    /// Text ending in `/` opens the palette for that block with an empty
    /// query. While the palette is open for the block, the text after the
    /// last `/` becomes the filter query; removing every `/` closes it.
    pub fn set_content(&mut self, id: &BlockId, text: &str) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == *id) else {
            return false;
        };
        block.text.set_plain(text);

        if text.ends_with('/') {
            self.slash = Some(SlashState {
                block: *id,
                query: String::new(),
            });
        } else if let Some(state) = &mut self.slash {
            if state.block == *id {
                match text.rfind('/') {
                    Some(idx) => state.query = text[idx + 1..].to_string(),
                    None => self.slash = None,
                }
            }
        }

        self.revision += 1;
        true
    }

    /// Swaps a block's type; closes an open slash palette as a side effect
    pub fn set_kind(&mut self, id: &BlockId, kind: BlockType) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == *id) else {
            return false;
        };
        block.kind = kind;
        self.slash = None;
        self.revision += 1;
        true
    }

    /// Removes a block; a no-op when only one block remains
    ///
    /// Focus shifts to the preceding block, or to the new first block when
    /// the removed block was first.
    pub fn remove(&mut self, id: &BlockId) -> bool {
        if self.blocks.len() <= 1 {
            return false;
        }
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.blocks.remove(index);

        let focus = if index > 0 {
            &self.blocks[index - 1]
        } else {
            &self.blocks[0]
        };
        self.pending_focus = Some(FocusIntent {
            block: focus.id,
            offset: focus.text.char_len(),
        });
        self.revision += 1;
        true
    }

    /// Moves `source` to `target`'s position (array-move, not a swap)
    ///
    /// Silently ignored when either id is unknown or the ids are equal.
    pub fn reorder(&mut self, source: &BlockId, target: &BlockId) {
        if source == target {
            return;
        }
        let (Some(from), Some(to)) = (self.index_of(source), self.index_of(target)) else {
            return;
        };
        let moved = self.blocks.remove(from);
        self.blocks.insert(to, moved);
        self.revision += 1;
    }

    /// Toggles the checkbox of a `TodoList` block
    pub fn toggle_checked(&mut self, id: &BlockId) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == *id) else {
            return false;
        };
        if block.kind != BlockType::TodoList {
            return false;
        }
        block.checked = Some(!block.checked.unwrap_or(false));
        self.revision += 1;
        true
    }

    /// Applies an inline mark over a character range of a block
    pub fn apply_mark(&mut self, id: &BlockId, range: Range<usize>, mark: &Mark) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == *id) else {
            return false;
        };
        block.text.apply_mark(range, mark);
        self.revision += 1;
        true
    }

    /// Confirms an inline slash selection: converts the triggering block
    ///
    /// Strips the `/query` suffix from the content, swaps the type, and
    /// closes the palette. Returns the converted block's id.
    pub fn confirm_slash(&mut self, kind: BlockType) -> Option<BlockId> {
        let state = self.slash.take()?;
        let block = self.blocks.iter_mut().find(|b| b.id == state.block)?;

        let content = block.text.plain();
        let stripped = match content.rfind('/') {
            Some(idx) => &content[..idx],
            None => content.as_str(),
        };
        block.text.set_plain(stripped);
        block.kind = kind;

        let id = block.id;
        let offset = block.text.char_len();
        self.pending_focus = Some(FocusIntent { block: id, offset });
        self.revision += 1;
        Some(id)
    }

    /// Closes an open slash palette without other side effects
    pub fn dismiss_slash(&mut self) {
        self.slash = None;
    }

    /// Applies a key event to the given block and returns the outcome
    pub fn apply_key(&mut self, id: &BlockId, key: EditorKey, caret: CaretState) -> EditOutcome {
        let Some(index) = self.index_of(id) else {
            return EditOutcome::Ignored;
        };

        match key {
            EditorKey::Space => self.handle_space(id),
            EditorKey::Enter => self.handle_enter(id),
            EditorKey::Backspace => self.handle_backspace(id, index, caret),
            EditorKey::ArrowUp => {
                if index > 0 {
                    self.focus_block(index - 1)
                } else {
                    EditOutcome::Ignored
                }
            }
            EditorKey::ArrowDown => {
                if index + 1 < self.blocks.len() {
                    self.focus_block(index + 1)
                } else {
                    EditOutcome::Ignored
                }
            }
            EditorKey::Escape => {
                if self.slash.is_some() {
                    self.slash = None;
                    EditOutcome::PaletteClosed
                } else {
                    EditOutcome::Ignored
                }
            }
        }
    }

    // Key handlers

    fn handle_space(&mut self, id: &BlockId) -> EditOutcome {
        let Some(block) = self.get(id) else {
            return EditOutcome::Ignored;
        };
        let Some(kind) = shortcut_for(&block.content()) else {
            return EditOutcome::Ignored;
        };
        // The trigger text is consumed; the space is never committed
        self.set_kind(id, kind);
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == *id) {
            block.text.set_plain("");
        }
        self.pending_focus = Some(FocusIntent {
            block: *id,
            offset: 0,
        });
        EditOutcome::Converted { kind }
    }

    fn handle_enter(&mut self, id: &BlockId) -> EditOutcome {
        let Some(block) = self.get(id) else {
            return EditOutcome::Ignored;
        };
        // An empty typed block demotes instead of inserting; a single Enter
        // never does both
        if block.is_empty() && block.kind != BlockType::Paragraph {
            self.set_kind(id, BlockType::Paragraph);
            return EditOutcome::Converted {
                kind: BlockType::Paragraph,
            };
        }
        match self.insert_after(id, BlockType::Paragraph) {
            Some(block) => EditOutcome::Inserted { block },
            None => EditOutcome::Ignored,
        }
    }

    fn handle_backspace(&mut self, id: &BlockId, index: usize, caret: CaretState) -> EditOutcome {
        if !caret.at_start() {
            return EditOutcome::Ignored;
        }
        let Some(block) = self.get(id) else {
            return EditOutcome::Ignored;
        };
        if !block.is_empty() {
            return EditOutcome::Ignored;
        }
        // Typed formatting demotes first; a later Backspace deletes
        if block.kind != BlockType::Paragraph {
            self.set_kind(id, BlockType::Paragraph);
            return EditOutcome::Converted {
                kind: BlockType::Paragraph,
            };
        }
        if index == 0 {
            return EditOutcome::Ignored;
        }
        if self.remove(id) {
            let focus = self
                .pending_focus
                .as_ref()
                .map(|intent| intent.block)
                .unwrap_or_else(|| self.blocks[0].id);
            EditOutcome::Removed { focus }
        } else {
            EditOutcome::Ignored
        }
    }

    fn focus_block(&mut self, index: usize) -> EditOutcome {
        let block = &self.blocks[index];
        let intent = FocusIntent {
            block: block.id,
            offset: 0,
        };
        self.pending_focus = Some(intent);
        EditOutcome::FocusMoved { block: block.id }
    }

    /// Complete document snapshot for parity testing
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            blocks: self
                .blocks
                .iter()
                .map(|b| BlockSnapshot {
                    id: b.id.to_string(),
                    kind: b.kind,
                    content: b.content(),
                    checked: b.checked,
                })
                .collect(),
            slash: self
                .slash
                .as_ref()
                .map(|s| (s.block.to_string(), s.query.clone())),
            focus: self
                .pending_focus
                .as_ref()
                .map(|f| (f.block.to_string(), f.offset)),
            revision: self.revision,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
