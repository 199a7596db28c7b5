//! # View Sync Service
//!
//! Reconciles the document model into a retained view tree the way an
//! editable surface must be driven: writes happen only when the model and
//! the surface disagree, so an in-place caret never gets clobbered by a
//! redundant text write.
//!
//! ## Philosophy
//!
//! - **Write-only-if-different**: a node's text is rewritten only when it
//!   differs from the model; `mutation_count` records actual writes
//! - **Explicit emptiness**: hosts ask `is_empty`, they never re-derive it
//!   from the text (an editable region may hold residual markup)
//! - **Focused placeholder**: placeholder text shows only on a block that
//!   is both empty and focused
//!
//! ## Non-Goals
//!
//! - Rendering or layout
//! - Event handling (keys flow through the document, not the view)

use core_types::BlockId;
use editor_core::{BlockType, Document, TextRun};
use serde::{Deserialize, Serialize};

/// Retained view state for one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewNode {
    pub id: BlockId,
    pub kind: BlockType,
    /// Last text written to the surface
    pub text: String,
    /// Formatted runs backing the text
    pub runs: Vec<TextRun>,
    /// Authoritative emptiness flag
    pub is_empty: bool,
    /// True only when the block is empty and currently focused
    pub placeholder_visible: bool,
    pub checked: Option<bool>,
    /// Number of text writes this node has absorbed
    pub mutation_count: u64,
}

/// The retained view tree, ordered to match the document
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    nodes: Vec<ViewNode>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in document order
    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    pub fn get(&self, id: &BlockId) -> Option<&ViewNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Reconciles the tree against the document
    ///
    /// Nodes are created, dropped and reordered to mirror the block
    /// sequence. A surviving node's text is rewritten only when it differs
    /// from the model's plain text; kind, runs and flags are always brought
    /// current since they carry no caret.
    pub fn sync(&mut self, doc: &Document, focused: Option<&BlockId>) {
        let mut next: Vec<ViewNode> = Vec::with_capacity(doc.len());

        for block in doc.blocks() {
            let plain = block.content();
            let is_empty = block.is_empty();
            let placeholder_visible = is_empty && focused == Some(&block.id);

            let node = match self.nodes.iter().find(|n| n.id == block.id) {
                Some(existing) => {
                    let mut node = existing.clone();
                    if node.text != plain {
                        node.text = plain;
                        node.mutation_count += 1;
                    }
                    node.kind = block.kind;
                    node.runs = block.text.runs().to_vec();
                    node.is_empty = is_empty;
                    node.placeholder_visible = placeholder_visible;
                    node.checked = block.checked;
                    node
                }
                None => ViewNode {
                    id: block.id,
                    kind: block.kind,
                    text: plain,
                    runs: block.text.runs().to_vec(),
                    is_empty,
                    placeholder_visible,
                    checked: block.checked,
                    mutation_count: 1,
                },
            };
            next.push(node);
        }

        self.nodes = next;
    }

    /// Sum of all nodes' mutation counts
    pub fn total_mutations(&self) -> u64 {
        self.nodes.iter().map(|n| n.mutation_count).sum()
    }
}
