//! # Editor Core
//!
//! The block editor's state model: an ordered sequence of typed content
//! blocks plus the rules that mutate it.
//!
//! ## Philosophy
//!
//! - **Deterministic**: same input trace => same document state
//! - **Headless**: no rendering, no DOM; hosts decide presentation
//! - **Explicit focus**: structural edits record a focus intent that the
//!   view layer consumes, never an ambient side effect
//! - **Model owns formatting**: inline marks live in the block's rich text
//!   runs, so a re-render from the model loses nothing
//!
//! ## Design
//!
//! The core provides:
//! - `Document`: the block sequence controller
//! - `EditOutcome`: structured results from key handling
//! - `DocumentSnapshot`: deterministic state for parity testing
//! - Markdown shortcut rules and the slash-command detection state

pub mod block;
pub mod document;
pub mod key;
pub mod markdown;
pub mod rich_text;
pub mod snapshot;

pub use block::{Block, BlockType};
pub use document::{Document, EditOutcome, FocusIntent, SlashState};
pub use key::{CaretState, EditorKey};
pub use markdown::shortcut_for;
pub use rich_text::{Mark, MarkSet, RichText, TextRun};
pub use snapshot::{BlockSnapshot, DocumentSnapshot};
