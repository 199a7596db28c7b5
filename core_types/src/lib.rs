//! # Core Types
//!
//! Shared primitive types for Blockpad.
//!
//! ## Philosophy
//!
//! - **Ids are opaque**: callers never inspect or synthesize the inner value
//!   of a uuid-backed id
//! - **No behavior**: this crate holds data types only, no state machines
//! - **Serializable**: everything here crosses the persistence boundary and
//!   derives serde

pub mod icon;
pub mod ids;

pub use icon::IconKind;
pub use ids::{BlockId, ComponentId, MenuItemId, SectionId, TabId};
