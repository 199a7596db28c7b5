//! Unique identifiers for workspace entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a content block
///
/// Blocks are the unit of editable content. A block keeps its id for its
/// whole lifetime; ids are never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Creates a new random block ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a block ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block:{}", self.0)
    }
}

/// Identifier for a navigation tab
///
/// Tab ids are human-readable strings (`designer`, `tab-notes-17`). New tabs
/// synthesize an id from their label plus a monotonic timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a sidebar section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a sidebar menu item
///
/// Menu item ids key the content registry lookup. Duplicating an item
/// synthesizes `<original>-copy-<timestamp>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Synthesizes the id for a duplicate of this item
    pub fn duplicate(&self, timestamp: u64) -> Self {
        Self(format!("{}-copy-{}", self.0, timestamp))
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source tag for structured log entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_creation() {
        let id1 = BlockId::new();
        let id2 = BlockId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_block_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = BlockId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn test_block_id_display() {
        let id = BlockId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("block:"));
    }

    #[test]
    fn test_block_id_serde_roundtrip() {
        let id = BlockId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: BlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_menu_item_id_duplicate() {
        let id = MenuItemId::new("design-system");
        let copy = id.duplicate(42);
        assert_eq!(copy.as_str(), "design-system-copy-42");
    }

    #[test]
    fn test_string_ids_display() {
        assert_eq!(format!("{}", TabId::new("designer")), "designer");
        assert_eq!(format!("{}", SectionId::new("s1")), "s1");
        assert_eq!(format!("{}", MenuItemId::new("flow")), "flow");
        assert_eq!(format!("{}", ComponentId::new("session")), "session");
    }
}
