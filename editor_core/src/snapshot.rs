//! Document snapshot for deterministic parity testing

use crate::block::BlockType;
use serde::{Deserialize, Serialize};

/// One block's observable state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub id: String,
    pub kind: BlockType,
    pub content: String,
    pub checked: Option<bool>,
}

/// Complete document state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub blocks: Vec<BlockSnapshot>,
    /// Open palette as (anchor block id, query)
    pub slash: Option<(String, String)>,
    /// Pending focus as (block id, caret offset)
    pub focus: Option<(String, usize)>,
    pub revision: u64,
}

impl DocumentSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for block in &self.blocks {
            hasher.update(block.id.as_bytes());
            hasher.update(block.kind.as_str().as_bytes());
            hasher.update(block.content.as_bytes());
            hasher.update([match block.checked {
                None => 0u8,
                Some(false) => 1,
                Some(true) => 2,
            }]);
            hasher.update(b"\n");
        }

        if let Some((block, query)) = &self.slash {
            hasher.update(block.as_bytes());
            hasher.update(query.as_bytes());
        }

        if let Some((block, offset)) = &self.focus {
            hasher.update(block.as_bytes());
            hasher.update(offset.to_le_bytes());
        }

        hasher.update(self.revision.to_le_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, EditorKey};
    use crate::key::CaretState;

    #[test]
    fn test_snapshot_hash_deterministic() {
        let mut doc = Document::new();
        let id = doc.blocks()[0].id;
        doc.set_content(&id, "hello");

        let hash1 = doc.snapshot().hash();
        let hash2 = doc.snapshot().hash();
        assert_eq!(hash1, hash2, "Hash should be deterministic");
    }

    #[test]
    fn test_snapshot_hash_different_for_different_state() {
        let mut doc = Document::new();
        let id = doc.blocks()[0].id;
        doc.set_content(&id, "hello");
        let before = doc.snapshot().hash();

        doc.apply_key(&id, EditorKey::Enter, CaretState::collapsed(5));
        let after = doc.snapshot().hash();

        assert_ne!(before, after, "Different states should have different hashes");
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let mut doc = Document::new();
        let id = doc.blocks()[0].id;
        doc.set_content(&id, "plan /");

        let snapshot = doc.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DocumentSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_captures_slash_state() {
        let mut doc = Document::new();
        let id = doc.blocks()[0].id;
        doc.set_content(&id, "note /");
        doc.set_content(&id, "note /hea");

        let snapshot = doc.snapshot();
        let (anchor, query) = snapshot.slash.unwrap();
        assert_eq!(anchor, id.to_string());
        assert_eq!(query, "hea");
    }
}
