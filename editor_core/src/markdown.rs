//! Markdown shortcut rules
//!
//! A shortcut fires on the space keypress when the block's full text is
//! exactly equal to a trigger string. Prefixes do not match: `##x` followed
//! by space converts nothing. Rules are checked in a fixed order and the
//! first match wins.

use crate::block::BlockType;

/// Trigger-to-type rules, in evaluation order
pub const SHORTCUT_RULES: &[(&str, BlockType)] = &[
    ("#", BlockType::Heading1),
    ("##", BlockType::Heading2),
    ("###", BlockType::Heading3),
    ("-", BlockType::BulletList),
    ("*", BlockType::BulletList),
    ("1.", BlockType::NumberedList),
    ("[]", BlockType::TodoList),
    (">", BlockType::Quote),
    ("---", BlockType::Divider),
];

/// Returns the block type a space keypress would convert `text` into
pub fn shortcut_for(text: &str) -> Option<BlockType> {
    SHORTCUT_RULES
        .iter()
        .find(|(trigger, _)| *trigger == text)
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_shortcuts() {
        assert_eq!(shortcut_for("#"), Some(BlockType::Heading1));
        assert_eq!(shortcut_for("##"), Some(BlockType::Heading2));
        assert_eq!(shortcut_for("###"), Some(BlockType::Heading3));
    }

    #[test]
    fn test_list_shortcuts() {
        assert_eq!(shortcut_for("-"), Some(BlockType::BulletList));
        assert_eq!(shortcut_for("*"), Some(BlockType::BulletList));
        assert_eq!(shortcut_for("1."), Some(BlockType::NumberedList));
        assert_eq!(shortcut_for("[]"), Some(BlockType::TodoList));
    }

    #[test]
    fn test_quote_and_divider_shortcuts() {
        assert_eq!(shortcut_for(">"), Some(BlockType::Quote));
        assert_eq!(shortcut_for("---"), Some(BlockType::Divider));
    }

    #[test]
    fn test_match_must_be_exact() {
        assert_eq!(shortcut_for("##x"), None);
        assert_eq!(shortcut_for("## "), None);
        assert_eq!(shortcut_for(" #"), None);
        assert_eq!(shortcut_for("--"), None);
        assert_eq!(shortcut_for("1"), None);
        assert_eq!(shortcut_for(""), None);
    }
}
