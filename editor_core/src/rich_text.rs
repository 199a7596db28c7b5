//! Rich text runs and inline marks
//!
//! Block content is a sequence of text runs, each carrying a mark set.
//! Inline format commands mutate the run list; rendering derives from it.
//! The plain text of a block is the concatenation of its run texts.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Inline formatting flags attached to a run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MarkSet {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    /// Target URL, when the run is a link
    pub link: Option<String>,
}

impl MarkSet {
    /// The empty mark set
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no mark is set
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.code && self.link.is_none()
    }

    fn set(&mut self, mark: &Mark) {
        match mark {
            Mark::Bold => self.bold = true,
            Mark::Italic => self.italic = true,
            Mark::Code => self.code = true,
            Mark::Link(url) => self.link = Some(url.clone()),
        }
    }
}

/// A single inline format command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Link(String),
}

/// A contiguous span of text sharing one mark set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub marks: MarkSet,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: MarkSet::none(),
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered run list backing a block's content
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RichText {
    runs: Vec<TextRun>,
}

impl RichText {
    /// Empty rich text
    pub fn new() -> Self {
        Self::default()
    }

    /// Rich text holding a single unmarked run
    pub fn from_plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::new()
        } else {
            Self {
                runs: vec![TextRun::plain(text)],
            }
        }
    }

    /// Concatenated plain text of all runs
    pub fn plain(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// True when the text is empty
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total length in characters
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(TextRun::char_len).sum()
    }

    /// The runs, in document order
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Replaces the whole content with a single unmarked run
    ///
    /// This is the keystroke synchronization path: the editable region
    /// reports its full plain text and any marks inside it are collapsed.
    pub fn set_plain(&mut self, text: &str) {
        *self = Self::from_plain(text);
    }

    /// Applies a mark over a character range
    ///
    /// Runs straddling the range boundaries are split; the range is clamped
    /// to the text length. Applying over an empty range is a no-op.
    pub fn apply_mark(&mut self, range: Range<usize>, mark: &Mark) {
        let len = self.char_len();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return;
        }

        let mut out: Vec<TextRun> = Vec::new();
        let mut offset = 0;
        for run in self.runs.drain(..) {
            let run_len = run.char_len();
            let run_start = offset;
            let run_end = offset + run_len;
            offset = run_end;

            if run_end <= start || run_start >= end {
                out.push(run);
                continue;
            }

            let lo = start.max(run_start) - run_start;
            let hi = end.min(run_end) - run_start;
            let chars: Vec<char> = run.text.chars().collect();

            if lo > 0 {
                out.push(TextRun {
                    text: chars[..lo].iter().collect(),
                    marks: run.marks.clone(),
                });
            }
            let mut marked = run.marks.clone();
            marked.set(mark);
            out.push(TextRun {
                text: chars[lo..hi].iter().collect(),
                marks: marked,
            });
            if hi < run_len {
                out.push(TextRun {
                    text: chars[hi..].iter().collect(),
                    marks: run.marks,
                });
            }
        }

        self.runs = out;
        self.normalize();
    }

    /// Drops empty runs and merges adjacent runs with identical marks
    fn normalize(&mut self) {
        let mut merged: Vec<TextRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(prev) if prev.marks == run.marks => prev.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_plain_and_back() {
        let text = RichText::from_plain("hello world");
        assert_eq!(text.plain(), "hello world");
        assert_eq!(text.runs().len(), 1);
        assert!(text.runs()[0].marks.is_plain());
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        let text = RichText::from_plain("");
        assert!(text.is_empty());
        assert_eq!(text.runs().len(), 0);
        assert_eq!(text.char_len(), 0);
    }

    #[test]
    fn test_apply_mark_splits_runs() {
        let mut text = RichText::from_plain("hello world");
        text.apply_mark(6..11, &Mark::Bold);

        assert_eq!(text.runs().len(), 2);
        assert_eq!(text.runs()[0].text, "hello ");
        assert!(text.runs()[0].marks.is_plain());
        assert_eq!(text.runs()[1].text, "world");
        assert!(text.runs()[1].marks.bold);
        assert_eq!(text.plain(), "hello world");
    }

    #[test]
    fn test_apply_mark_middle_splits_into_three() {
        let mut text = RichText::from_plain("abcdef");
        text.apply_mark(2..4, &Mark::Italic);

        assert_eq!(text.runs().len(), 3);
        assert_eq!(text.runs()[1].text, "cd");
        assert!(text.runs()[1].marks.italic);
        assert!(text.runs()[0].marks.is_plain());
        assert!(text.runs()[2].marks.is_plain());
    }

    #[test]
    fn test_apply_mark_is_idempotent() {
        let mut text = RichText::from_plain("abcdef");
        text.apply_mark(2..4, &Mark::Bold);
        let once = text.clone();
        text.apply_mark(2..4, &Mark::Bold);
        assert_eq!(text, once);
    }

    #[test]
    fn test_overlapping_marks_stack() {
        let mut text = RichText::from_plain("abcdef");
        text.apply_mark(0..4, &Mark::Bold);
        text.apply_mark(2..6, &Mark::Italic);

        // ab: bold, cd: bold+italic, ef: italic
        assert_eq!(text.runs().len(), 3);
        assert!(text.runs()[0].marks.bold && !text.runs()[0].marks.italic);
        assert!(text.runs()[1].marks.bold && text.runs()[1].marks.italic);
        assert!(!text.runs()[2].marks.bold && text.runs()[2].marks.italic);
    }

    #[test]
    fn test_link_mark_carries_url() {
        let mut text = RichText::from_plain("click here");
        text.apply_mark(6..10, &Mark::Link("https://example.com".into()));

        assert_eq!(
            text.runs()[1].marks.link.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_apply_mark_clamps_range() {
        let mut text = RichText::from_plain("abc");
        text.apply_mark(1..99, &Mark::Bold);
        assert_eq!(text.plain(), "abc");
        assert!(text.runs()[1].marks.bold);
    }

    #[test]
    fn test_apply_mark_empty_range_is_noop() {
        let mut text = RichText::from_plain("abc");
        let before = text.clone();
        text.apply_mark(2..2, &Mark::Bold);
        assert_eq!(text, before);
    }

    #[test]
    fn test_set_plain_collapses_marks() {
        let mut text = RichText::from_plain("abcdef");
        text.apply_mark(0..3, &Mark::Bold);
        text.set_plain("abcdefg");

        assert_eq!(text.runs().len(), 1);
        assert!(text.runs()[0].marks.is_plain());
    }

    #[test]
    fn test_adjacent_equal_runs_merge() {
        let mut text = RichText::from_plain("abcd");
        text.apply_mark(0..2, &Mark::Bold);
        text.apply_mark(2..4, &Mark::Bold);

        assert_eq!(text.runs().len(), 1);
        assert!(text.runs()[0].marks.bold);
        assert_eq!(text.runs()[0].text, "abcd");
    }

    #[test]
    fn test_multibyte_chars_use_char_offsets() {
        let mut text = RichText::from_plain("héllo");
        text.apply_mark(1..3, &Mark::Bold);
        assert_eq!(text.plain(), "héllo");
        assert_eq!(text.runs()[1].text, "él");
    }
}
