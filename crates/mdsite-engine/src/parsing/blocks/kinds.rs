//! Block-specific types that own their syntax markers.
//!
//! All block-level syntax knowledge lives here; the classifier and the
//! tree builder call these helpers rather than hardcoding marker strings.

/// An ATX heading, `# ` through `###### `.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level when `block` opens with 1-6 `#` characters
    /// followed by a single space.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block
            .bytes()
            .take_while(|b| *b == Self::MARKER as u8)
            .count();
        if (1..=Self::MAX_LEVEL).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
            Some(hashes as u8)
        } else {
            None
        }
    }
}

/// A fenced code block bounded by triple backticks.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// True when the block both starts and ends with a fence marker.
    ///
    /// A single marker-only block satisfies this too: `` ``` `` alone is
    /// still a code block.
    pub fn bounds(block: &str) -> bool {
        block.starts_with(Self::MARKER) && block.ends_with(Self::MARKER)
    }
}

/// A quote block, every line prefixed with `>`.
pub struct Quote;

impl Quote {
    pub const PREFIX: char = '>';
}

/// An unordered list, every line prefixed with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const PREFIX: &'static str = "- ";
}

/// An ordered list, lines prefixed `1. `, `2. `, ... with no gaps.
pub struct OrderedList;

impl OrderedList {
    /// True when line *i* (1-indexed) starts with exactly `"<i>. "`.
    ///
    /// The numbering must start at 1 and increase by one per line; any
    /// deviation disqualifies the whole block.
    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty()
            && lines
                .iter()
                .enumerate()
                .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    }
}
