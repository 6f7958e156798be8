use super::kinds::{CodeFence, Heading, OrderedList, Quote, UnorderedList};

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading with its level (1-6).
    Heading(u8),
    /// Fenced code block.
    Code,
    /// Quote block.
    Quote,
    /// Unordered (`- `) list.
    UnorderedList,
    /// Ordered (`1. `) list.
    OrderedList,
    /// Anything else.
    Paragraph,
}

/// Classifies a trimmed block string into exactly one kind.
///
/// Pure and total: rules are checked in priority order (heading, code,
/// quote, unordered list, ordered list) and the first match wins, falling
/// through to paragraph. Malformed list or fence syntax is never an error;
/// it simply fails the stricter rules and lands on a more permissive kind.
pub fn classify_block(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading(level);
    }
    if CodeFence::bounds(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();
    if lines.iter().all(|line| line.starts_with(Quote::PREFIX)) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| line.starts_with(UnorderedList::PREFIX)) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::matches(&lines) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}
