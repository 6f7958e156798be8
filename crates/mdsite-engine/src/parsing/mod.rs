pub mod blocks;
pub mod inline;

pub use blocks::{BlockKind, classify_block, segment_blocks};
pub use inline::{InlineSpan, SpanKind, tokenize_inline};
