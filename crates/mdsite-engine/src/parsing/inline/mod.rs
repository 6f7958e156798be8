//! # Inline Parsing
//!
//! Splits the inline text of a block into typed spans (plain, bold,
//! italic, code, link, image).
//!
//! The tokenizer works on a flat list of spans: each delimiter style in
//! turn splits the plain-text spans it finds pairs in, and image/link
//! patterns are extracted last. Already-typed spans are never revisited,
//! so `` `**not bold**` `` stays a single code span and styles do not
//! nest.
//!
//! ## Modules
//!
//! - **`types`**: [`InlineSpan`] and [`SpanKind`]
//! - **`kinds`**: per-style types that own delimiters and patterns
//! - **`tokenizer`**: [`tokenize_inline`] entry point

pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use tokenizer::tokenize_inline;
pub use types::{InlineSpan, SpanKind};
