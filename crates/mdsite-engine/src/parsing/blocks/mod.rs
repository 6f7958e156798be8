//! # Block Parsing
//!
//! Splits a document into blank-line-separated blocks and classifies each
//! block into a structural kind.
//!
//! ## Modules
//!
//! - **`segment`**: [`segment_blocks`] document splitter
//! - **`classify`**: [`classify_block`] and [`BlockKind`]
//! - **`kinds`**: per-kind types that own block syntax markers

pub mod classify;
pub mod kinds;
pub mod segment;

pub use classify::{BlockKind, classify_block};
pub use segment::segment_blocks;
