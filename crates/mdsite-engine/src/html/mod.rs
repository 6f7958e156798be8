//! # HTML Output
//!
//! The element tree and its construction from classified blocks.
//!
//! ## Modules
//!
//! - **`element`**: [`Element`] tree node and [`StructureError`] rendering
//! - **`builder`**: [`build_document_tree`] per-block construction

pub mod builder;
pub mod element;

pub use builder::build_document_tree;
pub use element::{Element, StructureError};

/// Converts a markdown document straight to an HTML string.
///
/// Each conversion is a pure, self-contained computation: the tree is
/// built, rendered and discarded, with no shared state between calls.
pub fn markdown_to_html(document: &str) -> Result<String, StructureError> {
    build_document_tree(document).render()
}
