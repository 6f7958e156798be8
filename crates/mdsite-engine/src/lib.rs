pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use html::{Element, StructureError, build_document_tree, markdown_to_html};
pub use parsing::{
    BlockKind, InlineSpan, SpanKind, classify_block, segment_blocks, tokenize_inline,
};
pub use site::{BuildReport, SiteError, build_site, extract_title};
