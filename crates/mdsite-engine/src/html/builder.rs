use crate::parsing::{
    BlockKind, InlineSpan, SpanKind,
    blocks::kinds::{CodeFence, Quote, UnorderedList},
    classify_block, segment_blocks, tokenize_inline,
};

use super::element::Element;

/// Builds the element tree for a whole document.
///
/// The root is a `div` container with one child per block, in block order.
/// Building never fails: malformed markdown falls through to more
/// permissive block kinds during classification, and the exhaustive
/// [`BlockKind`] dispatch leaves no room for an unhandled kind.
pub fn build_document_tree(document: &str) -> Element {
    let children = segment_blocks(document)
        .iter()
        .map(|block| block_element(block, classify_block(block)))
        .collect();
    Element::container("div", children)
}

/// Builds the element subtree for one classified block.
pub fn block_element(block: &str, kind: BlockKind) -> Element {
    match kind {
        BlockKind::Heading(level) => heading(block, level),
        BlockKind::Code => code(block),
        BlockKind::Quote => quote(block),
        BlockKind::UnorderedList => unordered_list(block),
        BlockKind::OrderedList => ordered_list(block),
        BlockKind::Paragraph => paragraph(block),
    }
}

/// Tokenizes inline text and converts each span to a child element.
fn inline_children(text: &str) -> Vec<Element> {
    tokenize_inline(text).into_iter().map(span_element).collect()
}

fn span_element(span: InlineSpan) -> Element {
    match span.kind {
        SpanKind::Text => Element::text(span.text),
        SpanKind::Bold => Element::leaf("b", span.text),
        SpanKind::Italic => Element::leaf("i", span.text),
        SpanKind::Code => Element::leaf("code", span.text),
        SpanKind::Link => Element::leaf("a", span.text)
            .with_attr("href", span.target.unwrap_or_default()),
        SpanKind::Image => Element::leaf("img", "")
            .with_attr("src", span.target.unwrap_or_default())
            .with_attr("alt", span.text),
    }
}

fn heading(block: &str, level: u8) -> Element {
    // Classification required exactly one space after the hashes; content
    // extraction is more lenient and just trims whatever follows them.
    let text = block[level as usize..].trim();
    Element::container(format!("h{level}"), inline_children(text))
}

fn code(block: &str) -> Element {
    let content = &block[CodeFence::MARKER.len()..];
    let content = content.strip_suffix(CodeFence::MARKER).unwrap_or(content);

    // A non-empty first line that isn't itself a fence is a language tag;
    // drop it. The remaining text is kept raw: inline markdown inside a
    // code block is never interpreted.
    let lines: Vec<&str> = content.split('\n').collect();
    let body = match lines.first() {
        Some(first) if !first.trim().is_empty() && !first.starts_with(CodeFence::MARKER) => {
            lines[1..].join("\n")
        }
        _ => content.to_string(),
    };

    let leaf = Element::text(body.trim());
    Element::container("pre", vec![Element::container("code", vec![leaf])])
}

fn quote(block: &str) -> Element {
    let text = block
        .split('\n')
        .map(|line| line[Quote::PREFIX.len_utf8()..].trim())
        .collect::<Vec<_>>()
        .join(" ");
    Element::container("blockquote", inline_children(&text))
}

fn unordered_list(block: &str) -> Element {
    let items = block
        .split('\n')
        .map(|line| {
            let text = line[UnorderedList::PREFIX.len()..].trim();
            Element::container("li", inline_children(text))
        })
        .collect();
    Element::container("ul", items)
}

fn ordered_list(block: &str) -> Element {
    let items = block
        .split('\n')
        .filter_map(|line| {
            let period = line.find('.')?;
            let text = line[period + 1..].trim();
            Some(Element::container("li", inline_children(text)))
        })
        .collect();
    Element::container("ol", items)
}

fn paragraph(block: &str) -> Element {
    let text = block.split('\n').map(str::trim).collect::<Vec<_>>().join(" ");
    Element::container("p", inline_children(&text))
}
