use super::{
    kinds::{Bold, CodeSpan, Image, InlineMatch, Italic, Link},
    types::{InlineSpan, SpanKind},
};

/// Tokenizes a flat inline-text string into an ordered sequence of spans.
///
/// Delimiter styles are applied in fixed precedence order: bold, italic,
/// code, then images, then links. Each pass only splits plain-text spans;
/// spans already typed by an earlier pass are left untouched, so styles do
/// not nest (a deliberate simplification).
///
/// An unterminated delimiter never errors: the span is kept as literal
/// text. Empty input yields a single empty text span, never zero spans.
pub fn tokenize_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = vec![InlineSpan::text(text)];
    spans = split_delimited(spans, Bold::DELIMITER, SpanKind::Bold);
    spans = split_delimited(spans, Italic::DELIMITER, SpanKind::Italic);
    spans = split_delimited(spans, CodeSpan::DELIMITER, SpanKind::Code);
    spans = split_matches(spans, Image::find_all, InlineSpan::image);
    spans = split_matches(spans, Link::find_all, InlineSpan::link);
    spans
}

/// Splits every plain-text span on paired occurrences of `delimiter`.
///
/// Pair matching is first-opening/next-closing: the text before the opener
/// stays plain, the text between the pair becomes `kind`, and the remainder
/// is rescanned for further pairs of the same delimiter. A span containing
/// an opener with no closer anywhere after it is passed through unmodified.
fn split_delimited(spans: Vec<InlineSpan>, delimiter: &str, kind: SpanKind) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != SpanKind::Text {
            out.push(span);
            continue;
        }

        let text = &span.text;
        let dlen = delimiter.len();

        // No pair of delimiters anywhere: keep the span as literal text.
        let Some(first_open) = text.find(delimiter) else {
            out.push(span);
            continue;
        };
        if !text[first_open + dlen..].contains(delimiter) {
            out.push(span);
            continue;
        }

        let mut start = 0;
        while start < text.len() {
            let Some(open) = text[start..].find(delimiter).map(|i| start + i) else {
                out.push(InlineSpan::text(&text[start..]));
                break;
            };
            if open > start {
                out.push(InlineSpan::text(&text[start..open]));
            }

            let content_start = open + dlen;
            let Some(close) = text[content_start..].find(delimiter).map(|i| content_start + i)
            else {
                // Trailing opener with no closer renders literally.
                out.push(InlineSpan::text(&text[open..]));
                break;
            };

            out.push(InlineSpan::styled(kind, &text[content_start..close]));
            start = close + dlen;
        }
    }

    out
}

/// Splits every plain-text span on pattern matches (images or links).
///
/// All matches within one span are extracted in a single left-to-right
/// pass; the surrounding text stays plain. A successful image match
/// consumes its bytes, so the later link pass can never re-match them.
fn split_matches(
    spans: Vec<InlineSpan>,
    find_all: fn(&str) -> Vec<InlineMatch>,
    make: fn(String, String) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != SpanKind::Text {
            out.push(span);
            continue;
        }

        let matches = find_all(&span.text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut last = 0;
        for m in matches {
            if m.range.start > last {
                out.push(InlineSpan::text(&span.text[last..m.range.start]));
            }
            out.push(make(m.text, m.target));
            last = m.range.end;
        }
        if last < span.text.len() {
            out.push(InlineSpan::text(&span.text[last..]));
        }
    }

    out
}
