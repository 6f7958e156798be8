/// The style of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text that isn't part of any special construct.
    Text,
    /// Bold text (`**...**`).
    Bold,
    /// Italic text (`_..._`).
    Italic,
    /// Inline code (backtick-delimited).
    Code,
    /// A link `[text](url)`.
    Link,
    /// An image `![alt](url)`.
    Image,
}

/// A typed fragment of inline content.
///
/// Immutable value produced by [`tokenize_inline`](super::tokenize_inline)
/// and consumed by the tree builder. `target` carries the URL for links and
/// images and is `None` for every other kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub kind: SpanKind,
    pub text: String,
    pub target: Option<String>,
}

impl InlineSpan {
    /// A plain-text span.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Text,
            text: text.into(),
            target: None,
        }
    }

    /// A delimited span (bold, italic or code).
    pub fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            target: None,
        }
    }

    /// A link span with anchor text and target URL.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            target: Some(url.into()),
        }
    }

    /// An image span with alt text and source URL.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            target: Some(url.into()),
        }
    }
}
