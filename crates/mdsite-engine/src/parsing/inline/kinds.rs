//! Inline-specific types that own their syntax knowledge.
//!
//! All delimiter constants and extraction patterns live here, not scattered
//! in tokenizer code. The tokenizer calls these; it never hardcodes `**`
//! or `![`.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// Bold emphasis, `**...**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Italic emphasis, `_..._`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}

/// Inline code, backtick-delimited.
pub struct CodeSpan;

impl CodeSpan {
    pub const DELIMITER: &'static str = "`";
}

/// A located image or link occurrence within a plain-text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Byte range of the full markdown syntax in the scanned text.
    pub range: Range<usize>,
    /// Alt text (images) or anchor text (links).
    pub text: String,
    /// The URL between parentheses.
    pub target: String,
}

/// An image, `![alt](url)`.
pub struct Image;

impl Image {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("invalid image pattern"))
    }

    /// Finds every image occurrence in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<InlineMatch> {
        Self::pattern()
            .captures_iter(text)
            .map(|caps| {
                let full = caps.get(0).expect("match has a full group");
                InlineMatch {
                    range: full.range(),
                    text: caps[1].to_string(),
                    target: caps[2].to_string(),
                }
            })
            .collect()
    }
}

/// A link, `[text](url)` not immediately preceded by `!`.
pub struct Link;

impl Link {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("invalid link pattern"))
    }

    /// Finds every link occurrence in `text`, left to right.
    ///
    /// A match whose opening bracket is directly preceded by `!` belongs to
    /// an image and is skipped.
    pub fn find_all(text: &str) -> Vec<InlineMatch> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0).expect("match has a full group");
                let start = full.start();
                if start > 0 && text.as_bytes()[start - 1] == b'!' {
                    return None;
                }
                Some(InlineMatch {
                    range: full.range(),
                    text: caps[1].to_string(),
                    target: caps[2].to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_single_image() {
        let matches = Image::find_all("text with ![alt](https://example.com/i.png)");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "alt");
        assert_eq!(matches[0].target, "https://example.com/i.png");
    }

    #[test]
    fn find_multiple_images() {
        let matches = Image::find_all("![one](1.png) and ![two](2.png)");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "one");
        assert_eq!(matches[1].text, "two");
    }

    #[test]
    fn find_single_link() {
        let matches = Link::find_all("a [link](https://example.com) here");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "link");
        assert_eq!(matches[0].target, "https://example.com");
    }

    #[test]
    fn link_does_not_match_image_syntax() {
        assert!(Link::find_all("![alt](u)").is_empty());
    }

    #[test]
    fn link_matches_next_to_image() {
        let matches = Link::find_all("![img](i.png) then [link](u)");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "link");
    }

    #[test]
    fn image_match_range_covers_full_syntax() {
        let text = "ab ![x](y) cd";
        let matches = Image::find_all(text);
        assert_eq!(&text[matches[0].range.clone()], "![x](y)");
    }

    #[test]
    fn no_matches_in_plain_text() {
        assert!(Image::find_all("nothing here").is_empty());
        assert!(Link::find_all("nothing here").is_empty());
    }
}
