//! # Site Pipeline
//!
//! Turns a content tree of markdown files into a published HTML tree:
//! title extraction, template substitution and the directory walk that
//! mirrors content into the output directory.

use std::fs;
use std::path::Path;

use relative_path::{RelativePath, RelativePathBuf};
use thiserror::Error;

use crate::html::{StructureError, markdown_to_html};
use crate::io::{self, IoError};

/// Placeholder in the template replaced by the extracted page title.
pub const TITLE_SLOT: &str = "{{ Title }}";
/// Placeholder in the template replaced by the converted page body.
pub const CONTENT_SLOT: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no h1 heading found in source document")]
    MissingTitle,
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Io(#[from] IoError),
}

/// What a [`build_site`] run produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output-relative paths of the generated pages, in generation order.
    pub pages: Vec<RelativePathBuf>,
    /// Number of static asset files copied.
    pub assets_copied: usize,
}

/// Extracts the document title: the first line whose trimmed form is a
/// level-1 heading. Deeper headings never qualify.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    for line in markdown.lines() {
        if let Some(rest) = line.trim().strip_prefix("# ") {
            return Ok(rest.trim().to_string());
        }
    }
    Err(SiteError::MissingTitle)
}

/// Renders one markdown document into a full HTML page.
///
/// Substitutes the title and content slots in the template, then rewrites
/// root-relative `href`/`src` URLs onto `base_path` so the site works when
/// hosted under a subpath.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, SiteError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;

    let page = template
        .replace(TITLE_SLOT, &title)
        .replace(CONTENT_SLOT, &content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"));

    Ok(page)
}

/// Maps a content-relative markdown path to its output-relative HTML path.
///
/// `index.md` becomes `index.html` in the same directory; any other
/// `name.md` becomes `name/index.html`, at every depth, so each page gets
/// a clean directory URL.
pub fn page_output_path(source: &RelativePath) -> RelativePathBuf {
    if source.file_name() == Some("index.md") {
        return source.with_extension("html");
    }

    let stem = source.file_stem().unwrap_or("index");
    match source.parent() {
        Some(parent) => parent.join(stem).join("index.html"),
        None => RelativePathBuf::from(stem).join("index.html"),
    }
}

/// Generates one page from content root to output root.
pub fn generate_page(
    source: &RelativePath,
    content_root: &Path,
    template: &str,
    output_root: &Path,
    base_path: &str,
) -> Result<RelativePathBuf, SiteError> {
    let markdown = io::read_file(source, content_root)?;
    let page = render_page(&markdown, template, base_path)?;
    let dest = page_output_path(source);
    io::write_file(&dest, output_root, &page)?;
    Ok(dest)
}

/// Builds the whole site.
///
/// Clears the output directory, copies the static tree (when present) and
/// generates a page for every markdown file under the content directory,
/// preserving directory structure.
pub fn build_site(
    content_dir: &Path,
    static_dir: &Path,
    template_path: &Path,
    output_dir: &Path,
    base_path: &str,
) -> Result<BuildReport, SiteError> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(IoError::Io)?;
    }

    let mut report = BuildReport::default();
    if static_dir.exists() {
        report.assets_copied = io::copy_dir_recursive(static_dir, output_dir)?;
    }

    let template = fs::read_to_string(template_path).map_err(IoError::Io)?;

    for file in io::scan_markdown_files(content_dir)? {
        let source = io::relative_to(&file, content_dir)?;
        let dest = generate_page(&source, content_dir, &template, output_dir, base_path)?;
        report.pages.push(dest);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_from_simple_heading() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    }

    #[test]
    fn title_trims_surrounding_whitespace() {
        assert_eq!(
            extract_title("#   Title with spaces   ").unwrap(),
            "Title with spaces"
        );
    }

    #[test]
    fn title_keeps_inline_markers_verbatim() {
        assert_eq!(
            extract_title("# Title with **bold** and _italic_").unwrap(),
            "Title with **bold** and _italic_"
        );
    }

    #[test]
    fn title_found_after_other_content() {
        let markdown = "Some content before the title\n\n# The Real Title\n\nMore content";
        assert_eq!(extract_title(markdown).unwrap(), "The Real Title");
    }

    #[test]
    fn first_level_one_heading_wins() {
        let markdown = "# Main Title\n\n## Secondary Title";
        assert_eq!(extract_title(markdown).unwrap(), "Main Title");
    }

    #[test]
    fn deeper_headings_do_not_count() {
        let markdown = "## Secondary Title\n\n### Tertiary Title";
        assert!(matches!(
            extract_title(markdown),
            Err(SiteError::MissingTitle)
        ));
    }

    #[test]
    fn missing_title_is_an_error() {
        assert!(matches!(
            extract_title("no heading here"),
            Err(SiteError::MissingTitle)
        ));
    }

    #[test]
    fn render_page_fills_both_slots() {
        let template = "<html><head><title>{{ Title }}</title></head>\
                        <body>{{ Content }}</body></html>";
        let page = render_page("# Home\n\nwelcome", template, "/").unwrap();
        assert_eq!(
            page,
            "<html><head><title>Home</title></head>\
             <body><div><h1>Home</h1><p>welcome</p></div></body></html>"
        );
    }

    #[test]
    fn render_page_rewrites_root_relative_urls() {
        let template = "<link href=\"/css/site.css\"><img src=\"/logo.png\">{{ Content }}";
        let page = render_page("# T", template, "/mysite/").unwrap();
        assert!(page.contains("href=\"/mysite/css/site.css\""));
        assert!(page.contains("src=\"/mysite/logo.png\""));
    }

    #[test]
    fn index_maps_next_to_itself() {
        assert_eq!(
            page_output_path(RelativePath::new("index.md")),
            RelativePathBuf::from("index.html")
        );
        assert_eq!(
            page_output_path(RelativePath::new("blog/post/index.md")),
            RelativePathBuf::from("blog/post/index.html")
        );
    }

    #[test]
    fn named_page_maps_to_its_own_directory() {
        assert_eq!(
            page_output_path(RelativePath::new("contact.md")),
            RelativePathBuf::from("contact/index.html")
        );
        assert_eq!(
            page_output_path(RelativePath::new("blog/about.md")),
            RelativePathBuf::from("blog/about/index.html")
        );
    }
}
