use std::collections::BTreeMap;

use thiserror::Error;

/// A tree-shape violation found while rendering an [`Element`].
///
/// Parsing ambiguity never raises; these only fire when a node breaks the
/// container/leaf invariants, which means the tree was assembled by hand
/// incorrectly. Rendering fails for the whole conversion; no partial
/// output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("untagged element requires a text value")]
    MissingValue,
    #[error("container element requires a tag")]
    MissingTag,
    #[error("element <{0}> has neither text nor children")]
    MissingChildren(String),
}

/// A node of the output tree: a tagged container, a tagged leaf, or an
/// untagged text leaf.
///
/// Exactly one of `value` and `children` should be set. Untagged nodes
/// must carry text and no attributes; adjacent inline spans are modeled as
/// sibling nodes, never as an implicit wrapper. Each child is exclusively
/// owned by its parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<Element>>,
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    /// An untagged text leaf, rendered verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A tagged leaf, `<tag>value</tag>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A tagged container with ordered children.
    pub fn container(tag: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            ..Self::default()
        }
    }

    /// Adds an attribute. Keys are unique; a repeated key overwrites.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Recursively renders this element to an HTML string.
    ///
    /// Attributes render in sorted key order, each with a single leading
    /// space. Text is emitted verbatim with no escaping. A container with
    /// an empty (but present) child list renders as an empty tag pair.
    pub fn render(&self) -> Result<String, StructureError> {
        match (&self.tag, &self.value) {
            (None, Some(value)) => Ok(value.clone()),
            (None, None) => {
                if self.children.is_some() {
                    Err(StructureError::MissingTag)
                } else {
                    Err(StructureError::MissingValue)
                }
            }
            (Some(tag), Some(value)) => {
                Ok(format!("<{tag}{}>{value}</{tag}>", self.render_attrs()))
            }
            (Some(tag), None) => {
                let children = self
                    .children
                    .as_ref()
                    .ok_or_else(|| StructureError::MissingChildren(tag.clone()))?;
                let mut out = format!("<{tag}{}>", self.render_attrs());
                for child in children {
                    out.push_str(&child.render()?);
                }
                out.push_str(&format!("</{tag}>"));
                Ok(out)
            }
        }
    }

    fn render_attrs(&self) -> String {
        self.attrs
            .iter()
            .map(|(key, value)| format!(" {key}=\"{value}\""))
            .collect()
    }
}
