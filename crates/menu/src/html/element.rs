//! Tag-and-attributes wrapping for pre-rendered content.

use serde::{Deserialize, Serialize};

use super::Attributes;

/// An HTML element that wraps pre-rendered inner content:
/// `<tag attr="val">inner</tag>`.
///
/// Tag names and inner content are emitted verbatim. There is no
/// void-element handling; a wrapper always has an inner slot, possibly
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlElement {
    tag: String,
    #[serde(default)]
    attributes: Attributes,
}

impl HtmlElement {
    /// Create an element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Replace the tag name.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Shared view of the attribute map.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the attribute map.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Wrap `inner` in this element's markup.
    pub fn render(&self, inner: &str) -> String {
        let tag = &self.tag;
        let attributes = self.attributes.render();
        format!("<{tag}{attributes}>{inner}</{tag}>")
    }
}
