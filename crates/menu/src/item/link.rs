//! Anchor items.

use serde::{Deserialize, Serialize};

use crate::html::HtmlElement;
use crate::item::{ACTIVE_CLASS, Activatable, Item, ItemVariant};

/// A navigation link: anchor text, target URL, and the active flag used to
/// highlight the current location.
///
/// Text and URL are emitted verbatim when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Anchor text.
    pub text: String,
    /// Target URL, rendered as the `href` attribute.
    pub url: String,
    /// Whether this link is the current navigation entry.
    #[serde(default)]
    pub active: bool,
}

impl Link {
    /// Create an inactive link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            active: false,
        }
    }

    /// Render as an anchor element, carrying the active class when marked.
    pub fn render(&self) -> String {
        let mut element = HtmlElement::new("a");
        element.attributes_mut().set("href", self.url.as_str());
        if self.active {
            element.attributes_mut().add_class(ACTIVE_CLASS);
        }
        element.render(&self.text)
    }
}

impl Activatable for Link {
    fn set_active(&mut self) {
        self.active = true;
    }
}

impl ItemVariant for Link {
    fn match_item(item: &mut Item) -> Option<&mut Self> {
        match item {
            Item::Link(link) => Some(link),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_anchor() {
        let link = Link::new("Home", "/");
        assert_eq!(link.render(), "<a href=\"/\">Home</a>");
    }

    #[test]
    fn renders_active_class_when_marked() {
        let mut link = Link::new("Blog", "/blog");
        link.set_active();
        assert!(link.active);
        assert_eq!(link.render(), "<a href=\"/blog\" class=\"active\">Blog</a>");
    }

    #[test]
    fn text_and_url_are_verbatim() {
        let link = Link::new("Q&A", "/faq?page=1&lang=en");
        assert_eq!(link.render(), "<a href=\"/faq?page=1&lang=en\">Q&A</a>");
    }
}
