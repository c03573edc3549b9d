//! Raw markup passthrough items.

use serde::{Deserialize, Serialize};

use crate::item::{Activatable, Item, ItemVariant};

/// A raw HTML fragment stored and rendered unchanged.
///
/// Nothing is escaped or validated; callers own the safety of the markup
/// they supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHtml {
    /// The fragment, returned as-is by `render`.
    pub html: String,
}

impl RawHtml {
    /// Wrap a markup fragment.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Return the stored fragment unchanged.
    pub fn render(&self) -> String {
        self.html.clone()
    }
}

impl Activatable for RawHtml {
    /// Raw fragments have no active-state concept; this is a no-op.
    fn set_active(&mut self) {}
}

impl ItemVariant for RawHtml {
    fn match_item(item: &mut Item) -> Option<&mut Self> {
        match item {
            Item::RawHtml(html) => Some(html),
            _ => None,
        }
    }
}
