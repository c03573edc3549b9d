//! The menu composite: an ordered container of heterogeneous items with a
//! configurable HTML wrapper.
//!
//! Construction is fluent (`add_link`, `add_html`, `add_submenu`), and
//! children are transformed in place filtered by variant: a callback
//! taking `&mut Link` only ever sees links, one taking `&mut Item` sees
//! every child. Rendering walks the tree depth-first and wraps each
//! menu's joined child output in its own element.

mod items;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::html::{AttrValue, Attributes, HtmlElement};
use crate::item::{ACTIVE_CLASS, Activatable, Item, ItemVariant, Link, RawHtml};

pub use items::Items;

/// Wrapper tag used by a freshly created menu.
pub const DEFAULT_TAG: &str = "ul";

fn default_element() -> HtmlElement {
    HtmlElement::new(DEFAULT_TAG)
}

/// A composite menu: an ordered item sequence wrapped in a configurable
/// element.
///
/// The sequence is owned exclusively and mutable only through the menu's
/// own methods; external views are shared references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default = "default_element")]
    element: HtmlElement,
    #[serde(default)]
    items: Items,
    #[serde(default)]
    active: bool,
}

impl Menu {
    /// Create an empty menu wrapped in `<ul>`.
    pub fn new() -> Self {
        Self {
            element: default_element(),
            items: Items::default(),
            active: false,
        }
    }

    // -----------------------------------------------------------------------
    // Fluent mutation
    // -----------------------------------------------------------------------

    /// Append any item.
    pub fn add_item(&mut self, item: impl Into<Item>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Append a new link.
    pub fn add_link(&mut self, text: impl Into<String>, url: impl Into<String>) -> &mut Self {
        self.add_item(Link::new(text, url))
    }

    /// Append a raw HTML fragment.
    pub fn add_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.add_item(RawHtml::new(html))
    }

    /// Append a nested submenu.
    pub fn add_submenu(&mut self, menu: Menu) -> &mut Self {
        self.add_item(menu)
    }

    /// Replace the wrapper tag (e.g. `"ol"` or `"nav"`).
    pub fn set_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.element.set_tag(tag);
        self
    }

    /// Set a wrapper attribute. Attributes render in the order they were
    /// first set.
    pub fn attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.element.attributes_mut().set(name, value);
        self
    }

    /// Append a class to the wrapper's space-joined class list.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.element.attributes_mut().add_class(class);
        self
    }

    // -----------------------------------------------------------------------
    // Filtered manipulation
    // -----------------------------------------------------------------------

    /// Apply `f` to every direct child matching the callback's parameter
    /// type; other children are skipped silently. A callback over
    /// [`Item`] receives every child. Direct children only: a nested menu
    /// counts as one child.
    ///
    /// ```
    /// use sentiero_menu::{Link, Menu};
    ///
    /// let mut menu = Menu::new();
    /// menu.add_link("Home", "/").add_html("<hr>");
    /// menu.manipulate(|link: &mut Link| link.text.make_ascii_uppercase());
    /// assert_eq!(menu.render(), "<ul><a href=\"/\">HOME</a><hr></ul>");
    /// ```
    pub fn manipulate<T: ItemVariant>(&mut self, mut f: impl FnMut(&mut T)) -> &mut Self {
        let matched = self.items.apply(&mut f);
        trace!(matched, "manipulated direct items");
        self
    }

    /// Like [`manipulate`](Menu::manipulate), but descends into nested
    /// submenus, pre-order: a submenu is visited before its own children.
    pub fn manipulate_all<T: ItemVariant>(&mut self, mut f: impl FnMut(&mut T)) -> &mut Self {
        let matched = self.items.apply_deep(&mut f);
        trace!(matched, "manipulated subtree items");
        self
    }

    /// Mark children selected by `predicate` as active, with the same
    /// variant filtering as [`manipulate`](Menu::manipulate).
    ///
    /// This is how "the current navigation entry" is chosen by rule (for
    /// instance a URL match) without branching on variants at the call
    /// site. Children the predicate rejects are left untouched.
    pub fn set_active<T: ItemVariant>(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> &mut Self {
        let mut marked = 0usize;
        let matched = self.items.apply(&mut |target: &mut T| {
            if predicate(target) {
                target.set_active();
                marked += 1;
            }
        });
        debug!(matched, marked, "updated active state");
        self
    }

    // -----------------------------------------------------------------------
    // Rendering and introspection
    // -----------------------------------------------------------------------

    /// Render the menu depth-first: every child renders itself, the
    /// results are joined with no separator, and the whole is wrapped in
    /// the configured element. An empty menu renders as an empty wrapper.
    pub fn render(&self) -> String {
        let inner = self.items.map_join(Item::render);
        if self.active {
            let mut element = self.element.clone();
            element.attributes_mut().add_class(ACTIVE_CLASS);
            element.render(&inner)
        } else {
            self.element.render(&inner)
        }
    }

    /// Shared view of the item sequence.
    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The wrapper tag name.
    pub fn tag(&self) -> &str {
        self.element.tag()
    }

    /// Shared view of the wrapper attributes.
    pub fn attributes(&self) -> &Attributes {
        self.element.attributes()
    }

    /// Whether the menu itself is marked active.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Activatable for Menu {
    /// Mark the menu itself active: its wrapper gains the active class at
    /// render time. The inherent `Menu::set_active` is the predicate form,
    /// so the flag setter lives on the trait, mirroring item-level
    /// activation.
    fn set_active(&mut self) {
        self.active = true;
    }
}

impl ItemVariant for Menu {
    fn match_item(item: &mut Item) -> Option<&mut Self> {
        match item {
            Item::Menu(menu) => Some(menu),
            _ => None,
        }
    }
}

impl From<Vec<Item>> for Menu {
    fn from(items: Vec<Item>) -> Self {
        Self {
            element: default_element(),
            items: items.into(),
            active: false,
        }
    }
}

impl FromIterator<Item> for Menu {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            element: default_element(),
            items: iter.into_iter().collect(),
            active: false,
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
