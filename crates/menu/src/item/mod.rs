//! Menu items: the closed set of renderable, activatable node types.
//!
//! [`Item`] is the composite vocabulary of a menu tree: links, raw HTML
//! fragments, and nested menus. Filtered traversal (`Menu::manipulate` and
//! friends) narrows items to a concrete variant through [`ItemVariant`], so
//! the parameter type of a callback decides which items it receives.

mod link;
mod raw_html;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::menu::Menu;

pub use link::Link;
pub use raw_html::RawHtml;

/// Class added to an item's markup when it is marked active.
pub const ACTIVE_CLASS: &str = "active";

/// Anything that can be marked as the current navigation entry.
pub trait Activatable {
    /// Mark as active. A no-op for types without an active state.
    fn set_active(&mut self);
}

/// Narrows a mutable item to a concrete variant for filtered traversal.
///
/// Implemented by every variant type, and by [`Item`] itself so an
/// item-typed callback receives every child regardless of variant. Items
/// whose variant does not match are skipped silently; a callback over a
/// type outside this set does not compile.
pub trait ItemVariant: Activatable {
    /// This variant's view of `item`, or `None` when the variant differs.
    fn match_item(item: &mut Item) -> Option<&mut Self>;
}

/// A single node in a menu tree.
///
/// Insertion order in the parent is rendering order; nodes carry no
/// identity beyond their position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Item {
    /// Anchor element.
    Link(Link),
    /// Verbatim markup fragment.
    RawHtml(RawHtml),
    /// Nested submenu; a menu is itself an item.
    Menu(Menu),
}

impl Item {
    /// Render this node to markup.
    pub fn render(&self) -> String {
        match self {
            Item::Link(link) => link.render(),
            Item::RawHtml(html) => html.render(),
            Item::Menu(menu) => menu.render(),
        }
    }

    /// Whether the node is marked active. Always false for raw fragments.
    pub fn is_active(&self) -> bool {
        match self {
            Item::Link(link) => link.active,
            Item::RawHtml(_) => false,
            Item::Menu(menu) => menu.is_active(),
        }
    }
}

impl Activatable for Item {
    fn set_active(&mut self) {
        match self {
            Item::Link(link) => link.set_active(),
            Item::RawHtml(html) => html.set_active(),
            // Menu's inherent set_active is the predicate form; the flag
            // setter is reachable only through the trait.
            Item::Menu(menu) => Activatable::set_active(menu),
        }
    }
}

impl ItemVariant for Item {
    fn match_item(item: &mut Item) -> Option<&mut Self> {
        Some(item)
    }
}

impl From<Link> for Item {
    fn from(link: Link) -> Self {
        Item::Link(link)
    }
}

impl From<RawHtml> for Item {
    fn from(html: RawHtml) -> Self {
        Item::RawHtml(html)
    }
}

impl From<Menu> for Item {
    fn from(menu: Menu) -> Self {
        Item::Menu(menu)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
