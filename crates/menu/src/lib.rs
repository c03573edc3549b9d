//! Sentiero menu builder.
//!
//! Composes nested HTML navigation structures (links, raw fragments,
//! submenus) as an in-memory tree and renders them to markup. The
//! [`Menu`] composite owns its items exclusively; callbacks passed to
//! [`Menu::manipulate`] and [`Menu::set_active`] are filtered by their
//! parameter type, so one callback can target just the links inside a
//! mixed tree.
//!
//! ```
//! use sentiero_menu::{Link, Menu};
//!
//! let mut menu = Menu::new();
//! menu.add_link("Home", "/")
//!     .add_link("Blog", "/blog")
//!     .set_active(|link: &Link| link.url == "/blog");
//!
//! assert_eq!(
//!     menu.render(),
//!     "<ul><a href=\"/\">Home</a><a href=\"/blog\" class=\"active\">Blog</a></ul>"
//! );
//! ```
//!
//! Rendering is infallible and performs no escaping: the crate assembles
//! markup from caller-trusted strings and produces nothing but a
//! `String`.

pub mod html;
pub mod item;
pub mod menu;

pub use html::{AttrValue, Attributes, HtmlElement};
pub use item::{ACTIVE_CLASS, Activatable, Item, ItemVariant, Link, RawHtml};
pub use menu::{DEFAULT_TAG, Items, Menu};
