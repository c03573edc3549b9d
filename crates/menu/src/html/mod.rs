//! HTML rendering helpers: ordered attribute maps and tag wrapping.
//!
//! Nothing here escapes or sanitizes. The crate composes markup out of
//! caller-supplied strings; safety of the resulting document is the
//! caller's responsibility.

mod attributes;
mod element;

pub use attributes::{AttrValue, Attributes};
pub use element::HtmlElement;
