//! Ordered item collections.
//!
//! [`Items`] owns a menu's children: insertion order is rendering order,
//! and join-rendering concatenates child output with no separator. The
//! filtered traversal primitives used by `manipulate` and `set_active`
//! live here.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemVariant};

/// The ordered sequence of items owned by a menu.
///
/// Externally read-only; the owning menu is the only way to change the
/// sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Items {
    items: Vec<Item>,
}

impl Items {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterate items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Append an item.
    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Map every item through `f` and join the results with no separator.
    pub(crate) fn map_join(&self, f: impl Fn(&Item) -> String) -> String {
        self.items.iter().map(f).collect()
    }

    /// Apply `f` to each direct item matching variant `T`, skipping the
    /// rest. Returns how many items matched.
    pub(crate) fn apply<T: ItemVariant>(&mut self, f: &mut impl FnMut(&mut T)) -> usize {
        let mut matched = 0;
        for item in &mut self.items {
            if let Some(target) = T::match_item(item) {
                f(target);
                matched += 1;
            }
        }
        matched
    }

    /// Apply `f` to each matching item in the whole subtree, pre-order: a
    /// submenu is visited before its own children.
    pub(crate) fn apply_deep<T: ItemVariant>(&mut self, f: &mut impl FnMut(&mut T)) -> usize {
        let mut matched = 0;
        for item in &mut self.items {
            if let Some(target) = T::match_item(item) {
                f(target);
                matched += 1;
            }
            if let Item::Menu(submenu) = item {
                matched += submenu.items.apply_deep(f);
            }
        }
        matched
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Item>> for Items {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Items {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Link, RawHtml};

    fn sample() -> Items {
        vec![
            Item::from(Link::new("A", "/a")),
            Item::from(RawHtml::new("<hr>")),
            Item::from(Link::new("B", "/b")),
        ]
        .into()
    }

    #[test]
    fn map_join_concatenates_without_separator() {
        let items = sample();
        assert_eq!(
            items.map_join(Item::render),
            "<a href=\"/a\">A</a><hr><a href=\"/b\">B</a>"
        );
    }

    #[test]
    fn apply_counts_only_matching_variants() {
        let mut items = sample();
        let mut seen = Vec::new();
        let matched = items.apply(&mut |link: &mut Link| seen.push(link.url.clone()));
        assert_eq!(matched, 2);
        assert_eq!(seen, vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn apply_with_item_reaches_everything() {
        let mut items = sample();
        let matched = items.apply(&mut |_: &mut Item| {});
        assert_eq!(matched, 3);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let items = sample();
        let urls: Vec<_> = items
            .iter()
            .filter_map(|item| match item {
                Item::Link(link) => Some(link.url.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(urls, vec!["/a", "/b"]);
        assert_eq!(items.len(), 3);
        assert!(!items.is_empty());
    }
}
