//! Category set derivation.
//!
//! Categories are never persisted on their own; the set is recomputed from
//! the item list on every refresh, so a category disappears as soon as no
//! item references it.

use crate::model::item::Item;
use std::collections::BTreeSet;

/// Returns the distinct categories referenced by `items`.
///
/// The result is a set; `BTreeSet` is used so callers rendering a selector
/// get a deterministic order without sorting again. Empty input yields an
/// empty set.
pub fn derive_categories(items: &[Item]) -> BTreeSet<String> {
    items.iter().map(|item| item.category.clone()).collect()
}
