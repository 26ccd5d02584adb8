//! Item filtering and grouping for display.
//!
//! # Responsibility
//! - Narrow the item list by category and case-insensitive name substring.
//! - Group the narrowed list by category in first-occurrence order.
//!
//! # Invariants
//! - Item order within the result always follows the input order.
//! - An empty `category_filter` or `search` narrows nothing.

use crate::model::item::Item;
use indexmap::IndexMap;

/// Returns the items matching both predicates, input order preserved.
///
/// `category_filter` of `""` means all categories (matching the selector
/// widget's all-categories value). The search is a case-insensitive
/// substring match on the name with no normalization beyond lowercasing.
pub fn filter_items(items: &[Item], category_filter: &str, search: &str) -> Vec<Item> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| category_filter.is_empty() || item.category == category_filter)
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Groups items by category, keyed in order of first occurrence.
///
/// Item order within a group follows the input order, so a pre-filtered
/// list keeps its shape through grouping.
pub fn group_by_category(items: &[Item]) -> IndexMap<String, Vec<Item>> {
    let mut groups: IndexMap<String, Vec<Item>> = IndexMap::new();
    for item in items {
        groups
            .entry(item.category.clone())
            .or_default()
            .push(item.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::{filter_items, group_by_category};
    use crate::model::item::Item;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Apple", "Fruit"),
            Item::new("Banana", "Fruit"),
            Item::new("Apricot", "Veg"),
        ]
    }

    #[test]
    fn empty_filters_return_all_items_in_order() {
        let items = sample();
        let filtered = filter_items(&items, "", "");
        assert_eq!(filtered, items);
    }

    #[test]
    fn category_and_search_predicates_are_conjunctive() {
        let items = sample();
        let filtered = filter_items(&items, "Fruit", "ap");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Apple");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = sample();
        let filtered = filter_items(&items, "", "RIC");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Apricot");
    }

    #[test]
    fn grouping_keeps_first_occurrence_key_order() {
        let items = vec![
            Item::new("A", "cat1"),
            Item::new("B", "cat2"),
            Item::new("C", "cat1"),
        ];
        let groups = group_by_category(&items);

        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, ["cat1", "cat2"]);

        let cat1: Vec<&str> = groups["cat1"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(cat1, ["A", "C"]);
        assert_eq!(groups["cat2"].len(), 1);
    }
}
