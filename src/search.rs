//! Search-as-you-type filtering for catalog selection prompts.
//!
//! Matching is a case-insensitive substring test against each entry's display
//! fields. Results keep the catalog's order; nothing is re-ranked.

use crate::catalog::License;

/// An entry that can be found by typing part of its name.
pub trait Searchable {
    /// Whether `needle` (already lowercased) occurs in one of the display fields.
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for String {
    fn matches(&self, needle: &str) -> bool {
        self.to_lowercase().contains(needle)
    }
}

impl Searchable for License {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.key.to_lowercase().contains(needle)
    }
}

/// Entries matching `query`, in their original order. An empty query matches
/// everything. Whitespace in the query is part of the substring.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(&needle)).collect()
}
