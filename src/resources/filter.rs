// src/resources/filter.rs
// =============================================================================
// This module narrows the resource catalog by category and search term.
//
// Two independent predicates compose with AND:
// - Category: exact match against a section key, or "all" for everything
// - Search: case-insensitive substring match over title and description;
//   an empty search term matches everything
//
// Both predicates are pure functions of their inputs, so filtering the
// same list with the same arguments always yields the same result, and
// an empty result is a perfectly valid outcome (not an error).
//
// Rust concepts:
// - Iterator chains: filter().cloned().collect()
// - to_lowercase(): Unicode-aware case folding for the search
// =============================================================================

use super::catalog::ResourceEntry;

/// Category value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";

// Narrows a flattened entry list by category AND search term.
//
// Either predicate on its own may be the identity: category "all" keeps
// everything, and so does an empty (or whitespace-only) search term.
pub fn filter_entries(entries: &[ResourceEntry], category: &str, search: &str) -> Vec<ResourceEntry> {
    let search = search.trim().to_lowercase();

    entries
        .iter()
        .filter(|entry| matches_category(entry, category))
        .filter(|entry| matches_search(entry, &search))
        .cloned()
        .collect()
}

fn matches_category(entry: &ResourceEntry, category: &str) -> bool {
    category == ALL_CATEGORIES || entry.section == category
}

// Expects the needle to be lowercased already (done once in
// filter_entries, not per entry)
fn matches_search(entry: &ResourceEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why take &[ResourceEntry] instead of Vec<ResourceEntry>?
//    - A slice borrows the caller's list without taking ownership
//    - The caller can filter the same list repeatedly (e.g. as the user
//      types in a search box) without rebuilding it
//
// 2. Why lowercase the needle once, outside the loop?
//    - to_lowercase() allocates a new String
//    - Doing it per entry would allocate needlessly 12 times per keystroke
//
// 3. Why .cloned()?
//    - filter() yields references (&ResourceEntry)
//    - The result should own its entries so it can outlive the input
//    - ResourceEntry is all &'static str fields, so cloning is cheap
// -----------------------------------------------------------------------------
