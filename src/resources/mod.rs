// src/resources/mod.rs
// =============================================================================
// This module holds the static resource catalog and its filtering.
//
// Submodules:
// - catalog: The hand-curated entries, grouped into sections
// - filter: Pure category + search narrowing over the flattened list
//
// Nothing in here performs I/O; the catalog is compiled into the binary.
// =============================================================================

mod catalog;
mod filter;

// Re-export the public API
pub use catalog::{all_entries, catalog, ResourceEntry, ResourceSection, ResourceType};
pub use filter::{filter_entries, ALL_CATEGORIES};
