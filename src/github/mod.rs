// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub: the API client, the response
// models, and the statistics aggregation built on top of them.
//
// Submodules:
// - client: The fail-soft HTTP client bound to one organization
// - models: serde structs for the API payloads
// - stats: Aggregate statistics over the organization's repositories
// - projects: Hand-curated display details for the flagship projects
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organizing related functionality
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod client;
mod models;
mod projects;
mod stats;

// Re-export public items from submodules
// This lets users write `github::collect_stats()` instead of
// `github::stats::collect_stats()`
pub use client::{CancelToken, Fetched, GitHubClient, Provenance, DEFAULT_BASE_URL, DEFAULT_ORG};
pub use models::{Contributor, Organization, Repo};
pub use projects::{curated_details, ProjectDetails};
pub use stats::{
    collect_stats, qualifying_repos, AggregateStats, StatsOptions, StatsSnapshot,
    DEFAULT_CONTRIBUTOR_SAMPLE,
};
