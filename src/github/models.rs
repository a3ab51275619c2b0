// src/github/models.rs
// =============================================================================
// This module defines the data structures for GitHub API responses.
//
// The GitHub REST API returns JSON; serde deserializes it straight into
// these structs. We only declare the fields we actually read - serde
// silently ignores everything else in the payload.
//
// Rust concepts:
// - Derive macros: #[derive(Deserialize)] generates the JSON parsing code
// - Option<T>: For fields GitHub may return as null
// - Vec<String>: For the topics array
// =============================================================================

use serde::{Deserialize, Serialize};

// A single repository as returned by GET /orgs/{org}/repos
//
// The remote source is authoritative: we never mutate one of these after
// deserializing it, and nothing is persisted beyond the current run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    /// Opaque numeric id assigned by GitHub
    pub id: u64,
    /// Repository name, e.g. "jarida"
    pub name: String,
    /// Owner-qualified name, e.g. "jarida-io/jarida"
    pub full_name: String,
    /// Free-text description (GitHub returns null when unset)
    pub description: Option<String>,
    /// Canonical web URL for browsing the repository
    pub html_url: String,
    /// Primary language as detected by GitHub (null for empty repos)
    pub language: Option<String>,
    /// Star count
    pub stargazers_count: u64,
    /// Fork count
    pub forks_count: u64,
    /// Open issue count
    pub open_issues_count: u64,
    /// Creation timestamp (ISO 8601 string, kept as-is)
    pub created_at: String,
    /// Last-updated timestamp
    pub updated_at: String,
    /// Last-pushed timestamp
    pub pushed_at: String,
    /// Topic tags in the order GitHub returns them
    #[serde(default)]
    pub topics: Vec<String>,
    /// Default branch name, e.g. "main"
    pub default_branch: String,
    /// Project homepage (null or empty when unset)
    pub homepage: Option<String>,
}

// The organization itself, from GET /orgs/{org}
//
// We fetch this for the header line of our output; none of the aggregate
// statistics are derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub login: String,
    pub id: u64,
    pub description: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: String,
}

// One contributor record from GET /repos/{org}/{repo}/contributors
//
// We only ever count how many of these come back, but parsing the two
// fields keeps the deserialization honest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_deserializes_with_nulls() {
        // GitHub returns null for description/language/homepage on bare repos
        let json = r#"{
            "id": 1,
            "name": "jarida",
            "full_name": "jarida-io/jarida",
            "description": null,
            "html_url": "https://github.com/jarida-io/jarida",
            "language": null,
            "stargazers_count": 2,
            "forks_count": 3,
            "open_issues_count": 0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z",
            "pushed_at": "2024-06-01T00:00:00Z",
            "topics": ["africa", "open-source"],
            "default_branch": "main",
            "homepage": null
        }"#;

        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "jarida");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.topics, vec!["africa", "open-source"]);
    }

    #[test]
    fn test_repo_missing_topics_defaults_to_empty() {
        // Older API responses omit topics entirely unless requested
        let json = r#"{
            "id": 2,
            "name": "nexx",
            "full_name": "jarida-io/nexx",
            "description": "Wallet",
            "html_url": "https://github.com/jarida-io/nexx",
            "language": "TypeScript",
            "stargazers_count": 0,
            "forks_count": 0,
            "open_issues_count": 1,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z",
            "pushed_at": "2024-06-01T00:00:00Z",
            "default_branch": "main",
            "homepage": "https://jarida.io"
        }"#;

        let repo: Repo = serde_json::from_str(json).unwrap();
        assert!(repo.topics.is_empty());
        assert_eq!(repo.language.as_deref(), Some("TypeScript"));
    }
}
