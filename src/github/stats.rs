// src/github/stats.rs
// =============================================================================
// This module computes aggregate statistics over the organization's repos.
//
// What gets computed:
// - Qualifying repository count (dotted meta repos like .github excluded)
// - Total stars and forks across qualifying repos
// - The set of distinct primary languages (no duplicates, no nulls)
// - An approximate contributor total, sampled from a bounded number of
//   repositories and floored at the repository count
//
// The aggregation as a whole can never fail. Every remote call inside it
// degrades to an empty/zero value, so the worst case is a snapshot full
// of zeros tagged as Fallback - the caller then renders fixed defaults
// instead of the degraded numbers.
//
// Rust concepts:
// - Iterators: filter/map/sum chains over the repository list
// - HashSet: For deduplicating languages while preserving order
// - Sequential awaits: Contributor fetches run one at a time on purpose
// =============================================================================

use serde::Serialize;
use std::collections::HashSet;

use super::client::{CancelToken, Fetched, GitHubClient, Provenance};
use super::models::Repo;

// How many repositories we sample for contributor counts.
//
// Each count is one extra API request, and unauthenticated clients get
// 60 requests/hour. Sampling the first five repos keeps a stats run at
// seven requests total while still covering the flagship projects.
// Override with --contributor-sample if you have rate limit to spare.
pub const DEFAULT_CONTRIBUTOR_SAMPLE: usize = 5;

/// Derived statistics over the organization's qualifying repositories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// Number of qualifying (non-dotted) repositories
    pub total_repos: usize,
    /// Sum of star counts
    pub total_stars: u64,
    /// Sum of fork counts
    pub total_forks: u64,
    /// Approximate contributor total, floored at total_repos
    pub total_contributors: usize,
    /// Distinct primary languages, in first-seen order
    pub languages: Vec<String>,
}

/// Tuning knobs for the aggregation
#[derive(Debug, Clone, Copy)]
pub struct StatsOptions {
    /// How many repositories to sample for contributor counts
    pub contributor_sample: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        StatsOptions {
            contributor_sample: DEFAULT_CONTRIBUTOR_SAMPLE,
        }
    }
}

// The result of one aggregation run
//
// provenance tells the caller whether the numbers are real or degraded;
// error carries the repository-list failure message when there was one.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub stats: AggregateStats,
    pub provenance: Provenance,
    pub error: Option<String>,
}

impl StatsSnapshot {
    /// True when the snapshot is built from fallback (failed) data
    pub fn is_degraded(&self) -> bool {
        self.provenance == Provenance::Fallback
    }
}

// Runs the full aggregation: one repository-list fetch, then a bounded
// number of sequential contributor-count fetches.
//
// The contributor fetches are deliberately sequential, not concurrent:
// firing five requests at once at an unauthenticated API is a good way
// to trip secondary rate limiting. The cancel token is checked before
// every request so teardown stops the run between calls.
//
// This function never fails - see the module header.
pub async fn collect_stats(
    client: &GitHubClient,
    options: StatsOptions,
    cancel: &CancelToken,
) -> StatsSnapshot {
    let fetched = client.fetch_repos(cancel).await;

    aggregate(&fetched, options.contributor_sample, cancel, |repo_name| {
        async move { client.fetch_contributor_count(&repo_name).await }
    })
    .await
}

// The aggregation itself, with the contributor fetch injected as a
// closure so the logic stays testable without a client. The closure
// takes an owned String so its future doesn't borrow from the loop.
async fn aggregate<F, Fut>(
    fetched: &Fetched<Vec<Repo>>,
    contributor_sample: usize,
    cancel: &CancelToken,
    fetch_contributors: F,
) -> StatsSnapshot
where
    F: Fn(String) -> Fut,
    Fut: std::future::Future<Output = Fetched<usize>>,
{
    let repos = qualifying_repos(&fetched.value);

    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks: u64 = repos.iter().map(|r| r.forks_count).sum();
    let languages = distinct_languages(&repos);

    // Sample contributor counts from the first N qualifying repos,
    // one request at a time. The cancel token is checked before every
    // fetch so teardown stops the run between calls.
    let mut summed_contributors = 0usize;
    for repo in repos.iter().take(contributor_sample) {
        if cancel.is_cancelled() {
            break;
        }
        let count = fetch_contributors(repo.name.clone()).await;
        summed_contributors += count.value;
    }

    // Floor at the repository count: never display a contributor total
    // lower than the number of visible projects
    let total_contributors = summed_contributors.max(repos.len());

    StatsSnapshot {
        stats: AggregateStats {
            total_repos: repos.len(),
            total_stars,
            total_forks,
            total_contributors,
            languages,
        },
        provenance: fetched.provenance,
        error: fetched.error.clone(),
    }
}

// Filters out dotted meta repositories (.github and friends)
//
// These hold organization configuration, not projects, and must not
// contribute to any aggregate.
pub fn qualifying_repos(repos: &[Repo]) -> Vec<&Repo> {
    repos.iter().filter(|r| !r.name.starts_with('.')).collect()
}

// Collects the distinct non-null languages across the given repos,
// preserving first-seen order
pub fn distinct_languages(repos: &[&Repo]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut languages = Vec::new();

    for repo in repos {
        if let Some(language) = &repo.language {
            // insert() returns false if the language was already present
            if seen.insert(language.clone()) {
                languages.push(language.clone());
            }
        }
    }

    languages
}
