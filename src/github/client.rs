// src/github/client.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Design decisions:
// - The client is an explicitly constructed value, not a global singleton.
//   The base URL and organization name are constructor parameters, so tests
//   can point it at a local mock server instead of api.github.com.
// - Every fetch is "fail soft": a network or HTTP failure degrades to an
//   empty/zero value instead of an error the caller must handle. The
//   Fetched<T> wrapper records whether the value really came from the
//   remote or is a fallback, so "zero contributors" and "the request
//   failed" stay distinguishable.
// - A CancelToken lets the caller abandon an in-progress aggregation
//   (e.g. the user hit Ctrl-C); once cancelled, no further requests are
//   issued.
//
// Rust concepts:
// - async functions: For network I/O
// - Generics: Fetched<T> wraps any payload type
// - Arc<AtomicBool>: A thread-safe shared flag for cancellation
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::models::{Contributor, Organization, Repo};

/// Public GitHub API endpoint used unless a test overrides it
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// The community organization whose repositories we aggregate
pub const DEFAULT_ORG: &str = "jarida-io";

// GitHub caps per_page at 100; we never paginate past the first page
// because the organization has nowhere near that many repositories
const PER_PAGE: u32 = 100;

// Where a fetched value came from
//
// Remote = the API answered and this is real data
// Fallback = something failed and this is a conservative default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Remote,
    Fallback,
}

// A value plus the knowledge of whether it is real or degraded
//
// This is how we keep the "never throws" contract without conflating
// "the org has zero stars" with "we couldn't reach the API".
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    /// The payload (possibly a fallback default)
    pub value: T,
    /// Whether the payload came from the remote or is a fallback
    pub provenance: Provenance,
    /// Human-readable failure message, set only for fallbacks with a cause
    pub error: Option<String>,
}

impl<T> Fetched<T> {
    /// Wraps a value that really came from the API
    pub fn remote(value: T) -> Self {
        Fetched {
            value,
            provenance: Provenance::Remote,
            error: None,
        }
    }

    /// Wraps a fallback default with no error to report (e.g. cancelled)
    pub fn fallback(value: T) -> Self {
        Fetched {
            value,
            provenance: Provenance::Fallback,
            error: None,
        }
    }

    /// Wraps a fallback default caused by a failure worth surfacing
    pub fn fallback_with_error(value: T, message: String) -> Self {
        Fetched {
            value,
            provenance: Provenance::Fallback,
            error: Some(message),
        }
    }

    /// True if this value is a degraded default, not real data
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }
}

// A cooperative cancellation flag
//
// Clones share the same underlying flag, so the caller keeps one clone
// and hands another to the aggregation. Once cancel() is called, every
// operation that checks the token stops issuing requests and stops
// writing results.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signals that in-flight work should be abandoned
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Checked by long-running operations between requests
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// The GitHub API client for one organization
//
// Construct with new() for the real API, or with_base_url() in tests to
// substitute a mock server.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    org: String,
}

impl GitHubClient {
    /// Creates a client against the public GitHub API
    pub fn new(org: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, org)
    }

    /// Creates a client against an arbitrary base URL (used by tests)
    pub fn with_base_url(base_url: &str, org: &str) -> Self {
        // 10 second timeout so a hung request can't leave the caller
        // waiting forever; GitHub requires a User-Agent on API calls
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("jarida-stats/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        GitHubClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            org: org.to_string(),
        }
    }

    /// The organization this client is bound to
    pub fn org(&self) -> &str {
        &self.org
    }

    // Fetches up to 100 repositories belonging to the organization
    //
    // Fail-soft contract: on any failure this returns an empty list
    // tagged as Fallback, never an error. The caller must treat an
    // empty fallback as "unknown", not "the org has no repositories".
    pub async fn fetch_repos(&self, cancel: &CancelToken) -> Fetched<Vec<Repo>> {
        if cancel.is_cancelled() {
            return Fetched::fallback(Vec::new());
        }

        match self.fetch_repos_inner().await {
            Ok(repos) => Fetched::remote(repos),
            Err(e) => {
                eprintln!("⚠️  Could not fetch repositories for {}: {}", self.org, e);
                Fetched::fallback_with_error(Vec::new(), e.to_string())
            }
        }
    }

    async fn fetch_repos_inner(&self) -> Result<Vec<Repo>> {
        let url = format!(
            "{}/orgs/{}/repos?per_page={}",
            self.base_url, self.org, PER_PAGE
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("GitHub API error: HTTP {}", response.status()));
        }

        let repos = response.json().await?;
        Ok(repos)
    }

    // Fetches the organization record itself
    //
    // Only used for the header line of our output; returns None on any
    // failure so callers can simply skip the header.
    pub async fn fetch_organization(&self) -> Option<Organization> {
        match self.fetch_organization_inner().await {
            Ok(org) => Some(org),
            Err(e) => {
                eprintln!("⚠️  Could not fetch organization {}: {}", self.org, e);
                None
            }
        }
    }

    async fn fetch_organization_inner(&self) -> Result<Organization> {
        let url = format!("{}/orgs/{}", self.base_url, self.org);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("GitHub API error: HTTP {}", response.status()));
        }

        let org = response.json().await?;
        Ok(org)
    }

    // Counts contributors to a single repository
    //
    // Only the length of the returned array matters. Failures fall back
    // to zero silently (no error message): a missing count just makes the
    // aggregate a conservative underestimate, which the flooring in the
    // stats module compensates for.
    pub async fn fetch_contributor_count(&self, repo_name: &str) -> Fetched<usize> {
        match self.fetch_contributors_inner(repo_name).await {
            Ok(contributors) => Fetched::remote(contributors.len()),
            Err(e) => {
                eprintln!(
                    "⚠️  Could not fetch contributors for {}/{}: {}",
                    self.org, repo_name, e
                );
                Fetched::fallback(0)
            }
        }
    }

    async fn fetch_contributors_inner(&self, repo_name: &str) -> Result<Vec<Contributor>> {
        let url = format!(
            "{}/repos/{}/{}/contributors?per_page={}",
            self.base_url, self.org, repo_name, PER_PAGE
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("GitHub API error: HTTP {}", response.status()));
        }

        let contributors = response.json().await?;
        Ok(contributors)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not a global singleton?
//    - A module-level static client would work, but then every test would
//      hit the real GitHub API
//    - Passing the base URL into the constructor means tests can swap in
//      a local mockito server and run offline
//
// 2. What is Arc<AtomicBool>?
//    - Arc = atomically reference-counted shared pointer (cheap to clone)
//    - AtomicBool = a bool that can be read/written from multiple tasks
//      without a lock
//    - Together they make a tiny thread-safe "stop" flag
//
// 3. Why two functions per endpoint (public + _inner)?
//    - The _inner function uses ? and returns Result - normal Rust error
//      propagation, easy to read
//    - The public wrapper catches that Result and converts it into the
//      fail-soft Fetched<T> contract in exactly one place
//
// 4. What does trim_end_matches('/') do?
//    - Removes trailing slashes from the base URL so we don't build
//      URLs like "https://api.github.com//orgs/..."
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn repo_json(name: &str, language: Option<&str>, stars: u64, forks: u64) -> serde_json::Value {
        json!({
            "id": 1,
            "name": name,
            "full_name": format!("test-org/{}", name),
            "description": "A test repository",
            "html_url": format!("https://github.com/test-org/{}", name),
            "language": language,
            "stargazers_count": stars,
            "forks_count": forks,
            "open_issues_count": 0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z",
            "pushed_at": "2024-06-01T00:00:00Z",
            "topics": [],
            "default_branch": "main",
            "homepage": null
        })
    }

    #[test]
    fn test_fetch_repos_success() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let body = json!([
                repo_json("jarida", Some("JavaScript"), 2, 3),
                repo_json("nexx", Some("TypeScript"), 1, 0),
            ])
            .to_string();

            let mock = server
                .mock("GET", "/orgs/test-org/repos")
                .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
                .with_header("Content-Type", "application/json")
                .with_body(body)
                .create();

            let client = GitHubClient::with_base_url(&server.url(), "test-org");
            let fetched = client.fetch_repos(&CancelToken::new()).await;

            assert_eq!(fetched.provenance, Provenance::Remote);
            assert_eq!(fetched.value.len(), 2);
            assert_eq!(fetched.value[0].name, "jarida");
            assert_eq!(fetched.value[1].language.as_deref(), Some("TypeScript"));
            mock.assert();
        })
    }

    #[test]
    fn test_fetch_repos_http_error_falls_back_to_empty() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", "/orgs/test-org/repos")
                .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
                .with_status(500)
                .create();

            let client = GitHubClient::with_base_url(&server.url(), "test-org");
            let fetched = client.fetch_repos(&CancelToken::new()).await;

            // Fail-soft: empty value, fallback provenance, error surfaced
            assert!(fetched.value.is_empty());
            assert!(fetched.is_fallback());
            assert!(fetched.error.is_some());
            mock.assert();
        })
    }

    #[test]
    fn test_fetch_repos_cancelled_before_request() {
        let server = mockito::Server::new();

        tokio_test::block_on(async {
            // No mock registered: a request reaching the server would 501
            let client = GitHubClient::with_base_url(&server.url(), "test-org");

            let cancel = CancelToken::new();
            cancel.cancel();

            let fetched = client.fetch_repos(&cancel).await;
            assert!(fetched.value.is_empty());
            assert!(fetched.is_fallback());
            // Cancellation is not an error condition
            assert!(fetched.error.is_none());
        })
    }

    #[test]
    fn test_fetch_contributor_count_is_array_length() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let body = json!([
                { "login": "amina", "contributions": 42 },
                { "login": "kwame", "contributions": 17 },
                { "login": "zuri", "contributions": 3 },
            ])
            .to_string();

            let mock = server
                .mock("GET", "/repos/test-org/jarida/contributors")
                .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
                .with_header("Content-Type", "application/json")
                .with_body(body)
                .create();

            let client = GitHubClient::with_base_url(&server.url(), "test-org");
            let count = client.fetch_contributor_count("jarida").await;

            assert_eq!(count.value, 3);
            assert_eq!(count.provenance, Provenance::Remote);
            mock.assert();
        })
    }

    #[test]
    fn test_fetch_contributor_count_404_falls_back_to_zero() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", "/repos/test-org/ghost/contributors")
                .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
                .with_status(404)
                .create();

            let client = GitHubClient::with_base_url(&server.url(), "test-org");
            let count = client.fetch_contributor_count("ghost").await;

            assert_eq!(count.value, 0);
            assert!(count.is_fallback());
            // Contributor failures are silent: no error channel
            assert!(count.error.is_none());
            mock.assert();
        })
    }

    #[test]
    fn test_fetch_organization_success_and_failure() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let body = json!({
                "login": "test-org",
                "id": 99,
                "description": "African tech innovation",
                "public_repos": 4,
                "followers": 10,
                "following": 0,
                "created_at": "2023-05-01T00:00:00Z"
            })
            .to_string();

            let mock = server
                .mock("GET", "/orgs/test-org")
                .with_header("Content-Type", "application/json")
                .with_body(body)
                .create();

            let client = GitHubClient::with_base_url(&server.url(), "test-org");

            let org = client.fetch_organization().await;
            assert_eq!(org.unwrap().public_repos, 4);
            mock.assert();

            // Second call hits no matching mock and degrades to None
            let missing = GitHubClient::with_base_url(&server.url(), "other-org");
            assert!(missing.fetch_organization().await.is_none());
        })
    }
}
