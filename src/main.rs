// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Fetch/aggregate data and print it (table or JSON)
// 4. Exit with proper code (0 = success, 1 = degraded data, 2 = error)
//
// Rust concepts used:
// - async/await: Because the GitHub fetches are network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod github; // src/github/ - API client, models, statistics
mod resources; // src/resources/ - static catalog and filtering
mod stats_display; // src/stats_display.rs - display-string mapping

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use serde::Serialize;

use github::{
    collect_stats, curated_details, qualifying_repos, AggregateStats, CancelToken, GitHubClient,
    Organization, Repo, StatsOptions,
};
use stats_display::FormattedStats;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success with real data
//   Ok(1) = GitHub data degraded to fallbacks
//   Err = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Stats {
            org,
            base_url,
            contributor_sample,
            json,
        } => handle_stats(&base_url, &org, contributor_sample, json).await,
        Commands::Repos {
            org,
            base_url,
            json,
        } => handle_repos(&base_url, &org, json).await,
        Commands::Resources {
            category,
            search,
            json,
        } => handle_resources(&category, &search, json),
    }
}

// Spawns a background task that flips the cancel token on Ctrl-C,
// so a rate-limited or hung aggregation can be abandoned cleanly:
// no new requests are issued after the signal.
fn cancel_on_ctrl_c() -> CancelToken {
    let cancel = CancelToken::new();

    let background = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n⚠️  Cancelled - abandoning remaining requests");
            background.cancel();
        }
    });

    cancel
}

// JSON shape for the `stats` subcommand
//
// `stats` is None when the fetch degraded: consumers should then rely on
// the formatted fallback figures, exactly like the website does.
#[derive(Serialize)]
struct StatsReport<'a> {
    organization: Option<&'a Organization>,
    stats: Option<&'a AggregateStats>,
    formatted: &'a FormattedStats,
    degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a String>,
}

// Handles the 'stats' subcommand
async fn handle_stats(base_url: &str, org: &str, contributor_sample: usize, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Aggregating repository statistics for {}", org);
    }

    let client = GitHubClient::with_base_url(base_url, org);
    let cancel = cancel_on_ctrl_c();
    let options = StatsOptions { contributor_sample };

    // The organization record and the statistics are independent, so the
    // two fetch sequences run concurrently
    let (organization, snapshot) = futures::future::join(
        client.fetch_organization(),
        collect_stats(&client, options, &cancel),
    )
    .await;

    // A degraded snapshot is full of zeros-by-failure; render the fixed
    // fallbacks instead of pretending we measured zero
    let measured = if snapshot.is_degraded() {
        None
    } else {
        Some(&snapshot.stats)
    };
    let formatted = FormattedStats::from_stats(measured);

    if json {
        let report = StatsReport {
            organization: organization.as_ref(),
            stats: measured,
            formatted: &formatted,
            degraded: snapshot.is_degraded(),
            error: snapshot.error.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(org_info) = &organization {
            let description = org_info.description.as_deref().unwrap_or("");
            println!(
                "🏢 {} - {} ({} public repos)",
                org_info.login, description, org_info.public_repos
            );
        }

        if snapshot.is_degraded() {
            println!("⚠️  GitHub data unavailable - showing fallback figures");
            if let Some(message) = &snapshot.error {
                println!("   ({})", message);
            }
        }

        println!("\n📊 Community statistics:");
        println!("   🧑‍💻 Developers: {}", formatted.developers);
        println!("   📦 Projects:   {}", formatted.projects);
        println!("   🌍 Countries:  {}", formatted.countries);
        println!("   💬 Languages:  {}", formatted.languages);
        println!("   ⭐ Stars:      {}", formatted.stars);
        println!("   🍴 Forks:      {}", formatted.forks);
    }

    if snapshot.is_degraded() {
        Ok(1) // Exit code 1 = fallback figures shown
    } else {
        Ok(0)
    }
}

// JSON shape for one repository in the `repos` listing: the fetched
// metadata merged with any curated display details
#[derive(Serialize)]
struct RepoReport<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'static str>,
    description: Option<&'a str>,
    url: &'a str,
    language: Option<&'a str>,
    stars: u64,
    forks: u64,
    open_issues: u64,
    pushed_at: &'a str,
    topics: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    technologies: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    impact: Option<&'static str>,
}

impl<'a> RepoReport<'a> {
    fn from_repo(repo: &'a Repo) -> Self {
        let details = curated_details(&repo.name);

        RepoReport {
            name: &repo.name,
            display_name: details.map(|d| d.display_name),
            // Prefer GitHub's description, fall back to the curated one
            description: repo
                .description
                .as_deref()
                .or(details.map(|d| d.description)),
            url: &repo.html_url,
            language: repo.language.as_deref(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            pushed_at: &repo.pushed_at,
            topics: &repo.topics,
            technologies: details.map(|d| d.technologies),
            status: details.map(|d| d.status),
            impact: details.map(|d| d.impact),
        }
    }
}

// Handles the 'repos' subcommand
async fn handle_repos(base_url: &str, org: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Listing repositories for {}", org);
    }

    let client = GitHubClient::with_base_url(base_url, org);
    let cancel = cancel_on_ctrl_c();

    let fetched = client.fetch_repos(&cancel).await;
    let repos = qualifying_repos(&fetched.value);

    let reports: Vec<RepoReport> = repos.iter().map(|r| RepoReport::from_repo(r)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if fetched.is_fallback() {
        println!("⚠️  Could not list repositories - try again later");
    } else if reports.is_empty() {
        println!("📭 No qualifying repositories found");
    } else {
        print_repo_table(&reports);
    }

    if fetched.is_fallback() {
        Ok(1) // Exit code 1 = listing unavailable
    } else {
        Ok(0)
    }
}

// Prints repositories as a human-readable table in the terminal
fn print_repo_table(reports: &[RepoReport]) {
    println!();
    println!(
        "{:<30} {:<14} {:>6} {:>6}  {:<25}",
        "REPOSITORY", "LANGUAGE", "STARS", "FORKS", "IMPACT"
    );
    println!("{}", "=".repeat(86));

    for report in reports {
        // Prefer the curated display name when we have one
        let name = report.display_name.unwrap_or(report.name);

        // Truncate the name if too long for display
        let name_display = if name.len() > 27 {
            format!("{}...", &name[..27])
        } else {
            name.to_string()
        };

        println!(
            "{:<30} {:<14} {:>6} {:>6}  {:<25}",
            name_display,
            report.language.unwrap_or("-"),
            report.stars,
            report.forks,
            report.impact.unwrap_or(""),
        );
    }

    println!();
    println!("📋 Total: {} repositories", reports.len());
}

// Handles the 'resources' subcommand
//
// Purely local: the catalog is compiled in, so this never touches the
// network and always exits 0 (an empty match is a valid outcome).
fn handle_resources(category: &str, search: &str, json: bool) -> Result<i32> {
    let entries = resources::all_entries();
    let visible = resources::filter_entries(&entries, category, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(0);
    }

    if visible.is_empty() {
        println!(
            "📭 No resources match category '{}' and search '{}'",
            category, search
        );
        return Ok(0);
    }

    println!();
    println!(
        "{:<26} {:<10} {:<15} {:<50}",
        "TITLE", "TYPE", "SECTION", "URL"
    );
    println!("{}", "=".repeat(103));

    for entry in &visible {
        println!(
            "{:<26} {:<10} {:<15} {:<50}",
            entry.title,
            entry.resource_type.label(),
            entry.section,
            entry.url
        );
    }

    println!();
    println!("📋 Total: {} resources", visible.len());

    Ok(0)
}
