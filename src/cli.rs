// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use crate::github::{DEFAULT_BASE_URL, DEFAULT_CONTRIBUTOR_SAMPLE, DEFAULT_ORG};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "jarida-stats",
    version = "0.1.0",
    about = "Fetch community project statistics from GitHub and browse curated resources",
    long_about = "jarida-stats aggregates public repository activity for a community organization \
                  (stars, forks, contributors, languages) and exposes the hand-curated resource \
                  catalog shown on the community website. All GitHub fetches are best-effort: \
                  failures degrade to conservative fallback figures instead of crashing."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (stats, repos, resources)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate repository statistics for the organization
    ///
    /// Example: jarida-stats stats --contributor-sample 3
    Stats {
        /// GitHub organization to aggregate
        #[arg(long, default_value = DEFAULT_ORG)]
        org: String,

        /// Base URL of the GitHub API (override for testing)
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// How many repositories to sample for contributor counts
        ///
        /// Each sampled repository costs one extra API request, so keep
        /// this small when running unauthenticated (60 requests/hour)
        #[arg(long, default_value_t = DEFAULT_CONTRIBUTOR_SAMPLE)]
        contributor_sample: usize,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the organization's public repositories
    ///
    /// Example: jarida-stats repos --json
    Repos {
        /// GitHub organization to list
        #[arg(long, default_value = DEFAULT_ORG)]
        org: String,

        /// Base URL of the GitHub API (override for testing)
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Browse the curated resource catalog
    ///
    /// Example: jarida-stats resources --category tools --search github
    Resources {
        /// Section to show: documentation, templates, community, tools, or all
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive substring to match against titles and descriptions
        #[arg(long, default_value = "")]
        search: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}
