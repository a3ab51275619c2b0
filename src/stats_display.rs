// src/stats_display.rs
// =============================================================================
// This module maps aggregate statistics into human-facing display strings.
//
// The website shows figures like "12+ developers" and "4+ projects". This
// mapping is pure (no I/O) and can never fail: every field has a fixed
// fallback used when no real statistics are available, so the caller
// always has something to show - never a blank, never "NaN+".
//
// Rust concepts:
// - Option<&T>: "statistics, or the absence of them"
// - format!: Building the suffixed display strings
// - Constants: Fallbacks and floors live in one place
// =============================================================================

use serde::Serialize;

use crate::github::AggregateStats;

// The community is larger than what contributor sampling can see, so the
// developer figure is floored at a known-reasonable minimum
const DEVELOPER_FLOOR: usize = 12;

// Fixed fallbacks shown while statistics are loading or after a failed
// fetch. Conservative, known-true historical values.
const FALLBACK_DEVELOPERS: &str = "12+";
const FALLBACK_PROJECTS: &str = "4+";
const FALLBACK_LANGUAGES: &str = "5";
const FALLBACK_STARS: &str = "2";
const FALLBACK_FORKS: &str = "3";

// Countries is organizational metadata, not repository metadata, so it is
// always this constant regardless of what GitHub says
const COUNTRIES: &str = "8";

/// Display-ready statistic strings with fallbacks baked in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedStats {
    pub developers: String,
    pub projects: String,
    pub countries: String,
    pub languages: String,
    pub stars: String,
    pub forks: String,
}

impl FormattedStats {
    // Builds display strings from measured statistics, or from the fixed
    // fallbacks when none are available.
    //
    // Callers pass None both while loading and when the whole fetch
    // degraded to fallback data - a degraded snapshot full of zeros must
    // render as "12+", not "0+".
    pub fn from_stats(stats: Option<&AggregateStats>) -> Self {
        match stats {
            Some(s) => FormattedStats {
                developers: format!("{}+", s.total_contributors.max(DEVELOPER_FLOOR)),
                projects: format!("{}+", s.total_repos),
                countries: COUNTRIES.to_string(),
                languages: s.languages.len().to_string(),
                stars: s.total_stars.to_string(),
                forks: s.total_forks.to_string(),
            },
            None => FormattedStats {
                developers: FALLBACK_DEVELOPERS.to_string(),
                projects: FALLBACK_PROJECTS.to_string(),
                countries: COUNTRIES.to_string(),
                languages: FALLBACK_LANGUAGES.to_string(),
                stars: FALLBACK_STARS.to_string(),
                forks: FALLBACK_FORKS.to_string(),
            },
        }
    }
}
