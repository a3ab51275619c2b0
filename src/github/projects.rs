// src/github/projects.rs
// =============================================================================
// This module holds curated display details for the flagship projects.
//
// GitHub gives us raw repository metadata, but the human-facing bits
// (display name, technology list, project status, impact area) are
// editorial content the community maintains by hand. The `repos` listing
// merges this table with the fetched data when the names match.
//
// Note: we deliberately do NOT invent per-project contributor numbers
// here. A repository without a real fetched count simply shows none.
// =============================================================================

/// Hand-maintained display details for one flagship project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetails {
    /// Repository name on GitHub (the join key)
    pub name: &'static str,
    /// Human-friendly project name
    pub display_name: &'static str,
    /// Editorial one-line description
    pub description: &'static str,
    /// Technologies the project is built with
    pub technologies: &'static [&'static str],
    /// Development status label
    pub status: &'static str,
    /// Impact area label
    pub impact: &'static str,
}

// The four flagship projects, keyed by repository name
pub const PROJECT_DETAILS: &[ProjectDetails] = &[
    ProjectDetails {
        name: "kenyan_sign_language_app",
        display_name: "Kenyan Sign Language App",
        description: "Mobile application for learning and translating Kenyan Sign Language",
        technologies: &["Kotlin", "Android", "Machine Learning"],
        status: "Active Development",
        impact: "Accessibility & Education",
    },
    ProjectDetails {
        name: "The_Journal",
        display_name: "The Journal",
        description: "OSS Android app for users to tell their stories and do reflections",
        technologies: &["Java", "Android", "SQLite"],
        status: "Community Driven",
        impact: "Personal Development",
    },
    ProjectDetails {
        name: "nexx",
        display_name: "NexX Wallet",
        description: "Versatile wallet running on top of the tbDEX SDK for decentralized finance",
        technologies: &["TypeScript", "React", "tbDEX", "Web3"],
        status: "Beta",
        impact: "Financial Inclusion",
    },
    ProjectDetails {
        name: "jarida",
        display_name: "Jarida Platform",
        description: "Showcase repository and template for African tech innovation projects",
        technologies: &["HTML", "CSS", "JavaScript", "Open Source"],
        status: "Template & Showcase",
        impact: "Developer Tools",
    },
];

/// Looks up curated details for a repository by its GitHub name
pub fn curated_details(repo_name: &str) -> Option<&'static ProjectDetails> {
    PROJECT_DETAILS.iter().find(|p| p.name == repo_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_repo_name() {
        let details = curated_details("nexx").unwrap();
        assert_eq!(details.display_name, "NexX Wallet");
        assert!(details.technologies.contains(&"tbDEX"));
    }

    #[test]
    fn test_unknown_repo_has_no_details() {
        assert!(curated_details("some-new-repo").is_none());
    }
}
