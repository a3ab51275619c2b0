// src/resources/catalog.rs
// =============================================================================
// This module defines the static resource catalog.
//
// Unlike the GitHub statistics, nothing here is fetched: the catalog is
// hand-curated content compiled straight into the binary. Entries are
// grouped into fixed sections (documentation, templates, community,
// tools) and membership never changes at runtime.
//
// Rust concepts:
// - &'static str: String literals that live for the whole program
// - Enums with a fixed set of variants for the resource types
// - Functions returning owned Vecs built from static data
// =============================================================================

use serde::Serialize;

// The kind of resource an entry points at
//
// This is a closed set: the UI picks badges/ordering based on it, so a
// free-form string would invite typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceType {
    Guide,
    Template,
    Legal,
    Forum,
    Support,
    Planning,
    Tool,
    Config,
}

impl ResourceType {
    /// Human-readable label for table output
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Guide => "Guide",
            ResourceType::Template => "Template",
            ResourceType::Legal => "Legal",
            ResourceType::Forum => "Forum",
            ResourceType::Support => "Support",
            ResourceType::Planning => "Planning",
            ResourceType::Tool => "Tool",
            ResourceType::Config => "Config",
        }
    }
}

/// One curated link in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub resource_type: ResourceType,
    pub url: &'static str,
    /// Icon identifier the website maps to an actual glyph
    pub icon: &'static str,
    /// Fine-grained category label shown on the entry card
    pub category: &'static str,
    /// Key of the section this entry belongs to (the grouping/filter key)
    pub section: &'static str,
}

/// A named group of catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSection {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: Vec<ResourceEntry>,
}

// Builds the full catalog, grouped into its four sections.
//
// Section membership is fixed at definition time; the entries carry their
// section key so the flattened list stays filterable.
pub fn catalog() -> Vec<ResourceSection> {
    vec![
        ResourceSection {
            key: "documentation",
            title: "Official Documentation",
            description: "Comprehensive guides for contributing to African tech innovation projects",
            items: vec![
                ResourceEntry {
                    title: "Project README",
                    description: "Complete overview of the Jarida platform and its goals",
                    resource_type: ResourceType::Guide,
                    url: "https://github.com/jarida-io/jarida/blob/main/README.md",
                    icon: "FileText",
                    category: "Getting Started",
                    section: "documentation",
                },
                ResourceEntry {
                    title: "Contributing Guidelines",
                    description: "Step-by-step guide to contributing to our projects",
                    resource_type: ResourceType::Guide,
                    url: "https://github.com/jarida-io/jarida/blob/main/CONTRIBUTING.md",
                    icon: "Users",
                    category: "Contributing",
                    section: "documentation",
                },
                ResourceEntry {
                    title: "License Information",
                    description: "Open source license and usage terms",
                    resource_type: ResourceType::Legal,
                    url: "https://github.com/jarida-io/jarida/blob/main/LICENSE",
                    icon: "Scale",
                    category: "Legal",
                    section: "documentation",
                },
            ],
        },
        ResourceSection {
            key: "templates",
            title: "Project Templates",
            description: "Ready-to-use templates for African tech innovation projects",
            items: vec![
                ResourceEntry {
                    title: "Jarida Project Template",
                    description: "Complete template repository for starting new African tech projects",
                    resource_type: ResourceType::Template,
                    url: "https://github.com/jarida-io/jarida",
                    icon: "Folder",
                    category: "Templates",
                    section: "templates",
                },
                ResourceEntry {
                    title: "Web Application Starter",
                    description: "HTML/CSS/JavaScript foundation for web applications",
                    resource_type: ResourceType::Template,
                    url: "https://github.com/jarida-io/jarida/blob/main/index.html",
                    icon: "Globe",
                    category: "Templates",
                    section: "templates",
                },
                ResourceEntry {
                    title: "Package Configuration",
                    description: "Standard package.json setup for Node.js projects",
                    resource_type: ResourceType::Config,
                    url: "https://github.com/jarida-io/jarida/blob/main/package.json",
                    icon: "Package",
                    category: "Configuration",
                    section: "templates",
                },
            ],
        },
        ResourceSection {
            key: "community",
            title: "Community Resources",
            description: "Connect with the African tech innovation community",
            items: vec![
                ResourceEntry {
                    title: "GitHub Discussions",
                    description: "Join community discussions and Q&A sessions",
                    resource_type: ResourceType::Forum,
                    url: "https://github.com/jarida-io/jarida/discussions",
                    icon: "MessageSquare",
                    category: "Community",
                    section: "community",
                },
                ResourceEntry {
                    title: "Issue Tracker",
                    description: "Report bugs, request features, or get help",
                    resource_type: ResourceType::Support,
                    url: "https://github.com/jarida-io/jarida/issues",
                    icon: "Bug",
                    category: "Support",
                    section: "community",
                },
                ResourceEntry {
                    title: "Project Roadmap",
                    description: "See what's planned for future development",
                    resource_type: ResourceType::Planning,
                    url: "https://github.com/jarida-io/jarida/projects",
                    icon: "Map",
                    category: "Planning",
                    section: "community",
                },
            ],
        },
        ResourceSection {
            key: "tools",
            title: "Developer Tools",
            description: "Essential tools and resources for African tech developers",
            items: vec![
                ResourceEntry {
                    title: "GitHub CLI",
                    description: "Command-line interface for GitHub operations",
                    resource_type: ResourceType::Tool,
                    url: "https://cli.github.com/",
                    icon: "Terminal",
                    category: "Development",
                    section: "tools",
                },
                ResourceEntry {
                    title: "VS Code Extensions",
                    description: "Recommended extensions for African tech development",
                    resource_type: ResourceType::Tool,
                    url: "https://marketplace.visualstudio.com/",
                    icon: "Code",
                    category: "Development",
                    section: "tools",
                },
                ResourceEntry {
                    title: "Git Best Practices",
                    description: "Version control best practices for collaborative development",
                    resource_type: ResourceType::Guide,
                    url: "https://git-scm.com/doc",
                    icon: "GitBranch",
                    category: "Development",
                    section: "tools",
                },
            ],
        },
    ]
}

/// Flattens the catalog into a single entry list for filtering
pub fn all_entries() -> Vec<ResourceEntry> {
    catalog().into_iter().flat_map(|s| s.items).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_sections() {
        let sections = catalog();
        let keys: Vec<&str> = sections.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["documentation", "templates", "community", "tools"]);
    }

    #[test]
    fn test_every_section_is_nonempty() {
        for section in catalog() {
            assert!(
                !section.items.is_empty(),
                "section '{}' has no entries",
                section.key
            );
        }
    }

    #[test]
    fn test_entries_carry_their_section_key() {
        for section in catalog() {
            for entry in &section.items {
                assert_eq!(entry.section, section.key);
            }
        }
    }

    #[test]
    fn test_flattened_catalog_size() {
        assert_eq!(all_entries().len(), 12);
    }
}
