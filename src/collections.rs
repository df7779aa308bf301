//! Collection configuration and cross-collection navigation.
//!
//! Collections are the top-level directories of the content root. An
//! optional `collections.toml` beside them controls display order, names,
//! and per-collection sort behavior:
//!
//! ```toml
//! [[collections]]
//! name = "concepts"
//! display_name = "Concepts"
//! description = "Foundational knowledge."
//! sort = "dependency"
//!
//! [[collections]]
//! name = "failure-modes"
//! sort = "alphabetical"
//! ```
//!
//! Configured collections come first, in file order; collections found on
//! disk but absent from the config follow alphabetically with defaults
//! (title-cased display name, alphabetical sort). Unknown keys are
//! rejected to catch typos early.

use crate::deps;
use crate::types::{Collection, Entry, NavEntry, RelatedItem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How a collection's entries are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Dependency-chain order: prerequisites before dependents.
    Dependency,
    /// Alphabetical by title.
    #[default]
    Alphabetical,
}

/// Per-collection settings from `collections.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionSettings {
    /// Directory name under the content root.
    pub name: String,
    /// Navigation header; defaults to the title-cased directory name.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort: SortMethod,
}

/// Site-wide collection configuration.
///
/// The `[[collections]]` order is the sidebar display order — the single
/// source of truth for which section comes first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionsConfig {
    #[serde(default)]
    pub collections: Vec<CollectionSettings>,
}

pub const CONFIG_FILE: &str = "collections.toml";

/// Load `collections.toml` from the content root.
///
/// A missing file is not an error — every collection then runs on
/// defaults.
pub fn load_config(root: &Path) -> Result<CollectionsConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(CollectionsConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

impl CollectionsConfig {
    pub fn settings_for(&self, name: &str) -> Option<&CollectionSettings> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Display name for a collection: configured value or title-cased
    /// directory name (`failure-modes` → "Failure Modes").
    pub fn display_name_for(&self, name: &str) -> String {
        self.settings_for(name)
            .and_then(|c| c.display_name.clone())
            .unwrap_or_else(|| title_case(name))
    }

    pub fn description_for(&self, name: &str) -> String {
        self.settings_for(name)
            .and_then(|c| c.description.clone())
            .unwrap_or_default()
    }

    pub fn sort_for(&self, name: &str) -> SortMethod {
        self.settings_for(name).map(|c| c.sort).unwrap_or_default()
    }

    /// Final display order for a set of discovered collection names:
    /// configured collections first in config order, then the rest
    /// alphabetically. Configured names with no directory on disk are
    /// skipped.
    pub fn ordered_names(&self, discovered: &[String]) -> Vec<String> {
        let mut ordered: Vec<String> = self
            .collections
            .iter()
            .filter(|c| discovered.iter().any(|d| *d == c.name))
            .map(|c| c.name.clone())
            .collect();

        let mut rest: Vec<String> = discovered
            .iter()
            .filter(|d| self.settings_for(d).is_none())
            .cloned()
            .collect();
        rest.sort();
        ordered.extend(rest);
        ordered
    }
}

fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Order a collection's entries by its configured sort method.
pub fn sort_entries(method: SortMethod, mut entries: Vec<Entry>) -> Vec<Entry> {
    match method {
        SortMethod::Dependency => {
            deps::sort_by_dependency_with(entries, |e| e.slug.as_str(), |e| e.depends_on.as_deref())
        }
        SortMethod::Alphabetical => {
            entries.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.slug.cmp(&b.slug)));
            entries
        }
    }
}

/// Build the unified navigation list across all sections.
///
/// Collections are already in display order with sorted entries, so this
/// is a flatten — used for prev/next navigation that crosses section
/// boundaries.
pub fn build_nav(collections: &[Collection]) -> Vec<NavEntry> {
    collections
        .iter()
        .flat_map(|collection| {
            collection.entries.iter().map(|entry| NavEntry {
                slug: entry.slug.clone(),
                title: entry.title.clone(),
                collection: collection.name.clone(),
                section_name: collection.display_name.clone(),
            })
        })
        .collect()
}

/// Resolve `relates_to` slugs to full entries.
///
/// Searches every collection in display order since related content can
/// live anywhere; the first match wins. Slugs that match nothing are
/// silently skipped — dangling references are a `check` warning, not a
/// render failure.
pub fn resolve_related(collections: &[Collection], slugs: &[String]) -> Vec<RelatedItem> {
    let mut items = Vec::new();
    for slug in slugs {
        for collection in collections {
            if let Some(entry) = collection.entries.iter().find(|e| e.slug == *slug) {
                items.push(RelatedItem {
                    slug: entry.slug.clone(),
                    title: entry.title.clone(),
                    collection: collection.name.clone(),
                });
                break;
            }
        }
    }
    items
}

/// A documented stock `collections.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# collections.toml — collection order, names, and sort behavior.
#
# Each [[collections]] block configures one top-level content directory.
# Block order here is the sidebar display order. Directories without a
# block still appear, alphabetically after configured ones, with a
# title-cased display name and alphabetical sorting.

[[collections]]
name = "concepts"
display_name = "Concepts"
description = "Foundational knowledge, ordered so prerequisites come first."
# "dependency" orders entries by their depends_on chains;
# "alphabetical" (the default) orders by title.
sort = "dependency"

[[collections]]
name = "patterns"
display_name = "Patterns"
description = "Common techniques employed in practice."
sort = "alphabetical"

[[collections]]
name = "failure-modes"
display_name = "Failure Modes"
description = "Dynamics that lead to unmaintainable output."
sort = "alphabetical"
"#
}
