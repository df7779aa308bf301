//! Shared types serialized into the content manifest.
//!
//! Everything the scan stage emits and the nav/link tooling consumes lives
//! here, so the JSON shape stays identical across commands.

use serde::{Deserialize, Serialize};

/// A single markdown entry within a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// URL slug, derived from the file path relative to its collection
    /// (`context.md` → `context`, `advanced/tips.md` → `advanced/tips`).
    pub slug: String,
    /// Title from frontmatter.
    pub title: String,
    /// Short description from frontmatter, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Slug of the entry that should be read before this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    /// Slugs of related entries, possibly in other collections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relates_to: Vec<String>,
    /// Alternate link ids this entry answers to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Frontmatter override for the link-target id; the slug otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    /// Path of the source file relative to the content root.
    pub source_path: String,
    /// Hash of the entry's extracted text, formatting-insensitive.
    /// Lets downstream tooling (audio generation, caches) skip entries
    /// whose prose hasn't changed.
    pub content_hash: String,
    /// Word count of the extracted text.
    pub word_count: usize,
}

/// A collection with its entries in final display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Directory name under the content root; also the URL segment.
    pub name: String,
    /// Human-readable name for navigation headers.
    pub display_name: String,
    /// One-line description shown on section index pages.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub entries: Vec<Entry>,
}

/// One row of the unified navigation list that crosses section boundaries.
///
/// Used by prev/next navigation: the reading order runs through every
/// collection in configured order, each internally sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    pub slug: String,
    pub title: String,
    pub collection: String,
    pub section_name: String,
}

/// A resolved `relates_to` reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub slug: String,
    pub title: String,
    pub collection: String,
}

/// A link-target record for external link tooling.
///
/// Flattened from entries across all collections: `id` is the primary
/// lookup key (the slug unless frontmatter overrides it), `url` the final
/// site path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTarget {
    pub id: String,
    pub slug: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}
