//! # docnav
//!
//! A navigation and ordering toolchain for markdown documentation sites.
//! Your filesystem is the data source: top-level directories become
//! collections, markdown files with TOML frontmatter become entries, and
//! frontmatter `depends_on` chains decide reading order.
//!
//! # The Ordering Problem
//!
//! Documentation reads best when prerequisite concepts come before the
//! material that builds on them. Rather than maintaining a separate
//! ordering file, each entry names its prerequisite:
//!
//! ```text
//! concepts/large-language-models.md          # no depends_on — a root
//! concepts/context.md   depends_on = "large-language-models"
//! concepts/tools.md     depends_on = "context"
//! ```
//!
//! The [`deps`] module linearizes these chains deterministically:
//! prerequisites first, ties broken by slug, malformed data (missing
//! targets, cycles) degrading to a defined fallback instead of failing.
//! Collections that don't need chain ordering sort alphabetically by
//! title — configured per collection in `collections.toml`.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json   (filesystem → structured data)
//! 2. Order     per-collection sort: dependency chains or titles
//! 3. Navigate  unified prev/next list, slug resolution, link targets
//! ```
//!
//! Every command starts from the same scan so the JSON manifest stays the
//! single description of the site's content, inspectable at any point.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`deps`] | The dependency-chain sort: deterministic topological order over `depends_on` forests |
//! | [`scan`] | Walks the content directory, parses entries, produces the manifest; warning-level validation |
//! | [`collections`] | `collections.toml` config, per-collection sorting, unified nav, related-content resolution |
//! | [`frontmatter`] | `+++`-fenced TOML frontmatter parsing |
//! | [`linking`] | Slug → URL resolution (ambiguity-aware) and link-target export |
//! | [`text`] | Markdown prose extraction and formatting-insensitive content hashes |
//! | [`output`] | CLI output formatting — indexed, information-first display |
//! | [`types`] | Shared types serialized in the manifest |
//!
//! # Design Decisions
//!
//! ## Tolerate Malformed Chains, Report Them Separately
//!
//! The sort never fails: an entry whose prerequisite doesn't exist starts
//! its own chain, and a dependency cycle falls back to file order. A broken
//! reference shouldn't take the site down — but it should be visible, so
//! `docnav check` reports dangling references and cycles as warnings
//! without changing what renders.
//!
//! ## TOML Frontmatter
//!
//! Frontmatter is TOML between `+++` fences. One parser serves config
//! files and entry metadata, and unknown keys are rejected in both, so a
//! typo like `dependson` is a parse error instead of a silently ignored
//! field.
//!
//! ## Content Hashes in the Manifest
//!
//! Every entry carries a hash of its extracted prose, normalized so
//! formatting edits don't change it. Downstream tooling (audio
//! generation, search indexing) uses it to skip entries whose words
//! haven't changed.

pub mod collections;
pub mod deps;
pub mod frontmatter;
pub mod linking;
pub mod output;
pub mod scan;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
