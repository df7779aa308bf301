//! Content directory scanning and manifest generation.
//!
//! Walks a content root to discover collections and their entries,
//! producing the structured manifest every other command consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── collections.toml             # Site configuration (optional)
//! ├── concepts/                    # Collection (top-level directory)
//! │   ├── large-language-models.md
//! │   ├── context.md               # depends_on = "large-language-models"
//! │   └── advanced/
//! │       └── sampling.md          # slug: advanced/sampling
//! ├── patterns/
//! │   └── small-steps.md
//! └── failure-modes/
//!     └── context-rot.md
//! ```
//!
//! Collections appear in configured order (then alphabetically), and each
//! collection's entries come out already sorted by its configured method —
//! dependency chains or titles. Draft entries are skipped entirely.
//!
//! ## Validation
//!
//! The scanner enforces hard rules:
//! - Every entry must carry parseable frontmatter with a title
//! - No duplicate slugs within a collection
//!
//! Softer content problems — dangling references, dependency cycles —
//! are surfaced by [`validate`] as warnings so `check` can report them
//! without failing the build.

use crate::collections::{self, CollectionsConfig};
use crate::frontmatter::{self, FrontmatterError};
use crate::text;
use crate::types::{Collection, Entry};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] collections::ConfigError),
    #[error("Content root is not a directory: {0}")]
    MissingRoot(PathBuf),
    #[error("{path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: FrontmatterError,
    },
    #[error("Duplicate slug '{slug}' in collection '{collection}'")]
    DuplicateSlug { slug: String, collection: String },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub collections: Vec<Collection>,
}

impl Manifest {
    /// Total entry count across all collections.
    pub fn entry_count(&self) -> usize {
        self.collections.iter().map(|c| c.entries.len()).sum()
    }
}

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Scan a content root into a manifest.
///
/// Collections are the top-level directories (hidden ones skipped);
/// entries are the markdown files inside them, however deeply nested.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let config = collections::load_config(root)?;
    let discovered = discover_collections(root)?;
    let ordered = config.ordered_names(&discovered);

    let mut result = Vec::with_capacity(ordered.len());
    for name in ordered {
        let entries = collect_entries(root, &name)?;
        let sorted = collections::sort_entries(config.sort_for(&name), entries);
        result.push(Collection {
            display_name: config.display_name_for(&name),
            description: config.description_for(&name),
            name,
            entries: sorted,
        });
    }

    Ok(Manifest {
        collections: result,
    })
}

/// Top-level directory names under the content root.
fn discover_collections(root: &Path) -> Result<Vec<String>, ScanError> {
    let mut names: Vec<String> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            if name.starts_with('.') { None } else { Some(name) }
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Parse every markdown file in one collection directory.
///
/// Files are visited in sorted path order so the pre-sort entry sequence
/// (which the dependency sort's residual fallback preserves) is stable
/// across filesystems.
fn collect_entries(root: &Path, collection: &str) -> Result<Vec<Entry>, ScanError> {
    let dir = root.join(collection);
    let mut entries = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for file in WalkDir::new(&dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_markdown(e.path()))
    {
        let path = file.path();
        let slug = slug_for(path, &dir);

        let raw = fs::read_to_string(path)?;
        let (fm, body) = frontmatter::parse(&raw).map_err(|source| ScanError::Frontmatter {
            path: path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string(),
            source,
        })?;

        if fm.draft {
            continue;
        }

        if !seen.insert(slug.clone()) {
            return Err(ScanError::DuplicateSlug {
                slug,
                collection: collection.to_string(),
            });
        }

        let prose = text::extract_text(body);
        entries.push(Entry {
            slug,
            title: fm.title,
            description: fm.description,
            depends_on: fm.depends_on,
            relates_to: fm.relates_to,
            aliases: fm.aliases,
            link_id: fm.id,
            source_path: path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/"),
            content_hash: text::content_hash(&prose),
            word_count: text::word_count(&prose),
        });
    }

    Ok(entries)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.as_str()))
}

/// Slug for a file: its path relative to the collection directory, with
/// the extension dropped and `/` separators regardless of platform.
///
/// `context.md` → `context`; `advanced/sampling.mdx` → `advanced/sampling`.
fn slug_for(path: &Path, collection_dir: &Path) -> String {
    let rel = path.strip_prefix(collection_dir).unwrap_or(path);
    rel.with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Warning-level validation
// ============================================================================

/// A content problem worth reporting but not worth failing a build over.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// `depends_on` names a slug absent from the same collection.
    DanglingDependsOn {
        collection: String,
        slug: String,
        target: String,
    },
    /// An entry lists itself as its own prerequisite.
    SelfDependency { collection: String, slug: String },
    /// `relates_to` names a slug absent from every collection.
    DanglingRelatesTo {
        collection: String,
        slug: String,
        target: String,
    },
    /// Entries unreachable from any dependency root — a cycle. They still
    /// render, appended in file order, but the chain ordering is lost.
    DependencyCycle {
        collection: String,
        slugs: Vec<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DanglingDependsOn {
                collection,
                slug,
                target,
            } => write!(
                f,
                "{collection}/{slug}: depends_on '{target}' does not exist in '{collection}'"
            ),
            Warning::SelfDependency { collection, slug } => {
                write!(f, "{collection}/{slug}: entry depends on itself")
            }
            Warning::DanglingRelatesTo {
                collection,
                slug,
                target,
            } => write!(
                f,
                "{collection}/{slug}: relates_to '{target}' does not exist in any collection"
            ),
            Warning::DependencyCycle { collection, slugs } => write!(
                f,
                "{collection}: dependency cycle with no entry point: {}",
                slugs.join(" → ")
            ),
        }
    }
}

/// Check reference integrity across a scanned manifest.
///
/// The ordering contract tolerates all of these (missing targets become
/// roots, cycles fall back to file order); `check` surfaces them anyway
/// so authors can fix the content.
pub fn validate(manifest: &Manifest) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let all_slugs: HashSet<&str> = manifest
        .collections
        .iter()
        .flat_map(|c| c.entries.iter().map(|e| e.slug.as_str()))
        .collect();

    for collection in &manifest.collections {
        let local: HashSet<&str> = collection.entries.iter().map(|e| e.slug.as_str()).collect();

        for entry in &collection.entries {
            if let Some(target) = &entry.depends_on {
                if *target == entry.slug {
                    warnings.push(Warning::SelfDependency {
                        collection: collection.name.clone(),
                        slug: entry.slug.clone(),
                    });
                } else if !local.contains(target.as_str()) {
                    warnings.push(Warning::DanglingDependsOn {
                        collection: collection.name.clone(),
                        slug: entry.slug.clone(),
                        target: target.clone(),
                    });
                }
            }

            for target in &entry.relates_to {
                if !all_slugs.contains(target.as_str()) {
                    warnings.push(Warning::DanglingRelatesTo {
                        collection: collection.name.clone(),
                        slug: entry.slug.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        if let Some(cycle) = find_cycle_members(collection) {
            warnings.push(Warning::DependencyCycle {
                collection: collection.name.clone(),
                slugs: cycle,
            });
        }
    }

    warnings
}

/// Entries unreachable by walking dependents from the roots.
///
/// Mirrors the sorter's reachability: roots are entries whose
/// `depends_on` is absent, missing, or a self-reference; everything the
/// walk never reaches is cycle-bound.
fn find_cycle_members(collection: &Collection) -> Option<Vec<String>> {
    let by_slug: HashMap<&str, &Entry> = collection
        .entries
        .iter()
        .map(|e| (e.slug.as_str(), e))
        .collect();

    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut stack: Vec<&str> = Vec::new();
    for entry in &collection.entries {
        match entry.depends_on.as_deref() {
            Some(target) if target != entry.slug && by_slug.contains_key(target) => {
                dependents.entry(target).or_default().push(&entry.slug);
            }
            _ => stack.push(&entry.slug),
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    while let Some(slug) = stack.pop() {
        if !visited.insert(slug) {
            continue;
        }
        if let Some(children) = dependents.get(slug) {
            stack.extend(children.iter().copied());
        }
    }

    let unreached: Vec<String> = collection
        .entries
        .iter()
        .filter(|e| !visited.contains(e.slug.as_str()))
        .map(|e| e.slug.clone())
        .collect();

    if unreached.is_empty() { None } else { Some(unreached) }
}
