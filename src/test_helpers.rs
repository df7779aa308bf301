//! Shared test utilities for the docnav test suite.
//!
//! Builds throwaway content trees in temp directories and provides
//! lookup helpers that panic with a clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = fixture_content();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let concepts = find_collection(&manifest, "concepts");
//! assert_eq!(entry_slugs(concepts), ["large-language-models", "context", "tools"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{Collection, Entry};

// =========================================================================
// Fixture setup
// =========================================================================

/// Build the standard fixture tree: three configured collections, a
/// dependency chain in `concepts`, and a cross-collection `relates_to`.
///
/// ```text
/// content/
/// ├── collections.toml      # concepts (dependency), patterns, failure-modes
/// ├── concepts/
/// │   ├── large-language-models.md
/// │   ├── context.md        # depends_on = "large-language-models"
/// │   └── tools.md          # depends_on = "context"
/// ├── patterns/
/// │   ├── small-steps.md    # relates_to = ["context-rot"]
/// │   └── tight-feedback.md
/// └── failure-modes/
///     └── context-rot.md
/// ```
pub fn fixture_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::write(
        root.join("collections.toml"),
        concat!(
            "[[collections]]\n",
            "name = \"concepts\"\n",
            "display_name = \"Concepts\"\n",
            "description = \"Foundational knowledge.\"\n",
            "sort = \"dependency\"\n",
            "\n",
            "[[collections]]\n",
            "name = \"patterns\"\n",
            "display_name = \"Patterns\"\n",
            "sort = \"alphabetical\"\n",
            "\n",
            "[[collections]]\n",
            "name = \"failure-modes\"\n",
            "display_name = \"Failure Modes\"\n",
            "sort = \"alphabetical\"\n",
        ),
    )
    .unwrap();

    write_entry(
        root,
        "concepts",
        "large-language-models",
        "Large Language Models",
        "",
        "Models predict the next token.",
    );
    write_entry(
        root,
        "concepts",
        "context",
        "Context",
        "depends_on = \"large-language-models\"",
        "Everything the model can see.",
    );
    write_entry(
        root,
        "concepts",
        "tools",
        "Tools",
        "depends_on = \"context\"",
        "How models act on the world.",
    );
    write_entry(
        root,
        "patterns",
        "small-steps",
        "Small Steps",
        "relates_to = [\"context-rot\"]",
        "Keep each change reviewable.",
    );
    write_entry(
        root,
        "patterns",
        "tight-feedback",
        "Tight Feedback",
        "",
        "Close the loop quickly.",
    );
    write_entry(
        root,
        "failure-modes",
        "context-rot",
        "Context Rot",
        "",
        "Long sessions accumulate noise.",
    );

    tmp
}

/// Write one entry file with TOML frontmatter.
///
/// `extra_frontmatter` is appended verbatim after the title line, so
/// tests can add `depends_on`, `relates_to`, `draft`, etc. Nested slugs
/// (`advanced/tips`) create intermediate directories.
pub fn write_entry(
    root: &Path,
    collection: &str,
    slug: &str,
    title: &str,
    extra_frontmatter: &str,
    body: &str,
) {
    let path = root.join(collection).join(format!("{slug}.md"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut frontmatter = format!("title = \"{title}\"\n");
    if !extra_frontmatter.is_empty() {
        frontmatter.push_str(extra_frontmatter);
        frontmatter.push('\n');
    }
    fs::write(path, format!("+++\n{frontmatter}+++\n\n{body}\n")).unwrap();
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a collection by name. Panics if not found.
pub fn find_collection<'a>(manifest: &'a Manifest, name: &str) -> &'a Collection {
    manifest
        .collections
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = manifest
                .collections
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            panic!("collection '{name}' not found. Available: {names:?}")
        })
}

/// Find an entry by slug within a collection. Panics if not found.
pub fn find_entry<'a>(collection: &'a Collection, slug: &str) -> &'a Entry {
    collection
        .entries
        .iter()
        .find(|e| e.slug == slug)
        .unwrap_or_else(|| {
            let slugs = entry_slugs(collection);
            panic!("entry '{slug}' not found in '{}'. Available: {slugs:?}", collection.name)
        })
}

/// Entry slugs in manifest order.
pub fn entry_slugs(collection: &Collection) -> Vec<&str> {
    collection.entries.iter().map(|e| e.slug.as_str()).collect()
}
