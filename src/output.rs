//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity — title and positional index — with filesystem
//! paths as secondary context via indented `Source:` lines.
//!
//! ```text
//! Concepts (3 entries)
//!     001 Large Language Models
//!         Source: concepts/large-language-models.md
//!     002 Context
//!         Source: concepts/context.md
//!         Depends on: large-language-models
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::{Manifest, Warning};
use crate::types::NavEntry;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Format the scan inventory: every collection with its ordered entries.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    for collection in &manifest.collections {
        lines.push(format!(
            "{} ({})",
            collection.display_name,
            count_noun(collection.entries.len(), "entry", "entries")
        ));

        for (pos, entry) in collection.entries.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(pos + 1), entry.title));
            lines.push(format!("{}Source: {}", indent(2), entry.source_path));
            if let Some(dep) = &entry.depends_on {
                lines.push(format!("{}Depends on: {dep}", indent(2)));
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "Scanned {}, {}",
        count_noun(manifest.collections.len(), "collection", "collections"),
        count_noun(manifest.entry_count(), "entry", "entries")
    ));
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

// ============================================================================
// Nav
// ============================================================================

/// Format the unified navigation list, grouped by section with a running
/// index — the index is the prev/next reading position.
pub fn format_nav_output(nav: &[NavEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_section: Option<&str> = None;

    for (pos, entry) in nav.iter().enumerate() {
        if current_section != Some(entry.section_name.as_str()) {
            if current_section.is_some() {
                lines.push(String::new());
            }
            lines.push(entry.section_name.clone());
            current_section = Some(&entry.section_name);
        }
        lines.push(format!(
            "{}{} {} → /{}/{}/",
            indent(1),
            format_index(pos + 1),
            entry.title,
            entry.collection,
            entry.slug
        ));
    }

    lines
}

pub fn print_nav_output(nav: &[NavEntry]) {
    for line in format_nav_output(nav) {
        println!("{line}");
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format validation results: one line per warning, or the all-clear.
pub fn format_check_output(warnings: &[Warning]) -> Vec<String> {
    if warnings.is_empty() {
        return vec!["Content is valid".to_string()];
    }

    let mut lines = Vec::new();
    for warning in warnings {
        lines.push(format!("warning: {warning}"));
    }
    lines.push(format!("{} found", count_noun(warnings.len(), "warning", "warnings")));
    lines
}

pub fn print_check_output(warnings: &[Warning]) {
    for line in format_check_output(warnings) {
        println!("{line}");
    }
}
