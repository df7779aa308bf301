//! Slug resolution and link-target export.
//!
//! Internal links reference entries by slug, with or without the
//! collection prefix: `[[context]]` or `[[concepts/context]]`. The
//! resolver maps both forms to final site URLs. A bare slug that exists
//! in more than one collection is ambiguous — resolution fails with the
//! candidate URLs so the author can qualify the link.
//!
//! [`link_targets`] flattens the manifest into the records external link
//! tooling consumes: id (slug unless frontmatter overrides it), URL, and
//! aliases.

use crate::scan::Manifest;
use crate::types::LinkTarget;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LinkError {
    #[error("unknown link [[{id}]]: no content found with this slug")]
    Unknown { id: String },
    #[error("ambiguous link [[{id}]]: specify collection: {}", candidates.join(" or "))]
    Ambiguous { id: String, candidates: Vec<String> },
}

/// Resolves link ids to site URLs.
///
/// Built once from a scanned manifest; lookups are O(1). Qualified
/// `collection/slug` keys are always registered; bare slugs only while
/// they remain unique across collections.
#[derive(Debug)]
pub struct SlugResolver {
    unique: HashMap<String, String>,
    ambiguous: HashMap<String, Vec<String>>,
}

impl SlugResolver {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut unique: HashMap<String, String> = HashMap::new();
        let mut ambiguous: HashMap<String, Vec<String>> = HashMap::new();

        for collection in &manifest.collections {
            for entry in &collection.entries {
                let url = format!("/{}/{}/", collection.name, entry.slug);

                // The qualified form never collides: slugs are unique
                // within a collection.
                unique.insert(format!("{}/{}", collection.name, entry.slug), url.clone());

                // The bare form is only usable while unique.
                if let Some(candidates) = ambiguous.get_mut(&entry.slug) {
                    candidates.push(url);
                } else if let Some(existing) = unique.remove(&entry.slug) {
                    ambiguous.insert(entry.slug.clone(), vec![existing, url]);
                } else {
                    unique.insert(entry.slug.clone(), url);
                }
            }
        }

        Self { unique, ambiguous }
    }

    /// Resolve a link id to its site URL.
    pub fn resolve(&self, id: &str) -> Result<&str, LinkError> {
        if let Some(url) = self.unique.get(id) {
            return Ok(url.as_str());
        }
        if let Some(candidates) = self.ambiguous.get(id) {
            return Err(LinkError::Ambiguous {
                id: id.to_string(),
                candidates: candidates.clone(),
            });
        }
        Err(LinkError::Unknown { id: id.to_string() })
    }
}

/// Flatten every entry into a link-target record.
pub fn link_targets(manifest: &Manifest) -> Vec<LinkTarget> {
    manifest
        .collections
        .iter()
        .flat_map(|collection| {
            collection.entries.iter().map(|entry| LinkTarget {
                id: entry.link_id.clone().unwrap_or_else(|| entry.slug.clone()),
                slug: entry.slug.clone(),
                url: format!("/{}/{}/", collection.name, entry.slug),
                aliases: entry.aliases.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;
    use crate::test_helpers::*;

    #[test]
    fn bare_slug_resolves_while_unique() {
        let tmp = fixture_content();
        let manifest = scan(tmp.path()).unwrap();
        let resolver = SlugResolver::from_manifest(&manifest);

        assert_eq!(resolver.resolve("context").unwrap(), "/concepts/context/");
    }

    #[test]
    fn qualified_slug_always_resolves() {
        let tmp = fixture_content();
        let manifest = scan(tmp.path()).unwrap();
        let resolver = SlugResolver::from_manifest(&manifest);

        assert_eq!(
            resolver.resolve("concepts/context").unwrap(),
            "/concepts/context/"
        );
        assert_eq!(
            resolver.resolve("failure-modes/context-rot").unwrap(),
            "/failure-modes/context-rot/"
        );
    }

    #[test]
    fn colliding_bare_slug_becomes_ambiguous() {
        let tmp = fixture_content();
        // A second "context" in another collection.
        write_entry(
            tmp.path(),
            "patterns",
            "context",
            "Context Pattern",
            "",
            "Same slug, different section.",
        );

        let manifest = scan(tmp.path()).unwrap();
        let resolver = SlugResolver::from_manifest(&manifest);

        let err = resolver.resolve("context").unwrap_err();
        match err {
            LinkError::Ambiguous { candidates, .. } => {
                assert_eq!(candidates.len(), 2);
                assert!(candidates.contains(&"/concepts/context/".to_string()));
                assert!(candidates.contains(&"/patterns/context/".to_string()));
            }
            other => panic!("expected ambiguous, got {other:?}"),
        }

        // Qualified forms still work.
        assert_eq!(
            resolver.resolve("concepts/context").unwrap(),
            "/concepts/context/"
        );
        assert_eq!(
            resolver.resolve("patterns/context").unwrap(),
            "/patterns/context/"
        );
    }

    #[test]
    fn unknown_slug_is_error() {
        let tmp = fixture_content();
        let manifest = scan(tmp.path()).unwrap();
        let resolver = SlugResolver::from_manifest(&manifest);

        assert_eq!(
            resolver.resolve("nope"),
            Err(LinkError::Unknown { id: "nope".to_string() })
        );
    }

    #[test]
    fn targets_cover_every_entry() {
        let tmp = fixture_content();
        let manifest = scan(tmp.path()).unwrap();

        let targets = link_targets(&manifest);
        assert_eq!(targets.len(), manifest.entry_count());
    }

    #[test]
    fn target_id_defaults_to_slug() {
        let tmp = fixture_content();
        let manifest = scan(tmp.path()).unwrap();

        let targets = link_targets(&manifest);
        let context = targets.iter().find(|t| t.slug == "context").unwrap();
        assert_eq!(context.id, "context");
        assert_eq!(context.url, "/concepts/context/");
    }

    #[test]
    fn frontmatter_id_and_aliases_carried() {
        let tmp = fixture_content();
        write_entry(
            tmp.path(),
            "patterns",
            "tool-use",
            "Tool Use",
            "id = \"tooling\"\naliases = [\"tools-pattern\"]",
            "Use the tools.",
        );

        let manifest = scan(tmp.path()).unwrap();
        let targets = link_targets(&manifest);

        let target = targets.iter().find(|t| t.slug == "tool-use").unwrap();
        assert_eq!(target.id, "tooling");
        assert_eq!(target.aliases, ["tools-pattern"]);
    }
}
