//! TOML frontmatter parsing for content entries.
//!
//! Every entry opens with a `+++`-fenced TOML block:
//!
//! ```text
//! +++
//! title = "Context"
//! depends_on = "large-language-models"
//! relates_to = ["context-rot"]
//! +++
//!
//! Body markdown...
//! ```
//!
//! `title` is the only required field. Unknown keys are rejected to catch
//! typos early, same policy as the collections config.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("missing frontmatter: file must start with +++")]
    Missing,
    #[error("unclosed frontmatter: no terminating +++ found")]
    Unclosed,
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Entry metadata as written by authors.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frontmatter {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Slug of the prerequisite entry within the same collection.
    #[serde(default)]
    pub depends_on: Option<String>,
    /// Slugs of related entries, any collection.
    #[serde(default)]
    pub relates_to: Vec<String>,
    /// Alternate link ids for the link-target map.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Overrides the slug as the link-target id.
    #[serde(default)]
    pub id: Option<String>,
    /// Drafts are skipped by the scanner.
    #[serde(default)]
    pub draft: bool,
}

const FENCE: &str = "+++";

/// Split a file into parsed frontmatter and the markdown body.
///
/// The opening fence must be the first line; the closing fence a line of
/// its own. The body is everything after the closing fence, with a single
/// leading newline stripped.
pub fn parse(content: &str) -> Result<(Frontmatter, &str), FrontmatterError> {
    let rest = content
        .strip_prefix(FENCE)
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
        .ok_or(FrontmatterError::Missing)?;

    // Closing fence: a +++ line after the opening one.
    let close = rest
        .find("\n+++")
        .ok_or(FrontmatterError::Unclosed)?;
    let (toml_src, tail) = rest.split_at(close);
    let body = tail
        .strip_prefix("\n+++")
        .unwrap_or(tail)
        .trim_start_matches('\r')
        .strip_prefix('\n')
        .unwrap_or("");

    let fm: Frontmatter = toml::from_str(toml_src)?;
    Ok((fm, body))
}
