//! Plain-text extraction and content hashing for markdown bodies.
//!
//! The extracted text is the "speakable" prose of an entry: paragraph,
//! heading, and list text, image alt text, and link text. Code blocks,
//! inline code, and raw HTML are dropped — they are technical notation,
//! not prose. Downstream consumers are the audio pipeline's manifest and
//! anything that wants a formatting-insensitive change signal.
//!
//! The content hash deliberately survives cosmetic edits. Demoting a
//! heading, re-wrapping a paragraph, or bolding a word leaves the hash
//! unchanged; editing the words does not.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use sha2::{Digest, Sha256};

/// Hex digest length kept short for readability in manifests.
const HASH_LEN: usize = 16;

/// Extract the prose of a markdown body, one block per line.
pub fn extract_text(markdown: &str) -> String {
    let mut out = String::new();
    let mut in_code_block = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) if !in_code_block => out.push_str(&text),
            // Inline code is dropped entirely, not just unfenced.
            Event::Code(_) => {}
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::BlockQuote(_)) => out.push('\n'),
            // HTML and MDX-ish component tags carry no speakable text.
            Event::Html(_) | Event::InlineHtml(_) => {}
            _ => {}
        }
    }

    out.trim().to_string()
}

/// Word count of the extracted prose.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Formatting-insensitive hash of extracted text.
///
/// Normalizes before hashing — lowercase, all whitespace runs collapsed
/// to a single space — then truncates a SHA-256 hex digest to 16 chars.
pub fn content_hash(text: &str) -> String {
    let normalized = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let digest = Sha256::digest(normalized.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    hex[..HASH_LEN].to_string()
}
