//! Title and description heuristics.
//!
//! Titles resolve in order: front matter `title` > first H1 heading >
//! file name (directory name for `index.md`) > [`UNTITLED`].
//! Descriptions resolve in order: front matter `description` > first body
//! paragraph, reduced to plain text and capped at [`DESCRIPTION_MAX_CHARS`].

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::frontmatter::{ParsedDocument, parse_front_matter};

/// Title used when nothing better is available.
pub const UNTITLED: &str = "Untitled";

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 150;

// Whitespace classes are ASCII-only so full-width spaces (U+3000) in
// Japanese text survive as content.
static H1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#(?-u:\s)+(.+)$").expect("invalid H1 regex"));

static ORDER_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+_").expect("invalid order prefix regex"));

// A tag starts with a name, `/`, `!` or `?`; a bare `<` is text.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!?][^>]*>").expect("invalid tag regex"));

static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s)+").expect("invalid whitespace regex"));

/// Extract the display title of a markdown document.
///
/// `file_path` enables the file-name fallback; without it a document with
/// neither front matter title nor H1 is [`UNTITLED`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use docnav_meta::extract_title;
///
/// assert_eq!(extract_title("# Hello\n", None), "Hello");
/// assert_eq!(extract_title("text", Some(Path::new("/data/02_intro.md"))), "intro");
/// assert_eq!(extract_title("text", Some(Path::new("/data/03_guide/index.md"))), "guide");
/// assert_eq!(extract_title("text", None), "Untitled");
/// ```
#[must_use]
pub fn extract_title(markdown: &str, file_path: Option<&Path>) -> String {
    title_from(&parse_front_matter(markdown), file_path)
}

/// [`extract_title`] for an already parsed document.
#[must_use]
pub fn title_from(doc: &ParsedDocument<'_>, file_path: Option<&Path>) -> String {
    if let Some(title) = doc.metadata.title() {
        return title.to_owned();
    }

    if let Some(caps) = H1_PATTERN.captures(doc.content) {
        return caps[1].trim_ascii().to_owned();
    }

    file_path.map_or_else(|| UNTITLED.to_owned(), title_from_file_name)
}

/// Derive a title from a file name.
///
/// `index.md` is named after its parent directory.
fn title_from_file_name(file_path: &Path) -> String {
    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name.as_ref());

    if stem == "index" {
        let dir_name = file_path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        strip_order_prefix(&dir_name).to_owned()
    } else {
        strip_order_prefix(stem).to_owned()
    }
}

/// Remove a leading numeric ordering prefix (`01_`, `2_`, ...) from a name.
///
/// ```
/// use docnav_meta::strip_order_prefix;
///
/// assert_eq!(strip_order_prefix("01_intro"), "intro");
/// assert_eq!(strip_order_prefix("intro_01"), "intro_01");
/// ```
#[must_use]
pub fn strip_order_prefix(name: &str) -> &str {
    ORDER_PREFIX_PATTERN
        .find(name)
        .map_or(name, |m| &name[m.end()..])
}

/// Extract a short plain-text description of a markdown document.
///
/// Every H1 line is dropped before the first paragraph is taken. Returns an
/// empty string when the body has no paragraph.
#[must_use]
pub fn extract_description(markdown: &str) -> String {
    description_from(&parse_front_matter(markdown))
}

/// [`extract_description`] for an already parsed document.
#[must_use]
pub fn description_from(doc: &ParsedDocument<'_>) -> String {
    if let Some(description) = doc.metadata.description() {
        return description.to_owned();
    }

    let without_headings = H1_PATTERN.replace_all(doc.content, "");
    first_paragraph(without_headings.trim_ascii()).map_or_else(String::new, summarize)
}

/// Text up to the first blank line, or `None` for empty input.
fn first_paragraph(text: &str) -> Option<&str> {
    if text.is_empty() {
        return None;
    }
    Some(text.split_once("\n\n").map_or(text, |(first, _)| first))
}

/// Strip tags, collapse whitespace and cap the length.
fn summarize(paragraph: &str) -> String {
    let plain = TAG_PATTERN.replace_all(paragraph, "");
    let collapsed = WHITESPACE_PATTERN.replace_all(&plain, " ");
    truncate_chars(&collapsed, DESCRIPTION_MAX_CHARS).to_owned()
}

/// Truncate to at most `max` characters without splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
