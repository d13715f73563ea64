//! Front matter splitting for markdown documents.
//!
//! Front matter is a block delimited by `---` lines at the very start of a
//! document. Only flat `key: value` lines with ASCII word keys are
//! understood; anything else in the block (nested maps, lists, comments) is
//! skipped.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static FRONT_MATTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---(?-u:\s)*\n(.*?)\n---(?-u:\s)*\n(.*)\z")
        .expect("invalid front matter regex")
});

static FIELD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((?-u:\w)+):(?-u:\s)*(.+)$").expect("invalid field regex"));

/// Flat string fields parsed from a front matter block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse `key: value` lines. Non-matching lines are ignored and a
    /// repeated key keeps its last value.
    fn from_block(block: &str) -> Self {
        let fields = block
            .lines()
            .filter_map(|line| {
                let caps = FIELD_PATTERN.captures(line.trim_ascii())?;
                Some((caps[1].to_owned(), caps[2].trim_ascii().to_owned()))
            })
            .collect();
        Self { fields }
    }

    /// Raw value for `key`, `None` when absent or empty.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Explicit page title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// Explicit page description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    /// Modification time override, kept verbatim.
    #[must_use]
    pub fn modtime(&self) -> Option<&str> {
        self.get("modtime")
    }
}

/// A markdown document split into metadata and body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedDocument<'a> {
    /// Front matter fields (empty when the document has none).
    pub metadata: FrontMatter,
    /// Body text following the front matter block.
    pub content: &'a str,
}

impl ParsedDocument<'_> {
    /// Whether anything besides whitespace follows the front matter.
    ///
    /// Documents without a body are metadata-only stubs: they keep their
    /// place in navigation but get no URL.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.content.trim_ascii().is_empty()
    }
}

/// Split `markdown` into front matter and body.
///
/// Returns the whole input as content with empty metadata when the document
/// does not start with a delimited block.
#[must_use]
pub fn parse_front_matter(markdown: &str) -> ParsedDocument<'_> {
    let Some(caps) = FRONT_MATTER_PATTERN.captures(markdown) else {
        return ParsedDocument {
            metadata: FrontMatter::default(),
            content: markdown,
        };
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let content = caps.get(2).map_or("", |m| m.as_str());

    ParsedDocument {
        metadata: FrontMatter::from_block(block),
        content,
    }
}
