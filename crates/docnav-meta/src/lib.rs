//! Markdown metadata extraction for docnav.
//!
//! This crate provides the per-file half of navigation building:
//!
//! - [`parse_front_matter`]: split a document into its `key: value` front
//!   matter block and body
//! - [`extract_title`]: front matter title > first H1 > file name > `"Untitled"`
//! - [`extract_description`]: front matter description > first paragraph
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use docnav_meta::{extract_description, extract_title};
//!
//! let markdown = "---\ntitle: Setup\n---\n# Installing\n\nRun the installer.";
//! assert_eq!(extract_title(markdown, Some(Path::new("02_setup.md"))), "Setup");
//! assert_eq!(extract_description(markdown), "Run the installer.");
//! ```

mod extract;
mod frontmatter;

pub use extract::{
    DESCRIPTION_MAX_CHARS, UNTITLED, description_from, extract_description, extract_title,
    strip_order_prefix, title_from,
};
pub use frontmatter::{FrontMatter, ParsedDocument, parse_front_matter};
