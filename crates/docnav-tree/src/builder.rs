//! Navigation tree construction from a data directory.
//!
//! The walk is synchronous and depth-first. Every directory becomes a
//! [`GroupNode`]; markdown files become pages, and `index.md` is adopted as
//! its directory's landing page. Entries are read in file-name order and
//! siblings are sorted by data path afterwards, so the resulting tree does
//! not depend on the platform's directory listing order.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use chrono::{DateTime, Local};
use docnav_meta::{description_from, parse_front_matter, strip_order_prefix, title_from};

use crate::error::BuildError;
use crate::node::{FullPage, GroupNode, PageNode, StubPage, TreeNode};
use crate::path::{data_path, file_path_to_url_path};

/// Title given to the root directory unless it has an `index.md`.
pub const ROOT_TITLE: &str = "TOP";

/// File name adopted as a directory's landing page.
const INDEX_FILE: &str = "index.md";

/// Format of filesystem modification times.
const MOD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the navigation tree for one data directory.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    data_root: PathBuf,
}

impl TreeBuilder {
    /// Create a builder for `data_root`.
    #[must_use]
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    #[must_use]
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Walk the data directory and build the tree.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingRoot`] if the data root is not a
    /// directory and [`BuildError::Io`] if any directory or file under it
    /// cannot be read.
    pub fn build(&self) -> Result<GroupNode, BuildError> {
        let start = Instant::now();

        if !self.data_root.is_dir() {
            return Err(BuildError::MissingRoot(self.data_root.clone()));
        }

        let root = self.walk(ROOT_TITLE, &self.data_root)?;

        tracing::info!(
            data_root = %self.data_root.display(),
            page_count = root.routed_page_count(),
            elapsed_ms = elapsed_ms(start),
            "Navigation tree built"
        );

        Ok(root)
    }

    fn walk(&self, title: &str, dir: &Path) -> Result<GroupNode, BuildError> {
        tracing::debug!(dir = %dir.display(), "Scanning directory");

        let mut group = GroupNode::new(title);

        for (name, path) in read_sorted_entries(dir)? {
            let metadata = fs::metadata(&path).map_err(|e| BuildError::io(&path, e))?;

            if metadata.is_dir() {
                let child = self.walk(strip_order_prefix(&name), &path)?;
                group.push(TreeNode::Group(child));
            } else if metadata.is_file() && name.ends_with(".md") {
                let page = self.load_page(&path, metadata.modified())?;
                if name == INDEX_FILE {
                    group.set_index(page);
                } else {
                    group.push(TreeNode::Page(page));
                }
            }
        }

        group.sort_children();
        Ok(group)
    }

    /// Read one markdown file into a page node.
    fn load_page(
        &self,
        path: &Path,
        modified: std::io::Result<SystemTime>,
    ) -> Result<PageNode, BuildError> {
        let bytes = fs::read(path).map_err(|e| BuildError::io(path, e))?;
        let raw = String::from_utf8_lossy(&bytes);
        let doc = parse_front_matter(&raw);

        let title = title_from(&doc, Some(path));
        let description = description_from(&doc);
        let data_path = data_path(path, &self.data_root);

        if !doc.has_body() {
            tracing::debug!(file = %path.display(), %title, "Loaded stub page");
            return Ok(PageNode::Stub(StubPage {
                title,
                description,
                data_path,
            }));
        }

        let mod_time = match doc.metadata.modtime() {
            Some(value) => value.to_owned(),
            None => format_mod_time(modified.map_err(|e| BuildError::io(path, e))?),
        };
        let url_path = file_path_to_url_path(path, &self.data_root);

        tracing::debug!(file = %path.display(), path = %url_path, %title, "Loaded page");

        Ok(PageNode::Full(FullPage {
            title,
            description,
            path: url_path,
            data_path,
            mod_time,
        }))
    }
}

/// Build the navigation tree for `data_root`.
///
/// Shorthand for `TreeBuilder::new(data_root).build()`.
///
/// # Errors
///
/// See [`TreeBuilder::build`].
pub fn build_data_file_tree(data_root: impl Into<PathBuf>) -> Result<GroupNode, BuildError> {
    TreeBuilder::new(data_root).build()
}

/// Directory entries as `(file name, path)`, sorted by file name.
///
/// Only `.` and `..` are skipped; hidden entries are kept.
fn read_sorted_entries(dir: &Path) -> Result<Vec<(String, PathBuf)>, BuildError> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| BuildError::io(dir, e))?
        .map(|entry| {
            let entry = entry.map_err(|e| BuildError::io(dir, e))?;
            Ok((entry.file_name().to_string_lossy().into_owned(), entry.path()))
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

fn format_mod_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(MOD_TIME_FORMAT).to_string()
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn titles(group: &GroupNode) -> Vec<&str> {
        group.children().iter().map(TreeNode::title).collect()
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = TreeBuilder::new(&missing).build().unwrap_err();

        assert!(matches!(err, BuildError::MissingRoot(ref p) if *p == missing));
    }

    #[test]
    fn test_root_file_is_not_a_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "file.md", "# File");

        let err = build_data_file_tree(temp_dir.path().join("file.md")).unwrap_err();

        assert!(matches!(err, BuildError::MissingRoot(_)));
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = tempfile::tempdir().unwrap();

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(root.title(), ROOT_TITLE);
        assert!(root.children().is_empty());
        assert!(!root.is_group());
        assert_eq!(root.path(), None);
    }

    #[test]
    fn test_single_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "02_intro.md",
            "# Introduction\n\nWelcome to the docs.",
        );

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert!(root.is_group());
        let TreeNode::Page(PageNode::Full(page)) = &root.children()[0] else {
            panic!("expected full page");
        };
        assert_eq!(page.title, "Introduction");
        assert_eq!(page.description, "Welcome to the docs.");
        assert_eq!(page.path, "/intro");
        assert_eq!(page.data_path, "/02_intro");
        assert_eq!(page.mod_time.len(), "2024-01-01 00:00:00".len());
    }

    #[test]
    fn test_front_matter_modtime_is_verbatim() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "page.md",
            "---\nmodtime: last tuesday\n---\nBody",
        );

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(root.children()[0].title(), "page");
        let TreeNode::Page(page) = &root.children()[0] else {
            panic!("expected page");
        };
        assert_eq!(page.mod_time(), Some("last tuesday"));
    }

    #[test]
    fn test_index_adopted_by_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "01_docs/02_setup/index.md",
            "---\ntitle: Setup\n---\nInstall things.",
        );
        write(temp_dir.path(), "01_docs/02_setup/01_linux.md", "# Linux");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        let TreeNode::Group(docs) = &root.children()[0] else {
            panic!("expected docs group");
        };
        assert_eq!(docs.title(), "docs");
        assert_eq!(docs.path(), None);

        let TreeNode::Group(setup) = &docs.children()[0] else {
            panic!("expected setup group");
        };
        assert_eq!(setup.title(), "Setup");
        assert_eq!(setup.dir_title(), "setup");
        assert_eq!(setup.path(), Some("/docs/setup/"));
        assert_eq!(setup.data_path(), Some("/01_docs/02_setup/index"));
        assert_eq!(setup.description(), Some("Install things."));
        assert_eq!(titles(setup), vec!["Linux"]);
        assert!(setup.is_group());
    }

    #[test]
    fn test_root_index_overrides_top() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "index.md", "# Home\n\nStart here.");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(root.title(), "Home");
        assert_eq!(root.dir_title(), ROOT_TITLE);
        assert_eq!(root.path(), Some("/"));
        assert!(!root.is_group());
    }

    #[test]
    fn test_stub_index_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "guide/index.md",
            "---\ntitle: Guide\ndescription: All guides\n---\n",
        );

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        let TreeNode::Group(guide) = &root.children()[0] else {
            panic!("expected guide group");
        };
        assert_eq!(guide.title(), "Guide");
        assert_eq!(guide.description(), Some("All guides"));
        assert_eq!(guide.path(), None);
        assert_eq!(guide.mod_time(), None);
        assert!(guide.index().is_some_and(PageNode::is_stub));
        assert!(!guide.is_group());
    }

    #[test]
    fn test_stub_index_directory_with_children() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "guide/index.md", "---\ntitle: Guide\n---\n");
        write(temp_dir.path(), "guide/01_start.md", "# Start\n\nFirst steps.");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        let TreeNode::Group(guide) = &root.children()[0] else {
            panic!("expected guide group");
        };
        assert_eq!(guide.title(), "Guide");
        assert!(guide.is_group());
        assert_eq!(guide.path(), None);
        assert_eq!(guide.mod_time(), None);
        assert_eq!(guide.children()[0].path(), Some("/guide/start"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_aborts_build() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "good.md", "# Good");
        let bad = temp_dir.path().join("bad.md");
        std::os::unix::fs::symlink(temp_dir.path().join("missing.md"), &bad).unwrap();

        let err = build_data_file_tree(temp_dir.path()).unwrap_err();

        assert!(matches!(err, BuildError::Io { ref path, .. } if *path == bad));
    }

    #[test]
    fn test_stub_page_kept_in_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "draft.md", "---\ntitle: Draft\n---\n   \n");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(titles(&root), vec!["Draft"]);
        assert_eq!(root.children()[0].path(), None);
        assert_eq!(root.routed_page_count(), 0);
    }

    #[test]
    fn test_children_sorted_by_data_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "03_c.md", "# C");
        write(temp_dir.path(), "01_a.md", "# A");
        write(temp_dir.path(), "02_b/index.md", "# B");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(titles(&root), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_bare_directory_sorted_by_title() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "01_zeta/page.md", "# Page");
        write(temp_dir.path(), "02_alpha/page.md", "# Page");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(titles(&root), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_directory_is_childless_group() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("empty")).unwrap();

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        let TreeNode::Group(empty) = &root.children()[0] else {
            panic!("expected group");
        };
        assert_eq!(empty.title(), "empty");
        assert!(!empty.is_group());
        assert!(root.is_group());
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "notes.txt", "text");
        write(temp_dir.path(), "image.png", "");
        write(temp_dir.path(), "README.markdown", "# Nope");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert!(root.children().is_empty());
    }

    #[test]
    fn test_hidden_markdown_files_included() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), ".hidden.md", "# Hidden");

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(titles(&root), vec!["Hidden"]);
        assert_eq!(root.children()[0].path(), Some("/.hidden"));
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("bin.md"), b"# Caf\xe9\n\nBody").unwrap();

        let root = build_data_file_tree(temp_dir.path()).unwrap();

        assert_eq!(root.children()[0].title(), "Caf\u{fffd}");
    }

    #[test]
    fn test_data_root_accessor() {
        let builder = TreeBuilder::new("/srv/data");

        assert_eq!(builder.data_root(), Path::new("/srv/data"));
    }
}
