//! Navigation tree node types.
//!
//! The tree mirrors the data directory:
//! - every directory is a [`GroupNode`]
//! - every markdown file except `index.md` is a [`PageNode`]
//! - `index.md` becomes the [`GroupNode::index`] page of its directory
//!
//! A page whose body is empty after front matter is a [`StubPage`]: it
//! keeps its title and description for navigation but has no URL.
//!
//! # Serialized Shape
//!
//! Nodes serialize to the object shape consumed by page templates:
//!
//! ```json
//! {
//!   "title": "Setup",
//!   "description": "Installing the tool.",
//!   "path": "/docs/setup/",
//!   "datapath": "/01_docs/02_setup/index",
//!   "modtime": "2024-05-01 10:00:00",
//!   "children": [],
//!   "isGroup": false
//! }
//! ```
//!
//! Absent fields are omitted. Directory nodes always carry `children`;
//! page nodes never do.

use serde::{Serialize, Serializer};

/// A page reachable by URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullPage {
    /// Display title.
    pub title: String,
    /// Plain-text summary.
    pub description: String,
    /// Public URL path (e.g. `/docs/setup/`).
    pub path: String,
    /// Source path relative to the data root, without `.md`.
    pub data_path: String,
    /// Modification time, `YYYY-MM-DD HH:MM:SS` or the front matter value.
    pub mod_time: String,
}

/// A front-matter-only page: listed in navigation, never routed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StubPage {
    /// Display title.
    pub title: String,
    /// Plain-text summary.
    pub description: String,
    /// Source path relative to the data root, without `.md`.
    pub data_path: String,
}

/// One markdown file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageNode {
    /// Page with body content.
    Full(FullPage),
    /// Page with front matter only.
    Stub(StubPage),
}

impl PageNode {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Full(page) => &page.title,
            Self::Stub(page) => &page.title,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Full(page) => &page.description,
            Self::Stub(page) => &page.description,
        }
    }

    #[must_use]
    pub fn data_path(&self) -> &str {
        match self {
            Self::Full(page) => &page.data_path,
            Self::Stub(page) => &page.data_path,
        }
    }

    /// URL path, `None` for stubs.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.as_full().map(|page| page.path.as_str())
    }

    /// Modification time, `None` for stubs.
    #[must_use]
    pub fn mod_time(&self) -> Option<&str> {
        self.as_full().map(|page| page.mod_time.as_str())
    }

    #[must_use]
    pub fn as_full(&self) -> Option<&FullPage> {
        match self {
            Self::Full(page) => Some(page),
            Self::Stub(_) => None,
        }
    }

    #[must_use]
    pub fn is_stub(&self) -> bool {
        matches!(self, Self::Stub(_))
    }
}

/// A directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupNode {
    dir_title: String,
    index: Option<PageNode>,
    children: Vec<TreeNode>,
}

impl GroupNode {
    /// Create an empty directory node.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            dir_title: title.into(),
            index: None,
            children: Vec::new(),
        }
    }

    /// Display title: the `index.md` title when present, else the
    /// directory title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.index.as_ref().map_or(self.dir_title.as_str(), PageNode::title)
    }

    /// Title derived from the directory name alone.
    #[must_use]
    pub fn dir_title(&self) -> &str {
        &self.dir_title
    }

    /// Page adopted from the directory's `index.md`.
    #[must_use]
    pub fn index(&self) -> Option<&PageNode> {
        self.index.as_ref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.index.as_ref().map(PageNode::description)
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.index.as_ref().and_then(PageNode::path)
    }

    #[must_use]
    pub fn data_path(&self) -> Option<&str> {
        self.index.as_ref().map(PageNode::data_path)
    }

    #[must_use]
    pub fn mod_time(&self) -> Option<&str> {
        self.index.as_ref().and_then(PageNode::mod_time)
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// A directory counts as a group only when it has children.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Adopt `page` as this directory's landing page, replacing any
    /// previous one. Children are kept.
    pub fn set_index(&mut self, page: PageNode) {
        self.index = Some(page);
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Sort children ascending by [`TreeNode::sort_key`].
    ///
    /// The sort is stable: children with equal keys keep their insertion
    /// order.
    pub fn sort_children(&mut self) {
        self.children.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    }

    /// Count of pages with a URL in this subtree, including the index.
    #[must_use]
    pub fn routed_page_count(&self) -> usize {
        let own = usize::from(self.path().is_some());
        own + self
            .children
            .iter()
            .map(|child| match child {
                TreeNode::Group(group) => group.routed_page_count(),
                TreeNode::Page(page) => usize::from(page.path().is_some()),
            })
            .sum::<usize>()
    }
}

/// Any node of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    Group(GroupNode),
    Page(PageNode),
}

impl TreeNode {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Group(group) => group.title(),
            Self::Page(page) => page.title(),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.path(),
            Self::Page(page) => page.path(),
        }
    }

    #[must_use]
    pub fn data_path(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.data_path(),
            Self::Page(page) => Some(page.data_path()),
        }
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Group(group) => group.children(),
            Self::Page(_) => &[],
        }
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        match self {
            Self::Group(group) => group.is_group(),
            Self::Page(_) => false,
        }
    }

    /// Ordering key among siblings: the data path, or the title for
    /// directories without `index.md`.
    #[must_use]
    pub fn sort_key(&self) -> &str {
        self.data_path().unwrap_or_else(|| self.title())
    }
}

#[derive(Serialize)]
struct NodeView<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(rename = "datapath", skip_serializing_if = "Option::is_none")]
    data_path: Option<&'a str>,
    #[serde(rename = "modtime", skip_serializing_if = "Option::is_none")]
    mod_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [TreeNode]>,
    #[serde(rename = "isGroup")]
    is_group: bool,
}

impl<'a> From<&'a PageNode> for NodeView<'a> {
    fn from(page: &'a PageNode) -> Self {
        Self {
            title: page.title(),
            description: Some(page.description()),
            path: page.path(),
            data_path: Some(page.data_path()),
            mod_time: page.mod_time(),
            children: None,
            is_group: false,
        }
    }
}

impl<'a> From<&'a GroupNode> for NodeView<'a> {
    fn from(group: &'a GroupNode) -> Self {
        Self {
            title: group.title(),
            description: group.description(),
            path: group.path(),
            data_path: group.data_path(),
            mod_time: group.mod_time(),
            children: Some(group.children()),
            is_group: group.is_group(),
        }
    }
}

impl Serialize for PageNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView::from(self).serialize(serializer)
    }
}

impl Serialize for GroupNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView::from(self).serialize(serializer)
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Group(group) => group.serialize(serializer),
            Self::Page(page) => page.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn full(title: &str, path: &str, data_path: &str) -> PageNode {
        PageNode::Full(FullPage {
            title: title.to_owned(),
            description: format!("{title} description"),
            path: path.to_owned(),
            data_path: data_path.to_owned(),
            mod_time: "2024-01-01 00:00:00".to_owned(),
        })
    }

    fn stub(title: &str, data_path: &str) -> PageNode {
        PageNode::Stub(StubPage {
            title: title.to_owned(),
            description: String::new(),
            data_path: data_path.to_owned(),
        })
    }

    #[test]
    fn test_stub_has_no_path_or_mod_time() {
        let page = stub("Draft", "/draft");

        assert!(page.is_stub());
        assert_eq!(page.path(), None);
        assert_eq!(page.mod_time(), None);
        assert_eq!(page.data_path(), "/draft");
    }

    #[test]
    fn test_group_title_prefers_index() {
        let mut group = GroupNode::new("guide");
        assert_eq!(group.title(), "guide");

        group.set_index(full("User Guide", "/guide/", "/01_guide/index"));

        assert_eq!(group.title(), "User Guide");
        assert_eq!(group.dir_title(), "guide");
        assert_eq!(group.path(), Some("/guide/"));
    }

    #[test]
    fn test_group_is_group_only_with_children() {
        let mut group = GroupNode::new("guide");
        group.set_index(full("Guide", "/guide/", "/guide/index"));
        assert!(!group.is_group());

        group.push(TreeNode::Page(full("Intro", "/guide/intro", "/guide/intro")));
        assert!(group.is_group());
    }

    #[test]
    fn test_sort_key_falls_back_to_title() {
        let bare = TreeNode::Group(GroupNode::new("zeta"));
        let page = TreeNode::Page(full("Alpha", "/alpha", "/01_alpha"));

        assert_eq!(bare.sort_key(), "zeta");
        assert_eq!(page.sort_key(), "/01_alpha");
    }

    #[test]
    fn test_sort_children_is_stable_ascending() {
        let mut group = GroupNode::new("TOP");
        group.push(TreeNode::Page(full("B", "/b", "/02_b")));
        group.push(TreeNode::Group(GroupNode::new("same")));
        group.push(TreeNode::Page(full("A", "/a", "/01_a")));
        group.push(TreeNode::Group(GroupNode::new("same")));
        group.push(TreeNode::Page(stub("S", "/00_stub")));

        group.sort_children();

        let keys: Vec<_> = group.children().iter().map(TreeNode::sort_key).collect();
        assert_eq!(keys, vec!["/00_stub", "/01_a", "/02_b", "same", "same"]);
    }

    #[test]
    fn test_routed_page_count() {
        let mut inner = GroupNode::new("inner");
        inner.set_index(full("Inner", "/inner/", "/inner/index"));
        inner.push(TreeNode::Page(stub("Draft", "/inner/draft")));

        let mut root = GroupNode::new("TOP");
        root.push(TreeNode::Page(full("A", "/a", "/a")));
        root.push(TreeNode::Group(inner));

        assert_eq!(root.routed_page_count(), 2);
    }

    #[test]
    fn test_serialize_full_page() {
        let value = serde_json::to_value(full("Intro", "/intro", "/01_intro")).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Intro",
                "description": "Intro description",
                "path": "/intro",
                "datapath": "/01_intro",
                "modtime": "2024-01-01 00:00:00",
                "isGroup": false
            })
        );
    }

    #[test]
    fn test_serialize_stub_omits_path_and_mod_time() {
        let value = serde_json::to_value(stub("Draft", "/draft")).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Draft",
                "description": "",
                "datapath": "/draft",
                "isGroup": false
            })
        );
    }

    #[test]
    fn test_serialize_bare_group() {
        let value = serde_json::to_value(GroupNode::new("empty")).unwrap();

        assert_eq!(
            value,
            json!({ "title": "empty", "children": [], "isGroup": false })
        );
    }

    #[test]
    fn test_serialize_group_with_index_and_children() {
        let mut group = GroupNode::new("guide");
        group.set_index(full("Guide", "/guide/", "/guide/index"));
        group.push(TreeNode::Page(stub("Draft", "/guide/draft")));

        let value = serde_json::to_value(&group).unwrap();

        assert_eq!(value["title"], "Guide");
        assert_eq!(value["path"], "/guide/");
        assert_eq!(value["isGroup"], true);
        assert_eq!(value["children"][0]["title"], "Draft");
        assert!(value["children"][0].get("children").is_none());
    }
}
