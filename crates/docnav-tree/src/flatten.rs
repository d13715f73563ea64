//! Flat URL path index derived from the navigation tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::node::{FullPage, GroupNode, PageNode, TreeNode};

/// Metadata of one routed page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageProps {
    pub title: String,
    pub description: String,
    pub path: String,
    #[serde(rename = "datapath")]
    pub data_path: String,
    #[serde(rename = "modtime")]
    pub mod_time: String,
}

impl From<&FullPage> for PageProps {
    fn from(page: &FullPage) -> Self {
        Self {
            title: page.title.clone(),
            description: page.description.clone(),
            path: page.path.clone(),
            data_path: page.data_path.clone(),
            mod_time: page.mod_time.clone(),
        }
    }
}

/// URL path to page metadata, iterated in path order.
pub type FlatIndex = BTreeMap<String, PageProps>;

/// Add every routed page under `node` to `props`.
///
/// Nodes are visited in pre-order. When two pages share a URL path the one
/// visited later wins.
pub fn flatten_into<'a>(node: &TreeNode, props: &'a mut FlatIndex) -> &'a mut FlatIndex {
    match node {
        TreeNode::Group(group) => flatten_group(group, props),
        TreeNode::Page(page) => insert_page(page, props),
    }
    props
}

/// Flat index of every routed page in the tree rooted at `root`.
///
/// The root's own landing page is included.
#[must_use]
pub fn flatten_node_props(root: &GroupNode) -> FlatIndex {
    let mut props = FlatIndex::new();
    flatten_group(root, &mut props);
    props
}

fn flatten_group(group: &GroupNode, props: &mut FlatIndex) {
    if let Some(page) = group.index() {
        insert_page(page, props);
    }
    for child in group.children() {
        flatten_into(child, props);
    }
}

fn insert_page(page: &PageNode, props: &mut FlatIndex) {
    let PageNode::Full(page) = page else {
        return;
    };

    if let Some(previous) = props.insert(page.path.clone(), PageProps::from(page)) {
        tracing::warn!(
            path = %page.path,
            kept = %page.data_path,
            replaced = %previous.data_path,
            "Duplicate URL path"
        );
    }
}
