//! Flat search index over an annotated tree: one entry per node, pre-order.

use serde::Serialize;

use crate::types::{AnnotatedNode, NodeId, PATH_SEPARATOR};

/// One searchable node.
///
/// Borrows the tree it was built from; rebuild the index whenever the tree changes.
#[derive(Debug, Clone, Serialize)]
pub struct SearchIndexEntry<'a> {
    /// Original (icon-free) node name.
    pub name: &'a str,
    /// Breadcrumb of original names from the root, joined with `" > "`.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    /// Id of the indexed node.
    pub node_id: NodeId,
    /// Depth of the node (root = 0).
    pub depth: usize,
    pub has_children: bool,
    /// The indexed node itself.
    #[serde(skip)]
    pub node: &'a AnnotatedNode,
}

impl SearchIndexEntry<'_> {
    /// Owned copy of the searchable fields.
    pub fn to_hit(&self) -> SearchHit {
        SearchHit {
            name: self.name.to_string(),
            path: self.path.clone(),
            url: self.url.map(str::to_string),
            description: self.description.map(str::to_string),
            node_id: self.node_id,
            has_children: self.has_children,
        }
    }
}

/// Owned search result, detached from the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub node_id: NodeId,
    pub has_children: bool,
}

/// Ordered list of entries, one per node of the tree.
#[derive(Debug, Clone)]
pub struct SearchIndex<'a> {
    entries: Vec<SearchIndexEntry<'a>>,
}

impl<'a> SearchIndex<'a> {
    /// Build the index by walking `root` depth-first, parents before children.
    pub fn build(root: &'a AnnotatedNode) -> Self {
        let mut entries = Vec::with_capacity(root.node_count());
        let mut breadcrumb: Vec<&'a str> = Vec::new();
        collect(root, &mut breadcrumb, &mut entries);
        log::debug!("Built search index with {} entries", entries.len());
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchIndexEntry<'a>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchIndexEntry<'a>> {
        self.entries.iter()
    }

    /// Entry for a node id, if the node is indexed.
    pub fn get(&self, id: NodeId) -> Option<&SearchIndexEntry<'a>> {
        self.entries.iter().find(|e| e.node_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect<'a>(
    node: &'a AnnotatedNode,
    breadcrumb: &mut Vec<&'a str>,
    out: &mut Vec<SearchIndexEntry<'a>>,
) {
    breadcrumb.push(node.original_name());
    out.push(SearchIndexEntry {
        name: node.original_name(),
        path: breadcrumb.join(PATH_SEPARATOR),
        url: node.url(),
        description: node.description(),
        node_id: node.id(),
        depth: breadcrumb.len() - 1,
        has_children: !node.is_leaf(),
        node,
    });
    for child in node.children() {
        collect(child, breadcrumb, out);
    }
    breadcrumb.pop();
}
