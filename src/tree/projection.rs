//! Category projection: restricting a tree to selected depth-1 categories.

use std::collections::HashSet;

use crate::types::{AnnotatedNode, NodeId};

use super::traversal::preorder;
use super::CategorySet;

/// Deep-copy `tree` and drop every category not in `selected`.
///
/// A category is kept when either its original name or its display label is selected.
/// The input tree is never modified.
pub fn project(tree: &AnnotatedNode, selected: &CategorySet) -> AnnotatedNode {
    let mut copy = tree.clone();
    let before = copy.children.len();
    copy.children.retain(|c| is_selected(c, selected));
    log::debug!(
        "Projected {} of {} categories",
        copy.children.len(),
        before
    );
    copy
}

fn is_selected(category: &AnnotatedNode, selected: &CategorySet) -> bool {
    selected.contains(category.original_name()) || selected.contains(category.name())
}

/// Original name of the category whose original name or display label is `name`.
pub fn resolve_category<'a>(tree: &'a AnnotatedNode, name: &str) -> Option<&'a str> {
    tree.children()
        .iter()
        .find(|c| c.original_name() == name || c.name() == name)
        .map(|c| c.original_name())
}

/// Visibility mask over a tree, computed without copying it.
///
/// Every node under an unselected category is hidden; the root and selected
/// categories with their descendants stay visible.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    hidden: HashSet<NodeId>,
}

impl CategoryFilter {
    /// Compute the hidden node set for `tree` under `selected`.
    pub fn new(tree: &AnnotatedNode, selected: &CategorySet) -> Self {
        let mut hidden = HashSet::new();
        for category in tree.children() {
            if !is_selected(category, selected) {
                hidden.extend(preorder(category).map(|(_, n)| n.id()));
            }
        }
        Self { hidden }
    }

    /// A filter that hides nothing.
    pub fn all_visible() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        !self.hidden.contains(&id)
    }

    /// Number of hidden nodes.
    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }
}
