//! Tree walks: pre-order iteration and root-to-node path lookup.

use crate::types::{AnnotatedNode, NodeId};

/// Pre-order iterator yielding `(depth, node)` pairs.
pub struct Preorder<'a> {
    stack: Vec<(usize, &'a AnnotatedNode)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a AnnotatedNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse so the first child is visited next
        for child in node.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

/// Walk the tree depth-first, parents before children, siblings in order.
pub fn preorder(root: &AnnotatedNode) -> Preorder<'_> {
    Preorder {
        stack: vec![(0, root)],
    }
}

/// Path from `root` to the first node (in pre-order) whose original name is `target`.
///
/// Names are not unique across branches; only the first match is returned.
/// Use [`find_path_by_id`] when the exact node matters.
pub fn find_path<'a>(root: &'a AnnotatedNode, target: &str) -> Option<Vec<&'a AnnotatedNode>> {
    let mut path = Vec::new();
    if descend(root, &mut path, &|n: &AnnotatedNode| n.original_name() == target) {
        Some(path)
    } else {
        None
    }
}

/// Path from `root` to the node with the given id.
pub fn find_path_by_id(root: &AnnotatedNode, id: NodeId) -> Option<Vec<&AnnotatedNode>> {
    let mut path = Vec::new();
    if descend(root, &mut path, &|n: &AnnotatedNode| n.id() == id) {
        Some(path)
    } else {
        None
    }
}

/// Original names along the first path to `target`, root first.
pub fn find_path_names(root: &AnnotatedNode, target: &str) -> Option<Vec<String>> {
    find_path(root, target).map(|p| p.iter().map(|n| n.original_name().to_string()).collect())
}

/// Number of nodes whose original name is `name`.
pub fn count_named(root: &AnnotatedNode, name: &str) -> usize {
    preorder(root)
        .filter(|(_, n)| n.original_name() == name)
        .count()
}

fn descend<'a>(
    node: &'a AnnotatedNode,
    path: &mut Vec<&'a AnnotatedNode>,
    is_target: &dyn Fn(&AnnotatedNode) -> bool,
) -> bool {
    path.push(node);
    if is_target(node) {
        return true;
    }
    for child in node.children() {
        if descend(child, path, is_target) {
            return true;
        }
    }
    path.pop();
    false
}
