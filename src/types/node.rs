//! Tree node types: raw input nodes and annotated display nodes.

use serde::{Deserialize, Serialize};

use super::style::NodeStyle;

/// Stable identifier assigned to each node at annotation time (pre-order, root = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural role of a node, used to pick its decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The single node at depth 0.
    Root,
    /// A depth-1 grouping; its name drives filtering.
    Category,
    /// A deeper node with at least one child.
    Branch,
    /// A node without children.
    Leaf,
}

impl NodeKind {
    /// Classify a node from its depth and whether it has children.
    pub fn classify(depth: usize, has_children: bool) -> Self {
        match depth {
            0 => Self::Root,
            1 => Self::Category,
            _ if has_children => Self::Branch,
            _ => Self::Leaf,
        }
    }

    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Category => "category",
            Self::Branch => "branch",
            Self::Leaf => "leaf",
        }
    }

    /// Parse a kind from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "root" => Some(Self::Root),
            "category" => Some(Self::Category),
            "branch" => Some(Self::Branch),
            "leaf" => Some(Self::Leaf),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A node exactly as it appears in `data.json` or a `tools.yaml` list.
///
/// Unknown fields are ignored. A missing or empty `children` list marks a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RawNode {
    /// Create a leaf with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
            url: None,
            description: None,
        }
    }

    /// Set the resource URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a child, creating the children list if needed.
    pub fn child(mut self, child: RawNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Children as a slice (empty for leaves).
    pub fn children(&self) -> &[RawNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Total number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(RawNode::node_count).sum::<usize>()
    }
}

/// A node after annotation, ready for the renderer.
///
/// Only the annotator constructs these, so an annotated tree can never be
/// annotated a second time. Field names serialize the way the chart library
/// expects them (`itemStyle`, `originalName`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedNode {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) original_name: String,
    pub(crate) kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<AnnotatedNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    pub(crate) item_style: NodeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tooltip: Option<String>,
}

impl AnnotatedNode {
    /// Identifier assigned during annotation.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label (icon, a space, then the original name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as it appeared in the input.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[AnnotatedNode] {
        &self.children
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn item_style(&self) -> &NodeStyle {
        &self.item_style
    }

    /// Tooltip markup; present only when the node has a description.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(AnnotatedNode::node_count)
            .sum::<usize>()
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children.iter().map(AnnotatedNode::leaf_count).sum()
    }

    /// Depth of the deepest node below this one (0 for a leaf).
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.max_depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Find a node in this subtree by id.
    pub fn get(&self, id: NodeId) -> Option<&AnnotatedNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.get(id))
    }
}
