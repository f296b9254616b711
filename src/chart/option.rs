//! Builds the chart library's option document for an annotated tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::{AnnotatedNode, NodeId};

/// How the tree is laid out by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Orthogonal left-to-right tree.
    #[default]
    Tree,
    /// Root in the centre, descendants on concentric rings.
    Radial,
}

impl LayoutMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Radial => "radial",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "tree" | "orthogonal" => Some(Self::Tree),
            "radial" => Some(Self::Radial),
            _ => None,
        }
    }

    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            Self::Tree => Self::Radial,
            Self::Radial => Self::Tree,
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Settings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    pub layout: LayoutMode,
    pub show_labels: bool,
    pub dark: bool,
    /// Non-leaf nodes at this depth or deeper start collapsed. Emitted both as
    /// `initialTreeDepth` and as each node's `collapsed` flag, which takes precedence.
    pub initial_depth: usize,
    /// Root-to-target node ids to expand. Empty means no highlight.
    pub highlight: Vec<NodeId>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Tree,
            show_labels: true,
            dark: false,
            initial_depth: 2,
            highlight: Vec::new(),
        }
    }
}

const LABEL_COLOR_LIGHT: &str = "#FFA500";
const LABEL_COLOR_DARK: &str = "#FFD280";
const BACKGROUND_DARK: &str = "#1e1e1e";
const LINE_COLOR: &str = "#aaa";

/// Produce the complete option document for `root`.
pub fn chart_option(root: &AnnotatedNode, settings: &ChartSettings) -> Value {
    let highlight: HashSet<NodeId> = settings.highlight.iter().copied().collect();
    let data = chart_node(root, 0, settings.initial_depth, &highlight);
    let label_color = if settings.dark {
        LABEL_COLOR_DARK
    } else {
        LABEL_COLOR_LIGHT
    };

    let mut series = json!({
        "type": "tree",
        "data": [data],
        "symbol": "diamond",
        "symbolSize": 10,
        "initialTreeDepth": settings.initial_depth,
        "expandAndCollapse": true,
        "animationDuration": 550,
        "animationDurationUpdate": 750,
        "emphasis": { "focus": "descendant" },
        "lineStyle": { "color": LINE_COLOR, "type": "solid" },
    });

    let layout = match settings.layout {
        LayoutMode::Tree => json!({
            "layout": "orthogonal",
            "top": "1%",
            "left": "7%",
            "bottom": "1%",
            "right": "10%",
            "label": {
                "show": settings.show_labels,
                "color": label_color,
                "position": "left",
                "verticalAlign": "middle",
                "align": "right",
                "fontSize": 9,
            },
            "leaves": {
                "label": {
                    "show": settings.show_labels,
                    "position": "right",
                    "verticalAlign": "middle",
                    "align": "left",
                }
            },
        }),
        LayoutMode::Radial => json!({
            "layout": "radial",
            "top": "10%",
            "left": "10%",
            "bottom": "10%",
            "right": "10%",
            "label": {
                "show": settings.show_labels,
                "color": label_color,
                "rotate": "radial",
                "fontSize": 9,
            },
        }),
    };
    merge(&mut series, layout);

    let mut option = json!({
        "tooltip": { "trigger": "item", "triggerOn": "click" },
        "series": [series],
    });
    if settings.dark {
        option["backgroundColor"] = json!(BACKGROUND_DARK);
    }
    option
}

fn chart_node(
    node: &AnnotatedNode,
    depth: usize,
    initial_depth: usize,
    highlight: &HashSet<NodeId>,
) -> Value {
    let mut out = json!({
        "id": node.id(),
        "name": node.name(),
        "originalName": node.original_name(),
        "itemStyle": node.item_style(),
    });
    if let Some(url) = node.url() {
        out["url"] = json!(url);
    }
    if let Some(description) = node.description() {
        out["description"] = json!(description);
    }
    if let Some(tooltip) = node.tooltip() {
        out["tooltip"] = json!({ "formatter": tooltip });
    }
    // Leaves have nothing to fold. The per-node flag overrides `initialTreeDepth`.
    if !node.is_leaf() {
        let collapsed = !highlight.contains(&node.id()) && depth >= initial_depth;
        out["collapsed"] = json!(collapsed);
        out["children"] = node
            .children()
            .iter()
            .map(|c| chart_node(c, depth + 1, initial_depth, highlight))
            .collect();
    }
    if highlight.contains(&node.id()) {
        out["selected"] = json!(true);
    }
    out
}

fn merge(target: &mut Value, extra: Value) {
    if let (Value::Object(target), Value::Object(extra)) = (target, extra) {
        target.extend(extra);
    }
}
