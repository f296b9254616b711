//! Presentation attributes attached to annotated nodes.

use serde::{Deserialize, Serialize};

/// Style block handed to the renderer as `itemStyle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    /// Fill colour of the node symbol.
    pub color: String,
    /// Corner radius in pixels.
    pub border_radius: u32,
    /// Border width in pixels.
    pub border_width: u32,
    /// Border colour.
    pub border_color: String,
}

/// One row of the icon/colour lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// Glyph prefixed to the display name.
    pub icon: String,
    /// Node fill colour.
    pub color: String,
}

impl Decoration {
    pub fn new(icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Display label for a node carrying this decoration.
    pub fn label(&self, original_name: &str) -> String {
        format!("{} {}", self.icon, original_name)
    }
}
