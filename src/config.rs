//! Theme configuration: the icon/colour tables and border settings, with TOML persistence.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Decoration, ExplorerResult, NodeKind, NodeStyle};

/// Icon and colour tables used by the annotator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Decoration of the root node.
    pub root: Decoration,

    /// Decoration of deeper nodes that have children.
    pub branch: Decoration,

    /// Decoration of nodes without children.
    pub leaf: Decoration,

    /// Used for categories missing from `categories`.
    pub fallback: Decoration,

    /// Border settings shared by every node.
    pub border: BorderConfig,

    /// Per-category decorations, keyed by the depth-1 node name.
    pub categories: BTreeMap<String, Decoration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Corner radius in pixels
    pub radius: u32,

    /// Border width in pixels
    pub width: u32,

    /// Border colour
    pub color: String,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            radius: 4,
            width: 1,
            color: "#c23531".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let categories = [
            ("Username", "👤", "#5470c6"),
            ("Email", "📧", "#91cc75"),
            ("Domain", "🌐", "#fac858"),
            ("IP Address", "🖧", "#ee6666"),
            ("Social Media", "👥", "#73c0de"),
            ("Images", "🖼️", "#3ba272"),
            ("Phone", "📞", "#fc8452"),
            ("People", "🧑", "#9a60b4"),
            ("Maps", "🗺️", "#ea7ccc"),
            ("Search Engines", "🔍", "#ffa500"),
            ("Archives", "🗄️", "#8d98b3"),
        ]
        .into_iter()
        .map(|(name, icon, color)| (name.to_string(), Decoration::new(icon, color)))
        .collect();

        Self {
            root: Decoration::new("🕵️", "#ffa500"),
            branch: Decoration::new("📁", "#00ff00"),
            leaf: Decoration::new("🔗", "#aaaaaa"),
            fallback: Decoration::new("📂", "#00ff00"),
            border: BorderConfig::default(),
            categories,
        }
    }
}

impl ThemeConfig {
    /// Load from a TOML file. Missing keys take their default values.
    pub fn load(path: &Path) -> ExplorerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        log::info!(
            "Loaded theme from {} ({} categories)",
            path.display(),
            config.categories.len()
        );
        Ok(config)
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ExplorerResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` when given, otherwise use the built-in theme.
    pub fn load_or_default(path: Option<&Path>) -> ExplorerResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Pick the decoration for a node.
    ///
    /// Categories are looked up by name; every other kind uses its structural entry.
    pub fn decoration_for(&self, kind: NodeKind, name: &str) -> &Decoration {
        match kind {
            NodeKind::Root => &self.root,
            NodeKind::Branch => &self.branch,
            NodeKind::Leaf => &self.leaf,
            NodeKind::Category => match self.categories.get(name) {
                Some(d) => d,
                None => {
                    log::debug!("No decoration for category {:?}, using fallback", name);
                    &self.fallback
                }
            },
        }
    }

    /// Build the style block for a node with the given decoration.
    pub fn style_for(&self, decoration: &Decoration) -> NodeStyle {
        NodeStyle {
            color: decoration.color.clone(),
            border_radius: self.border.radius,
            border_width: self.border.width,
            border_color: self.border.color.clone(),
        }
    }
}
