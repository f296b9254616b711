//! Top-level controller: owns the canonical annotated tree and the view state around it.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::chart::{chart_option, ChartSettings, LayoutMode};
use crate::config::ThemeConfig;
use crate::format::TreeReader;
use crate::index::{SearchHit, SearchIndex};
use crate::tree::{annotate, count_named, find_path, project, resolve_category, CategorySet};
use crate::types::{AnnotatedNode, ExplorerResult, NodeId, RawNode};

use super::debounce::Debouncer;
use super::search::{QueryEngine, SearchOutcome};

/// Root-to-target path in the current view. Empty when the target was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Original names, root first.
    pub names: Vec<String>,
    /// Node ids, root first.
    pub ids: Vec<NodeId>,
}

impl Highlight {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The highlighted node itself.
    pub fn target(&self) -> Option<NodeId> {
        self.ids.last().copied()
    }
}

/// What the detail panel shows for a clicked node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetail {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Session controller.
///
/// The annotated tree is the single source of truth. The category view is
/// re-projected from it on every selection change, and search indexes are
/// rebuilt from the view on every query.
pub struct Explorer {
    tree: AnnotatedNode,
    categories: CategorySet,
    selected: CategorySet,
    view: AnnotatedNode,
    layout: LayoutMode,
    show_labels: bool,
    dark: bool,
    pending_search: Debouncer<String>,
    query_engine: QueryEngine,
}

impl Explorer {
    /// Annotate `raw` and start with every category selected.
    pub fn from_raw(raw: RawNode, theme: &ThemeConfig) -> Self {
        let annotated = annotate(raw, theme);
        let view = annotated.root.clone();
        Self {
            tree: annotated.root,
            selected: annotated.categories.clone(),
            categories: annotated.categories,
            view,
            layout: LayoutMode::default(),
            show_labels: true,
            dark: false,
            pending_search: Debouncer::default(),
            query_engine: QueryEngine::new(),
        }
    }

    /// Parse a JSON tree document and annotate it.
    pub fn from_json_str(data: &str, theme: &ThemeConfig) -> ExplorerResult<Self> {
        Ok(Self::from_raw(TreeReader::read_from_str(data)?, theme))
    }

    /// Load and annotate a JSON tree document.
    pub fn from_file(path: &Path, theme: &ThemeConfig) -> ExplorerResult<Self> {
        Ok(Self::from_raw(TreeReader::read_from_file(path)?, theme))
    }

    /// Replace the data with a freshly loaded tree. View settings are kept;
    /// the category selection resets to everything.
    pub fn reload(&mut self, raw: RawNode, theme: &ThemeConfig) {
        let annotated = annotate(raw, theme);
        self.view = annotated.root.clone();
        self.tree = annotated.root;
        self.selected = annotated.categories.clone();
        self.categories = annotated.categories;
        self.pending_search.cancel();
        log::info!("Reloaded tree ({} nodes)", self.tree.node_count());
    }

    /// The full annotated tree.
    pub fn tree(&self) -> &AnnotatedNode {
        &self.tree
    }

    /// The tree restricted to the selected categories.
    pub fn view(&self) -> &AnnotatedNode {
        &self.view
    }

    /// Every category in the data.
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn selected_categories(&self) -> &CategorySet {
        &self.selected
    }

    /// Select categories by original name or display label. Unknown names are ignored.
    pub fn set_selected_categories(&mut self, selected: &CategorySet) {
        let resolved: CategorySet = selected
            .iter()
            .filter_map(|name| resolve_category(&self.tree, name))
            .collect();
        self.selected = self.categories.intersection(&resolved);
        self.rebuild_view();
    }

    pub fn select_all(&mut self) {
        self.selected = self.categories.clone();
        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        self.view = if self.selected.covers(&self.categories) {
            self.tree.clone()
        } else {
            project(&self.tree, &self.selected)
        };
    }

    /// Search the current view.
    pub fn search(&self, query: &str) -> SearchOutcome<SearchHit> {
        let index = SearchIndex::build(&self.view);
        self.query_engine
            .search(&index, query)
            .map(|entry| entry.to_hit())
    }

    /// Record a keystroke's worth of search input.
    pub fn input_search(&mut self, text: impl Into<String>, now: Instant) {
        self.pending_search.push(text.into(), now);
    }

    /// Run the pending search once the input has been idle for the debounce delay.
    pub fn poll_search(&mut self, now: Instant) -> Option<SearchOutcome<SearchHit>> {
        let query = self.pending_search.poll(now)?;
        Some(self.search(&query))
    }

    /// Path to the first node in the current view named `name`.
    pub fn highlight(&self, name: &str) -> Highlight {
        let Some(path) = find_path(&self.view, name) else {
            log::debug!("Highlight target {:?} not found", name);
            return Highlight::default();
        };
        if count_named(&self.view, name) > 1 {
            log::warn!("Several nodes are named {:?}; highlighting the first", name);
        }
        Highlight {
            names: path.iter().map(|n| n.original_name().to_string()).collect(),
            ids: path.iter().map(|n| n.id()).collect(),
        }
    }

    /// Detail panel content for a clicked node.
    pub fn node_detail(&self, id: NodeId) -> Option<NodeDetail> {
        self.tree.get(id).map(|node| NodeDetail {
            name: node.original_name().to_string(),
            description: node.description().map(str::to_string),
            url: node.url().map(str::to_string),
        })
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Flip label visibility and return the new state.
    pub fn toggle_labels(&mut self) -> bool {
        self.show_labels = !self.show_labels;
        self.show_labels
    }

    pub fn dark_mode(&self) -> bool {
        self.dark
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark = dark;
    }

    /// Chart option document for the current view and settings.
    pub fn chart_option(&self, highlight: &Highlight) -> Value {
        let settings = ChartSettings {
            layout: self.layout,
            show_labels: self.show_labels,
            dark: self.dark,
            highlight: highlight.ids.clone(),
            ..ChartSettings::default()
        };
        chart_option(&self.view, &settings)
    }
}
