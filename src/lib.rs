//! OSINT Explorer: data pipeline behind an interactive tree of OSINT resources.
//!
//! Builds the tree from category directories, annotates every node with an icon,
//! colour and tooltip, and derives search indexes, category projections, highlight
//! paths and chart option documents from it.

pub mod chart;
pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod index;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use chart::{chart_option, ChartSettings, LayoutMode};
pub use config::{BorderConfig, ThemeConfig};
pub use engine::{Debouncer, Explorer, Highlight, NodeDetail, QueryEngine, SearchOutcome};
pub use format::{DatasetBuilder, JsonWriter, TreeReader};
pub use index::{SearchHit, SearchIndex, SearchIndexEntry};
pub use tree::{
    annotate, find_path, find_path_by_id, find_path_names, project, resolve_category, Annotated,
    Annotator, CategoryFilter, CategorySet,
};
pub use types::{
    AnnotatedNode, Decoration, ExplorerError, ExplorerResult, NodeId, NodeKind, NodeStyle,
    RawNode, MAX_SEARCH_RESULTS, MIN_QUERY_LEN, PATH_SEPARATOR,
};
