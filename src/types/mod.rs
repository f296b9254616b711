//! All data types for the OSINT explorer library.

pub mod error;
pub mod node;
pub mod style;

pub use error::{ExplorerError, ExplorerResult};
pub use node::{AnnotatedNode, NodeId, NodeKind, RawNode};
pub use style::{Decoration, NodeStyle};

/// Separator between breadcrumb segments in search index paths.
pub const PATH_SEPARATOR: &str = " > ";

/// Queries shorter than this (in characters) mean "no active search".
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of entries a search returns.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Name given to the root when building a dataset from directories.
pub const DEFAULT_ROOT_NAME: &str = "OSINT Explorer";

/// File name the browser front end fetches the tree from.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Name of the per-directory tool list read by the dataset builder.
pub const TOOLS_FILE: &str = "tools.yaml";
