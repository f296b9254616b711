//! High-level operations: search execution, debounced input and the session controller.

pub mod debounce;
pub mod explorer;
pub mod search;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use explorer::{Explorer, Highlight, NodeDetail};
pub use search::{entry_matches, normalize_query, QueryEngine, SearchOutcome};
