//! Index structures for lookup over an annotated tree. Indexes are derived and rebuilt, never patched.

pub mod search_index;

pub use search_index::{SearchHit, SearchIndex, SearchIndexEntry};
