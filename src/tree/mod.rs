//! In-memory tree operations: annotation, traversal and category projection.

pub mod annotate;
pub mod categories;
pub mod projection;
pub mod traversal;

pub use annotate::{annotate, tooltip_markup, Annotated, Annotator};
pub use categories::CategorySet;
pub use projection::{project, resolve_category, CategoryFilter};
pub use traversal::{
    count_named, find_path, find_path_by_id, find_path_names, preorder, Preorder,
};
