//! File I/O: tree documents in, JSON documents out, and the directory dataset builder.

pub mod dataset;
pub mod reader;
pub mod writer;

pub use dataset::{category_name, DatasetBuilder};
pub use reader::TreeReader;
pub use writer::JsonWriter;
