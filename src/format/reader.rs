//! Reads tree documents (`data.json`) into raw nodes.

use std::io::Read;
use std::path::Path;

use crate::types::{ExplorerResult, RawNode};

/// Reader for JSON tree documents.
pub struct TreeReader;

impl TreeReader {
    /// Read a tree document from a file.
    pub fn read_from_file(path: &Path) -> ExplorerResult<RawNode> {
        let data = std::fs::read_to_string(path)?;
        let root = Self::read_from_str(&data)?;
        log::info!(
            "Loaded {} nodes from {}",
            root.node_count(),
            path.display()
        );
        Ok(root)
    }

    /// Parse a tree document from a string.
    pub fn read_from_str(data: &str) -> ExplorerResult<RawNode> {
        Ok(serde_json::from_str(data)?)
    }

    /// Read a tree document from any reader.
    pub fn read_from(reader: &mut impl Read) -> ExplorerResult<RawNode> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::read_from_str(&data)
    }
}
