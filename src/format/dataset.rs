//! Builds a tree document from a directory of categories.
//!
//! Layout on disk:
//!
//! ```text
//! data/
//!   01-Username/
//!     tools.yaml          # tools: [{name, url, description}, ...]
//!   02-Email/
//!     tools.yaml
//!     01-Breach/
//!       tools.yaml
//! ```
//!
//! Each `NN-name` directory becomes a node called `name`. Its tools come first,
//! followed by its subdirectories in file-name order.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::{ExplorerError, ExplorerResult, RawNode, DEFAULT_ROOT_NAME, TOOLS_FILE};

#[derive(Deserialize)]
struct ToolsFile {
    tools: Option<Vec<RawNode>>,
}

/// Builds a [`RawNode`] tree from category directories.
pub struct DatasetBuilder {
    root_name: String,
}

impl DatasetBuilder {
    /// Create a builder naming the root [`DEFAULT_ROOT_NAME`].
    pub fn new() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
        }
    }

    /// Set the root node name.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Walk `dir` and build the tree.
    pub fn build(&self, dir: &Path) -> ExplorerResult<RawNode> {
        let children = read_children(dir)?;
        let mut root = RawNode::new(self.root_name.clone());
        root.children = Some(children);
        log::info!(
            "Built dataset with {} nodes from {}",
            root.node_count(),
            dir.display()
        );
        Ok(root)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the display name from an `NN-name` directory name.
///
/// Only the segment between the first and second `-` is used.
pub fn category_name(dir_name: &str) -> ExplorerResult<String> {
    match dir_name.split('-').nth(1) {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(ExplorerError::InvalidDirectoryName(dir_name.to_string())),
    }
}

fn read_children(dir: &Path) -> ExplorerResult<Vec<RawNode>> {
    let mut children = read_tools(dir)?;

    let mut subdirs: Vec<(String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with('.') {
            continue;
        }
        subdirs.push((file_name, entry.path()));
    }
    subdirs.sort_by(|a, b| a.0.cmp(&b.0));

    for (file_name, path) in subdirs {
        let name = category_name(&file_name)?;
        let grandchildren = read_children(&path)?;
        if grandchildren.is_empty() {
            log::warn!("Category directory {} is empty", path.display());
        }
        let mut node = RawNode::new(name);
        node.children = Some(grandchildren);
        children.push(node);
    }
    Ok(children)
}

fn read_tools(dir: &Path) -> ExplorerResult<Vec<RawNode>> {
    let path = dir.join(TOOLS_FILE);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    let parsed: ToolsFile = serde_yaml::from_str(&content).map_err(|source| ExplorerError::Yaml {
        path: path.clone(),
        source,
    })?;
    let tools = parsed.tools.ok_or(ExplorerError::MissingTools(path))?;
    log::debug!("Read {} tools from {}", tools.len(), dir.display());
    Ok(tools)
}
