//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::chart::LayoutMode;
use crate::config::ThemeConfig;
use crate::engine::{Explorer, QueryEngine, SearchOutcome};
use crate::format::{DatasetBuilder, JsonWriter, TreeReader};
use crate::index::SearchIndex;
use crate::tree::{
    annotate, count_named, find_path, preorder, project, resolve_category, Annotated,
    CategoryFilter, CategorySet,
};
use crate::types::{AnnotatedNode, ExplorerError, ExplorerResult, NodeKind};

fn load_annotated(path: &Path, theme: &ThemeConfig) -> ExplorerResult<Annotated> {
    let raw = TreeReader::read_from_file(path)?;
    Ok(annotate(raw, theme))
}

/// Write `value` to `out`, or to stdout when no output file is given.
fn emit<T: Serialize + ?Sized>(value: &T, out: Option<&Path>, pretty: bool) -> ExplorerResult<()> {
    let writer = JsonWriter::new(pretty);
    match out {
        Some(p) => writer.write_to_file(value, p),
        None => writer.write_to(value, &mut std::io::stdout().lock()),
    }
}

/// Selection from `--category` flags, by original name or display label.
/// No flags means every category.
fn selection(
    root: &AnnotatedNode,
    all: &CategorySet,
    requested: &[String],
) -> ExplorerResult<CategorySet> {
    if requested.is_empty() {
        return Ok(all.clone());
    }
    requested
        .iter()
        .map(|name| {
            resolve_category(root, name).ok_or_else(|| {
                ExplorerError::InvalidArgument(format!("unknown category {:?}", name))
            })
        })
        .collect()
}

/// Build a tree document from category directories.
pub fn cmd_build(
    dir: &Path,
    out: Option<&Path>,
    root_name: &str,
    pretty: bool,
) -> ExplorerResult<()> {
    let root = DatasetBuilder::new().root_name(root_name).build(dir)?;
    emit(&root, out, pretty)?;
    if let Some(p) = out {
        eprintln!("Built {} nodes into {}", root.node_count(), p.display());
    }
    Ok(())
}

/// Write the annotated tree.
pub fn cmd_annotate(
    path: &Path,
    theme: &ThemeConfig,
    out: Option<&Path>,
    pretty: bool,
) -> ExplorerResult<()> {
    let annotated = load_annotated(path, theme)?;
    emit(&annotated.root, out, pretty)
}

/// List the categories.
pub fn cmd_categories(path: &Path, theme: &ThemeConfig, json: bool) -> ExplorerResult<()> {
    let annotated = load_annotated(path, theme)?;

    if json {
        let info: Vec<serde_json::Value> = annotated
            .root
            .children()
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.original_name(),
                    "label": c.name(),
                    "nodes": c.node_count(),
                    "leaves": c.leaf_count(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for c in annotated.root.children() {
            println!("{} ({} resources)", c.name(), c.leaf_count());
        }
    }
    Ok(())
}

/// Print the full search index.
pub fn cmd_index(path: &Path, theme: &ThemeConfig, json: bool) -> ExplorerResult<()> {
    let annotated = load_annotated(path, theme)?;
    let index = SearchIndex::build(&annotated.root);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(index.entries()).unwrap_or_default()
        );
    } else {
        for entry in index.iter() {
            match entry.url {
                Some(url) => println!("{}  <{}>", entry.path, url),
                None => println!("{}", entry.path),
            }
        }
    }
    Ok(())
}

/// Search names and descriptions, optionally within some categories.
pub fn cmd_search(
    path: &Path,
    theme: &ThemeConfig,
    query: &str,
    categories: &[String],
    json: bool,
) -> ExplorerResult<()> {
    let annotated = load_annotated(path, theme)?;
    let selected = selection(&annotated.root, &annotated.categories, categories)?;
    let filter = CategoryFilter::new(&annotated.root, &selected);
    let index = SearchIndex::build(&annotated.root);
    let outcome = QueryEngine::new().search_visible(&index, query, &filter);

    if json {
        let outcome = outcome.map(|e| e.to_hit());
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).unwrap_or_default()
        );
        return Ok(());
    }

    match outcome {
        SearchOutcome::Inactive => {
            println!("Query too short; enter at least 2 characters");
        }
        SearchOutcome::Matches(entries) if entries.is_empty() => {
            println!("No results for {:?}", query);
        }
        SearchOutcome::Matches(entries) => {
            for entry in entries {
                println!("{}", entry.path);
                if let Some(desc) = entry.description {
                    println!("    {}", desc);
                }
                if let Some(url) = entry.url {
                    println!("    {}", url);
                }
            }
        }
    }
    Ok(())
}

/// Print the root-to-node path for the first node with the given name.
pub fn cmd_path(path: &Path, theme: &ThemeConfig, name: &str, json: bool) -> ExplorerResult<()> {
    let annotated = load_annotated(path, theme)?;
    let found = find_path(&annotated.root, name)
        .ok_or_else(|| ExplorerError::NodeNotFound(name.to_string()))?;
    let matches = count_named(&annotated.root, name);

    if json {
        let info = serde_json::json!({
            "names": found.iter().map(|n| n.original_name()).collect::<Vec<_>>(),
            "ids": found.iter().map(|n| n.id()).collect::<Vec<_>>(),
            "matches": matches,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for (depth, node) in found.iter().enumerate() {
            println!("{}{} [{}]", "  ".repeat(depth), node.name(), node.id());
        }
        if matches > 1 {
            println!("({} nodes share this name; showing the first)", matches);
        }
    }
    Ok(())
}

/// Write the tree restricted to the given categories.
pub fn cmd_project(
    path: &Path,
    theme: &ThemeConfig,
    categories: &[String],
    out: Option<&Path>,
    pretty: bool,
) -> ExplorerResult<()> {
    let annotated = load_annotated(path, theme)?;
    let selected = selection(&annotated.root, &annotated.categories, categories)?;
    let projected = project(&annotated.root, &selected);
    emit(&projected, out, pretty)
}

/// Options for [`cmd_chart`].
pub struct ChartArgs<'a> {
    pub layout: LayoutMode,
    pub show_labels: bool,
    pub dark: bool,
    pub highlight: Option<&'a str>,
    pub categories: &'a [String],
    pub out: Option<&'a Path>,
    pub pretty: bool,
}

/// Write the chart option document.
pub fn cmd_chart(path: &Path, theme: &ThemeConfig, args: ChartArgs<'_>) -> ExplorerResult<()> {
    let mut explorer = Explorer::from_file(path, theme)?;
    let selected = selection(explorer.tree(), explorer.categories(), args.categories)?;
    explorer.set_selected_categories(&selected);
    explorer.set_layout(args.layout);
    explorer.set_dark_mode(args.dark);
    if explorer.show_labels() != args.show_labels {
        explorer.toggle_labels();
    }

    let highlight = args
        .highlight
        .map(|name| explorer.highlight(name))
        .unwrap_or_default();
    if let Some(name) = args.highlight {
        if highlight.is_empty() {
            eprintln!("Warning: no node named {:?} in the selected categories", name);
        }
    }

    let option = explorer.chart_option(&highlight);
    emit(&option, args.out, args.pretty)
}

/// Tree statistics.
pub fn cmd_stats(path: &Path, theme: &ThemeConfig, json: bool) -> ExplorerResult<()> {
    let annotated = load_annotated(path, theme)?;
    let root = &annotated.root;

    let mut branches = 0usize;
    let mut with_url = 0usize;
    let mut with_description = 0usize;
    for (_, node) in preorder(root) {
        if node.kind() == NodeKind::Branch {
            branches += 1;
        }
        if node.url().is_some() {
            with_url += 1;
        }
        if node.description().is_some() {
            with_description += 1;
        }
    }

    if json {
        let info = serde_json::json!({
            "root": root.original_name(),
            "nodes": root.node_count(),
            "categories": annotated.categories.len(),
            "branches": branches,
            "leaves": root.leaf_count(),
            "max_depth": root.max_depth(),
            "with_url": with_url,
            "with_description": with_description,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Tree Statistics:");
        println!("  Root: {}", root.original_name());
        println!("  Nodes: {}", root.node_count());
        println!("  Categories: {}", annotated.categories.len());
        println!("  Branches: {}", branches);
        println!("  Leaves: {}", root.leaf_count());
        println!("  Max depth: {}", root.max_depth());
        println!("  With URL: {}", with_url);
        println!("  With description: {}", with_description);
    }
    Ok(())
}

/// Write the built-in theme to a TOML file.
pub fn cmd_theme_init(path: &Path) -> ExplorerResult<()> {
    ThemeConfig::default().save(path)?;
    println!("Wrote default theme to {}", path.display());
    Ok(())
}
