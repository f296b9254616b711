//! Annotation: turns a raw tree into a decorated display tree in one pass.

use crate::config::ThemeConfig;
use crate::types::{AnnotatedNode, NodeId, NodeKind, RawNode};

use super::CategorySet;

/// Output of annotation: the display tree plus the categories seen at depth 1.
#[derive(Debug, Clone)]
pub struct Annotated {
    /// Root of the annotated tree.
    pub root: AnnotatedNode,
    /// Category names in the order they appear under the root.
    pub categories: CategorySet,
}

/// Decorates every node with an icon-prefixed label, a style block and a tooltip.
///
/// The annotator consumes a [`RawNode`], so a tree can only ever be annotated once.
pub struct Annotator<'a> {
    theme: &'a ThemeConfig,
    next_id: u32,
    categories: CategorySet,
}

impl<'a> Annotator<'a> {
    /// Create an annotator using the given theme tables.
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self {
            theme,
            next_id: 0,
            categories: CategorySet::new(),
        }
    }

    /// Annotate a whole tree. Node ids are assigned in pre-order starting at 0.
    pub fn annotate(mut self, raw: RawNode) -> Annotated {
        let root = self.annotate_node(raw, 0);
        log::debug!(
            "Annotated {} nodes in {} categories",
            self.next_id,
            self.categories.len()
        );
        Annotated {
            root,
            categories: self.categories,
        }
    }

    fn annotate_node(&mut self, raw: RawNode, depth: usize) -> AnnotatedNode {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let RawNode {
            name,
            children,
            url,
            description,
        } = raw;
        let children = children.unwrap_or_default();
        let kind = NodeKind::classify(depth, !children.is_empty());

        if kind == NodeKind::Category {
            self.categories.insert(name.clone());
        }

        let decoration = self.theme.decoration_for(kind, &name);
        let label = decoration.label(&name);
        let item_style = self.theme.style_for(decoration);
        let tooltip = description
            .as_deref()
            .map(|d| tooltip_markup(&name, d, url.as_deref()));

        let children = children
            .into_iter()
            .map(|c| self.annotate_node(c, depth + 1))
            .collect();

        AnnotatedNode {
            id,
            name: label,
            original_name: name,
            kind,
            children,
            url,
            description,
            item_style,
            tooltip,
        }
    }
}

/// Annotate `raw` with `theme` in one call.
pub fn annotate(raw: RawNode, theme: &ThemeConfig) -> Annotated {
    Annotator::new(theme).annotate(raw)
}

/// Tooltip markup shown when a node with a description is clicked.
pub fn tooltip_markup(name: &str, description: &str, url: Option<&str>) -> String {
    let mut out = format!("Name: {}", escape_html(name));
    if let Some(url) = url {
        let url = escape_html(url);
        out.push_str(&format!(
            "<br>URL: <a href=\"{url}\" target=\"_blank\">{url}</a>"
        ));
    }
    out.push_str(&format!("<br>Description: {}", escape_html(description)));
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
