//! Search query executor over a [`SearchIndex`].

use serde::Serialize;

use crate::index::{SearchIndex, SearchIndexEntry};
use crate::tree::CategoryFilter;
use crate::types::{MAX_SEARCH_RESULTS, MIN_QUERY_LEN};

/// Result of running a query.
///
/// `Inactive` means the query was too short to search at all, which the UI treats
/// differently from a search that found nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "results", rename_all = "lowercase")]
pub enum SearchOutcome<T> {
    /// Query shorter than [`MIN_QUERY_LEN`] characters.
    Inactive,
    /// Matches in index order, at most [`MAX_SEARCH_RESULTS`].
    Matches(Vec<T>),
}

impl<T> SearchOutcome<T> {
    /// Whether a search actually ran.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Matches(_))
    }

    /// Matched entries (empty when inactive).
    pub fn entries(&self) -> &[T] {
        match self {
            Self::Inactive => &[],
            Self::Matches(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Convert each match, keeping the outcome shape.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchOutcome<U> {
        match self {
            Self::Inactive => SearchOutcome::Inactive,
            Self::Matches(v) => SearchOutcome::Matches(v.into_iter().map(f).collect()),
        }
    }
}

/// Runs substring queries against a search index. Never mutates the index.
pub struct QueryEngine {
    max_results: usize,
}

impl QueryEngine {
    /// Create an engine returning at most [`MAX_SEARCH_RESULTS`] matches.
    pub fn new() -> Self {
        Self {
            max_results: MAX_SEARCH_RESULTS,
        }
    }

    /// Case-insensitive substring search over names and descriptions.
    pub fn search<'i, 'a>(
        &self,
        index: &'i SearchIndex<'a>,
        query: &str,
    ) -> SearchOutcome<&'i SearchIndexEntry<'a>> {
        self.search_visible(index, query, &CategoryFilter::all_visible())
    }

    /// Like [`search`](Self::search), skipping entries hidden by `filter`.
    pub fn search_visible<'i, 'a>(
        &self,
        index: &'i SearchIndex<'a>,
        query: &str,
        filter: &CategoryFilter,
    ) -> SearchOutcome<&'i SearchIndexEntry<'a>> {
        let Some(needle) = normalize_query(query) else {
            return SearchOutcome::Inactive;
        };
        let results: Vec<_> = index
            .iter()
            .filter(|e| filter.is_visible(e.node_id))
            .filter(|e| entry_matches(e, &needle))
            .take(self.max_results)
            .collect();
        log::debug!("Query {:?} matched {} entries", needle, results.len());
        SearchOutcome::Matches(results)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased query, or `None` if it is too short to search.
///
/// Whitespace counts like any other character: `" h"` is searched as given.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.chars().count() < MIN_QUERY_LEN {
        return None;
    }
    Some(query.to_lowercase())
}

/// Whether the entry's name or description contains `needle` (already lowercased).
pub fn entry_matches(entry: &SearchIndexEntry<'_>, needle: &str) -> bool {
    entry.name.to_lowercase().contains(needle)
        || entry
            .description
            .is_some_and(|d| d.to_lowercase().contains(needle))
}
