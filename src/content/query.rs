//! Queries over a loaded document collection
//!
//! All functions take the collection in its loaded order (newest first) and
//! preserve that order in their results.

use serde::Serialize;
use std::collections::BTreeSet;

use super::Document;
use crate::config::ListingConfig;

/// Sorted, de-duplicated union of every document's categories
pub fn collect_categories(docs: &[Document]) -> Vec<String> {
    docs.iter()
        .flat_map(|doc| doc.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Documents sharing at least one category with `doc`, excluding `doc` itself
pub fn find_related<'a>(doc: &Document, all: &'a [Document], limit: usize) -> Vec<&'a Document> {
    all.iter()
        .filter(|other| other.key != doc.key && other.shares_category_with(doc))
        .take(limit)
        .collect()
}

/// Case-insensitive match on title, excerpt or any category.
///
/// A blank query matches everything.
pub fn filter_by_query<'a>(docs: &'a [Document], query: &str) -> Vec<&'a Document> {
    docs.iter().filter(|doc| matches_query(doc, query)).collect()
}

/// Whether one document matches a search query, see [`filter_by_query`]
fn matches_query(doc: &Document, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || doc.title.to_lowercase().contains(&query)
        || doc.excerpt.to_lowercase().contains(&query)
        || doc
            .categories
            .iter()
            .any(|c| c.to_lowercase().contains(&query))
}

/// Documents filed under `category`, or all of them when `None`
pub fn filter_by_category<'a>(docs: &'a [Document], category: Option<&str>) -> Vec<&'a Document> {
    match category {
        Some(category) => docs.iter().filter(|doc| doc.has_category(category)).collect(),
        None => docs.iter().collect(),
    }
}

/// The `limit` newest documents
pub fn recent(docs: &[Document], limit: usize) -> &[Document] {
    &docs[..limit.min(docs.len())]
}

/// Parameters of the blog listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    /// Number of filtered documents consumed so far, featured post included
    pub visible: usize,
}

impl ListQuery {
    /// First page of the listing
    pub fn new(listing: &ListingConfig) -> Self {
        Self {
            query: None,
            category: None,
            visible: listing.initial,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Reveal the next batch of documents
    pub fn load_more(&mut self, listing: &ListingConfig) {
        self.visible += listing.step;
    }

    fn is_filtered(&self) -> bool {
        self.category.is_some() || self.query.as_deref().is_some_and(|q| !q.trim().is_empty())
    }
}

/// What the blog listing page shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<'a> {
    /// Newest document, shown apart when no filter is active
    pub featured: Option<&'a Document>,
    pub items: Vec<&'a Document>,
    /// Number of documents matching the filters
    pub total: usize,
    pub has_more: bool,
}

/// Build the listing view: category filter, then text filter, then the visible window
pub fn list_view<'a>(docs: &'a [Document], query: &ListQuery) -> ListView<'a> {
    let by_category = filter_by_category(docs, query.category.as_deref());
    let text = query.query.as_deref().unwrap_or("");
    let filtered: Vec<&Document> = by_category
        .into_iter()
        .filter(|doc| matches_query(doc, text))
        .collect();

    let total = filtered.len();
    let visible = query.visible.min(total);
    let (featured, skip) = if query.is_filtered() {
        (None, 0)
    } else {
        (filtered.first().copied(), 1)
    };

    let items = filtered
        .iter()
        .take(visible)
        .skip(skip)
        .copied()
        .collect();

    ListView {
        featured,
        items,
        total,
        has_more: visible < total,
    }
}
