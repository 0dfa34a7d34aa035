//! Boolean matching of a query against catalog documents.
//!
//! A document matches when any query token appears in its title tokens or
//! in its author tokens. There is no scoring. Matching documents come back in
//! catalog order.
//!
//! The catalog is scanned linearly and every document is re-analyzed per
//! query, so cost grows with catalog size.

use log::debug;

use crate::analysis::token::TokenSet;
use crate::processor::TextProcessor;

/// Read-only view of the searchable fields of a catalog entry.
pub trait SearchableDocument {
    fn title(&self) -> &str;

    fn author(&self) -> &str;
}

impl<D: SearchableDocument + ?Sized> SearchableDocument for &D {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn author(&self) -> &str {
        (**self).author()
    }
}

impl SearchableDocument for (String, String) {
    fn title(&self) -> &str {
        &self.0
    }

    fn author(&self) -> &str {
        &self.1
    }
}

impl SearchableDocument for (&str, &str) {
    fn title(&self) -> &str {
        self.0
    }

    fn author(&self) -> &str {
        self.1
    }
}

/// True iff at least one query token is present in `title` or in `author`.
///
/// An empty query never matches.
pub fn matches(query: &TokenSet, title: &TokenSet, author: &TokenSet) -> bool {
    query.intersects(title) || query.intersects(author)
}

/// Scans a catalog with the analyzers of a [`TextProcessor`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogSearcher<'a> {
    processor: &'a TextProcessor,
}

impl<'a> CatalogSearcher<'a> {
    pub fn new(processor: &'a TextProcessor) -> Self {
        CatalogSearcher { processor }
    }

    /// Whether a single document matches an already-analyzed query.
    pub fn is_match<D: SearchableDocument>(&self, query: &TokenSet, document: &D) -> bool {
        if query.is_empty() {
            return false;
        }
        let title = self.processor.tokenize_and_filter(document.title());
        let author = self.processor.tokenize_and_filter(document.author());
        matches(query, &title, &author)
    }

    /// All documents matching `query`, in catalog order.
    pub fn search<I, D>(&self, query: &str, catalog: I) -> Vec<D>
    where
        I: IntoIterator<Item = D>,
        D: SearchableDocument,
    {
        let query_tokens = self.processor.tokenize_and_filter(query);
        if query_tokens.is_empty() {
            debug!("Query {query:?} has no searchable tokens");
            return Vec::new();
        }

        let mut scanned = 0usize;
        let hits: Vec<D> = catalog
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter(|doc| self.is_match(&query_tokens, doc))
            .collect();

        debug!(
            "Query [{query_tokens}] matched {} of {scanned} document(s)",
            hits.len()
        );
        hits
    }
}
