//! Catalog and review records exchanged with the surrounding application.
//!
//! Persistence belongs to the caller. This module only derives values from
//! the records: which books match a query, and the sentiment of a review at
//! submission time.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::processor::TextProcessor;
use crate::search::{CatalogSearcher, SearchableDocument};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl Book {
    pub fn new<T: Into<String>, A: Into<String>>(id: u64, title: T, author: A) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            isbn: None,
        }
    }

    pub fn with_isbn<S: Into<String>>(mut self, isbn: S) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Parse a catalog from a JSON array of books.
    pub fn parse_catalog(json: &str) -> Result<Vec<Book>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SearchableDocument for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }
}

/// Books whose title or author shares a token with `query`, in catalog order.
pub fn search_books<'a>(processor: &TextProcessor, query: &str, books: &'a [Book]) -> Vec<&'a Book> {
    CatalogSearcher::new(processor).search(query, books.iter())
}

/// A review as submitted through the review form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub book_id: u64,
    pub review_text: String,
}

impl ReviewDraft {
    pub fn new<S: Into<String>>(book_id: u64, review_text: S) -> Self {
        ReviewDraft {
            book_id,
            review_text: review_text.into(),
        }
    }
}

/// A submitted review with its sentiment fixed at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub book_id: u64,
    pub review_text: String,
    pub sentiment_score: f64,
}

impl Review {
    /// Score the draft's raw text. Blank text scores 0.0.
    pub fn submit(processor: &TextProcessor, draft: ReviewDraft) -> Review {
        let sentiment_score = processor.score_sentiment(&draft.review_text);
        Review {
            book_id: draft.book_id,
            review_text: draft.review_text,
            sentiment_score,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.sentiment_score > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.sentiment_score < 0.0
    }
}
