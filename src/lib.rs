//! # Folio
//!
//! Text processing for a small library catalog.
//!
//! ## Features
//!
//! - Unicode-aware tokenization with stop word removal for catalog search
//! - Boolean title/author matching over a catalog scan
//! - Lexicon-based sentiment scoring of reviews
//! - Graceful fallback when linguistic resources cannot be loaded
//!
//! ```
//! use folio::prelude::*;
//!
//! let provider = ResourceProvider::default();
//! let processor = TextProcessor::from_provider(&provider);
//!
//! let books = vec![Book::new(1, "The Great Gatsby", "F. Scott Fitzgerald")];
//! assert_eq!(search_books(&processor, "gatsby", &books).len(), 1);
//! assert!(processor.score_sentiment("A wonderful read!") > 0.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod library;
pub mod processor;
pub mod resources;
pub mod search;
pub mod sentiment;

pub mod prelude {
    pub use crate::analysis::{AnalysisMode, Analyzer, TokenSet};
    pub use crate::error::{FolioError, Result};
    pub use crate::library::{Book, Review, ReviewDraft, search_books};
    pub use crate::processor::TextProcessor;
    pub use crate::resources::{LexicalResources, ResourceConfig, ResourceProvider, ResourceStatus};
    pub use crate::search::{CatalogSearcher, SearchableDocument, matches};
    pub use crate::sentiment::PolarityScores;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
