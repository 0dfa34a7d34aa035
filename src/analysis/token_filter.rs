//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer (or a previous
//! filter) and produce a new stream.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`alphanumeric::AlphanumericFilter`] - Keeps only letter/digit tokens
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token_filter::Filter;
//! use folio::analysis::token_filter::lowercase::LowercaseFilter;
//! use folio::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! ```text
//! Tokenizer → Lowercase → Alphanumeric → Stop Words → TokenSet
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so filters can be shared by concurrent
/// requests.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod lowercase;
pub mod stop;

pub use alphanumeric::AlphanumericFilter;
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
