//! Alphanumeric filter implementation.
//!
//! Drops every token that is not made up entirely of letters and digits:
//! punctuation, contraction fragments such as `n't`, and mixed tokens such
//! as `3.14` or `c++`.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token_filter::Filter;
//! use folio::analysis::token_filter::alphanumeric::AlphanumericFilter;
//! use folio::analysis::token::Token;
//!
//! let filter = AlphanumericFilter::new();
//! let tokens = vec![
//!     Token::new("do", 0),
//!     Token::new("n't", 1),
//!     Token::new("!", 2),
//!     Token::new("panic", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "panic");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only fully alphanumeric, non-empty tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens.filter(Token::is_alphanumeric).collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
