//! Lowercase filter implementation.
//!
//! Uses full Unicode lowercasing, so `ÉCOLE` becomes `école`.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token_filter::Filter;
//! use folio::analysis::token_filter::lowercase::LowercaseFilter;
//! use folio::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("The", 0), Token::new("GATSBY", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "the");
//! assert_eq!(filtered[1].text, "gatsby");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase, preserving positions and offsets.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lower = token.text.to_lowercase();
                if lower == token.text {
                    token
                } else {
                    token.with_text(lower)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::with_offsets("Hello", 0, 0, 5),
            Token::new("WORLD", 1),
            Token::new("ÉCOLE", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].end_offset, 5);
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "école");
    }

    #[test]
    fn test_titlecase_letters() {
        let filter = LowercaseFilter::new();
        // U+01C5 and U+1F88 are titlecase, not uppercase.
        let tokens = vec![Token::new("\u{01C5}emal", 0), Token::new("\u{1F88}", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "\u{01C6}emal");
        assert_eq!(result[1].text, "\u{1F80}");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
