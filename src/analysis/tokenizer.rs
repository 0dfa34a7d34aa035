//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline: they split input
//! text into tokens without changing their content.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Unicode word boundaries with contraction splitting
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace only
//!
//! # Examples
//!
//! ```
//! use folio::analysis::tokenizer::Tokenizer;
//! use folio::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by
/// concurrent requests.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
pub mod word;

pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;
