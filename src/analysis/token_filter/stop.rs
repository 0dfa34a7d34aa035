//! Stop filter implementation.
//!
//! Removes low-information words before matching. The default list is the
//! standard 179-word English list that ships with the crate; a list loaded
//! from the resource cache can be supplied instead.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token_filter::Filter;
//! use folio::analysis::token_filter::stop::StopFilter;
//! use folio::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("cat", 1),
//!     Token::new("and", 2),
//!     Token::new("the", 3),
//!     Token::new("hat", 4),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(result, vec!["cat", "hat"]);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::resources::{BUNDLED_ENGLISH_STOPWORDS, parse_word_list};

/// Default English stop words as a set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<AHashSet<String>>> =
    LazyLock::new(|| Arc::new(parse_word_list(BUNDLED_ENGLISH_STOPWORDS)));

/// A filter that removes stop words from the token stream.
///
/// Comparison is exact, so the filter belongs after [`LowercaseFilter`].
/// Order is preserved and duplicates of non-stop words are kept.
///
/// [`LowercaseFilter`]: crate::analysis::token_filter::lowercase::LowercaseFilter
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    ///
    /// ```
    /// use folio::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(filter.is_stop_word("don"));
    /// assert!(!filter.is_stop_word("gatsby"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter sharing an existing stop word set.
    pub fn with_stop_words(stop_words: Arc<AHashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(Arc::new(stop_words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
