//! Word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29) and then breaks English
//! contractions the way the Penn Treebank does: `don't` becomes `do` + `n't`,
//! `reader's` becomes `reader` + `'s`. Punctuation segments are emitted as
//! their own tokens; whitespace segments are dropped.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::tokenizer::Tokenizer;
//! use folio::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer
//!     .tokenize("I don't know.")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["I", "do", "n't", "know", "."]);
//! ```

use std::sync::Arc;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{FolioError, Result};

/// Trailing clitics split off a word segment, with either apostrophe form.
const CLITIC_PATTERN: &str = r"(?i)^(.+?)(n['\x{2019}]t|['\x{2019}](?:s|m|d|ll|re|ve))$";

/// A tokenizer that splits text on Unicode word boundaries and contractions.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    clitic: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let clitic = Regex::new(CLITIC_PATTERN)
            .map_err(|e| FolioError::analysis(format!("Invalid clitic pattern: {e}")))?;

        Ok(WordTokenizer {
            clitic: Arc::new(clitic),
        })
    }

    /// Split a word segment into its stem and an optional trailing clitic.
    fn split_clitic<'a>(&self, word: &'a str) -> (&'a str, Option<&'a str>) {
        match self.clitic.captures(word) {
            Some(caps) => match (caps.get(1), caps.get(2)) {
                (Some(stem), Some(clitic)) => (stem.as_str(), Some(clitic.as_str())),
                _ => (word, None),
            },
            None => (word, None),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for (start, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            let (stem, clitic) = self.split_clitic(segment);
            tokens.push(Token::with_offsets(
                stem,
                tokens.len(),
                start,
                start + stem.len(),
            ));

            if let Some(clitic) = clitic {
                let clitic_start = start + stem.len();
                tokens.push(
                    Token::with_offsets(
                        clitic,
                        tokens.len(),
                        clitic_start,
                        clitic_start + clitic.len(),
                    )
                    .with_token_type(TokenType::Clitic),
                );
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
