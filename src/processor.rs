//! The text-processing facade used by the search and review workflows.
//!
//! [`TextProcessor::tokenize_and_filter`] and [`TextProcessor::score_sentiment`]
//! are the two entry points. Neither returns an error: analysis failures fall
//! back to a whitespace split, and scoring is total.
//!
//! # Examples
//!
//! ```
//! use folio::processor::TextProcessor;
//! use folio::resources::LexicalResources;
//!
//! let processor = TextProcessor::new(LexicalResources::bundled());
//!
//! let tokens = processor.tokenize_and_filter("The Cat and the Hat");
//! assert_eq!(tokens.as_slice(), &["cat", "hat"]);
//!
//! assert!(processor.score_sentiment("What a wonderful book!") > 0.0);
//! ```

use std::sync::Arc;

use log::warn;

use crate::analysis::analyzer::{AnalysisMode, Analyzer, SearchAnalyzer};
use crate::analysis::token::TokenSet;
use crate::resources::{LexicalResources, ResourceProvider, ResourceStatus};
use crate::sentiment::{PolarityScores, SentimentScorer};

/// Tokenization, stop word filtering and sentiment scoring over one
/// immutable set of lexical resources.
///
/// Cheap to share: all state is read-only after construction.
#[derive(Debug, Clone)]
pub struct TextProcessor {
    resources: Arc<LexicalResources>,
    analyzer: SearchAnalyzer,
    scorer: SentimentScorer,
}

impl TextProcessor {
    pub fn new<R: Into<Arc<LexicalResources>>>(resources: R) -> Self {
        let resources = resources.into();
        let analyzer = SearchAnalyzer::new(&resources);
        let scorer = SentimentScorer::new(Arc::clone(resources.lexicon()));

        TextProcessor {
            resources,
            analyzer,
            scorer,
        }
    }

    /// Initialize the provider if needed and build a processor over its resources.
    pub fn from_provider(provider: &ResourceProvider) -> Self {
        Self::new(provider.ensure_ready())
    }

    pub fn status(&self) -> &ResourceStatus {
        self.resources.status()
    }

    pub fn mode(&self) -> AnalysisMode {
        self.analyzer.mode()
    }

    pub fn resources(&self) -> &Arc<LexicalResources> {
        &self.resources
    }

    /// Normalize `text` into tokens without removing stop words.
    pub fn tokenize(&self, text: &str) -> TokenSet {
        match self.analyzer.normalize(text) {
            Ok(tokens) => TokenSet::from_stream(tokens),
            Err(e) => {
                warn!("Tokenization failed, splitting on whitespace: {e}");
                whitespace_fallback(text)
            }
        }
    }

    /// Remove stop words from `tokens`. Identity in degraded mode.
    pub fn filter(&self, tokens: TokenSet) -> TokenSet {
        match self.resources.stop_words() {
            Some(stop_words) if self.resources.is_available() => tokens
                .into_iter()
                .filter(|token| !stop_words.contains(token))
                .collect(),
            _ => tokens,
        }
    }

    /// Tokens used to match queries against titles and authors.
    pub fn tokenize_and_filter(&self, text: &str) -> TokenSet {
        match self.analyzer.analyze(text) {
            Ok(tokens) => TokenSet::from_stream(tokens),
            Err(e) => {
                warn!("Analysis failed, splitting on whitespace: {e}");
                whitespace_fallback(text)
            }
        }
    }

    /// Compound sentiment of raw review text, in [-1.0, 1.0].
    pub fn score_sentiment(&self, text: &str) -> f64 {
        self.scorer.score(text)
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        self.scorer.polarity_scores(text)
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new(LexicalResources::bundled())
    }
}

fn whitespace_fallback(text: &str) -> TokenSet {
    SearchAnalyzer::fallback()
        .analyze(text)
        .map(TokenSet::from_stream)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degraded() -> TextProcessor {
        TextProcessor::new(LexicalResources::degraded("simulated"))
    }

    #[test]
    fn test_case_insensitive() {
        let processor = TextProcessor::default();

        assert_eq!(
            processor.tokenize_and_filter("The Great GATSBY"),
            processor.tokenize_and_filter("the great gatsby")
        );
        assert_eq!(
            processor.tokenize_and_filter("the great gatsby").as_slice(),
            &["great", "gatsby"]
        );
    }

    #[test]
    fn test_titlecase_digraphs_fold() {
        for processor in [TextProcessor::default(), degraded()] {
            let titlecase = processor.tokenize_and_filter("\u{01C5}emal Tale");
            assert_eq!(titlecase, processor.tokenize_and_filter("\u{01C6}emal tale"));
            assert_eq!(titlecase, processor.tokenize_and_filter("\u{01C4}EMAL TALE"));
            assert_eq!(titlecase.as_slice()[0], "\u{01C6}emal");
        }
    }

    #[test]
    fn test_stop_words_removed() {
        let processor = TextProcessor::default();
        let tokens = processor.tokenize_and_filter("the cat and the hat");

        assert!(!tokens.contains("the"));
        assert!(!tokens.contains("and"));
        assert_eq!(tokens.as_slice(), &["cat", "hat"]);
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let processor = TextProcessor::default();
        let first = processor.tokenize_and_filter("A Tale of Two Cities, by Charles Dickens!");
        let second = processor.tokenize_and_filter(&first.to_string());

        assert_eq!(first, second);
        assert_eq!(first.as_slice(), &["tale", "two", "cities", "charles", "dickens"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let processor = TextProcessor::default();
        let tokens = processor.tokenize_and_filter("cat hat cat");

        assert_eq!(tokens.as_slice(), &["cat", "hat", "cat"]);
    }

    #[test]
    fn test_empty_and_punctuation_input() {
        let processor = TextProcessor::default();

        assert!(processor.tokenize_and_filter("").is_empty());
        assert!(processor.tokenize_and_filter("  \t\n").is_empty());
        assert!(processor.tokenize_and_filter("!!! ... ???").is_empty());
    }

    #[test]
    fn test_tokenize_then_filter_equals_combined() {
        let processor = TextProcessor::default();
        let text = "It's the best of times, it's the worst of times";

        let tokens = processor.tokenize(text);
        assert!(tokens.contains("the"));
        assert_eq!(processor.filter(tokens), processor.tokenize_and_filter(text));
    }

    #[test]
    fn test_degraded_mode_falls_back_to_whitespace() {
        let processor = degraded();
        assert_eq!(processor.mode(), AnalysisMode::Fallback);
        assert!(!processor.status().is_ready());

        let tokens = processor.tokenize_and_filter("Hello, World!");
        assert!(!tokens.is_empty());
        assert_eq!(tokens.as_slice(), &["hello,", "world!"]);
    }

    #[test]
    fn test_degraded_filter_is_identity() {
        let processor = degraded();
        let tokens: TokenSet = vec!["the".to_string(), "cat".to_string()].into();

        assert_eq!(processor.filter(tokens.clone()), tokens);
    }

    #[test]
    fn test_sentiment_available_when_degraded() {
        let processor = degraded();

        assert!(processor.score_sentiment("I love this book, it is wonderful!") > 0.0);
        assert!(processor.score_sentiment("I hate this book, it is terrible.") < 0.0);
        assert_eq!(processor.score_sentiment(""), 0.0);
    }

    #[test]
    fn test_sentiment_uses_raw_text() {
        let processor = TextProcessor::default();

        // "not" is a stop word; scoring must still see it.
        assert!(processor.score_sentiment("This book is not good") < 0.0);
        assert!(processor.score_sentiment("This book is good") > 0.0);
    }

    #[test]
    fn test_from_provider() {
        let provider = ResourceProvider::default();
        let processor = TextProcessor::from_provider(&provider);

        assert!(provider.is_available());
        assert_eq!(processor.mode(), AnalysisMode::Primary);
    }
}
