//! Analyzer used for catalog search queries and documents.
//!
//! Two modes, chosen from the [`ResourceStatus`]:
//!
//! | mode       | pipeline                                                   |
//! |------------|------------------------------------------------------------|
//! | `Primary`  | word tokenizer → lowercase → alphanumeric → stop words     |
//! | `Fallback` | whitespace tokenizer → lowercase                           |
//!
//! The two modes can disagree on the same input. `well-known` yields
//! `well`, `known` in primary mode and `well-known` in fallback mode, and
//! punctuation stays attached in fallback mode (`"world!"`).
//!
//! [`ResourceStatus`]: crate::resources::ResourceStatus

use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;
use crate::resources::LexicalResources;

/// Which search pipeline is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Full resources: linguistic tokenization and stop word removal.
    Primary,
    /// Degraded resources: whitespace split and lowercasing only.
    Fallback,
}

/// Normalizes text for search and removes stop words.
#[derive(Debug, Clone)]
pub struct SearchAnalyzer {
    normalizer: PipelineAnalyzer,
    stop_filter: Option<StopFilter>,
    mode: AnalysisMode,
}

impl SearchAnalyzer {
    /// Pick the pipeline that matches the resource status.
    pub fn new(resources: &LexicalResources) -> Self {
        match resources.stop_words() {
            Some(stop_words) if resources.is_available() => {
                match Self::primary(Arc::clone(stop_words)) {
                    Ok(analyzer) => analyzer,
                    Err(e) => {
                        warn!("Cannot build primary search analyzer, using fallback: {e}");
                        Self::fallback()
                    }
                }
            }
            _ => {
                debug!("Linguistic resources degraded, using fallback search analyzer");
                Self::fallback()
            }
        }
    }

    /// The primary pipeline with the given stop word set.
    pub fn primary(stop_words: Arc<AHashSet<String>>) -> Result<Self> {
        let normalizer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .with_name("search_primary");

        Ok(SearchAnalyzer {
            normalizer,
            stop_filter: Some(StopFilter::with_stop_words(stop_words)),
            mode: AnalysisMode::Primary,
        })
    }

    /// The whitespace pipeline used when resources are unavailable.
    pub fn fallback() -> Self {
        let normalizer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("search_fallback");

        SearchAnalyzer {
            normalizer,
            stop_filter: None,
            mode: AnalysisMode::Fallback,
        }
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Tokenize and normalize without removing stop words.
    pub fn normalize(&self, text: &str) -> Result<TokenStream> {
        self.normalizer.analyze(text)
    }

    /// Remove stop words. Identity when no stop word set is loaded.
    pub fn remove_stop_words(&self, tokens: TokenStream) -> Result<TokenStream> {
        match &self.stop_filter {
            Some(filter) => filter.filter(tokens),
            None => Ok(tokens),
        }
    }
}

impl Analyzer for SearchAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.normalize(text)?;
        self.remove_stop_words(tokens)
    }

    fn name(&self) -> &str {
        self.normalizer.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenSet;

    fn analyze(analyzer: &SearchAnalyzer, text: &str) -> Vec<String> {
        TokenSet::from_stream(analyzer.analyze(text).unwrap()).into_vec()
    }

    #[test]
    fn test_mode_follows_resource_status() {
        let ready = SearchAnalyzer::new(&LexicalResources::bundled());
        assert_eq!(ready.mode(), AnalysisMode::Primary);
        assert_eq!(ready.name(), "search_primary");

        let degraded = SearchAnalyzer::new(&LexicalResources::degraded("test"));
        assert_eq!(degraded.mode(), AnalysisMode::Fallback);
        assert_eq!(degraded.name(), "search_fallback");
    }

    #[test]
    fn test_primary_pipeline() {
        let analyzer = SearchAnalyzer::new(&LexicalResources::bundled());

        assert_eq!(analyze(&analyzer, "The Cat and the Hat!"), vec!["cat", "hat"]);
        assert_eq!(analyze(&analyzer, "I don't like it"), vec!["like"]);
        assert_eq!(analyze(&analyzer, "well-known"), vec!["well", "known"]);
        assert!(analyze(&analyzer, "?!...").is_empty());
    }

    #[test]
    fn test_fallback_pipeline() {
        let analyzer = SearchAnalyzer::fallback();

        assert_eq!(analyze(&analyzer, "Hello, World!"), vec!["hello,", "world!"]);
        assert_eq!(analyze(&analyzer, "the well-known"), vec!["the", "well-known"]);
        assert!(analyze(&analyzer, "").is_empty());
    }

    #[test]
    fn test_normalize_keeps_stop_words() {
        let analyzer = SearchAnalyzer::new(&LexicalResources::bundled());
        let tokens = TokenSet::from_stream(analyzer.normalize("The End").unwrap());

        assert_eq!(tokens.as_slice(), &["the", "end"]);
    }
}
