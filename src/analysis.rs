//! Text analysis for catalog search.
//!
//! Text flows through a [`tokenizer::Tokenizer`] and an ordered chain of
//! [`token_filter::Filter`]s, wrapped up as an [`analyzer::Analyzer`]. The
//! analyzer used for search is [`analyzer::SearchAnalyzer`], which picks
//! between the primary and the fallback pipeline from the resource status.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{AnalysisMode, Analyzer, PipelineAnalyzer, SearchAnalyzer};
pub use token::{Token, TokenSet, TokenStream, TokenType};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
