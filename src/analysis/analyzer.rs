//! Analyzers combine a tokenizer with a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! - [`pipeline::PipelineAnalyzer`] - any tokenizer plus an ordered filter chain
//! - [`search::SearchAnalyzer`] - the pipeline used for catalog search, chosen
//!   from the resource status

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can serve
/// concurrent requests.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &str;
}

pub mod pipeline;
pub mod search;

pub use pipeline::PipelineAnalyzer;
pub use search::{AnalysisMode, SearchAnalyzer};
