//! Lexicon-based sentiment scoring for free-text reviews.
//!
//! Scoring works on the raw review text. It must not be fed the output of
//! the search analyzer: stop word removal drops negations such as `not`,
//! which the scorer relies on.
//!
//! # Examples
//!
//! ```
//! use folio::sentiment::{Lexicon, SentimentScorer};
//!
//! let scorer = SentimentScorer::new(Lexicon::bundled());
//!
//! assert!(scorer.score("I love this book, it is wonderful!") > 0.0);
//! assert!(scorer.score("I hate this book, it is terrible.") < 0.0);
//! assert_eq!(scorer.score(""), 0.0);
//! ```

use serde::{Deserialize, Serialize};

pub mod lexicon;
pub mod scorer;
pub mod text;

pub use lexicon::Lexicon;
pub use scorer::SentimentScorer;
pub use text::SentiText;

/// Result of scoring one text.
///
/// `neg`, `neu` and `pos` are proportions of the text (rounded to three
/// decimals, summing to roughly 1.0). `compound` is the normalized overall
/// valence in [-1.0, 1.0], rounded to four decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// Whether nothing in the text carried sentiment.
    pub fn is_neutral(&self) -> bool {
        self.compound == 0.0
    }
}
