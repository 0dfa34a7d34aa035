//! Rule-based valence scoring (VADER style).
//!
//! Each word found in the lexicon contributes its valence, adjusted by the
//! words around it:
//!
//! - boosters and dampeners up to three words before (`very`, `slightly`)
//! - ALL-CAPS emphasis when the rest of the text is not shouting
//! - negation up to three words before (`not`, `never`, anything with `n't`)
//! - contrastive `but`, which halves what came before and amplifies what follows
//! - `!` and `?` emphasis, applied to the sum
//!
//! The sum is squashed into [-1, 1] to give the compound score.

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use log::trace;

use crate::sentiment::PolarityScores;
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::text::{SentiText, is_upper};

/// Empirically derived increase for booster words.
const B_INCR: f64 = 0.293;
/// Empirically derived decrease for dampener words.
const B_DECR: f64 = -0.293;
/// Increase for a sentiment word written in capitals.
const C_INCR: f64 = 0.733;
/// Scalar applied to a negated valence.
const N_SCALAR: f64 = -0.74;
/// Normalization constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

static BOOSTER_DICT: LazyLock<AHashMap<&'static str, f64>> = LazyLock::new(|| {
    let increments = [
        "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
        "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
        "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping",
        "flippin", "frackin", "fracking", "fricking", "frickin", "frigging", "friggin", "fully",
        "greatly", "hella", "highly", "hugely", "incredible", "incredibly", "intensely", "major",
        "majorly", "more", "most", "particularly", "purely", "quite", "really", "remarkably",
        "so", "substantially", "thoroughly", "total", "totally", "tremendous", "tremendously",
        "uber", "unbelievably", "unusually", "utter", "utterly", "very",
    ];
    let decrements = [
        "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of",
        "less", "little", "marginal", "marginally", "occasional", "occasionally", "partly",
        "scarce", "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof",
        "sort-of",
    ];

    increments
        .into_iter()
        .map(|word| (word, B_INCR))
        .chain(decrements.into_iter().map(|word| (word, B_DECR)))
        .collect()
});

/// Multi-word expressions whose valence overrides their parts.
static SPECIAL_CASES: LazyLock<AHashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        ("the shit", 3.0),
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("badass", 1.5),
        ("bus stop", 0.0),
        ("yeah right", -2.0),
        ("kiss of death", -1.5),
        ("to die for", 3.0),
        ("beating heart", 3.1),
        ("broken heart", -2.9),
    ]
    .into_iter()
    .collect()
});

fn negated(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

/// Squash an unbounded sum into [-1, 1]. Non-finite input maps to 0.0.
pub fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + ALPHA).sqrt();
    if norm.is_finite() {
        norm.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Emphasis added by exclamation marks (capped at four) and repeated question marks.
fn punctuation_emphasis(text: &str) -> f64 {
    let ep_count = text.matches('!').count().min(4);
    let ep_amplifier = ep_count as f64 * 0.292;

    let qm_count = text.matches('?').count();
    let qm_amplifier = match qm_count {
        0 | 1 => 0.0,
        2 | 3 => qm_count as f64 * 0.18,
        _ => 0.96,
    };

    ep_amplifier + qm_amplifier
}

/// Lexicon-driven sentiment scorer. Stateless apart from the shared lexicon.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        SentimentScorer { lexicon }
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// The compound score of `text`, in [-1.0, 1.0].
    pub fn score(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }

    /// Negative, neutral, positive proportions and the compound score.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let senti_text = SentiText::new(text);
        let words = senti_text.words();
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let is_kind_of = lower[i] == "kind" && lower.get(i + 1).is_some_and(|w| w == "of");
            if is_kind_of || BOOSTER_DICT.contains_key(lower[i].as_str()) {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&senti_text, &lower, i));
        }

        but_check(&lower, &mut sentiments);
        let scores = score_valence(&sentiments, text);
        trace!("Polarity scores for {} word(s): {scores:?}", words.len());
        scores
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    fn sentiment_valence(&self, senti_text: &SentiText, lower: &[String], i: usize) -> f64 {
        let Some(base) = self.lexicon.valence(&lower[i]) else {
            return 0.0;
        };
        let word = &senti_text.words()[i];
        let is_cap_diff = senti_text.is_cap_diff();
        let mut valence = base;

        // "no" directly before another sentiment word negates it instead of scoring itself.
        if lower[i] == "no" && lower.get(i + 1).is_some_and(|next| self.in_lexicon(next)) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && (lower[i - 1] == "or" || lower[i - 1] == "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(word) && is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let preceding = i - (start_i + 1);
            if self.in_lexicon(&lower[preceding]) {
                continue;
            }

            let mut scalar =
                scalar_inc_dec(&senti_text.words()[preceding], &lower[preceding], valence, is_cap_diff);
            if start_i == 1 {
                scalar *= 0.95;
            } else if start_i == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lower, start_i, i);
            if start_i == 2 {
                valence = special_idioms_check(valence, lower, i);
            }
        }

        self.least_check(valence, lower, i)
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 0 && lower[i - 1] == "least" && !self.in_lexicon(&lower[i - 1]) {
            let qualified = i > 1 && (lower[i - 2] == "at" || lower[i - 2] == "very");
            if !qualified {
                return valence * N_SCALAR;
            }
        }
        valence
    }
}

/// Booster or dampener contribution of a preceding word, signed to follow `valence`.
fn scalar_inc_dec(word: &str, word_lower: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(&base) = BOOSTER_DICT.get(word_lower) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -base } else { base };
    if is_upper(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    let is_so_or_this = |w: &str| w == "so" || w == "this";

    match start_i {
        0 if negated(&lower[i - 1]) => valence * N_SCALAR,
        1 => {
            if lower[i - 2] == "never" && is_so_or_this(&lower[i - 1]) {
                valence * 1.25
            } else if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                valence
            } else if negated(&lower[i - 2]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if lower[i - 3] == "never"
                && (is_so_or_this(&lower[i - 2]) || is_so_or_this(&lower[i - 1]))
            {
                valence * 1.25
            } else if lower[i - 3] == "without"
                && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt")
            {
                valence
            } else if negated(&lower[i - 3]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// Requires `i >= 3`.
fn special_idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let onezero = format!("{} {}", lower[i - 1], lower[i]);
    let twoonezero = format!("{} {} {}", lower[i - 2], lower[i - 1], lower[i]);
    let twoone = format!("{} {}", lower[i - 2], lower[i - 1]);
    let threetwoone = format!("{} {} {}", lower[i - 3], lower[i - 2], lower[i - 1]);
    let threetwo = format!("{} {}", lower[i - 3], lower[i - 2]);

    for sequence in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(&special) = SPECIAL_CASES.get(sequence.as_str()) {
            valence = special;
            break;
        }
    }

    if lower.len() > i + 1 {
        let zeroone = format!("{} {}", lower[i], lower[i + 1]);
        if let Some(&special) = SPECIAL_CASES.get(zeroone.as_str()) {
            valence = special;
        }
    }
    if lower.len() > i + 2 {
        let zeroonetwo = format!("{} {} {}", lower[i], lower[i + 1], lower[i + 2]);
        if let Some(&special) = SPECIAL_CASES.get(zeroonetwo.as_str()) {
            valence = special;
        }
    }

    for n_gram in [&threetwoone, &threetwo, &twoone] {
        if let Some(&scalar) = BOOSTER_DICT.get(n_gram.as_str()) {
            valence += scalar;
        }
    }

    valence
}

fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but_index {
            *sentiment *= 0.5;
        } else if index > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let punct_amplifier = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct_amplifier;
    } else if sum < 0.0 {
        sum -= punct_amplifier;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += punct_amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct_amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    let proportion = |part: f64| {
        let value = (part / total).abs();
        if value.is_finite() { round_to(value, 3) } else { 0.0 }
    };

    PolarityScores {
        neg: proportion(neg_sum),
        neu: proportion(neu_count),
        pos: proportion(pos_sum),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(Lexicon::bundled())
    }

    #[test]
    fn test_positive_and_negative_reviews() {
        let scorer = scorer();
        assert!(scorer.score("I love this book, it is wonderful!") > 0.5);
        assert!(scorer.score("I hate this book, it is terrible.") < -0.5);
    }

    #[test]
    fn test_compound_matches_formula() {
        // love (3.2) + wonderful (2.7) + one "!" (0.292)
        let expected = normalize(3.2 + 2.7 + 0.292);
        let score = scorer().score("I love this book, it is wonderful!");
        assert!((score - round_to(expected, 4)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_neutral_text() {
        let scorer = scorer();
        assert_eq!(scorer.polarity_scores(""), PolarityScores::default());
        assert_eq!(scorer.score("   "), 0.0);
        assert_eq!(scorer.score("The book has four hundred pages."), 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let scorer = scorer();
        assert!(scorer.score("This book is good") > 0.0);
        assert!(scorer.score("This book is not good") < 0.0);
        assert!(scorer.score("This book isn't good") < 0.0);
        assert!(scorer.score("It was never really good") < 0.0);
    }

    #[test]
    fn test_boosters_and_dampeners() {
        let scorer = scorer();
        let plain = scorer.score("The plot is good");
        assert!(scorer.score("The plot is very good") > plain);
        assert!(scorer.score("The plot is slightly good") < plain);
    }

    #[test]
    fn test_caps_emphasis() {
        let scorer = scorer();
        assert!(scorer.score("The ending is GREAT") > scorer.score("The ending is great"));
    }

    #[test]
    fn test_exclamation_emphasis_is_capped() {
        let scorer = scorer();
        let one = scorer.score("good!");
        let four = scorer.score("good!!!!");
        let nine = scorer.score("good!!!!!!!!!");
        assert!(four > one);
        assert_eq!(four, nine);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        let scorer = scorer();
        assert!(scorer.score("The start was great but the ending was terrible") < 0.0);
        assert!(scorer.score("The start was terrible but the ending was great") > 0.0);
    }

    #[test]
    fn test_no_before_sentiment_word() {
        let scorer = scorer();
        assert!(scorer.score("no good reason") < 0.0);
    }

    #[test]
    fn test_least_negates() {
        let scorer = scorer();
        assert!(scorer.score("the least interesting chapter") < 0.0);
        assert!(scorer.score("at least interesting") > 0.0);
    }

    #[test]
    fn test_special_idioms() {
        let scorer = scorer();
        assert!(scorer.score("this book is the bomb") > 0.5);
    }

    #[test]
    fn test_lexicon_coverage() {
        let scorer = scorer();
        assert!(scorer.score("I was disgusted") < 0.0);
        assert!(scorer.score("lol") > 0.0);
        assert!(scorer.score("haha, loved it") > 0.0);
        assert!(scorer.score("A dreadful novel") < 0.0);
        assert!(scorer.score("Such a letdown") < 0.0);
        assert!(scorer.score("I'm heartbroken") < 0.0);
    }

    #[test]
    fn test_single_word_compound() {
        // pleasant (2.3) alone: 2.3 / sqrt(2.3^2 + 15)
        assert_eq!(scorer().score("It was pleasant"), 0.5106);
        assert_eq!(scorer().score("It was disgusting"), -0.5267);
    }

    #[test]
    fn test_page_turner_is_neutral() {
        assert_eq!(scorer().score("a real page turner"), 0.0);
    }

    #[test]
    fn test_emoticons() {
        let scorer = scorer();
        assert!(scorer.score("finished it :)") > 0.0);
        assert!(scorer.score("finished it :(") < 0.0);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let scores = scorer().polarity_scores("A good plot, bad characters and a long middle.");
        let total = scores.neg + scores.neu + scores.pos;
        assert!((total - 1.0).abs() < 0.01, "{scores:?}");
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0), 0.0);
        assert!(normalize(1e6) <= 1.0);
        assert!(normalize(-1e6) >= -1.0);
        assert_eq!(normalize(f64::NAN), 0.0);
        assert_eq!(normalize(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert_eq!(punctuation_emphasis("no marks"), 0.0);
        assert_eq!(punctuation_emphasis("why?"), 0.0);
        assert!((punctuation_emphasis("why??") - 0.36).abs() < 1e-9);
        assert!((punctuation_emphasis("why?????") - 0.96).abs() < 1e-9);
        assert!((punctuation_emphasis("wow!!!!!!") - 4.0 * 0.292).abs() < 1e-9);
    }
}
