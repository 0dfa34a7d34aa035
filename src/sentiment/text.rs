//! Preprocessing of raw review text for sentiment scoring.
//!
//! Unlike search analysis, nothing is lowercased or removed as a stop word
//! here: capitalization and negations carry meaning for the scorer.

/// Review text split into the units the scorer looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentiText {
    words: Vec<String>,
    is_cap_diff: bool,
}

impl SentiText {
    pub fn new(text: &str) -> Self {
        let words: Vec<String> = text
            .split_whitespace()
            .map(strip_punctuation_if_word)
            .filter(|word| word.chars().count() > 1)
            .map(str::to_string)
            .collect();
        let is_cap_diff = allcap_differential(&words);

        SentiText { words, is_cap_diff }
    }

    /// Words and emoticons, in order, with surrounding punctuation stripped.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True when some, but not all, words are written in capitals.
    pub fn is_cap_diff(&self) -> bool {
        self.is_cap_diff
    }
}

/// Strip surrounding ASCII punctuation unless that leaves two characters or
/// fewer, which keeps emoticons such as `:)` and `<3` intact.
fn strip_punctuation_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// At least one cased character, and every cased character is uppercase.
pub(crate) fn is_upper(word: &str) -> bool {
    let mut has_cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn allcap_differential(words: &[String]) -> bool {
    let allcap_words = words.iter().filter(|word| is_upper(word)).count();
    let differential = words.len() - allcap_words;
    differential > 0 && differential < words.len()
}
