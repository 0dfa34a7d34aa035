//! Sentiment lexicon: token → valence weight.

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use log::warn;

use crate::error::{FolioError, Result};
use crate::resources::BUNDLED_LEXICON;

static BUNDLED: LazyLock<Arc<Lexicon>> =
    LazyLock::new(|| Arc::new(load_bundled(BUNDLED_LEXICON)));

/// Parse built-in lexicon data, falling back to an empty lexicon that scores everything 0.0.
fn load_bundled(content: &str) -> Lexicon {
    match Lexicon::parse(content) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            warn!("Bundled sentiment lexicon is invalid, sentiment scores will be 0.0: {e}");
            Lexicon::default()
        }
    }
}

/// Mapping from lowercase tokens (words and emoticons) to valence weights
/// on a roughly -4.0 ..= 4.0 scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: AHashMap<String, f64>,
}

impl Lexicon {
    /// Parse `token<TAB>valence[<TAB>...]` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. Tokens are
    /// lowercased. A missing or non-finite valence is an error.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = AHashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default().trim();
            let valence = fields
                .next()
                .map(str::trim)
                .ok_or_else(|| {
                    FolioError::resource(format!("lexicon line {}: missing valence", index + 1))
                })?
                .parse::<f64>()
                .map_err(|e| FolioError::resource(format!("lexicon line {}: {e}", index + 1)))?;

            if token.is_empty() || !valence.is_finite() {
                return Err(FolioError::resource(format!(
                    "lexicon line {}: invalid entry",
                    index + 1
                )));
            }

            entries.insert(token.to_lowercase(), valence);
        }

        Ok(Lexicon { entries })
    }

    /// The lexicon compiled into the crate, shared.
    pub fn bundled() -> Arc<Lexicon> {
        BUNDLED.clone()
    }

    /// Build a lexicon from explicit entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Lexicon {
            entries: entries
                .into_iter()
                .map(|(token, valence)| (token.as_ref().to_lowercase(), valence))
                .collect(),
        }
    }

    /// Valence of an already lowercased token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_lexicon_parses() {
        let lexicon = Lexicon::parse(BUNDLED_LEXICON).unwrap();
        assert!(lexicon.len() > 900);
        assert_eq!(lexicon.valence("love"), Some(3.2));
        assert_eq!(lexicon.valence("lol"), Some(1.8));
        assert_eq!(lexicon.valence("disgusted"), Some(-2.4));
        assert_eq!(lexicon.valence("hate"), Some(-2.7));
        assert_eq!(lexicon.valence(":d"), Some(2.3));
        assert_eq!(lexicon.valence(":D"), None);
    }

    #[test]
    fn test_load_bundled() {
        assert_eq!(load_bundled("good\t1.9\n").valence("good"), Some(1.9));
        assert!(load_bundled("good\tgreat\n").is_empty());
        assert_eq!(Lexicon::bundled().len(), load_bundled(BUNDLED_LEXICON).len());
    }

    #[test]
    fn test_parse_extra_columns_and_comments() {
        let lexicon = Lexicon::parse("# header\n\nGood\t1.9\t0.9\t[2, 2, 1]\nmeh\t-0.3\n").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.valence("good"), Some(1.9));
        assert_eq!(lexicon.valence("meh"), Some(-0.3));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Lexicon::parse("good\n").is_err());
        assert!(Lexicon::parse("good\tgreat\n").is_err());
        assert!(Lexicon::parse("good\tNaN\n").is_err());
        assert!(Lexicon::parse("\t1.0\n").is_err());
    }

    #[test]
    fn test_from_entries() {
        let lexicon = Lexicon::from_entries([("Splendid", 2.8)]);
        assert!(lexicon.contains("splendid"));
    }
}
