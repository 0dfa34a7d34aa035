//! Lexical resource provider.
//!
//! Owns the read-only linguistic data shared by every request: the English
//! stop word list and the sentiment lexicon. Resources are loaded once,
//! either from the copies compiled into the crate or from a local cache
//! directory, and then handed out as an immutable [`LexicalResources`]
//! handle.
//!
//! Loading never fails. Anything that goes wrong is recorded as
//! [`ResourceStatus::Degraded`], and the analyzers switch to their fallback
//! behavior based on that status.
//!
//! # Cache directory layout
//!
//! ```text
//! <data_dir>/corpora/stopwords/english        one word per line
//! <data_dir>/sentiment/vader_lexicon.txt      token<TAB>valence[<TAB>...]
//! ```
//!
//! # Examples
//!
//! ```
//! use folio::resources::{ResourceConfig, ResourceProvider};
//!
//! let provider = ResourceProvider::new(ResourceConfig::default());
//! let resources = provider.ensure_ready();
//!
//! assert!(provider.is_available());
//! assert!(resources.stop_words().is_some());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use ahash::AHashSet;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS_SET;
use crate::error::{FolioError, Result};
use crate::sentiment::lexicon::Lexicon;

/// The English stop word list compiled into the crate.
pub const BUNDLED_ENGLISH_STOPWORDS: &str = include_str!("../resources/stopwords/english");

/// The sentiment lexicon compiled into the crate.
pub const BUNDLED_LEXICON: &str = include_str!("../resources/sentiment/vader_lexicon.txt");

/// Location of the stop word list inside a cache directory.
pub const STOPWORDS_PATH: &str = "corpora/stopwords/english";

/// Location of the sentiment lexicon inside a cache directory.
pub const LEXICON_PATH: &str = "sentiment/vader_lexicon.txt";

/// Parse a newline-separated word list, skipping blank lines and `#` comments.
pub fn parse_word_list(content: &str) -> AHashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Configuration for loading linguistic resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Local resource cache directory. `None` uses the bundled resources.
    pub data_dir: Option<PathBuf>,
    /// Write the bundled resources into `data_dir` when they are missing.
    pub install_missing: bool,
    /// Skip loading entirely and run in degraded mode.
    pub disabled: bool,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            install_missing: true,
            disabled: false,
        }
    }
}

impl ResourceConfig {
    /// Use `dir` as the resource cache directory.
    pub fn with_data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set whether missing resources are installed into the cache directory.
    pub fn with_install_missing(mut self, install: bool) -> Self {
        self.install_missing = install;
        self
    }

    /// Force degraded mode.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Load the configuration from a JSON file. Absent fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ResourceConfig = serde_json::from_str(&content)?;
        if config
            .data_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(FolioError::config("data_dir must not be empty"));
        }
        Ok(config)
    }
}

/// Whether linguistic resources loaded successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResourceStatus {
    /// Full resources are available.
    Ready,
    /// Resources could not be loaded; fallback behavior is in effect.
    Degraded {
        /// Why loading failed.
        reason: String,
    },
}

impl ResourceStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, ResourceStatus::Ready)
    }
}

/// Files written by [`install`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReport {
    /// Paths that were created.
    pub written: Vec<PathBuf>,
    /// Paths that already existed and were left untouched.
    pub existing: Vec<PathBuf>,
}

/// Write the bundled resources into `dir`, leaving existing files alone.
pub fn install<P: AsRef<Path>>(dir: P) -> Result<InstallReport> {
    let dir = dir.as_ref();
    let mut report = InstallReport::default();

    for (relative, content) in [
        (STOPWORDS_PATH, BUNDLED_ENGLISH_STOPWORDS),
        (LEXICON_PATH, BUNDLED_LEXICON),
    ] {
        let path = dir.join(relative);
        if path.exists() {
            report.existing.push(path);
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        debug!("Installed {}", path.display());
        report.written.push(path);
    }

    Ok(report)
}

fn load_stop_words(dir: &Path) -> Result<AHashSet<String>> {
    let path = dir.join(STOPWORDS_PATH);
    let content = fs::read_to_string(&path).map_err(|e| {
        FolioError::resource(format!("cannot read stop words at {}: {e}", path.display()))
    })?;
    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(FolioError::resource(format!(
            "stop word list at {} is empty",
            path.display()
        )));
    }
    Ok(words)
}

fn load_lexicon(dir: &Path) -> Result<Lexicon> {
    let path = dir.join(LEXICON_PATH);
    let content = fs::read_to_string(&path).map_err(|e| {
        FolioError::resource(format!("cannot read lexicon at {}: {e}", path.display()))
    })?;
    Lexicon::parse(&content)
}

/// Immutable handle to the loaded linguistic resources.
///
/// Cheap to clone; all data is shared.
#[derive(Debug, Clone)]
pub struct LexicalResources {
    status: ResourceStatus,
    stop_words: Option<Arc<AHashSet<String>>>,
    lexicon: Arc<Lexicon>,
}

impl LexicalResources {
    /// Load resources according to `config`. Failures degrade, they never error.
    pub fn load(config: &ResourceConfig) -> Self {
        if config.disabled {
            return Self::degraded("linguistic resources disabled by configuration");
        }

        let Some(dir) = &config.data_dir else {
            debug!("Using bundled linguistic resources");
            return Self::bundled();
        };

        if config.install_missing {
            match install(dir) {
                Ok(report) if !report.written.is_empty() => {
                    info!(
                        "Installed {} resource file(s) into {}",
                        report.written.len(),
                        dir.display()
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    return Self::degraded(format!(
                        "cannot install resources into {}: {e}",
                        dir.display()
                    ));
                }
            }
        }

        let stop_words = match load_stop_words(dir) {
            Ok(words) => words,
            Err(e) => return Self::degraded(e.to_string()),
        };

        let lexicon = match load_lexicon(dir) {
            Ok(lexicon) => Arc::new(lexicon),
            Err(e) => {
                warn!("{e}; using bundled sentiment lexicon");
                Lexicon::bundled()
            }
        };

        info!(
            "Loaded {} stop words and {} lexicon entries from {}",
            stop_words.len(),
            lexicon.len(),
            dir.display()
        );

        LexicalResources {
            status: ResourceStatus::Ready,
            stop_words: Some(Arc::new(stop_words)),
            lexicon,
        }
    }

    /// Resources compiled into the crate.
    pub fn bundled() -> Self {
        LexicalResources {
            status: ResourceStatus::Ready,
            stop_words: Some(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()),
            lexicon: Lexicon::bundled(),
        }
    }

    /// Degraded resources: no stop words. The sentiment lexicon is still the bundled one.
    pub fn degraded<S: Into<String>>(reason: S) -> Self {
        let reason = reason.into();
        warn!("Linguistic resources unavailable, using fallback tokenization: {reason}");
        LexicalResources {
            status: ResourceStatus::Degraded { reason },
            stop_words: None,
            lexicon: Lexicon::bundled(),
        }
    }

    pub fn status(&self) -> &ResourceStatus {
        &self.status
    }

    /// Whether full resources loaded successfully.
    pub fn is_available(&self) -> bool {
        self.status.is_ready()
    }

    /// The stop word set, or `None` in degraded mode.
    pub fn stop_words(&self) -> Option<&Arc<AHashSet<String>>> {
        self.stop_words.as_ref()
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }
}

/// Initializes [`LexicalResources`] at most once per provider.
///
/// Concurrent first calls to [`ensure_ready`](Self::ensure_ready) block until
/// the single initialization finishes; afterwards reads take no lock.
#[derive(Debug)]
pub struct ResourceProvider {
    config: ResourceConfig,
    resources: OnceLock<Arc<LexicalResources>>,
}

impl ResourceProvider {
    pub fn new(config: ResourceConfig) -> Self {
        ResourceProvider {
            config,
            resources: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    /// Load resources on first call and return the shared handle.
    pub fn ensure_ready(&self) -> Arc<LexicalResources> {
        self.resources
            .get_or_init(|| Arc::new(LexicalResources::load(&self.config)))
            .clone()
    }

    /// Whether full resources loaded successfully. Initializes if needed.
    pub fn is_available(&self) -> bool {
        self.ensure_ready().is_available()
    }
}

impl Default for ResourceProvider {
    fn default() -> Self {
        Self::new(ResourceConfig::default())
    }
}
