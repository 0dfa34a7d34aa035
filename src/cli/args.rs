//! Command line argument parsing for Folio CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Folio - text processing for a library catalog
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Catalog search normalization and review sentiment scoring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FolioArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Local resource cache directory (default: resources built into the binary)
    #[arg(long, value_name = "DIR", env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Resource configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Do not install missing resources into the cache directory
    #[arg(long)]
    pub no_install: bool,

    /// Run with linguistic resources disabled
    #[arg(long)]
    pub degraded: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FolioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the search tokens of a text
    Tokenize(TokenizeArgs),

    /// Search a catalog file
    Search(SearchArgs),

    /// Score the sentiment of a text
    Sentiment(SentimentArgs),

    /// Write the bundled resources into a cache directory
    #[command(name = "install-resources")]
    InstallResources(InstallResourcesArgs),

    /// Report whether linguistic resources are available
    Status,
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Keep stop words
    #[arg(long)]
    pub keep_stop_words: bool,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Catalog file (JSON array of books)
    #[arg(value_name = "CATALOG_JSON")]
    pub catalog: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for sentiment scoring
#[derive(Parser, Debug, Clone)]
pub struct SentimentArgs {
    /// Review text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for installing resources
#[derive(Parser, Debug, Clone)]
pub struct InstallResourcesArgs {
    /// Target cache directory
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_command() {
        let args = FolioArgs::try_parse_from([
            "folio",
            "search",
            "catalog.json",
            "great gatsby",
            "--limit",
            "5",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.catalog, PathBuf::from("catalog.json"));
            assert_eq!(search_args.query, "great gatsby");
            assert_eq!(search_args.limit, Some(5));
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_resource_flags() {
        let args = FolioArgs::try_parse_from([
            "folio",
            "--data-dir",
            "/tmp/folio",
            "--no-install",
            "--degraded",
            "status",
        ])
        .unwrap();

        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/folio")));
        assert!(args.no_install);
        assert!(args.degraded);
        assert!(matches!(args.command, Command::Status));
    }

    #[test]
    fn test_install_resources_command() {
        let args =
            FolioArgs::try_parse_from(["folio", "install-resources", "/var/cache/folio"]).unwrap();

        if let Command::InstallResources(install_args) = args.command {
            assert_eq!(install_args.directory, PathBuf::from("/var/cache/folio"));
        } else {
            panic!("Expected InstallResources command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = FolioArgs::try_parse_from(["folio", "status"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = FolioArgs::try_parse_from(["folio", "-vv", "status"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = FolioArgs::try_parse_from(["folio", "--quiet", "status"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = FolioArgs::try_parse_from(["folio", "--format", "json", "sentiment", "ok"])
            .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));

        assert!(FolioArgs::try_parse_from(["folio", "--format", "yaml", "status"]).is_err());
    }
}
