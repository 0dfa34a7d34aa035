//! Command implementations for Folio CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{FolioError, Result};
use crate::library::{Book, search_books};
use crate::processor::TextProcessor;
use crate::resources::{self, ResourceConfig, ResourceProvider};

/// Execute a CLI command.
pub fn execute_command(args: FolioArgs) -> Result<()> {
    if let Command::InstallResources(install_args) = &args.command {
        return install_resources(install_args.clone(), &args);
    }

    let provider = ResourceProvider::new(resource_config(&args)?);
    let processor = TextProcessor::from_provider(&provider);

    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args.clone(), &processor, &args),
        Command::Search(search_args) => search(search_args.clone(), &processor, &args),
        Command::Sentiment(sentiment_args) => sentiment(sentiment_args.clone(), &processor, &args),
        Command::Status => status(&provider, &processor, &args),
        Command::InstallResources(install_args) => install_resources(install_args.clone(), &args),
    }
}

/// Build the resource configuration from the config file and flags.
pub fn resource_config(args: &FolioArgs) -> Result<ResourceConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading resource configuration from {}", path.display());
            ResourceConfig::from_json_file(path)?
        }
        None => ResourceConfig::default(),
    };

    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir);
    }
    if args.no_install {
        config = config.with_install_missing(false);
    }
    if args.degraded {
        config = config.with_disabled(true);
    }

    Ok(config)
}

/// Print the search tokens of a text.
fn tokenize(args: TokenizeArgs, processor: &TextProcessor, cli_args: &FolioArgs) -> Result<()> {
    let tokens = if args.keep_stop_words {
        processor.tokenize(&args.text)
    } else {
        processor.tokenize_and_filter(&args.text)
    };

    output_result(
        "Tokens",
        &TokenizeResult {
            mode: processor.mode(),
            tokens: tokens.into_vec(),
        },
        cli_args,
    )
}

/// Search a catalog file.
fn search(args: SearchArgs, processor: &TextProcessor, cli_args: &FolioArgs) -> Result<()> {
    let books = load_catalog(&args.catalog)?;
    info!("Loaded {} book(s) from {}", books.len(), args.catalog.display());

    let start_time = Instant::now();
    let mut hits: Vec<Book> = search_books(processor, &args.query, &books)
        .into_iter()
        .cloned()
        .collect();
    let duration = start_time.elapsed();

    let total_hits = hits.len();
    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }

    output_result(
        &format!("Search results for {:?}", args.query),
        &SearchResults {
            query_tokens: processor.tokenize_and_filter(&args.query).into_vec(),
            hits,
            total_hits,
            catalog_size: books.len(),
            duration_ms: elapsed_ms(duration),
        },
        cli_args,
    )
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Score the sentiment of a text.
fn sentiment(args: SentimentArgs, processor: &TextProcessor, cli_args: &FolioArgs) -> Result<()> {
    let scores = processor.polarity_scores(&args.text);

    output_result(
        "Sentiment",
        &SentimentResult {
            label: sentiment_label(scores.compound).to_string(),
            scores,
        },
        cli_args,
    )
}

/// Write the bundled resources into a cache directory.
fn install_resources(args: InstallResourcesArgs, cli_args: &FolioArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Installing resources into: {}", args.directory.display());
    }

    let report = resources::install(&args.directory)?;
    let display = |paths: Vec<PathBuf>| -> Vec<String> {
        paths
            .into_iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect()
    };

    output_result(
        "Resources installed",
        &InstallResult {
            directory: args.directory.to_string_lossy().to_string(),
            written: display(report.written),
            existing: display(report.existing),
        },
        cli_args,
    )
}

/// Report resource status.
fn status(
    provider: &ResourceProvider,
    processor: &TextProcessor,
    cli_args: &FolioArgs,
) -> Result<()> {
    let resources = processor.resources();

    output_result(
        "Resource status",
        &StatusResult {
            status: resources.status().clone(),
            mode: processor.mode(),
            data_dir: provider
                .config()
                .data_dir
                .as_ref()
                .map(|d| d.to_string_lossy().to_string()),
            stop_words: resources.stop_words().map_or(0, |s| s.len()),
            lexicon_entries: resources.lexicon().len(),
            version: crate::VERSION.to_string(),
        },
        cli_args,
    )
}

/// Read a catalog file (JSON array of books).
fn load_catalog(path: &Path) -> Result<Vec<Book>> {
    if !path.is_file() {
        return Err(FolioError::not_found(format!("catalog {}", path.display())));
    }
    let content = fs::read_to_string(path)?;
    Book::parse_catalog(&content)
}
