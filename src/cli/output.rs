//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisMode;
use crate::cli::args::{FolioArgs, OutputFormat};
use crate::error::Result;
use crate::library::Book;
use crate::resources::ResourceStatus;
use crate::sentiment::PolarityScores;

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub mode: AnalysisMode,
    pub tokens: Vec<String>,
}

/// Result structure for catalog search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query_tokens: Vec<String>,
    pub hits: Vec<Book>,
    pub total_hits: usize,
    pub catalog_size: usize,
    pub duration_ms: u64,
}

/// Result structure for sentiment scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentResult {
    pub scores: PolarityScores,
    pub label: String,
}

/// Result structure for resource installation.
#[derive(Debug, Serialize, Deserialize)]
pub struct InstallResult {
    pub directory: String,
    pub written: Vec<String>,
    pub existing: Vec<String>,
}

/// Resource status report.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResult {
    pub status: ResourceStatus,
    pub mode: AnalysisMode,
    pub data_dir: Option<String>,
    pub stop_words: usize,
    pub lexicon_entries: usize,
    pub version: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &FolioArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &FolioArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match std::any::type_name::<T>() {
        name if name.ends_with("SearchResults") => output_search_results_human(&value),
        name if name.ends_with("TokenizeResult") => output_tokens_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output search results in human format.
fn output_search_results_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return output_generic_human(value);
    };

    if let Some(hits) = obj.get("hits").and_then(|h| h.as_array()) {
        println!("Search Results:");
        println!("═══════════════");

        for (i, hit) in hits.iter().enumerate() {
            let title = hit.get("title").and_then(|t| t.as_str()).unwrap_or("");
            let author = hit.get("author").and_then(|a| a.as_str()).unwrap_or("");
            println!("{}. {title} by {author}", i + 1);
        }
        println!();
    }

    let total = obj.get("total_hits").and_then(|t| t.as_u64()).unwrap_or(0);
    let size = obj.get("catalog_size").and_then(|s| s.as_u64()).unwrap_or(0);
    println!("Matched {total} of {size} book(s)");

    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!("Search time: {duration}ms");
    }
    Ok(())
}

/// Output tokens in human format, one line.
fn output_tokens_human(value: &serde_json::Value) -> Result<()> {
    let tokens: Vec<&str> = value
        .get("tokens")
        .and_then(|t| t.as_array())
        .map(|arr| arr.iter().filter_map(|t| t.as_str()).collect())
        .unwrap_or_default();

    println!("{}", tokens.join(" "));
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FolioArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{k}: {}", format_value(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}

/// Label for a compound sentiment score.
pub fn sentiment_label(compound: f64) -> &'static str {
    if compound >= 0.05 {
        "positive"
    } else if compound <= -0.05 {
        "negative"
    } else {
        "neutral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("text")), "text");
        assert_eq!(format_value(&json!(0.5)), "0.5");
        assert_eq!(format_value(&json!(["a", "b"])), "[a, b]");
        assert_eq!(format_value(&json!({"status": "ready"})), "{status: ready}");
    }

    #[test]
    fn test_sentiment_label() {
        assert_eq!(sentiment_label(0.8), "positive");
        assert_eq!(sentiment_label(-0.3), "negative");
        assert_eq!(sentiment_label(0.0), "neutral");
        assert_eq!(sentiment_label(0.049), "neutral");
    }
}
