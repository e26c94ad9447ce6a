//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ScrivenerArgs};
use crate::corrector::{EvaluationStats, TrainingReport};
use crate::error::Result;

/// Result structure for the train command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub corpus: String,
    pub report: TrainingReport,
    pub evaluation: EvaluationStats,
    pub duration_ms: u64,
}

/// One corrected token in a correction result.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenCorrection {
    pub original: String,
    pub corrected: String,
    pub passed_through: bool,
}

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionSummary {
    pub tokens: Vec<TokenCorrection>,
    pub sentence: String,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ScrivenerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ScrivenerArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                print_field(&key, &val, 0);
            }
        }
        other => println!("{other}"),
    }
    Ok(())
}

fn print_field(key: &str, value: &serde_json::Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        serde_json::Value::Object(map) => {
            println!("{pad}{key}:");
            for (k, v) in map {
                print_field(k, v, indent + 1);
            }
        }
        serde_json::Value::Array(items) => {
            println!("{pad}{key}:");
            for item in items {
                match item {
                    serde_json::Value::Object(map) => {
                        let line: Vec<String> =
                            map.iter().map(|(k, v)| format!("{k}={v}")).collect();
                        println!("{pad}  - {}", line.join(" "));
                    }
                    other => println!("{pad}  - {other}"),
                }
            }
        }
        other => println!("{pad}{key}: {other}"),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ScrivenerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
