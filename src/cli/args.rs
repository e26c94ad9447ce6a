//! Command line argument parsing for the Scrivener CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scrivener - noisy-channel spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "scrivener")]
#[command(about = "A noisy-channel, character-level spelling corrector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Scrivener Contributors")]
#[command(long_about = None)]
pub struct ScrivenerArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ScrivenerArgs {
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
    /// Train a model on a corpus and report hold-out accuracy
    Train(TrainArgs),

    /// Train a model on a corpus, then correct the given tokens
    Correct(CorrectArgs),
}

/// Knobs shared by every command that runs the training pipeline.
#[derive(Parser, Debug, Clone)]
pub struct TrainingOptions {
    /// Fraction of the corpus used for training
    #[arg(long, default_value_t = 0.8)]
    pub split_ratio: f64,

    /// Per-character corruption probability
    #[arg(long, default_value_t = 0.2)]
    pub corruption_probability: f64,

    /// Seed for the corruption random source
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for training and evaluation
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the plain-text training corpus
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    #[command(flatten)]
    pub training: TrainingOptions,
}

/// Arguments for correcting tokens
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Path to the plain-text training corpus
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Tokens to correct
    #[arg(value_name = "TEXT", required = true)]
    pub tokens: Vec<String>,

    #[command(flatten)]
    pub training: TrainingOptions,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_args_parsing() {
        let args = ScrivenerArgs::parse_from([
            "scrivener",
            "train",
            "corpus.txt",
            "--seed",
            "7",
            "--corruption-probability",
            "0.3",
        ]);
        match args.command {
            Command::Train(train) => {
                assert_eq!(train.corpus, PathBuf::from("corpus.txt"));
                assert_eq!(train.training.seed, 7);
                assert_eq!(train.training.corruption_probability, 0.3);
                assert_eq!(train.training.split_ratio, 0.8);
            }
            _ => panic!("expected train command"),
        }
    }

    #[test]
    fn test_correct_args_parsing() {
        let args =
            ScrivenerArgs::parse_from(["scrivener", "-f", "json", "correct", "corpus.txt", "teh", "cat"]);
        assert!(matches!(args.output_format, OutputFormat::Json));
        match args.command {
            Command::Correct(correct) => {
                assert_eq!(correct.tokens, vec!["teh", "cat"]);
            }
            _ => panic!("expected correct command"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = ScrivenerArgs::parse_from(["scrivener", "train", "c.txt"]);
        assert_eq!(args.verbosity(), 1);

        let args = ScrivenerArgs::parse_from(["scrivener", "-vv", "train", "c.txt"]);
        assert_eq!(args.verbosity(), 2);

        let args = ScrivenerArgs::parse_from(["scrivener", "-v", "-q", "train", "c.txt"]);
        assert_eq!(args.verbosity(), 0);
    }
}
