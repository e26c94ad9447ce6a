//! Command implementations for the Scrivener CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::Corpus;
use crate::corrector::{CorrectorConfig, SpellingCorrector, TokenOutcome, TrainingOutput};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: ScrivenerArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Correct(correct_args) => correct(correct_args.clone(), &args),
    }
}

fn corrector_config(options: &TrainingOptions) -> CorrectorConfig {
    let mut config = CorrectorConfig {
        split_ratio: options.split_ratio,
        ..CorrectorConfig::default()
    };
    config.channel.corruption_probability = options.corruption_probability;
    config.channel.seed = options.seed;
    config
}

fn run_training(
    corpus_path: &std::path::Path,
    options: &TrainingOptions,
    cli_args: &ScrivenerArgs,
) -> Result<TrainingOutput> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", corpus_path.display());
    }
    let corpus = Corpus::load_from_file(corpus_path)?;
    let config = corrector_config(options);
    config.validate()?;
    SpellingCorrector::train(&corpus, &config)
}

/// Train a model and report hold-out accuracy.
fn train(args: TrainArgs, cli_args: &ScrivenerArgs) -> Result<()> {
    let start = Instant::now();
    let output = run_training(&args.corpus, &args.training, cli_args)?;
    let evaluation = output.corrector.evaluate(&output.holdout);

    let summary = TrainingSummary {
        corpus: args.corpus.display().to_string(),
        report: output.report,
        evaluation,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    output_result("Training complete", &summary, cli_args)
}

/// Train a model, then correct the given tokens.
fn correct(args: CorrectArgs, cli_args: &ScrivenerArgs) -> Result<()> {
    let start = Instant::now();
    let output = run_training(&args.corpus, &args.training, cli_args)?;

    // Tokens from the command line are all space-separated.
    let spaces = vec![true; args.tokens.len()];
    let correction = output.corrector.correct_tokens(&args.tokens, &spaces)?;

    let summary = CorrectionSummary {
        tokens: correction
            .tokens
            .iter()
            .map(|t| TokenCorrection {
                original: t.original.clone(),
                corrected: t.corrected.clone(),
                passed_through: t.outcome == TokenOutcome::PassedThrough,
            })
            .collect(),
        sentence: correction.render().trim_end().to_string(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    output_result("Correction complete", &summary, cli_args)
}
