//! Integration tests for Viterbi decoding and token-level correction.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scrivener::alphabet::Letter;
use scrivener::channel::TrainingCounts;
use scrivener::corrector::{SpellingCorrector, TokenOutcome};
use scrivener::error::{Result, ScrivenerError};
use scrivener::model::ChannelModel;
use scrivener::viterbi::ViterbiDecoder;

/// Counts with a strongly self-dominant emission diagonal and uniform
/// transitions: every state overwhelmingly emits itself.
fn self_dominant_counts() -> TrainingCounts {
    let mut counts = TrainingCounts::new();
    for state in Letter::all() {
        for _ in 0..100 {
            counts.emissions.increment(state, state);
        }
    }
    counts
}

fn self_dominant_decoder() -> ViterbiDecoder {
    let model = ChannelModel::from_counts(&self_dominant_counts()).unwrap();
    ViterbiDecoder::new(Arc::new(model))
}

#[test]
fn test_self_dominant_emission_decodes_identity() -> Result<()> {
    let decoder = self_dominant_decoder();
    for word in ["a", "it", "hello", "Keyboard", "QWERTY", "zzz"] {
        assert_eq!(decoder.decode(word)?, word);
    }
    Ok(())
}

#[test]
fn test_self_dominant_property_over_random_words() -> Result<()> {
    let decoder = self_dominant_decoder();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        let len = rng.random_range(1..=12);
        let word: String = (0..len)
            .map(|_| {
                let letter = Letter::from_index(rng.random_range(0..52)).unwrap();
                letter.as_char()
            })
            .collect();
        assert_eq!(decoder.decode(&word)?, word);
    }
    Ok(())
}

#[test]
fn test_single_character_boundary() -> Result<()> {
    let decoder = self_dominant_decoder();
    for state in Letter::all() {
        let ch = state.as_char().to_string();
        assert_eq!(decoder.decode(&ch)?, ch);
    }
    Ok(())
}

#[test]
fn test_decode_batch_matches_sequential_decode() -> Result<()> {
    let decoder = self_dominant_decoder();
    let words: Vec<String> = ["parallel", "batch", "decode", "words"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let batch = decoder.decode_batch(&words);
    for (word, result) in words.iter().zip(batch) {
        assert_eq!(&result?, word);
    }
    Ok(())
}

#[test]
fn test_decoding_does_not_perturb_the_model() -> Result<()> {
    let decoder = self_dominant_decoder();
    let before = decoder.model().emission.clone();
    for _ in 0..10 {
        decoder.decode("immutability")?;
    }
    assert_eq!(decoder.model().emission, before);
    Ok(())
}

#[test]
fn test_token_correction_contract() -> Result<()> {
    let model = ChannelModel::from_counts(&self_dominant_counts())?;
    let corrector = SpellingCorrector::from_model(model);

    let tokens: Vec<String> = ["The", "price", "is", "42", "dollars"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let spaces = vec![true, true, true, true, false];

    let correction = corrector.correct_tokens(&tokens, &spaces)?;
    assert_eq!(correction.tokens.len(), 5);
    assert_eq!(correction.tokens[3].corrected, "42");
    assert_eq!(correction.tokens[3].outcome, TokenOutcome::PassedThrough);
    assert_eq!(correction.render(), "The price is 42 dollars");

    // A mismatched flag count is a contract breach.
    let err = corrector.correct_tokens(&tokens, &spaces[..4]).unwrap_err();
    assert!(matches!(
        err,
        ScrivenerError::TokenCountMismatch { tokens: 5, flags: 4 }
    ));
    Ok(())
}
