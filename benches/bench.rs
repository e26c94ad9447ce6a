//! Criterion benchmarks for the Scrivener spelling corrector.
//!
//! Covers the two hot paths:
//! - Training (corruption + count accumulation + estimation)
//! - Viterbi decoding, sequential and parallel batch

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use scrivener::channel::{ChannelConfig, NoisyChannel, TrainingCounts};
use scrivener::model::ChannelModel;
use scrivener::viterbi::ViterbiDecoder;

/// Generate a deterministic pseudo-corpus of alphabetic words.
fn generate_words(count: usize) -> Vec<String> {
    let vocabulary = [
        "spelling",
        "correction",
        "keyboard",
        "adjacency",
        "emission",
        "transition",
        "probability",
        "viterbi",
        "channel",
        "corpus",
        "training",
        "decoding",
        "alphabet",
        "smoothing",
        "backtrace",
    ];
    (0..count)
        .map(|i| vocabulary[i % vocabulary.len()].to_string())
        .collect()
}

fn trained_decoder(words: &[String]) -> ViterbiDecoder {
    let mut channel = NoisyChannel::new(ChannelConfig::default()).unwrap();
    let mut counts = TrainingCounts::new();
    channel.corrupt_words_counting(words, &mut counts);
    let model = ChannelModel::from_counts(&counts).unwrap();
    ViterbiDecoder::new(Arc::new(model))
}

fn bench_training(c: &mut Criterion) {
    let words = generate_words(2000);

    let mut group = c.benchmark_group("training");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("corrupt_and_estimate_2000_words", |b| {
        b.iter(|| {
            let mut channel = NoisyChannel::new(ChannelConfig::default()).unwrap();
            let mut counts = TrainingCounts::new();
            channel.corrupt_words_counting(black_box(&words), &mut counts);
            black_box(ChannelModel::from_counts(&counts).unwrap())
        })
    });
    group.finish();
}

fn bench_decoding(c: &mut Criterion) {
    let words = generate_words(2000);
    let decoder = trained_decoder(&words);
    let batch = generate_words(200);

    let mut group = c.benchmark_group("decoding");
    group.bench_function("decode_single_word", |b| {
        b.iter(|| decoder.decode(black_box("probsbility")).unwrap())
    });
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("decode_batch_200_words", |b| {
        b.iter(|| black_box(decoder.decode_batch(black_box(&batch))))
    });
    group.finish();
}

criterion_group!(benches, bench_training, bench_decoding);
criterion_main!(benches);
