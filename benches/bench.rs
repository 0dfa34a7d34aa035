//! Criterion benchmarks for Folio.
//!
//! Covers the two hot paths of request handling:
//! - Search tokenization (`tokenize_and_filter`) and catalog scans
//! - Review sentiment scoring

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use folio::library::{Book, search_books};
use folio::processor::TextProcessor;
use folio::resources::LexicalResources;
use std::hint::black_box;

/// Generate test texts for benchmarking.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = [
        "The", "great", "book", "was", "not", "very", "good", "but", "I", "loved", "the",
        "ending!", "It's", "a", "wonderful", "story", "terrible", "pacing", "and", "amazing",
        "characters", "really", "boring", "sometimes", ":)", "HATE",
    ];

    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        let length = 10 + (i % 40); // Variable length texts
        let mut text_words = Vec::with_capacity(length);

        for j in 0..length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            text_words.push(words[word_idx]);
        }

        texts.push(text_words.join(" "));
    }

    texts
}

/// Generate a synthetic catalog.
fn generate_catalog(count: usize) -> Vec<Book> {
    let titles = ["Great", "Sea", "Night", "Garden", "War", "Peace", "River", "Stone"];
    let authors = ["Austen", "Hemingway", "Fitzgerald", "Tolstoy", "Woolf", "Orwell"];

    (0..count)
        .map(|i| {
            Book::new(
                i as u64,
                format!("The {} of the {}", titles[i % titles.len()], titles[(i / 3) % titles.len()]),
                format!("Author {}", authors[i % authors.len()]),
            )
        })
        .collect()
}

/// Benchmark search tokenization.
fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let primary = TextProcessor::new(LexicalResources::bundled());
    let fallback = TextProcessor::new(LexicalResources::degraded("benchmark"));
    let texts = generate_test_texts(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("tokenize_and_filter_primary", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(primary.tokenize_and_filter(black_box(text)));
            }
        })
    });

    group.bench_function("tokenize_and_filter_fallback", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(fallback.tokenize_and_filter(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark a full catalog scan.
fn bench_catalog_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_search");

    let processor = TextProcessor::default();
    let catalog = generate_catalog(1000);

    group.throughput(Throughput::Elements(catalog.len() as u64));
    group.bench_function("search_books_1000", |b| {
        b.iter(|| black_box(search_books(&processor, black_box("hemingway sea"), &catalog)))
    });

    group.finish();
}

/// Benchmark sentiment scoring.
fn bench_sentiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentiment");

    let processor = TextProcessor::default();
    let texts = generate_test_texts(100);

    group.bench_function("score_single_review", |b| {
        b.iter(|| black_box(processor.score_sentiment(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("score_batch_reviews", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(processor.score_sentiment(black_box(text)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_catalog_search, bench_sentiment);

criterion_main!(benches);
