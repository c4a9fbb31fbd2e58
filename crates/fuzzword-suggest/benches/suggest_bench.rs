// Criterion benchmarks for fuzzword-suggest.
//
// Run:
//   cargo bench -p fuzzword-suggest

use criterion::{Criterion, criterion_group, criterion_main};
use fuzzword_suggest::similarity::{
    DamerauLevenshtein, JaroWinkler, Metaphone, PhoneticCoder, SimilarityMeasure, Soundex,
};
use fuzzword_suggest::{EngineConfig, SuggestionEngine};

/// Deterministic pseudo-words of four to eight letters.
fn generate_words(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut n = (i as u64).wrapping_mul(2_654_435_761);
            let len = 4 + (n % 5) as usize;
            let mut word = String::with_capacity(len);
            for _ in 0..len {
                n /= 7;
                word.push((b'a' + (n % 26) as u8) as char);
            }
            word
        })
        .collect()
}

const QUERIES: &[&str] = &["hello", "wrold", "speling", "kat", "receive", "xylofone"];

fn bench_suggest(c: &mut Criterion) {
    let words = generate_words(20_000);
    let mut engine = SuggestionEngine::new(EngineConfig::default()).unwrap();
    engine.load(&words);

    c.bench_function("suggest_20k", |b| {
        b.iter(|| {
            for query in QUERIES {
                std::hint::black_box(engine.suggest(query, 5));
            }
        })
    });

    let single = SuggestionEngine::new(EngineConfig::default().with_worker_threads(Some(1)))
        .map(|mut engine| {
            engine.load(&words);
            engine
        })
        .unwrap();
    c.bench_function("suggest_20k_single_thread", |b| {
        b.iter(|| {
            for query in QUERIES {
                std::hint::black_box(single.suggest(query, 5));
            }
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let words = generate_words(20_000);
    c.bench_function("load_20k", |b| {
        b.iter(|| {
            let mut engine = SuggestionEngine::new(EngineConfig::default()).unwrap();
            std::hint::black_box(engine.load(&words))
        })
    });
}

fn bench_measures(c: &mut Criterion) {
    let words = generate_words(1_000);
    c.bench_function("damerau_1k", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(DamerauLevenshtein.score("speling", word));
            }
        })
    });
    c.bench_function("jaro_winkler_1k", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(JaroWinkler.score("speling", word));
            }
        })
    });
    let metaphone = Metaphone::default();
    c.bench_function("phonetic_codes_1k", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(Soundex.encode(word));
                std::hint::black_box(metaphone.encode(word));
            }
        })
    });
}

criterion_group!(benches, bench_suggest, bench_load, bench_measures);
criterion_main!(benches);
