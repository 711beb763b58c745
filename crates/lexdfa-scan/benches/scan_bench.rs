// Criterion benchmarks for lexdfa-scan.
//
// Run:
//   cargo bench -p lexdfa-scan

use criterion::{Criterion, criterion_group, criterion_main};
use lexdfa_automaton::Automaton;
use lexdfa_scan::Scanner;
use lexdfa_scan::tokenizer::tokenize;

const PARAGRAPH: &str = "This is very good. I feel very bad.\n\
    Most of the blue houses are pretty, and never dirty. Android or oregon?\n\
    The good, the bad and the very pretty most likely win.";

fn corpus(repeat: usize) -> String {
    let mut text = String::with_capacity(PARAGRAPH.len() * repeat);
    for _ in 0..repeat {
        text.push_str(PARAGRAPH);
        text.push('\n');
    }
    text
}

/// Build the standard automaton from its word chains.
fn bench_build_automaton(c: &mut Criterion) {
    c.bench_function("build_standard_automaton", |b| {
        b.iter(|| std::hint::black_box(Automaton::standard()))
    });
}

/// Tokenize one sentence with the automaton driven alongside.
fn bench_tokenize(c: &mut Criterion) {
    let automaton = Automaton::standard().expect("standard automaton");
    let sentence = "The good, the bad and the very pretty most likely win";
    c.bench_function("tokenize_sentence", |b| {
        b.iter(|| std::hint::black_box(tokenize(&automaton, sentence)))
    });
}

/// Scan a text of about 300 sentences.
fn bench_scan(c: &mut Criterion) {
    let scanner = Scanner::new().expect("scanner");
    let text = corpus(60);
    c.bench_function("scan_300_sentences", |b| {
        b.iter(|| std::hint::black_box(scanner.scan(&text)))
    });
}

/// Word-by-word check of the same text.
fn bench_check_words(c: &mut Criterion) {
    let scanner = Scanner::new().expect("scanner");
    let text = corpus(60);
    c.bench_function("check_words", |b| {
        b.iter(|| std::hint::black_box(scanner.check_words(&text)))
    });
}

criterion_group!(
    benches,
    bench_build_automaton,
    bench_tokenize,
    bench_scan,
    bench_check_words
);
criterion_main!(benches);
