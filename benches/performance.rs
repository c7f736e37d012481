// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for chordsheet
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Chord token classification
//! - Transposition throughput over whole sheets
//! - View building throughput
//!
//! The view is rebuilt on every key change, so all three should stay
//! linear in sheet length.

use chordsheet::lyrics::render;
use chordsheet::{build_chordpro_view, is_chord_token, transpose_chord, transpose_lyrics};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VERSE: &str = "\
{Verse}
[G]Amazing [G7]grace, how [C]sweet the [G]sound
That saved a [G]wretch like [D]me
G       D/F#   Em     C
I [G]once was [G7]lost, but [C]now am [G]found
# repeat
Was [Em]blind but [D]now I [G]see
";

/// A sheet of `verses` copies of the test verse
fn sheet(verses: usize) -> String {
    VERSE.repeat(verses)
}

/// Benchmark token classification on chords and ordinary words
fn bench_classify(c: &mut Criterion) {
    let tokens = ["G", "C#sus4", "F#m7", "Amazing", "grace,", "The", "Bbmaj7", "D/F#"];

    c.bench_function("is_chord_token", |b| {
        b.iter(|| {
            let mut count = 0;
            for token in tokens.iter() {
                if is_chord_token(black_box(token)) {
                    count += 1;
                }
            }
            black_box(count)
        })
    });

    c.bench_function("transpose_chord", |b| {
        b.iter(|| transpose_chord(black_box("Ebmaj7"), black_box("C"), black_box("A")))
    });
}

/// Benchmark whole-sheet transposition
fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose_lyrics");

    for verses in [1usize, 10, 100].iter() {
        let text = sheet(*verses);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(verses), &text, |b, text| {
            b.iter(|| transpose_lyrics(black_box(text), Some("G"), "Bb"))
        });
    }

    group.finish();
}

/// Benchmark view building, alone and after transposition
fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("chordpro_view");

    for verses in [1usize, 10, 100].iter() {
        let text = sheet(*verses);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", verses), &text, |b, text| {
            b.iter(|| build_chordpro_view(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("render", verses), &text, |b, text| {
            b.iter(|| render(black_box(text), Some("G"), "E"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_transpose, bench_view);
criterion_main!(benches);
