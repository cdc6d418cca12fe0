//! Benchmarks for display width and word wrapping.
//!
//! Run with: cargo bench -p celltui-text

use celltui_text::{display_width, height_for_width, word_wrap};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// ASCII prose of the given length in chars.
fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Mixed ASCII and CJK prose.
fn mixed_text(len: usize) -> String {
    "Hello \u{4E16}\u{754C}! Test \u{6D4B}\u{8BD5}. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_display_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_width");
    for len in [16, 256, 4096] {
        let ascii = ascii_text(len);
        let mixed = mixed_text(len);
        group.throughput(Throughput::Bytes(ascii.len() as u64));
        group.bench_with_input(BenchmarkId::new("ascii", len), &ascii, |b, s| {
            b.iter(|| display_width(black_box(s)))
        });
        group.throughput(Throughput::Bytes(mixed.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", len), &mixed, |b, s| {
            b.iter(|| display_width(black_box(s)))
        });
    }
    group.finish();
}

fn bench_word_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_wrap");
    let text = ascii_text(4096);
    for width in [10, 40, 120] {
        group.bench_with_input(BenchmarkId::new("collect", width), &width, |b, &w| {
            b.iter(|| word_wrap(black_box(&text), w).count())
        });
        group.bench_with_input(BenchmarkId::new("height_for_width", width), &width, |b, &w| {
            b.iter(|| height_for_width(black_box(&text), w))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_display_width, bench_word_wrap);
criterion_main!(benches);
