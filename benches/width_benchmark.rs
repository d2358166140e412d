//! Width benchmark: Classification and wrapping cost.
//!
//! Target: classification in a few ns, wrapping a status block < 20µs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use live_region::ansi::{wrap_ansi, WrapOptions};
use live_region::width::{classify, string_width};

fn classify_code_points(c: &mut Criterion) {
    c.bench_function("classify_ascii", |b| b.iter(|| classify(black_box(0x41))));
    c.bench_function("classify_cjk", |b| b.iter(|| classify(black_box(0x65E5))));
    c.bench_function("classify_emoji", |b| b.iter(|| classify(black_box(0x1F680))));
}

fn measure_strings(c: &mut Criterion) {
    let ascii = "The quick brown fox jumps over the lazy dog. ".repeat(4);
    let styled = "\x1b[1m\x1b[32mok\x1b[0m 日本語のテキスト ".repeat(8);

    c.bench_function("string_width_ascii_180", |b| {
        b.iter(|| string_width(black_box(&ascii)));
    });
    c.bench_function("string_width_styled_cjk", |b| {
        b.iter(|| string_width(black_box(&styled)));
    });
}

fn wrap_status_block(c: &mut Criterion) {
    let block: String = (0..20)
        .map(|i| format!("\x1b[36m[{i:02}]\x1b[0m {}\n", "downloading chunk ".repeat(i % 6 + 1)))
        .collect();

    let mut group = c.benchmark_group("wrap_status_block");
    for columns in [40usize, 80, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(columns), &columns, |b, &columns| {
            b.iter(|| wrap_ansi(black_box(&block), columns, WrapOptions::HARD));
        });
    }
    group.finish();
}

criterion_group!(benches, classify_code_points, measure_strings, wrap_status_block);
criterion_main!(benches);
