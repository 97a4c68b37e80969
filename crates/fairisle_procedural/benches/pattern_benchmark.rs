//! Benchmark for per-cell pattern sampling.
//!
//! Run with: cargo bench --package fairisle_procedural --bench pattern_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fairisle_procedural::{PatternKind, PatternParams};

fn benchmark_single_sample(c: &mut Criterion) {
    let params = PatternParams::NONE.with_size(16).with_bg(0);

    c.bench_function("snowflake_6pt_sample", |b| {
        let mut x = 0i32;
        b.iter(|| {
            x = x.wrapping_add(1) % 100;
            black_box(PatternKind::Snowflake6pt.sample(black_box(x), black_box(x / 3), 17, &params))
        });
    });
}

fn benchmark_all_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_band");

    // one 100x16 band per pattern
    group.throughput(Throughput::Elements(100 * 16));
    for kind in PatternKind::all() {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                let mut acc = 0i32;
                for y in 0..16 {
                    for x in 0..100 {
                        acc += kind.sample(x, y, 16, &PatternParams::NONE);
                    }
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_sample, benchmark_all_patterns);
criterion_main!(benches);
