//! Criterion micro-benchmarks for the recompute pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use silt_bench::{fan_out_state, wide_state};
use silt_computed::{computed, recompute};
use silt_core::FieldMap;

/// Benchmark: one provider over states of increasing width.
fn bench_recompute_wide(c: &mut Criterion) {
    for width in [4usize, 32, 256] {
        let state = wide_state(width).merged(computed(|fields| {
            FieldMap::from([("total", fields.len() as i64)])
        }));
        c.bench_function(&format!("recompute_wide_{width}"), |b| {
            b.iter(|| black_box(recompute(black_box(&state))));
        });
    }
}

/// Benchmark: many named providers fanning out from one field.
fn bench_recompute_fan_out(c: &mut Criterion) {
    for providers in [1usize, 8, 64] {
        let state = fan_out_state(providers);
        c.bench_function(&format!("recompute_fan_out_{providers}"), |b| {
            b.iter(|| black_box(recompute(black_box(&state))));
        });
    }
}

criterion_group!(benches, bench_recompute_wide, bench_recompute_fan_out);
criterion_main!(benches);
