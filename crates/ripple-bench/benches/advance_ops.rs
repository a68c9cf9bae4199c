//! Criterion micro-benchmarks for the stepper kernels.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ripple_core::{BoundaryMode, Stencil};
use ripple_grid::Grid;
use ripple_stepper::{advance, apply_boundary, laplacian_into, sanitize, StepConfig};

const SIDE: u32 = 100;

fn seeded_field() -> Vec<f32> {
    (0..SIDE * SIDE)
        .map(|i| ((i.wrapping_mul(2654435761) % 1000) as f32 - 500.0) * 0.01)
        .collect()
}

/// Benchmark: Laplacian of a 100x100 field for each stencil.
fn bench_laplacian_10k(c: &mut Criterion) {
    let field = seeded_field();
    let mut out = vec![0.0; field.len()];
    for stencil in [Stencil::VonNeumann, Stencil::Moore] {
        c.bench_function(&format!("laplacian_{stencil}_10k"), |b| {
            b.iter(|| {
                laplacian_into(black_box(&field), SIDE, SIDE, stencil, 1.0, 1.0, &mut out);
                black_box(&out);
            });
        });
    }
}

/// Benchmark: Edge overwrite on a 100x100 field for each boundary mode.
fn bench_boundary_10k(c: &mut Criterion) {
    let mut field = seeded_field();
    for mode in BoundaryMode::ALL {
        c.bench_function(&format!("boundary_{mode}_10k"), |b| {
            b.iter(|| {
                apply_boundary(black_box(&mut field), SIDE, SIDE, mode);
            });
        });
    }
}

/// Benchmark: Sanitise pass over a clean 100x100 field.
fn bench_sanitize_10k(c: &mut Criterion) {
    let mut field = seeded_field();
    c.bench_function("sanitize_10k", |b| {
        b.iter(|| {
            let stats = sanitize(black_box(&mut field), Some(50.0));
            black_box(stats);
        });
    });
}

/// Benchmark: Full advance on a 100x100 grid with two sources, for every
/// boundary/stencil combination.
fn bench_advance_10k(c: &mut Criterion) {
    for boundary in BoundaryMode::ALL {
        for stencil in [Stencil::VonNeumann, Stencil::Moore] {
            let config = StepConfig::builder()
                .boundary(boundary)
                .stencil(stencil)
                .clip_magnitude(Some(50.0))
                .build()
                .unwrap();
            let mut grid = Grid::new(SIDE, SIDE).unwrap();
            grid.add_source(25, 25);
            grid.add_source(75, 60);
            grid.apply_impulse(50, 50, 5.0);
            let mut t = 0u64;

            c.bench_function(&format!("advance_{boundary}_{stencil}_10k"), |b| {
                b.iter(|| {
                    let stats = advance(&mut grid, &config, t as f64);
                    t += 1;
                    black_box(stats);
                });
            });
        }
    }
}

criterion_group!(
    benches,
    bench_laplacian_10k,
    bench_boundary_10k,
    bench_sanitize_10k,
    bench_advance_10k
);
criterion_main!(benches);
