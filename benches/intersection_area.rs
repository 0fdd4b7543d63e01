use std::f64::consts::TAU;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo::{Geometry, LineString, Polygon};
use overlay_area::{intersection_area, OverlayArea};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Star-shaped polygon with `n` vertices at random radii.
fn random_star(rng: &mut impl Rng, cx: f64, cy: f64, n: usize) -> Polygon<f64> {
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let t = TAU * k as f64 / n as f64;
            let r = rng.random_range(60.0..100.0);
            (cx + r * t.cos(), cy + r * t.sin())
        })
        .collect();
    Polygon::new(LineString::from(coords), vec![])
}

fn intersection_area_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    let mut group = c.benchmark_group("IntersectionArea");

    for n in [16, 256, 4096] {
        let base = random_star(&mut rng, 0.0, 0.0, n);
        let others: Vec<Geometry<f64>> = (0..16)
            .map(|_| {
                let cx = rng.random_range(-50.0..50.0);
                random_star(&mut rng, cx, 0.0, 64).into()
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("one_shot", n), &n, |b, _| {
            let base: Geometry<f64> = base.clone().into();
            let mut others = others.iter().cycle();
            b.iter(|| intersection_area(black_box(&base), black_box(others.next().unwrap())))
        });

        group.bench_with_input(BenchmarkId::new("reused_base", n), &n, |b, _| {
            let overlay = OverlayArea::new(&base).unwrap();
            let mut others = others.iter().cycle();
            b.iter(|| overlay.intersection_area(black_box(others.next().unwrap())))
        });
    }
    group.finish();
}

criterion_group!(benches, intersection_area_benchmark);
criterion_main!(benches);
