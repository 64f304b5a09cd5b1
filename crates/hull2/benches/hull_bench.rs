//! Criterion benchmarks for the divide-and-conquer solver.
//! Focus sizes: n in {64, 512, 4096, 16384}; the circle rim keeps every
//! point on the hull and is the merge-heavy worst case.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
use hull2::convex_hull;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for &n in &[64usize, 512, 4096, 16384] {
        for (name, shape) in [
            ("disk", CloudShape::Disk { radius: 1.0 }),
            ("circle_rim", CloudShape::Circle { radius: 1.0 }),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, n),
                &n,
                |b, &n| {
                    b.iter_batched(
                        || {
                            draw_point_cloud(
                                &CloudCfg { count: n, shape },
                                ReplayToken { seed: 43, index: n as u64 },
                            )
                        },
                        |pts| {
                            let _hull = convex_hull(&pts).unwrap();
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
