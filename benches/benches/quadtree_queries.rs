// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Identity, Point, QuadTree, Region};

const WORLD: f64 = 2048.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<f64>> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = spread + rng.next_f64() * (WORLD - 2.0 * spread);
        let cy = spread + rng.next_f64() * (WORLD - 2.0 * spread);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build(points: &[Point<f64>], capacity: usize) -> QuadTree<f64, Point<f64>, Identity> {
    let mut tree = QuadTree::new(capacity, Region::new(0.0, 0.0, WORLD, WORLD), Identity);
    for &p in points {
        let _ = tree.insert(p);
    }
    tree
}

fn linear_query(points: &[Point<f64>], area: Region<f64>) -> usize {
    points.iter().filter(|p| area.contains_point(**p)).count()
}

fn linear_nearest(points: &[Point<f64>], target: Point<f64>, window: f64) -> Option<Point<f64>> {
    let area = Region::square_around(target, window);
    let mut best: Option<(Point<f64>, f64)> = None;
    for &p in points.iter().filter(|p| area.contains_point(**p)) {
        let d = p.distance_squared(target);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((p, d));
        }
    }
    best.map(|(p, _)| p)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &count in &[1_024usize, 4_096, 16_384] {
        let points = gen_uniform_points(count);
        group.throughput(Throughput::Elements(count as u64));
        for &capacity in &[4usize, 16] {
            group.bench_function(format!("uniform_n{count}_cap{capacity}"), |b| {
                b.iter_batched(
                    || QuadTree::new(capacity, Region::new(0.0, 0.0, WORLD, WORLD), Identity),
                    |mut tree| {
                        for &p in &points {
                            let _ = tree.insert(p);
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_query_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_rect");
    let area = Region::new(800.0, 800.0, 400.0, 400.0);
    for &count in &[1_024usize, 16_384] {
        let points = gen_uniform_points(count);
        let tree = build(&points, 8);
        group.bench_function(format!("quadtree_uniform_n{count}"), |b| {
            b.iter(|| black_box(tree.query_rect(black_box(area)).count()))
        });
        group.bench_function(format!("linear_uniform_n{count}"), |b| {
            b.iter(|| black_box(linear_query(&points, black_box(area))))
        });
    }
    let points = gen_clustered_points(32, 512, 64.0);
    let tree = build(&points, 8);
    group.bench_function("quadtree_clustered", |b| {
        b.iter(|| black_box(tree.query_rect(black_box(area)).count()))
    });
    group.bench_function("linear_clustered", |b| {
        b.iter(|| black_box(linear_query(&points, black_box(area))))
    });
    group.finish();
}

fn bench_find_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_nearest");
    let points = gen_uniform_points(16_384);
    let tree = build(&points, 8);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let targets: Vec<_> = (0..256)
        .map(|_| Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD))
        .collect();
    group.throughput(Throughput::Elements(targets.len() as u64));
    for &window in &[32.0, 128.0] {
        group.bench_function(format!("quadtree_window{window}"), |b| {
            b.iter(|| {
                for &t in &targets {
                    black_box(tree.find_nearest(t, window));
                }
            })
        });
        group.bench_function(format!("linear_window{window}"), |b| {
            b.iter(|| {
                for &t in &targets {
                    black_box(linear_nearest(&points, t, window));
                }
            })
        });
    }
    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move");
    let points = gen_uniform_points(4_096);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("remove_reinsert_n4096", |b| {
        b.iter_batched(
            || build(&points, 8),
            |mut tree| {
                for &p in &points {
                    tree.remove(&p);
                    let moved = Point::new((p.x + 7.5) % WORLD, (p.y + 3.25) % WORLD);
                    let _ = tree.insert(moved);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_query_rect,
    bench_find_nearest,
    bench_move
);
criterion_main!(benches);
