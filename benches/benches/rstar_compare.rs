// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Identity, Point, QuadTree, Region};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell + 0.5, y as f64 * cell + 0.5));
        }
    }
    out
}

fn to_rstar_points(v: &[Point<f64>]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_f64");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let extent = n as f64 * 10.0;
        let domain = Region::new(0.0, 0.0, extent, extent);
        let area = Region::new(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::new(8, domain, Identity),
                |mut tree| {
                    for &p in &points {
                        let _ = tree.insert(p);
                    }
                    black_box(tree.query_rect(area).count());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = AABB::from_corners([area.x, area.y], [area.max_x(), area.max_y()]);
                    black_box(tree.locate_in_envelope(&aabb).count());
                },
                BatchSize::SmallInput,
            )
        });

        let mut tree = QuadTree::new(8, domain, Identity);
        for &p in &points {
            let _ = tree.insert(p);
        }
        let rtree = RTree::bulk_load(to_rstar_points(&points));
        let target = Point::new(extent * 0.37, extent * 0.61);

        group.bench_function(format!("quadtree_find_nearest_n{n}"), |b| {
            b.iter(|| black_box(tree.find_nearest(black_box(target), 20.0)))
        });

        group.bench_function(format!("rstar_nearest_neighbor_n{n}"), |b| {
            b.iter(|| black_box(rtree.nearest_neighbor(&black_box([target.x, target.y]))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
