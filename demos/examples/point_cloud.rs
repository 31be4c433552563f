// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index raw 3D vertices by their ground-plane position and snap picks to the
//! closest vertex.

use understory_quadtree::{GroundPlane, Point, QuadTree, Region};

fn main() {
    let mut tree = QuadTree::new(8, Region::new(-50.0_f32, -50.0, 100.0, 100.0), GroundPlane);

    // A bumpy 21×21 grid of vertices; y is height and ignored by the index.
    for gz in 0..=20_u8 {
        for gx in 0..=20_u8 {
            let x = f32::from(gx) * 5.0 - 50.0;
            let z = f32::from(gz) * 5.0 - 50.0;
            let y = ((f32::from(gx) * 0.7).sin() + (f32::from(gz) * 0.3).cos()) * 2.0;
            if let Err(err) = tree.insert([x, y, z]) {
                println!("skipped {:?}", err.rejected());
            }
        }
    }
    println!("{tree:?}");

    for pick in [Point::new(1.2, -3.9), Point::new(48.0, 49.0), Point::new(-80.0, 0.0)] {
        match tree.find_nearest(pick, 5.0) {
            Some(v) => println!("pick {pick:?} snaps to vertex {v:?}"),
            None => println!("pick {pick:?} has no vertex within the window"),
        }
    }

    let strip: Vec<_> = tree
        .query_rect(Region::new(-50.0, -1.0, 100.0, 2.0))
        .collect();
    println!("{} vertices on the z = 0 row", strip.len());
}
