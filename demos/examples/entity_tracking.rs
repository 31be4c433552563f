// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track moving units in a quadtree: move them each tick, then find each
//! scout's nearest unit of the other team.
//!
//! Run with `RUST_LOG=debug` to see rejections and `RUST_LOG=trace` to see subdivisions.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Point, QuadTree, Region};

#[derive(Clone, Debug)]
struct Unit {
    id: u32,
    team: u8,
    pos: Point<f32>,
    vel: Point<f32>,
    tracked: bool,
}

// Units are the same unit wherever they stand.
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

fn unit_pos(u: &Unit) -> Point<f32> {
    u.pos
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let world = Region::new(0.0, 0.0, 512.0, 512.0);
    let mut tree = QuadTree::new(4, world, unit_pos);

    let mut units: Vec<Unit> = (0..64_u16)
        .map(|i| {
            let f = f32::from(i);
            Unit {
                id: u32::from(i),
                team: (i % 2) as u8,
                pos: Point::new((f * 53.0) % 512.0, (f * 97.0) % 512.0),
                vel: Point::new(((f * 7.0) % 11.0) - 5.0, ((f * 3.0) % 9.0) - 4.0),
                tracked: true,
            }
        })
        .collect();
    for u in &units {
        if let Err(err) = tree.insert(u.clone()) {
            warn!(%err, "unit not indexed");
        }
    }
    info!(?tree, "initial tree");

    for tick in 0..10 {
        let mut lost = Vec::new();
        for u in units.iter_mut().filter(|u| u.tracked) {
            // Remove at the old position before moving.
            tree.remove(u);
            u.pos = Point::new(u.pos.x + u.vel.x * 8.0, u.pos.y + u.vel.y * 8.0);
            if let Err(err) = tree.insert(u.clone()) {
                lost.extend(err.into_rejected());
            }
        }
        // Units that leave the world stop being tracked.
        for gone in lost {
            warn!(tick, id = gone.id, pos = ?gone.pos, "unit left the world");
            if let Some(u) = units.iter_mut().find(|u| u.id == gone.id) {
                u.tracked = false;
            }
        }
        info!(tick, tracked = tree.len(), depth = tree.depth(), "tick done");
    }

    for scout in units.iter().filter(|u| u.tracked && u.id % 16 == 0) {
        let enemies_near = tree
            .query_rect(Region::square_around(scout.pos, 96.0))
            .filter(|u| u.team != scout.team)
            .count();
        match tree.find_nearest(scout.pos, 96.0) {
            Some(nearest) if nearest.id != scout.id => info!(
                scout = scout.id,
                nearest = nearest.id,
                enemies_near,
                "nearest neighbour"
            ),
            _ => info!(scout = scout.id, enemies_near, "no other unit in range"),
        }
    }

    let before = tree.node_count();
    for u in units.iter().filter(|u| u.tracked && u.team == 1) {
        tree.remove(u);
    }
    tree.compact();
    info!(
        before,
        after = tree.node_count(),
        remaining = tree.len(),
        "removed team 1 and compacted"
    );
    Ok(())
}
