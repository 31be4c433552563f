// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a generic point quadtree for proximity queries.
//!
//! Understory Quadtree organizes movable, positioned payloads for faster-than-linear lookups,
//! aimed at simulations and games that track many entities without a full scene graph.
//!
//! - Insert and remove payloads of any type; a [`Projection`] maps each payload to its 2D position.
//! - Query every payload inside a rectangle with [`QuadTree::query_rect`].
//! - Find the closest payload to a point within a square search window with [`QuadTree::find_nearest`].
//!
//! The tree never stores positions. Every geometric test projects the payload again, so a
//! payload that moves must be removed before the move and reinserted after it.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Point, QuadTree, Region};
//!
//! #[derive(Debug, PartialEq)]
//! struct Unit {
//!     id: u32,
//!     pos: [f32; 3],
//! }
//!
//! // Index units on the ground plane (x, z) of a 256×256 world.
//! let mut tree = QuadTree::new(4, Region::new(0.0, 0.0, 256.0, 256.0), |u: &Unit| {
//!     Point::new(u.pos[0], u.pos[2])
//! });
//! tree.insert(Unit { id: 1, pos: [10.0, 0.0, 12.0] }).unwrap();
//! tree.insert(Unit { id: 2, pos: [200.0, 5.0, 40.0] }).unwrap();
//!
//! // Everything in the top-left quarter.
//! let hits: Vec<_> = tree.query_rect(Region::new(0.0, 0.0, 128.0, 128.0)).collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//!
//! // Closest unit to (195, 45) within a 20×20 window.
//! let nearest = tree.find_nearest(Point::new(195.0, 45.0), 20.0);
//! assert_eq!(nearest.map(|u| u.id), Some(2));
//!
//! // Positions outside the domain are handed back.
//! let err = tree.insert(Unit { id: 3, pos: [300.0, 0.0, 0.0] }).unwrap_err();
//! assert_eq!(err.into_rejected()[0].id, 3);
//! ```
//!
//! ## Structure
//!
//! Each node covers a [`Region`] and holds up to `capacity` payloads. Inserting one more splits
//! the node into four equal quadrants and moves its payloads down; a split is never undone by
//! removal. [`QuadTree::compact`] collapses sparse subtrees when asked to.
//!
//! Regions are closed on every edge: points on a region's far edge are inside it, and
//! rectangles that only touch overlap.
//!
//! ## Nearest search is windowed
//!
//! [`QuadTree::find_nearest`] runs a range query over a square of the given side centered on the
//! target and returns the closest result. It is not a radius search: payloads in the corners of the
//! square can be farther than half the side, and a closer payload just outside the square is
//! not found.
//!
//! ## Features
//!
//! - `std` (default): standard library support for the error and logging dependencies.
//! - `kurbo`: conversions between Kurbo points/rectangles and [`Point`]/[`Region`].
//! - `serde`: serialization of [`Point`], [`Region`], and [`QuadTreeConfig`].
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. A NaN position is never inside
//! any region, so such payloads are rejected on insert.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod config;
pub mod error;
pub mod node;
pub mod projection;
pub mod tree;
pub mod types;

pub use config::{DEFAULT_MAX_DEPTH, QuadTreeConfig};
pub use error::{ConfigError, OutOfBounds};
pub use node::Node;
pub use projection::{GroundPlane, Identity, Projection};
pub use tree::QuadTree;
pub use types::{Point, Region, Scalar};
