// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Kurbo geometry and quadtree points and regions.
//!
//! ## Feature
//!
//! Enable with `kurbo`.
//!
//! ## Notes
//!
//! [`kurbo::Rect::contains`] excludes the maximum edges while [`Region::contains_point`]
//! includes them, so a point on a rectangle's right or bottom edge is found by the
//! quadtree even though Kurbo would report it as outside.

use crate::projection::{Identity, Projection};
use crate::types::{Point, Region};

impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point<f64>> for kurbo::Point {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Rectangles are normalized first, so inverted Kurbo rectangles map to
/// non-negative extents.
impl From<kurbo::Rect> for Region<f64> {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<Region<f64>> for kurbo::Rect {
    fn from(r: Region<f64>) -> Self {
        Self::new(r.x, r.y, r.x + r.width, r.y + r.height)
    }
}

impl Projection<kurbo::Point, f64> for Identity {
    #[inline]
    fn project(&self, payload: &kurbo::Point) -> Point<f64> {
        Point::from(*payload)
    }
}
