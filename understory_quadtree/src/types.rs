// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// A 2D position, as produced by a [`Projection`](crate::Projection).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// Squared Euclidean distance to `other`, computed in the widened accumulator type.
    ///
    /// Ordering by squared distance is the same as ordering by distance, so nearest
    /// searches never need a square root. For `i64`, distances whose square exceeds
    /// `i128::MAX` saturate to it.
    pub fn distance_squared(self, other: Self) -> T::Acc {
        let dx = T::widen(self.x) - T::widen(other.x);
        let dy = T::widen(self.y) - T::widen(other.y);
        T::sum_of_squares(dx, dy)
    }
}

/// Axis-aligned rectangle described by its origin and extent.
///
/// Unlike many rectangle types, both [`Region::contains_point`] and [`Region::overlaps`]
/// are closed on every edge: a point on the maximum edge is inside, and two regions
/// that only share an edge overlap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region<T> {
    /// Minimum x (left).
    pub x: T,
    /// Minimum y (top).
    pub y: T,
    /// Horizontal extent; expected to be non-negative.
    pub width: T,
    /// Vertical extent; expected to be non-negative.
    pub height: T,
}

impl<T> Region<T> {
    /// Create a region from origin and size.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Scalar> Region<T> {
    /// Right edge, `x + width`.
    #[inline]
    pub fn max_x(&self) -> T {
        T::add(self.x, self.width)
    }

    /// Bottom edge, `y + height`.
    #[inline]
    pub fn max_y(&self) -> T {
        T::add(self.y, self.height)
    }

    /// Whether the point lies inside the region, edges included.
    pub fn contains_point(&self, p: Point<T>) -> bool {
        in_range(p.x, self.x, self.max_x()) && in_range(p.y, self.y, self.max_y())
    }

    /// Whether the two regions overlap, edges included.
    ///
    /// The extents along an axis overlap when either region's origin lies within the
    /// other's closed extent.
    pub fn overlaps(&self, other: &Self) -> bool {
        let x_overlap = in_range(self.x, other.x, other.max_x())
            || in_range(other.x, self.x, self.max_x());
        let y_overlap = in_range(self.y, other.y, other.max_y())
            || in_range(other.y, self.y, self.max_y());
        x_overlap && y_overlap
    }

    /// Split into four equal quadrants.
    ///
    /// The order is fixed and is the order children are created and queried in:
    /// top-right, top-left, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Self; 4] {
        let w = T::half(self.width);
        let h = T::half(self.height);
        let mid_x = T::add(self.x, w);
        let mid_y = T::add(self.y, h);
        [
            Self::new(mid_x, self.y, w, h),
            Self::new(self.x, self.y, w, h),
            Self::new(self.x, mid_y, w, h),
            Self::new(mid_x, mid_y, w, h),
        ]
    }

    /// A square of side `side` centered on `center`.
    pub fn square_around(center: Point<T>, side: T) -> Self {
        let half = T::half(side);
        Self::new(T::sub(center.x, half), T::sub(center.y, half), side, side)
    }

    /// True if either extent is negative. Assumes no NaN.
    pub fn has_negative_extent(&self) -> bool {
        lt(self.width, T::zero()) || lt(self.height, T::zero())
    }
}

/// Numeric scalar abstraction for quadtree coordinates.
///
/// Provides the handful of operations subdivision and distance checks need, plus a
/// widened accumulator type for squared distances (f32→f64, f64→f64, i64→i128).
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for squared distances.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Half of a value. Integer scalars truncate.
    fn half(v: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// `dx * dx + dy * dy` in the accumulator type.
    #[inline]
    fn sum_of_squares(dx: Self::Acc, dy: Self::Acc) -> Self::Acc {
        dx * dx + dy * dy
    }
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2.0
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        f64::from(v)
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2.0
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        i128::from(v)
    }

    #[inline]
    fn sum_of_squares(dx: Self::Acc, dy: Self::Acc) -> Self::Acc {
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

#[inline]
fn in_range<T: PartialOrd + Copy>(v: T, min: T, max: T) -> bool {
    le(min, v) && le(v, max)
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
