// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping payloads to the 2D positions the tree indexes them by.

use crate::types::Point;

/// Maps a payload to its 2D position.
///
/// The tree never stores positions: every containment, overlap, and distance test
/// projects the payload again. A payload whose projection changes while it is stored
/// must be removed before it moves and reinserted afterwards.
///
/// Any `Fn(&P) -> Point<T>` is a projection, so most callers pass a closure.
pub trait Projection<P, T> {
    /// The position of `payload`.
    fn project(&self, payload: &P) -> Point<T>;
}

impl<P, T, F> Projection<P, T> for F
where
    F: Fn(&P) -> Point<T>,
{
    #[inline]
    fn project(&self, payload: &P) -> Point<T> {
        self(payload)
    }
}

/// Projection for payloads that already are 2D points.
#[derive(Copy, Clone, Debug, Default)]
pub struct Identity;

impl<T: Copy> Projection<Point<T>, T> for Identity {
    #[inline]
    fn project(&self, payload: &Point<T>) -> Point<T> {
        *payload
    }
}

/// Projection of 3D points onto the ground plane, `(x, y, z) -> (x, z)`.
///
/// This is the usual reduction for y-up worlds where the index cares about
/// horizontal placement only.
#[derive(Copy, Clone, Debug, Default)]
pub struct GroundPlane;

impl<T: Copy> Projection<[T; 3], T> for GroundPlane {
    #[inline]
    fn project(&self, payload: &[T; 3]) -> Point<T> {
        Point::new(payload[0], payload[2])
    }
}

impl<T: Copy> Projection<(T, T, T), T> for GroundPlane {
    #[inline]
    fn project(&self, payload: &(T, T, T)) -> Point<T> {
        Point::new(payload.0, payload.2)
    }
}
