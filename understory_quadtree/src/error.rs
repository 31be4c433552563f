// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::vec::Vec;

use thiserror::Error;

/// Returned by [`QuadTree::insert`](crate::QuadTree::insert) when payloads could not be placed.
///
/// Ownership of every payload the insertion failed to store comes back with the error.
/// Usually that is just the payload being inserted (its position lies outside the
/// domain). When a subdivision leaves a previously stored payload outside all four
/// quadrants through floating-point rounding at the region's far edge, that payload
/// is returned here as well.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{} payload(s) lie outside every region that could hold them", .rejected.len())]
pub struct OutOfBounds<P> {
    rejected: Vec<P>,
}

impl<P> OutOfBounds<P> {
    pub(crate) fn new(rejected: Vec<P>) -> Self {
        debug_assert!(!rejected.is_empty(), "an out-of-bounds error rejects something");
        Self { rejected }
    }

    /// The payloads that were not stored.
    pub fn rejected(&self) -> &[P] {
        &self.rejected
    }

    /// Take back the payloads that were not stored.
    pub fn into_rejected(self) -> Vec<P> {
        self.rejected
    }
}

/// Invalid [`QuadTreeConfig`](crate::QuadTreeConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A node must be allowed to hold at least one payload.
    #[error("node capacity must be at least 1")]
    ZeroCapacity,
    /// The domain has a negative width or height.
    #[error("domain width and height must be non-negative")]
    NegativeExtent,
}
