// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for [`QuadTree`](crate::QuadTree).

use crate::error::ConfigError;
use crate::types::{Region, Scalar};

/// Default cap on subdivision depth.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Construction parameters for a [`QuadTree`](crate::QuadTree).
///
/// With the `serde` feature this can be deserialized, e.g. from a TOML table:
///
/// ```toml
/// capacity = 8
/// max_depth = 12   # optional
///
/// [domain]
/// x = 0.0
/// y = 0.0
/// width = 1024.0
/// height = 1024.0
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadTreeConfig<T> {
    /// Payloads a node holds directly before it subdivides. Inherited by every node.
    pub capacity: usize,
    /// Region covered by the root. Payloads projected outside it are rejected.
    pub domain: Region<T>,
    /// Depth (root = 0) at which nodes stop subdividing.
    ///
    /// A leaf at this depth keeps accepting payloads past `capacity`. Without a cap,
    /// more than `capacity` payloads at one position would subdivide forever.
    #[cfg_attr(feature = "serde", serde(default = "default_max_depth"))]
    pub max_depth: usize,
}

#[cfg(feature = "serde")]
const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl<T> QuadTreeConfig<T> {
    /// Config with the given capacity and domain and [`DEFAULT_MAX_DEPTH`].
    pub const fn new(capacity: usize, domain: Region<T>) -> Self {
        Self {
            capacity,
            domain,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the subdivision depth cap.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl<T: Scalar> QuadTreeConfig<T> {
    /// Check the config describes a usable tree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.domain.has_negative_extent() {
            return Err(ConfigError::NegativeExtent);
        }
        Ok(())
    }
}
