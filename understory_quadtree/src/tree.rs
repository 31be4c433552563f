// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` API.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::{DEFAULT_MAX_DEPTH, QuadTreeConfig};
use crate::error::{ConfigError, OutOfBounds};
use crate::node::{Limits, Node};
use crate::projection::Projection;
use crate::types::{Point, Region, Scalar, lt};

/// A point quadtree over payloads of type `P`, positioned by the projection `F`.
///
/// All operations are synchronous and run to completion; the tree has no internal
/// locking, so callers sharing it across threads must serialize access themselves.
pub struct QuadTree<T, P, F> {
    root: Node<T, P>,
    projection: F,
    limits: Limits,
    len: usize,
}

impl<T, P, F> QuadTree<T, P, F>
where
    T: Scalar,
    F: Projection<P, T>,
{
    /// Create an empty tree covering `domain`, subdividing nodes past `capacity` payloads.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, domain: Region<T>, projection: F) -> Self {
        assert!(capacity > 0, "node capacity must be at least 1");
        Self {
            root: Node::new(domain),
            projection,
            limits: Limits {
                capacity,
                max_depth: DEFAULT_MAX_DEPTH,
            },
            len: 0,
        }
    }

    /// Create an empty tree from a validated config.
    pub fn from_config(config: QuadTreeConfig<T>, projection: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            root: Node::new(config.domain),
            projection,
            limits: Limits {
                capacity: config.capacity,
                max_depth: config.max_depth,
            },
            len: 0,
        })
    }

    /// Insert a payload at its projected position.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] with the payload if its position lies outside the
    /// domain, in which case the tree is unchanged. Also returns [`OutOfBounds`] if the
    /// subdivision this insertion triggered left payloads outside all four quadrants;
    /// the error then holds every payload that is no longer stored.
    pub fn insert(&mut self, payload: P) -> Result<(), OutOfBounds<P>> {
        let position = self.projection.project(&payload);
        if !self.root.region().contains_point(position) {
            tracing::debug!(?position, domain = ?self.root.region(), "payload outside domain");
            return Err(OutOfBounds::new(alloc::vec![payload]));
        }
        let mut rejected = Vec::new();
        self.root
            .insert(payload, &self.projection, self.limits, 0, &mut rejected);
        self.len = self.len + 1 - rejected.len();
        if rejected.is_empty() {
            Ok(())
        } else {
            Err(OutOfBounds::new(rejected))
        }
    }

    /// Remove a payload, located by its current projected position.
    ///
    /// Only nodes whose region contains the current position are searched, so a
    /// payload that moved out of the node holding it since insertion is not found.
    /// Each searched node removes at most one equal payload. Removing an absent
    /// payload is a no-op. Returns the number of payloads removed.
    pub fn remove(&mut self, payload: &P) -> usize
    where
        P: PartialEq,
    {
        let position = self.projection.project(payload);
        let removed = self.root.remove(payload, position);
        self.len -= removed;
        removed
    }

    /// All payloads whose position lies inside `area`, edges included.
    ///
    /// Result order is unspecified.
    pub fn query_rect(&self, area: Region<T>) -> impl Iterator<Item = &P> + '_ {
        let mut out = Vec::new();
        self.root.query(&area, &self.projection, &mut out);
        out.into_iter()
    }

    /// The payload closest to `target` within a square window of side `window`.
    ///
    /// The window is a square centered on `target`, not a circle: a payload in a
    /// corner of the window, up to `window * sqrt(2) / 2` away, can be returned, and a
    /// payload just outside the square is never found even if it is closer than
    /// that. Ties go to the payload the range query yields first.
    pub fn find_nearest(&self, target: Point<T>, window: T) -> Option<&P> {
        let area = Region::square_around(target, window);
        let mut best: Option<(&P, T::Acc)> = None;
        for candidate in self.query_rect(area) {
            let dist = self.projection.project(candidate).distance_squared(target);
            if best.is_none_or(|(_, best_dist)| lt(dist, best_dist)) {
                best = Some((candidate, dist));
            }
        }
        best.map(|(payload, _)| payload)
    }

    /// Collapse every subdivided node whose subtree holds at most `capacity` payloads
    /// back into a leaf holding them.
    ///
    /// Removal never merges nodes; call this after bulk removals to reclaim nodes and
    /// shorten query traversals.
    pub fn compact(&mut self) {
        let before = self.root.node_count();
        self.root.compact(self.limits.capacity);
        let after = self.root.node_count();
        if after < before {
            tracing::debug!(before, after, "compacted quadtree");
        }
    }
}

impl<T, P, F> QuadTree<T, P, F> {
    /// Number of stored payloads.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no payloads are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Payloads a node holds directly before subdividing.
    pub fn capacity(&self) -> usize {
        self.limits.capacity
    }

    /// Depth at which nodes stop subdividing.
    pub fn max_depth(&self) -> usize {
        self.limits.max_depth
    }

    /// Region covered by the tree.
    pub fn domain(&self) -> &Region<T> {
        self.root.region()
    }

    /// The projection positioning payloads.
    pub fn projection(&self) -> &F {
        &self.projection
    }

    /// Root node, for inspecting the tree's shape.
    pub fn root(&self) -> &Node<T, P> {
        &self.root
    }

    /// Every stored payload, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_all(&mut out);
        out.into_iter()
    }

    /// Depth of the deepest node; a lone root is depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Remove every payload and drop all children, keeping domain and limits.
    pub fn clear(&mut self)
    where
        T: Copy,
    {
        self.root = Node::new(*self.root.region());
        self.len = 0;
    }
}

impl<T: Debug, P, F> Debug for QuadTree<T, P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("domain", self.root.region())
            .field("capacity", &self.limits.capacity)
            .field("max_depth", &self.limits.max_depth)
            .field("len", &self.len)
            .field("nodes", &self.root.node_count())
            .finish_non_exhaustive()
    }
}
