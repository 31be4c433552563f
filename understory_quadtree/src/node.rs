// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree nodes: subdivision, insertion, removal, and range queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::projection::Projection;
use crate::types::{Point, Region, Scalar};

/// A node of a [`QuadTree`](crate::QuadTree).
///
/// A node is either a leaf holding payloads directly, or has exactly four children
/// that partition its region (see [`Region::quadrants`]). Payloads held by a node are
/// disjoint from payloads held by its descendants. Children are created the first time
/// the node's payload count exceeds the tree capacity and are kept for the node's
/// lifetime, even once emptied; [`QuadTree::compact`](crate::QuadTree::compact) is
/// the only way back to a leaf.
#[derive(Clone)]
pub struct Node<T, P> {
    region: Region<T>,
    items: Vec<P>,
    children: Option<Box<[Self; 4]>>,
}

/// Per-tree limits threaded through the recursion.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Limits {
    pub(crate) capacity: usize,
    pub(crate) max_depth: usize,
}

impl<T, P> Node<T, P> {
    pub(crate) const fn new(region: Region<T>) -> Self {
        Self {
            region,
            items: Vec::new(),
            children: None,
        }
    }

    /// Region this node is responsible for.
    pub fn region(&self) -> &Region<T> {
        &self.region
    }

    /// Payloads held directly at this node.
    pub fn items(&self) -> &[P] {
        &self.items
    }

    /// The four children in quadrant order, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// True if the node has never subdivided (or was compacted back).
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Payloads held by this node and all of its descendants.
    pub fn len(&self) -> usize {
        self.items.len() + self.children().map_or(0, |c| c.iter().map(Self::len).sum())
    }

    /// True if neither this node nor any descendant holds a payload.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn node_count(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |c| c.iter().map(Self::node_count).sum())
    }

    pub(crate) fn depth(&self) -> usize {
        self.children()
            .map_or(0, |c| 1 + c.iter().map(Self::depth).max().unwrap_or(0))
    }

    pub(crate) fn collect_all<'a>(&'a self, out: &mut Vec<&'a P>) {
        out.extend(self.items.iter());
        if let Some(children) = self.children() {
            for child in children {
                child.collect_all(out);
            }
        }
    }

    fn drain_into(self, out: &mut Vec<P>) {
        out.extend(self.items);
        if let Some(children) = self.children {
            for child in *children {
                child.drain_into(out);
            }
        }
    }

    /// Collapse every subtree holding at most `capacity` payloads into a single leaf.
    ///
    /// Returns the number of payloads in this subtree.
    pub(crate) fn compact(&mut self, capacity: usize) -> usize {
        let Some(children) = self.children.as_deref_mut() else {
            return self.items.len();
        };
        let mut total = self.items.len();
        for child in children.iter_mut() {
            total += child.compact(capacity);
        }
        if total <= capacity
            && let Some(children) = self.children.take()
        {
            for child in *children {
                child.drain_into(&mut self.items);
            }
        }
        total
    }
}

impl<T: Debug, P> Debug for Node<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("region", &self.region)
            .field("items", &self.items.len())
            .field("leaf", &self.is_leaf())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, P> Node<T, P> {
    /// Insert below this node, which sits at `depth`.
    ///
    /// Payloads that cannot be placed are pushed onto `rejected`.
    pub(crate) fn insert<F: Projection<P, T>>(
        &mut self,
        payload: P,
        projection: &F,
        limits: Limits,
        depth: usize,
        rejected: &mut Vec<P>,
    ) {
        if let Some(children) = self.children.as_deref_mut() {
            Self::insert_into_child(children, payload, projection, limits, depth + 1, rejected);
            return;
        }
        self.items.push(payload);
        if self.items.len() > limits.capacity && depth < limits.max_depth {
            self.subdivide(projection, limits, depth, rejected);
        }
    }

    fn insert_into_child<F: Projection<P, T>>(
        children: &mut [Self; 4],
        payload: P,
        projection: &F,
        limits: Limits,
        child_depth: usize,
        rejected: &mut Vec<P>,
    ) {
        let position = projection.project(&payload);
        match children
            .iter_mut()
            .find(|child| child.region.contains_point(position))
        {
            Some(child) => child.insert(payload, projection, limits, child_depth, rejected),
            None => {
                tracing::debug!(?position, depth = child_depth, "payload matches no quadrant");
                rejected.push(payload);
            }
        }
    }

    fn subdivide<F: Projection<P, T>>(
        &mut self,
        projection: &F,
        limits: Limits,
        depth: usize,
        rejected: &mut Vec<P>,
    ) {
        tracing::trace!(
            region = ?self.region,
            items = self.items.len(),
            depth,
            "subdividing node"
        );
        let items = core::mem::take(&mut self.items);
        let children = self
            .children
            .insert(Box::new(self.region.quadrants().map(Self::new)));
        let before = rejected.len();
        for item in items.into_iter().rev() {
            Self::insert_into_child(children, item, projection, limits, depth + 1, rejected);
        }
        let dropped = rejected.len() - before;
        if dropped > 0 {
            tracing::warn!(
                region = ?self.region,
                dropped,
                "subdivision left payloads outside every quadrant"
            );
        }
    }

    /// Remove `payload` from this node and, if subdivided, from all four children.
    ///
    /// `position` is the payload's current projection. Nodes whose region does not
    /// contain it are skipped. Each visited node removes at most one equal payload.
    /// Returns the number of payloads removed.
    pub(crate) fn remove(&mut self, payload: &P, position: Point<T>) -> usize
    where
        P: PartialEq,
    {
        if !self.region.contains_point(position) {
            return 0;
        }
        let mut removed = 0;
        if let Some(i) = self.items.iter().position(|item| item == payload) {
            self.items.remove(i);
            removed += 1;
        }
        if let Some(children) = self.children.as_deref_mut() {
            for child in children {
                removed += child.remove(payload, position);
            }
        }
        removed
    }

    /// Append every payload in this subtree whose position lies inside `area`.
    ///
    /// Own payloads come first, then each child's results in quadrant order. Subtrees
    /// whose region does not overlap `area` are pruned.
    pub(crate) fn query<'a, F: Projection<P, T>>(
        &'a self,
        area: &Region<T>,
        projection: &F,
        out: &mut Vec<&'a P>,
    ) {
        if !self.region.overlaps(area) {
            return;
        }
        out.extend(
            self.items
                .iter()
                .filter(|item| area.contains_point(projection.project(item))),
        );
        if let Some(children) = self.children() {
            for child in children {
                child.query(area, projection, out);
            }
        }
    }
}
