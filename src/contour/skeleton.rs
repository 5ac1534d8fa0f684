//! Straight-skeleton data model.
//!
//! The skeleton *construction* algorithm is intentionally not implemented here; this type
//! exists so downstream code can describe the shape of a result without depending on a
//! particular construction strategy, the same capability-boundary role
//! `geo_buf`-backed offsetting plays for polygon buffering in sketch-style crates.

use crate::geometry::Point2;

/// Edges of a contour's straight skeleton, as (source, target, is_ridge) triples.
#[derive(Debug, Clone, PartialEq)]
pub struct StraightSkeleton {
    edges: Vec<(Point2, Point2, bool)>,
}

impl StraightSkeleton {
    /// Construct from already-computed edges. There is no `new`/algorithmic constructor:
    /// producing a skeleton from a contour is out of scope here.
    pub fn from_parts(edges: Vec<(Point2, Point2, bool)>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[(Point2, Point2, bool)] {
        &self.edges
    }
}
