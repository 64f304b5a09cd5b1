//! Recursive divide-and-conquer solver.
//!
//! `convex_hull` is the crate's entry point: validate, sort by x exactly once
//! (re-sorting per recursion level would inflate the cost to O(n log^2 n)),
//! deduplicate coincident points, recurse, and canonicalize the final hull.
//! The recursion itself is purely functional: each call reads a disjoint
//! slice of the sorted input and produces a fresh hull, so nothing is shared
//! or mutated across the two half-solves.

use nalgebra::Vector2;

use crate::merge::merge;
use crate::sort::{sort_by_x, sort_clockwise};
use crate::types::{Hull, HullError};

/// Convex hull of a finite point set.
///
/// Returns the hull as a cyclic clockwise vertex sequence starting at the
/// leftmost vertex (ties by minimum y); the closing edge back to the first
/// vertex is implicit. Degenerate inputs of 1 or 2 distinct points yield the
/// point or segment hull. Errors on an empty slice or any non-finite
/// coordinate; no failure is ever reported as an empty hull.
pub fn convex_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    if points.is_empty() {
        return Err(HullError::Empty);
    }
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(HullError::NonFinite { index });
        }
    }
    let mut pts = points.to_vec();
    sort_by_x(&mut pts);
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    Ok(sort_clockwise(hull_of_sorted(&pts)))
}

/// Recursive case over an x-sorted slice.
///
/// Base case <= 3 points returns them verbatim: any 1, 2, or 3 points are
/// trivially convex, and orientation normalization happens once inside the
/// clockwise sorter that `merge` applies, not here. The split is by midpoint
/// index, not coordinate value, so equal-x runs divide deterministically.
fn hull_of_sorted(sorted: &[Vector2<f64>]) -> Hull {
    if sorted.len() <= 3 {
        return Hull::new(sorted.to_vec());
    }
    let mid = sorted.len() / 2;
    let left = hull_of_sorted(&sorted[..mid]);
    let right = hull_of_sorted(&sorted[mid..]);
    merge(left, right)
}
