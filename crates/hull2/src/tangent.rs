//! Tangent location between two clockwise convex hulls.
//!
//! Purpose
//! - Given two disjoint convex polygons in clockwise order (left hull fully
//!   left of the right hull in x, up to shared boundary coordinates), find the
//!   upper and the lower tangent: the two connecting edges with every vertex
//!   of both polygons on one consistent side.
//!
//! Algorithm
//! - Anchors start at the rightmost vertex of the left hull and the leftmost
//!   vertex of the right hull (index 0 after `sort_clockwise`). For the upper
//!   tangent the left index retreats along clockwise predecessors while the
//!   candidate lies above the connecting line, and the right index advances
//!   along clockwise successors under the same test; the lower tangent is the
//!   mirror walk (advance left, retreat right, candidate below). The two
//!   walks repeat until one full pass moves neither index.
//! - Every "above/below" decision is the sign of `cross` on the connecting
//!   line; the slope ratio the textbook formulation divides by is undefined
//!   for vertical connecting lines and is not used anywhere.
//!
//! Collinear tie-break
//! - A candidate exactly on the connecting line (|cross| <= EPS) is taken
//!   only when it is strictly farther from the anchor on the opposite hull.
//!   Preferring the farther vertex pushes redundant collinear points onto the
//!   discarded arcs of the merge, and terminates: distance to the anchor
//!   strictly increases along a collinear chain.
//!
//! Degenerate hulls of 1 or 2 vertices walk the same code; a single-vertex
//! hull offers its own vertex as the only candidate, which never improves.

use nalgebra::Vector2;

use crate::types::{Hull, EPS};
use crate::util::cross;

/// Upper tangent of two clockwise hulls: indices `(i, j)` into `left` and
/// `right` such that both polygons lie below or on the line
/// `left.pts[i] -> right.pts[j]`.
pub fn upper_tangent(left: &Hull, right: &Hull) -> (usize, usize) {
    tangent(left, right, true)
}

/// Lower tangent of two clockwise hulls: both polygons above or on the line.
pub fn lower_tangent(left: &Hull, right: &Hull) -> (usize, usize) {
    tangent(left, right, false)
}

fn tangent(left: &Hull, right: &Hull, upper: bool) -> (usize, usize) {
    let mut i = left.rightmost_index();
    let mut j = 0;
    loop {
        let mut moved = false;
        // Left walk: predecessors for the upper tangent, successors for the
        // lower one.
        loop {
            let cand = if upper { left.prev(i) } else { left.next(i) };
            if cand == i || !improves(left.pts[i], right.pts[j], left.pts[cand], upper, true) {
                break;
            }
            i = cand;
            moved = true;
        }
        // Right walk: the mirror directions.
        loop {
            let cand = if upper { right.next(j) } else { right.prev(j) };
            if cand == j || !improves(right.pts[j], left.pts[i], right.pts[cand], upper, false) {
                break;
            }
            j = cand;
            moved = true;
        }
        if !moved {
            break;
        }
    }
    (i, j)
}

/// Whether stepping from `cur` to `cand` improves the supporting line.
///
/// `cur` is the endpoint the walk is moving, `anchor` the fixed endpoint on
/// the opposite hull. The connecting line always runs left hull -> right
/// hull, so `left_side` selects the argument order of the sign test.
#[inline]
fn improves(
    cur: Vector2<f64>,
    anchor: Vector2<f64>,
    cand: Vector2<f64>,
    upper: bool,
    left_side: bool,
) -> bool {
    let s = if left_side {
        cross(cur, anchor, cand)
    } else {
        cross(anchor, cur, cand)
    };
    if upper && s > EPS {
        return true;
    }
    if !upper && s < -EPS {
        return true;
    }
    if s.abs() > EPS {
        return false;
    }
    // Collinear candidate: prefer the strictly farther vertex.
    (cand - anchor).norm_squared() > (cur - anchor).norm_squared()
}
