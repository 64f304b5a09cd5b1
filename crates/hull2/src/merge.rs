//! Tangent-based splice of two sub-hulls.
//!
//! Both inputs are canonicalized clockwise first (a merged hull does not
//! necessarily start at its leftmost vertex anymore), then the upper and
//! lower tangents bound the two arcs that stay on the merged boundary:
//! the left hull clockwise from the lower-tangent vertex to the upper-tangent
//! vertex, then the right hull clockwise from the upper-tangent vertex to the
//! lower-tangent vertex. Everything strictly between the tangent indices on
//! the hidden sides is interior to the merged polygon and dropped. The
//! concatenation is already clockwise; callers never re-sort.

use nalgebra::Vector2;

use crate::sort::sort_clockwise;
use crate::tangent::{lower_tangent, upper_tangent};
use crate::types::Hull;

/// Merge two disjoint convex hulls into one clockwise hull.
///
/// Consumes both inputs; the result is a freshly allocated sequence. Inputs
/// of 1 or 2 vertices are legal (the tangent walks degenerate to a single
/// candidate).
pub fn merge(left: Hull, right: Hull) -> Hull {
    let left = sort_clockwise(left);
    let right = sort_clockwise(right);
    let (lu, ru) = upper_tangent(&left, &right);
    let (ll, rl) = lower_tangent(&left, &right);
    let mut pts = Vec::with_capacity(left.len() + right.len());
    push_arc(&left, ll, lu, &mut pts);
    push_arc(&right, ru, rl, &mut pts);
    Hull::new(pts)
}

/// Append the clockwise arc `from ..= to`, cyclically. Coinciding endpoints
/// contribute exactly one vertex (the hull keeps a single point of that side).
fn push_arc(hull: &Hull, from: usize, to: usize, out: &mut Vec<Vector2<f64>>) {
    let mut k = from;
    out.push(hull.pts[k]);
    while k != to {
        k = hull.next(k);
        out.push(hull.pts[k]);
    }
}
