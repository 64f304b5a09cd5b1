//! Positional and angular point ordering.
//!
//! Two orderings feed the solver:
//! - `sort_by_x` totally orders the input once before the recursion (the
//!   divide step splits the sorted slice at its midpoint index).
//! - `sort_clockwise` canonicalizes a vertex set into a cyclic clockwise
//!   sequence starting at the leftmost vertex. Merge calls it on both inputs
//!   every time, because a previously merged hull is not guaranteed to still
//!   start at its leftmost vertex.

use nalgebra::Vector2;
use std::cmp::Ordering;

use crate::types::Hull;

/// Total order by x-coordinate, ties by y.
///
/// The tie-break keeps the midpoint split deterministic; it is applied once
/// by `convex_hull`, never per recursion level.
pub fn sort_by_x(points: &mut [Vector2<f64>]) {
    points.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    });
}

/// Canonicalize into clockwise order starting at the leftmost vertex.
///
/// Reference = minimum-x vertex (ties by minimum y). The remaining vertices
/// sort ascending by polar angle `atan2(dy, dx)` around the reference
/// (counter-clockwise) and are reversed into clockwise order, reference
/// prepended. Equal angles (collinear with the reference) tie-break by
/// squared distance, nearer first before the reversal, so the ordering never
/// depends on input order.
pub fn sort_clockwise(hull: Hull) -> Hull {
    let mut pts = hull.pts;
    if pts.len() <= 1 {
        return Hull::new(pts);
    }
    let mut ref_idx = 0;
    for i in 1..pts.len() {
        let (p, r) = (pts[i], pts[ref_idx]);
        if p.x < r.x || (p.x == r.x && p.y < r.y) {
            ref_idx = i;
        }
    }
    let reference = pts.swap_remove(ref_idx);
    pts.sort_by(|a, b| {
        let aa = (a.y - reference.y).atan2(a.x - reference.x);
        let bb = (b.y - reference.y).atan2(b.x - reference.x);
        match aa.partial_cmp(&bb).unwrap_or(Ordering::Equal) {
            Ordering::Equal => {
                let da = (*a - reference).norm_squared();
                let db = (*b - reference).norm_squared();
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            }
            o => o,
        }
    });
    pts.reverse();
    let mut out = Vec::with_capacity(pts.len() + 1);
    out.push(reference);
    out.extend(pts);
    Hull::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn x_sort_breaks_ties_by_y() {
        let mut pts = vec![
            vector![1.0, 2.0],
            vector![0.0, 0.0],
            vector![1.0, -1.0],
        ];
        sort_by_x(&mut pts);
        assert_eq!(pts[0], vector![0.0, 0.0]);
        assert_eq!(pts[1], vector![1.0, -1.0]);
        assert_eq!(pts[2], vector![1.0, 2.0]);
    }

    #[test]
    fn clockwise_square_from_leftmost() {
        let h = Hull::new(vec![
            vector![2.0, 0.0],
            vector![0.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ]);
        let cw = sort_clockwise(h);
        assert_eq!(
            cw.pts,
            vec![
                vector![0.0, 0.0],
                vector![0.0, 2.0],
                vector![2.0, 2.0],
                vector![2.0, 0.0],
            ]
        );
        assert!(cw.is_convex());
    }

    #[test]
    fn clockwise_triangle_matches_traversal() {
        let h = Hull::new(vec![
            vector![2.0, 0.0],
            vector![0.0, 0.0],
            vector![1.0, 2.0],
        ]);
        let cw = sort_clockwise(h);
        assert_eq!(
            cw.pts,
            vec![vector![0.0, 0.0], vector![1.0, 2.0], vector![2.0, 0.0]]
        );
    }

    #[test]
    fn equal_angles_order_by_distance() {
        // Three collinear points ahead of the reference: after the clockwise
        // reversal the farthest comes first.
        let h = Hull::new(vec![
            vector![1.0, 0.0],
            vector![3.0, 0.0],
            vector![0.0, 0.0],
            vector![2.0, 0.0],
        ]);
        let cw = sort_clockwise(h);
        assert_eq!(
            cw.pts,
            vec![
                vector![0.0, 0.0],
                vector![3.0, 0.0],
                vector![2.0, 0.0],
                vector![1.0, 0.0],
            ]
        );
    }

    #[test]
    fn degenerate_sizes_pass_through() {
        let one = sort_clockwise(Hull::new(vec![vector![1.0, 1.0]]));
        assert_eq!(one.len(), 1);
        let two = sort_clockwise(Hull::new(vec![vector![1.0, 1.0], vector![0.0, 0.0]]));
        assert_eq!(two.pts, vec![vector![0.0, 0.0], vector![1.0, 1.0]]);
    }
}
