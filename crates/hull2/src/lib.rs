//! Divide-and-conquer convex hulls in 2D.
//!
//! Purpose
//! - Compute the convex hull of a finite point set as a single pure function
//!   `points -> clockwise hull polygon`, in expected O(n log n).
//! - The merge step stitches two disjoint convex polygons via their upper and
//!   lower tangent lines; all tangent comparisons use the cross-product
//!   orientation predicate, never slope ratios (vertical tangents stay exact).
//!
//! Module map
//! - `types`: `Hull` (cyclic clockwise vertex sequence) and `HullError`.
//! - `sort`: x-sort for the divide step, angular clockwise sort for merge.
//! - `tangent`: upper/lower tangent walks between two clockwise hulls.
//! - `merge`: tangent-based splice of two sub-hulls.
//! - `solve`: validation, single x-sort, recursion, final canonicalization.
//! - `rand`: reproducible random point clouds for tests, benches, and demos.

mod merge;
pub mod rand;
mod solve;
mod sort;
mod tangent;
mod types;
mod util;

pub use merge::merge;
pub use solve::convex_hull;
pub use sort::{sort_by_x, sort_clockwise};
pub use tangent::{lower_tangent, upper_tangent};
pub use types::{Hull, HullError, EPS};
pub use util::cross;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::{convex_hull, cross, merge, sort_clockwise, Hull, HullError};
    pub use nalgebra::Vector2 as Vec2;
}
