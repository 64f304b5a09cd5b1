use nalgebra::Vector2;

/// Orientation predicate: signed parallelogram area of `(b - a, c - a)`.
///
/// Positive when `a -> b -> c` turns counter-clockwise (`c` left of `a -> b`),
/// negative when clockwise, zero when collinear. This replaces every slope
/// comparison in the tangent search; a slope ratio is undefined on vertical
/// connecting lines, the sign test is not.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
