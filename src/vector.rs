//! 2D vector algebra.
//!
//! Vectors are plain `nalgebra` values; the helpers here are the small set of
//! operations the stepper needs, spelled out so their edge cases are explicit.

use nalgebra::Vector2;

// ComplexField provides sqrt() for f64 in no_std via libm
#[allow(unused_imports)]
use nalgebra::ComplexField;

/// World and local coordinates. `y` grows downward (screen convention).
pub type Vec2 = Vector2<f64>;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

#[inline]
pub fn scale(v: Vec2, s: f64) -> Vec2 {
    v * s
}

/// Euclidean length, `sqrt(x² + y²)`.
#[inline]
pub fn magnitude(v: Vec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// Returns `None` for the zero vector and for vectors whose magnitude is not
/// finite, so a degenerate direction can never leak NaN into body state.
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let mag = magnitude(v);
    if mag == 0.0 || !mag.is_finite() {
        return None;
    }
    Some(scale(v, 1.0 / mag))
}

/// The vector rotated a quarter turn: `(x, y) -> (-y, x)`.
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_add_and_scale() {
        let v = add(Vec2::new(1.0, 2.0), Vec2::new(3.0, -4.0));
        assert_eq!(v, Vec2::new(4.0, -2.0));
        assert_eq!(scale(v, 0.5), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_magnitude() {
        assert!(approx_eq(magnitude(Vec2::new(3.0, 4.0)), 5.0));
        assert_eq!(magnitude(Vec2::zeros()), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Vec2::new(0.0, -8.0)).unwrap();
        assert!(approx_eq(n.x, 0.0));
        assert!(approx_eq(n.y, -1.0));
    }

    #[test]
    fn test_normalize_zero_is_none() {
        assert!(normalize(Vec2::zeros()).is_none());
    }

    #[test]
    fn test_normalize_non_finite_is_none() {
        assert!(normalize(Vec2::new(f64::INFINITY, 0.0)).is_none());
        assert!(normalize(Vec2::new(f64::NAN, 1.0)).is_none());
    }

    #[test]
    fn test_perpendicular() {
        // Edge running right-to-left along the top of a body points up (y-down).
        let edge = Vec2::new(-80.0, 0.0);
        assert_eq!(perpendicular(edge), Vec2::new(0.0, -80.0));
    }
}
