//! Line segments and the parametric segment-segment intersection test.

use crate::vector::{perpendicular, Vec2};

/// A line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Unnormalized perpendicular `(start.y - end.y, end.x - start.x)`.
    ///
    /// For an edge of a counter-clockwise collider this points out of the
    /// polygon.
    #[inline]
    pub fn perpendicular(&self) -> Vec2 {
        perpendicular(self.direction())
    }

    /// The same segment shifted by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// Intersect two segments.
///
/// Solves `l1.start + uA·(l1.end − l1.start) = l2.start + uB·(l2.end − l2.start)`
/// and reports the point on `l1` when both `uA` and `uB` lie in `[0, 1]`.
/// Endpoints count as intersecting.
///
/// Parallel (including collinear) segments have a zero divisor and never
/// intersect, as does any pair whose parameters come out non-finite.
pub fn segments_intersect(l1: &Segment, l2: &Segment) -> Option<Vec2> {
    let d1 = l1.direction();
    let d2 = l2.direction();
    let ds = l1.start - l2.start;

    let denominator = d2.y * d1.x - d2.x * d1.y;
    if denominator == 0.0 {
        return None;
    }

    let ua = (d2.x * ds.y - d2.y * ds.x) / denominator;
    let ub = (d1.x * ds.y - d1.y * ds.x) / denominator;
    if !ua.is_finite() || !ub.is_finite() {
        return None;
    }

    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(l1.start + d1 * ua)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    fn approx_vec_eq(a: &Vec2, b: &Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_crossing_segments() {
        let p = segments_intersect(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0)).unwrap();
        assert!(approx_vec_eq(&p, &Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_disjoint_segments() {
        // Lines cross at (1.5, 1.5), beyond the end of the first segment.
        assert!(segments_intersect(&seg(0.0, 0.0, 1.0, 1.0), &seg(1.0, 2.0, 3.0, 0.0)).is_none());
    }

    #[test]
    fn test_parallel_segments() {
        assert!(segments_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn test_collinear_overlap_is_not_an_intersection() {
        assert!(segments_intersect(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)).is_none());
    }

    #[test]
    fn test_touching_endpoints_intersect() {
        let p = segments_intersect(&seg(0.0, 0.0, 1.0, 1.0), &seg(1.0, 1.0, 2.0, 0.0)).unwrap();
        assert!(approx_vec_eq(&p, &Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_t_junction_intersects() {
        // Second segment ends exactly on the first one.
        let p = segments_intersect(&seg(0.0, 0.0, 4.0, 0.0), &seg(2.0, -3.0, 2.0, 0.0)).unwrap();
        assert!(approx_vec_eq(&p, &Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn test_zero_length_segment_never_intersects() {
        let point = seg(0.0, 0.0, 0.0, 0.0);
        let line = seg(-1.0, 0.0, 1.0, 0.0);
        assert!(segments_intersect(&point, &line).is_none());
        assert!(segments_intersect(&line, &point).is_none());
    }

    #[test]
    fn test_non_finite_input() {
        assert!(segments_intersect(&seg(0.0, 0.0, f64::NAN, 1.0), &seg(0.0, 1.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn test_perpendicular_points_out_of_ccw_square_top() {
        // Top edge of a y-down CCW square runs right-to-left.
        let top = seg(40.0, -40.0, -40.0, -40.0);
        let n = top.perpendicular();
        assert!(n.y < 0.0);
        assert_eq!(n.x, 0.0);
    }
}
