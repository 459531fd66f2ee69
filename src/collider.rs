//! Convex polygon colliders.
//!
//! A collider is an ordered list of vertices in its body's local frame,
//! wound counter-clockwise as seen on screen (y grows downward). Consecutive
//! vertices, wrapping last to first, form the edges. Convexity and absence
//! of self-intersection are the caller's responsibility.

use heapless::Vec;

use crate::error::PhysicsError;
use crate::segment::Segment;
use crate::vector::Vec2;

// ComplexField provides sin_cos() for f64 in no_std via libm
#[allow(unused_imports)]
use nalgebra::ComplexField;

/// Maximum number of vertices a collider can hold.
pub const MAX_COLLIDER_VERTICES: usize = 16;

/// Minimum number of vertices for a polygon.
pub const MIN_COLLIDER_VERTICES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    vertices: Vec<Vec2, MAX_COLLIDER_VERTICES>,
}

impl Collider {
    /// Build a collider from local-frame vertices.
    ///
    /// Fails when there are fewer than 3 or more than
    /// [`MAX_COLLIDER_VERTICES`] vertices, or when a coordinate is not finite.
    pub fn new(vertices: &[Vec2]) -> Result<Self, PhysicsError> {
        if vertices.len() < MIN_COLLIDER_VERTICES {
            return Err(PhysicsError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if vertices.len() > MAX_COLLIDER_VERTICES {
            return Err(PhysicsError::TooManyVertices {
                count: vertices.len(),
                limit: MAX_COLLIDER_VERTICES,
            });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(PhysicsError::NonFiniteVertex { index });
        }

        let vertices = Vec::from_slice(vertices).map_err(|_| PhysicsError::TooManyVertices {
            count: vertices.len(),
            limit: MAX_COLLIDER_VERTICES,
        })?;
        Ok(Self { vertices })
    }

    /// Build a collider from `[x, y]` pairs.
    pub fn from_points(points: &[[f64; 2]]) -> Result<Self, PhysicsError> {
        let mut vertices: Vec<Vec2, MAX_COLLIDER_VERTICES> = Vec::new();
        for p in points {
            if vertices.push(Vec2::new(p[0], p[1])).is_err() {
                return Err(PhysicsError::TooManyVertices {
                    count: points.len(),
                    limit: MAX_COLLIDER_VERTICES,
                });
            }
        }
        Self::new(&vertices)
    }

    /// Axis-aligned rectangle centered on the local origin.
    pub fn rect(half_width: f64, half_height: f64) -> Result<Self, PhysicsError> {
        Self::from_points(&[
            [-half_width, -half_height],
            [-half_width, half_height],
            [half_width, half_height],
            [half_width, -half_height],
        ])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Edge `i`, from vertex `i` to vertex `i + 1` (wrapping), offset by `position`.
    pub fn edge(&self, i: usize, position: Vec2) -> Segment {
        let n = self.vertices.len();
        let next = if i + 1 == n { 0 } else { i + 1 };
        Segment::new(self.vertices[i] + position, self.vertices[next] + position)
    }

    /// All edges in vertex order, offset by `position`.
    pub fn edges(&self, position: Vec2) -> impl Iterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i, position))
    }

    /// Vertices offset by `position`.
    pub fn world_vertices(&self, position: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        self.vertices.iter().map(move |v| v + position)
    }

    /// A copy rotated about the local origin by `angle` radians.
    ///
    /// Positive angles turn clockwise on a y-down screen: the standard
    /// counter-clockwise rotation is applied to `-angle`. An angle of exactly
    /// zero returns an identical copy.
    pub fn rotated(&self, angle: f64) -> Self {
        if angle == 0.0 {
            return self.clone();
        }

        let (sin, cos) = angle.sin_cos();
        let vertices = self
            .vertices
            .iter()
            .map(|v| Vec2::new(cos * v.x + sin * v.y, -sin * v.x + cos * v.y))
            .collect();
        Self { vertices }
    }
}

/// Free-function form of [`Collider::rotated`].
pub fn rotate(collider: &Collider, angle: f64) -> Collider {
    collider.rotated(angle)
}
