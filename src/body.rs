//! Movable and static bodies.

use crate::collider::Collider;
use crate::error::PhysicsError;
use crate::segment::Segment;
use crate::vector::Vec2;

/// Surface properties of a body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Restitution-like scale on the bounce impulse. Usually in `[0, 1]`,
    /// not clamped.
    pub bounciness: f64,
    /// Stored for future friction handling; not read by the stepper.
    pub friction_static: f64,
    /// Stored for future friction handling; not read by the stepper.
    pub friction_kinetic: f64,
}

impl Material {
    pub const fn new(bounciness: f64, friction_static: f64, friction_kinetic: f64) -> Self {
        Self {
            bounciness,
            friction_static,
            friction_kinetic,
        }
    }

    /// Frictionless material with the given bounciness.
    pub const fn bouncy(bounciness: f64) -> Self {
        Self::new(bounciness, 0.0, 0.0)
    }
}

/// Handle to a movable body inside a [`crate::Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovableId(pub(crate) usize);

impl MovableId {
    /// Insertion index of the body.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a static body inside a [`crate::Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticId(pub(crate) usize);

impl StaticId {
    /// Insertion index of the body.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A dynamic polygon subject to gravity and collision response.
///
/// Orientation is an explicit `angle`; the local collider is never modified,
/// world-frame vertices are derived on demand by rotating the local shape by
/// `angle` and translating it by `position`.
///
/// Velocities are per tick: `velocity` in units per tick, `angular_velocity`
/// in radians per tick (positive turns clockwise on screen).
#[derive(Debug, Clone, PartialEq)]
pub struct MovableBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angular_velocity: f64,
    pub angle: f64,
    pub material: Material,
    collider: Collider,
    mass: f64,
}

impl MovableBody {
    /// Create a body at the origin, at rest.
    ///
    /// Fails with [`PhysicsError::InvalidMass`] unless `mass` is positive and
    /// finite.
    pub fn new(collider: Collider, mass: f64) -> Result<Self, PhysicsError> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(PhysicsError::InvalidMass { mass });
        }
        Ok(Self {
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            angle: 0.0,
            material: Material::default(),
            collider,
            mass,
        })
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The canonical local-frame collider (unrotated).
    pub fn local_collider(&self) -> &Collider {
        &self.collider
    }

    /// Local collider rotated by the current `angle`, still origin-centered.
    pub fn oriented_collider(&self) -> Collider {
        self.collider.rotated(self.angle)
    }

    /// World-frame vertices: rotate by `angle`, then translate by `position`.
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> {
        let oriented = self.oriented_collider();
        let position = self.position;
        (0..oriented.vertex_count()).map(move |i| oriented.vertices()[i] + position)
    }

    /// World-frame edges.
    pub fn world_edges(&self) -> impl Iterator<Item = Segment> {
        let oriented = self.oriented_collider();
        let position = self.position;
        (0..oriented.vertex_count()).map(move |i| oriented.edge(i, position))
    }

    /// Change velocity by `impulse / mass`.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }
}

/// An immovable polygon obstacle.
///
/// Its collider is rotated once, at construction, and never changes after.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticBody {
    pub position: Vec2,
    pub material: Material,
    collider: Collider,
}

impl StaticBody {
    pub fn new(collider: Collider) -> Self {
        Self {
            position: Vec2::zeros(),
            material: Material::default(),
            collider,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Pre-rotate the collider by `angle` radians (clockwise on screen).
    pub fn with_rotation(mut self, angle: f64) -> Self {
        self.collider = self.collider.rotated(angle);
        self
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.collider.world_vertices(self.position)
    }

    pub fn world_edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.collider.edges(self.position)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use core::f64::consts::FRAC_PI_2;
    use std::vec::Vec;

    const EPSILON: f64 = 1e-9;

    fn approx_vec_eq(a: &Vec2, b: &Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    fn square() -> Collider {
        Collider::rect(40.0, 40.0).unwrap()
    }

    #[test]
    fn test_movable_defaults() {
        let body = MovableBody::new(square(), 2.0).unwrap();
        assert_eq!(body.position, Vec2::zeros());
        assert_eq!(body.velocity, Vec2::zeros());
        assert_eq!(body.angle, 0.0);
        assert_eq!(body.mass(), 2.0);
        assert_eq!(body.material, Material::default());
    }

    #[test]
    fn test_invalid_mass() {
        assert_eq!(
            MovableBody::new(square(), 0.0).unwrap_err(),
            PhysicsError::InvalidMass { mass: 0.0 }
        );
        assert!(MovableBody::new(square(), -1.0).is_err());
        assert!(MovableBody::new(square(), f64::NAN).is_err());
        assert!(MovableBody::new(square(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let body = MovableBody::new(square(), 1.0)
            .unwrap()
            .with_position(Vec2::new(0.0, 200.0))
            .with_velocity(Vec2::new(10.0, 0.0))
            .with_angular_velocity(0.005)
            .with_material(Material::bouncy(1.0));
        assert_eq!(body.position, Vec2::new(0.0, 200.0));
        assert_eq!(body.velocity, Vec2::new(10.0, 0.0));
        assert_eq!(body.angular_velocity, 0.005);
        assert_eq!(body.material.bounciness, 1.0);
    }

    #[test]
    fn test_apply_impulse() {
        let mut body = MovableBody::new(square(), 2.0).unwrap();
        body.apply_impulse(Vec2::new(10.0, 0.0));
        assert!(approx_vec_eq(&body.velocity, &Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_world_vertices_translate() {
        let body = MovableBody::new(square(), 1.0)
            .unwrap()
            .with_position(Vec2::new(100.0, 50.0));
        let verts: Vec<Vec2> = body.world_vertices().collect();
        assert_eq!(verts[0], Vec2::new(60.0, 10.0));
        assert_eq!(verts[2], Vec2::new(140.0, 90.0));
    }

    #[test]
    fn test_orientation_does_not_touch_local_collider() {
        let body = MovableBody::new(square(), 1.0)
            .unwrap()
            .with_angle(FRAC_PI_2);
        assert_eq!(body.local_collider(), &square());
        // A quarter turn maps the square onto itself with vertices shifted.
        let verts: Vec<Vec2> = body.world_vertices().collect();
        assert!(approx_vec_eq(&verts[0], &Vec2::new(-40.0, 40.0)));
    }

    #[test]
    fn test_static_rotation_is_baked_once() {
        let s = StaticBody::new(square()).with_rotation(FRAC_PI_2);
        assert!(approx_vec_eq(&s.collider().vertices()[0], &Vec2::new(-40.0, 40.0)));
    }

    #[test]
    fn test_static_world_edges() {
        let s = StaticBody::new(square()).with_position(Vec2::new(10.0, 0.0));
        let edges: Vec<Segment> = s.world_edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].start, Vec2::new(-30.0, -40.0));
    }
}
