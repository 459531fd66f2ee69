//! Minimal 2D rigid body simulator for convex polygons.
//!
//! Movable polygons fall under gravity, collide with each other and with
//! fixed polygon obstacles, and bounce off the obstacles. Collisions are
//! found by edge-vs-edge intersection tests over small substeps; a hit rolls
//! the body back to where it was before the substep.
//!
//! Designed for `no_std` environments using fixed-capacity `heapless`
//! collections. Coordinates are screen-style: `y` grows downward.
//!
//! # Example
//! ```
//! use embedded_polyphys::{Collider, Material, MovableBody, Simulation, SimulationConfig, StaticBody, Vec2};
//!
//! let config = SimulationConfig::default().with_gravity(Vec2::new(0.0, 0.098));
//! let mut sim = Simulation::<4, 4>::new(config).unwrap();
//!
//! let ball = MovableBody::new(Collider::rect(10.0, 10.0).unwrap(), 1.0)
//!     .unwrap()
//!     .with_material(Material::bouncy(0.0));
//! let id = sim.add_movable(ball).unwrap();
//!
//! let floor = StaticBody::new(Collider::rect(200.0, 10.0).unwrap())
//!     .with_position(Vec2::new(0.0, 100.0));
//! sim.add_static(floor).unwrap();
//!
//! // The box settles on the floor without passing through it.
//! sim.run(600);
//! assert!(sim.movable(id).unwrap().position.y + 10.0 <= 90.0);
//! ```
//!
//! Rendering is left to the host: [`render::render`] turns the current state
//! into [`DrawPrimitive`]s and [`draw::draw`] rasterizes them onto any
//! `embedded-graphics` draw target.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

use embedded_graphics_core::pixelcolor::Rgb565;
use nalgebra::Point2;

pub mod body;
pub mod collider;
pub mod collision;
pub mod config;
pub mod draw;
pub mod error;
pub mod render;
pub mod segment;
pub mod simulation;
pub mod vector;

pub use body::{Material, MovableBody, MovableId, StaticBody, StaticId};
pub use collider::{rotate, Collider, MAX_COLLIDER_VERTICES};
pub use collision::{polygons_collide, Contact};
pub use config::SimulationConfig;
pub use error::PhysicsError;
pub use segment::{segments_intersect, Segment};
pub use simulation::{Simulation, TickReport, MAX_MOVABLE_BODIES, MAX_STATIC_BODIES};
pub use vector::Vec2;

/// Screen-space drawing command produced by [`render::render`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPrimitive {
    Line([Point2<i32>; 2], Rgb565),
    /// Small filled square marking a body's position.
    Marker(Point2<i32>, Rgb565),
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn test_reexports_build_a_scene() {
        let mut sim: Simulation<1, 1> = Simulation::default();
        let id = sim
            .add_movable(MovableBody::new(Collider::rect(1.0, 1.0).unwrap(), 1.0).unwrap())
            .unwrap();
        sim.add_static(StaticBody::new(Collider::rect(5.0, 1.0).unwrap()).with_position(Vec2::new(0.0, 50.0)))
            .unwrap();
        sim.tick();
        assert!(sim.movable(id).unwrap().position.y > 0.0);
    }

    #[test]
    fn test_capacity_constants() {
        assert_eq!(MAX_MOVABLE_BODIES, 32);
        assert_eq!(MAX_STATIC_BODIES, 128);
        assert_eq!(MAX_COLLIDER_VERTICES, 16);
    }
}
