//! The simulation container and its fixed-substep stepper.
//!
//! One [`Simulation::tick`] runs `substeps` slices. Within each slice every
//! movable body, in insertion order:
//!
//! 1. gains `gravity / substeps` of velocity,
//! 2. tentatively moves by `velocity / substeps` and turns by
//!    `angular_velocity / substeps`,
//! 3. is tested against every other movable body; on contact it is put back
//!    where it was and nothing else happens this slice,
//! 4. otherwise is tested against the static bodies; on the first contact it
//!    is put back, its velocity is cleared and a bounce impulse along the
//!    contacted edge's outward normal is applied.
//!
//! The loop is slice-major, body-minor, so within one slice a body sees
//! lower-indexed bodies at their new positions and higher-indexed bodies at
//! their old ones.

use core::time::Duration;

use heapless::Vec;
use log::{debug, trace, warn};

use crate::body::{MovableBody, MovableId, StaticBody, StaticId};
use crate::collision::{polygons_collide, Contact};
use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::vector::{magnitude, normalize, Vec2};

/// Default movable-body capacity.
pub const MAX_MOVABLE_BODIES: usize = 32;

/// Default static-body capacity.
pub const MAX_STATIC_BODIES: usize = 128;

/// Diagnostics produced by [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Latest contact of the tick, if contact recording is enabled.
    pub contact: Option<Contact>,
    /// Slices in which a body was held back by another movable body.
    pub movable_hits: u32,
    /// Slices in which a body bounced off a static body.
    pub static_hits: u32,
}

impl TickReport {
    pub fn collided(&self) -> bool {
        self.movable_hits > 0 || self.static_hits > 0
    }

    /// Fold a later report into this one.
    pub fn merge(&mut self, later: TickReport) {
        if later.contact.is_some() {
            self.contact = later.contact;
        }
        self.movable_hits = self.movable_hits.saturating_add(later.movable_hits);
        self.static_hits = self.static_hits.saturating_add(later.static_hits);
    }
}

/// What happened to one body during one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliceOutcome {
    Moved,
    Blocked,
    Bounced,
}

/// Fixed-capacity set of movable and static bodies plus global parameters.
///
/// # Type Parameters
/// * `M` - Maximum number of movable bodies.
/// * `S` - Maximum number of static bodies.
///
/// # Example
/// ```
/// use embedded_polyphys::{Collider, Material, MovableBody, Simulation, SimulationConfig, StaticBody, Vec2};
///
/// let mut sim: Simulation = Simulation::new(SimulationConfig::default()).unwrap();
///
/// let crate_box = MovableBody::new(Collider::rect(40.0, 40.0).unwrap(), 1.0)
///     .unwrap()
///     .with_position(Vec2::new(0.0, 200.0))
///     .with_velocity(Vec2::new(10.0, 0.0))
///     .with_material(Material::bouncy(1.0));
/// let id = sim.add_movable(crate_box).unwrap();
///
/// let ramp = Collider::from_points(&[[100.0, 0.0], [0.0, 100.0], [100.0, 100.0]]).unwrap();
/// sim.add_static(StaticBody::new(ramp).with_position(Vec2::new(150.0, 200.0)))
///     .unwrap();
///
/// let report = sim.tick();
/// assert!(sim.movable(id).unwrap().position.x > 0.0);
/// assert!(!report.collided());
/// ```
pub struct Simulation<const M: usize = MAX_MOVABLE_BODIES, const S: usize = MAX_STATIC_BODIES> {
    config: SimulationConfig,
    movables: Vec<MovableBody, M>,
    statics: Vec<StaticBody, S>,
    ticks: u64,
}

impl<const M: usize, const S: usize> Simulation<M, S> {
    /// Create an empty simulation after validating `config`.
    pub fn new(config: SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            config,
            movables: Vec::new(),
            statics: Vec::new(),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tick_rate(&self) -> u32 {
        self.config.tick_rate
    }

    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    /// Replace the gravity vector. Non-finite components are rejected and
    /// the previous value is kept.
    pub fn set_gravity(&mut self, gravity: Vec2) -> Result<(), PhysicsError> {
        if !gravity.x.is_finite() || !gravity.y.is_finite() {
            warn!("gravity ({}, {}) rejected: not finite", gravity.x, gravity.y);
            return Err(PhysicsError::InvalidConfiguration {
                reason: "gravity must be finite",
            });
        }
        self.config.gravity = gravity;
        Ok(())
    }

    pub fn air_resistance(&self) -> f64 {
        self.config.air_resistance
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    pub fn set_record_contacts(&mut self, record: bool) {
        self.config.record_contacts = record;
    }

    /// Frame budget for a host loop running at the configured tick rate.
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// How long a host loop should sleep after spending `elapsed` on a frame.
    pub fn frame_delay(&self, elapsed: Duration) -> Duration {
        self.config.frame_delay(elapsed)
    }

    /// Number of completed ticks.
    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks
    }

    /// Append a movable body.
    ///
    /// Once `M` bodies are stored every further insertion fails with
    /// [`PhysicsError::CapacityExceeded`] and leaves the simulation unchanged.
    pub fn add_movable(&mut self, body: MovableBody) -> Result<MovableId, PhysicsError> {
        let id = MovableId(self.movables.len());
        if self.movables.push(body).is_err() {
            warn!("movable body rejected: capacity {} reached", M);
            return Err(PhysicsError::CapacityExceeded {
                resource: "movable bodies",
                limit: M,
            });
        }
        Ok(id)
    }

    /// Append a static body. Same capacity policy as [`Self::add_movable`].
    pub fn add_static(&mut self, body: StaticBody) -> Result<StaticId, PhysicsError> {
        let id = StaticId(self.statics.len());
        if self.statics.push(body).is_err() {
            warn!("static body rejected: capacity {} reached", S);
            return Err(PhysicsError::CapacityExceeded {
                resource: "static bodies",
                limit: S,
            });
        }
        Ok(id)
    }

    pub fn movable(&self, id: MovableId) -> Option<&MovableBody> {
        self.movables.get(id.0)
    }

    pub fn movable_mut(&mut self, id: MovableId) -> Option<&mut MovableBody> {
        self.movables.get_mut(id.0)
    }

    pub fn static_body(&self, id: StaticId) -> Option<&StaticBody> {
        self.statics.get(id.0)
    }

    pub fn movable_count(&self) -> usize {
        self.movables.len()
    }

    pub fn static_count(&self) -> usize {
        self.statics.len()
    }

    /// Movable bodies in insertion order.
    pub fn movables(&self) -> impl Iterator<Item = (MovableId, &MovableBody)> {
        self.movables.iter().enumerate().map(|(i, b)| (MovableId(i), b))
    }

    /// Static bodies in insertion order.
    pub fn statics(&self) -> impl Iterator<Item = (StaticId, &StaticBody)> {
        self.statics.iter().enumerate().map(|(i, b)| (StaticId(i), b))
    }

    /// Advance by one tick.
    pub fn tick(&mut self) -> TickReport {
        let substeps = self.config.substeps;
        let slice = f64::from(substeps);
        let gravity_step = self.config.gravity / slice;
        let mut report = TickReport::default();

        for _ in 0..substeps {
            for i in 0..self.movables.len() {
                match self.advance_body(i, gravity_step, slice, &mut report) {
                    SliceOutcome::Moved => {}
                    SliceOutcome::Blocked => {
                        report.movable_hits = report.movable_hits.saturating_add(1)
                    }
                    SliceOutcome::Bounced => {
                        report.static_hits = report.static_hits.saturating_add(1)
                    }
                }
            }
        }

        self.ticks += 1;
        report
    }

    /// Advance by `ticks` ticks and merge their reports.
    pub fn run(&mut self, ticks: u32) -> TickReport {
        let mut report = TickReport::default();
        for _ in 0..ticks {
            let r = self.tick();
            report.merge(r);
        }
        report
    }

    fn advance_body(
        &mut self,
        i: usize,
        gravity_step: Vec2,
        slice: f64,
        report: &mut TickReport,
    ) -> SliceOutcome {
        let verbose = self.config.verbose;
        let record = self.config.record_contacts;

        let body = &mut self.movables[i];
        body.velocity += gravity_step;
        let old_position = body.position;
        let old_angle = body.angle;
        body.position += body.velocity / slice;
        body.angle += body.angular_velocity / slice;

        let body = &self.movables[i];
        let collider = body.oriented_collider();
        let position = body.position;

        let blocked_by = self
            .movables
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .find_map(|(j, other)| {
                polygons_collide(&collider, position, &other.oriented_collider(), other.position)
                    .map(|contact| (j, contact))
            });

        if let Some((j, contact)) = blocked_by {
            let body = &mut self.movables[i];
            body.position = old_position;
            body.angle = old_angle;
            if verbose {
                debug!(
                    "movable {} blocked by movable {} at ({:.3}, {:.3})",
                    i, j, contact.point.x, contact.point.y
                );
            }
            if record {
                report.contact = Some(contact);
            }
            return SliceOutcome::Blocked;
        }

        let hit = self.statics.iter().enumerate().find_map(|(j, s)| {
            polygons_collide(&collider, position, s.collider(), s.position)
                .map(|contact| (j, contact, s.material.bounciness))
        });

        let Some((j, contact, static_bounciness)) = hit else {
            return SliceOutcome::Moved;
        };

        let body = &mut self.movables[i];
        body.position = old_position;
        body.angle = old_angle;

        let impact_speed = magnitude(body.velocity);
        body.velocity = Vec2::zeros();

        if impact_speed > 0.0 && impact_speed.is_finite() {
            // Zero-length edges never produce a contact, so `None` only
            // follows from coordinates large enough to overflow the norm.
            if let Some(normal) = normalize(contact.edge.perpendicular()) {
                let strength =
                    impact_speed * body.mass() * body.material.bounciness * static_bounciness;
                body.apply_impulse(normal * strength);
            }
        }

        if verbose {
            debug!(
                "movable {} bounced off static {} at ({:.3}, {:.3}), impact speed {:.4}",
                i, j, contact.point.x, contact.point.y, impact_speed
            );
            trace!(
                "movable {} velocity after bounce ({:.4}, {:.4})",
                i,
                body.velocity.x,
                body.velocity.y
            );
        }
        if record {
            report.contact = Some(contact);
        }
        SliceOutcome::Bounced
    }
}

impl<const M: usize, const S: usize> Default for Simulation<M, S> {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            movables: Vec::new(),
            statics: Vec::new(),
            ticks: 0,
        }
    }
}
