//! Runtime configuration of a [`crate::Simulation`].
//!
//! Every knob that used to be a compile-time switch is a field here and can
//! be toggled independently.

use core::time::Duration;

use crate::error::PhysicsError;
use crate::vector::Vec2;

/// Default number of substeps per tick.
pub const DEFAULT_SUBSTEPS: u32 = 32;

/// Default host-loop tick rate in Hz.
pub const DEFAULT_TICK_RATE: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Ticks per second. Only the host loop reads this, for pacing.
    pub tick_rate: u32,
    /// Acceleration per tick, y-down.
    pub gravity: Vec2,
    /// Stored for future drag handling; not read by the stepper.
    pub air_resistance: f64,
    /// Equal slices each tick is divided into.
    pub substeps: u32,
    /// Emit `debug!`/`trace!` records for every collision event.
    pub verbose: bool,
    /// Report the contact line of the latest collision in each tick.
    pub record_contacts: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            gravity: Vec2::new(0.0, 0.098),
            air_resistance: 0.0,
            substeps: DEFAULT_SUBSTEPS,
            verbose: false,
            record_contacts: true,
        }
    }
}

impl SimulationConfig {
    pub fn new(tick_rate: u32, gravity: Vec2, air_resistance: f64) -> Self {
        Self {
            tick_rate,
            gravity,
            air_resistance,
            ..Self::default()
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_air_resistance(mut self, air_resistance: f64) -> Self {
        self.air_resistance = air_resistance;
        self
    }

    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_record_contacts(mut self, record_contacts: bool) -> Self {
        self.record_contacts = record_contacts;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.tick_rate == 0 {
            return Err(PhysicsError::InvalidConfiguration {
                reason: "tick_rate must be > 0",
            });
        }
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidConfiguration {
                reason: "substeps must be > 0",
            });
        }
        if !self.gravity.x.is_finite() || !self.gravity.y.is_finite() {
            return Err(PhysicsError::InvalidConfiguration {
                reason: "gravity must be finite",
            });
        }
        Ok(())
    }

    /// Wall-clock budget of one tick, `1 / tick_rate` seconds.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// How long the host loop should sleep after spending `elapsed` on a
    /// frame: `max(0, tick_interval − elapsed)`.
    pub fn frame_delay(&self, elapsed: Duration) -> Duration {
        self.tick_interval().saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::default();
        assert_eq!(c.tick_rate, 60);
        assert_eq!(c.substeps, 32);
        assert_eq!(c.gravity, Vec2::new(0.0, 0.098));
        assert_eq!(c.air_resistance, 0.0);
        assert!(!c.verbose);
        assert!(c.record_contacts);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let c = SimulationConfig::new(30, Vec2::new(0.0, 1.0), 0.5)
            .with_substeps(8)
            .with_verbose(true)
            .with_record_contacts(false);
        assert_eq!(c.tick_rate, 30);
        assert_eq!(c.gravity, Vec2::new(0.0, 1.0));
        assert_eq!(c.air_resistance, 0.5);
        assert_eq!(c.substeps, 8);
        assert!(c.verbose);
        assert!(!c.record_contacts);
    }

    #[test]
    fn test_validate_rejects_zero_substeps() {
        let c = SimulationConfig::default().with_substeps(0);
        assert_eq!(
            c.validate(),
            Err(PhysicsError::InvalidConfiguration {
                reason: "substeps must be > 0"
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_tick_rate() {
        assert!(SimulationConfig::default().with_tick_rate(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_gravity() {
        let c = SimulationConfig::default().with_gravity(Vec2::new(f64::NAN, 0.0));
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_frame_pacing() {
        let c = SimulationConfig::default().with_tick_rate(50);
        assert_eq!(c.tick_interval(), Duration::from_millis(20));
        assert_eq!(c.frame_delay(Duration::from_millis(5)), Duration::from_millis(15));
        assert_eq!(c.frame_delay(Duration::from_millis(40)), Duration::ZERO);
    }
}
