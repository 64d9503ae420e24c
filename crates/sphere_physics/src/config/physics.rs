//! Physics world configuration

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Tunables read by [`PhysicsWorld`](crate::physics::PhysicsWorld)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fraction of closing speed returned as separating speed (0 = inelastic, 1 = elastic)
    pub restitution: f32,

    /// Per-axis value substituted for the center offset of two coincident spheres
    ///
    /// Not normalized. The contact normal for coincident centers is exactly
    /// this vector on every axis.
    pub degenerate_nudge: f32,
}

impl PhysicsConfig {
    /// Restitution used when none is configured
    pub const DEFAULT_RESTITUTION: f32 = 0.5;

    /// Coincident-center nudge used when none is configured
    pub const DEFAULT_DEGENERATE_NUDGE: f32 = 0.001;

    /// Create a configuration with default values
    pub const fn new() -> Self {
        Self {
            restitution: Self::DEFAULT_RESTITUTION,
            degenerate_nudge: Self::DEFAULT_DEGENERATE_NUDGE,
        }
    }

    /// Set restitution, clamped to `[0, 1]`
    ///
    /// NaN is ignored and the current restitution is kept.
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        if restitution.is_nan() {
            log::warn!("Ignoring NaN restitution; keeping {}", self.restitution);
            return self;
        }
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    /// Set the coincident-center nudge
    pub fn with_degenerate_nudge(mut self, nudge: f32) -> Self {
        self.degenerate_nudge = nudge;
        self
    }

    /// Check that every value is usable by the world step
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Invalid {
                field: "restitution",
                reason: format!("{} is outside [0, 1]", self.restitution),
            });
        }

        if !self.degenerate_nudge.is_finite() || self.degenerate_nudge <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "degenerate_nudge",
                reason: format!("{} must be finite and positive", self.degenerate_nudge),
            });
        }

        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for PhysicsConfig {}
