//! Demo configuration

use serde::{Deserialize, Serialize};
use sphere_physics::foundation::math::Vec3;
use sphere_physics::{Config, ConfigError, PhysicsConfig};

/// Settings for one headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// World step settings
    pub physics: PhysicsConfig,

    /// Number of dynamic spheres spawned above the obstacle
    pub sphere_count: usize,

    /// Frames to simulate before exiting
    pub frames: u32,

    /// Simulated wall-clock time per frame (seconds)
    pub frame_time: f32,

    /// Fixed physics step (seconds)
    pub fixed_step: f32,

    /// Gravitational acceleration applied as `mass * gravity` each step
    pub gravity: Vec3,

    /// Half-width of the spawn box on X and Z
    pub spawn_extent: f32,

    /// Height of the lowest spawn position above the obstacle
    pub spawn_height: f32,

    /// Smallest and largest sphere radius
    pub radius_range: (f32, f32),

    /// Radius of the static obstacle at the origin
    pub obstacle_radius: f32,

    /// RNG seed, so runs are reproducible
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            sphere_count: 12,
            frames: 600,
            frame_time: 1.0 / 60.0,
            fixed_step: 1.0 / 120.0,
            gravity: Vec3::new(0.0, -9.81, 0.0),
            spawn_extent: 3.0,
            spawn_height: 6.0,
            radius_range: (0.25, 0.75),
            obstacle_radius: 4.0,
            seed: 42,
        }
    }
}

impl DemoConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;

        if self.fixed_step <= 0.0 || !self.fixed_step.is_finite() {
            return Err(invalid("fixed_step", "must be finite and positive"));
        }

        if self.frame_time < 0.0 || !self.frame_time.is_finite() {
            return Err(invalid("frame_time", "must be finite and non-negative"));
        }

        let (min_radius, max_radius) = self.radius_range;
        if min_radius < 0.0 || max_radius < min_radius {
            return Err(invalid("radius_range", "expected 0 <= min <= max"));
        }

        if self.spawn_extent < 0.0 {
            return Err(invalid("spawn_extent", "must not be negative"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

impl Config for DemoConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_step() {
        let config = DemoConfig { fixed_step: 0.0, ..DemoConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "fixed_step", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_radius_range() {
        let config = DemoConfig { radius_range: (1.0, 0.5), ..DemoConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_physics() {
        let mut config = DemoConfig::default();
        config.physics.restitution = 4.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "restitution", .. })
        ));
    }
}
