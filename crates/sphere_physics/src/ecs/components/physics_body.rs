//! Point-mass body for entities that move under applied forces
//!
//! A body carries linear state only: velocity, mass and the forces applied
//! since the last integration. Position belongs to the owning entity and is
//! passed in by reference when integrating.

use crate::foundation::math::Vec3;

/// Linear-motion state for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    /// Linear velocity in units per second
    pub velocity: Vec3,

    /// Mass in arbitrary units
    ///
    /// Zero or negative means infinite mass: the body ignores forces and
    /// receives no collision impulses.
    pub mass: f32,

    /// Sum of forces applied since the last successful integration
    accumulated_force: Vec3,
}

impl PhysicsBody {
    /// Create a body at rest
    pub fn new(mass: f32) -> Self {
        Self {
            velocity: Vec3::zeros(),
            mass,
            accumulated_force: Vec3::zeros(),
        }
    }

    /// Create a body with an initial velocity
    pub fn with_velocity(mass: f32, velocity: Vec3) -> Self {
        Self {
            velocity,
            mass,
            accumulated_force: Vec3::zeros(),
        }
    }

    /// Create an immovable body
    pub fn immovable() -> Self {
        Self::new(0.0)
    }

    /// Whether this body has infinite mass
    pub fn is_static(&self) -> bool {
        self.mass <= 0.0
    }

    /// `1 / mass`, or zero for infinite-mass bodies
    pub fn inverse_mass(&self) -> f32 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    /// Forces applied since the last integration
    pub fn pending_force(&self) -> Vec3 {
        self.accumulated_force
    }

    /// Accumulate a force for the next integration step
    pub fn apply_force(&mut self, force: Vec3) {
        self.accumulated_force += force;
    }

    /// Advance velocity and `position` by `dt` seconds (semi-implicit Euler)
    ///
    /// Velocity is updated from the pending force first and the new velocity
    /// moves the position. The pending force is cleared afterwards. A
    /// non-positive (or NaN) `dt` leaves everything untouched, including the
    /// pending force.
    pub fn integrate(&mut self, position: &mut Vec3, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }

        let acceleration = self.accumulated_force * self.inverse_mass();
        self.velocity += acceleration * dt;
        *position += self.velocity * dt;

        self.accumulated_force = Vec3::zeros();
    }
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self::new(1.0)
    }
}
