//! Contact response: positional correction and velocity impulses
//!
//! Correction and impulse are independent. Correction always runs for an
//! overlapping pair and ignores mass. The impulse needs a body on both sides
//! and runs only while the pair is closing along the normal.

use crate::ecs::components::PhysicsBody;
use crate::foundation::math::{vector, Vec3};

use super::contact::SphereContact;

/// Share of the penetration each side of a contact is moved
pub const CORRECTION_SHARE: f32 = 0.5;

/// What the velocity pass did for one contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpulseOutcome {
    /// An impulse of this magnitude was applied along the normal
    Applied(f32),
    /// Already moving apart along the normal; velocities untouched
    Separating,
    /// Both bodies have infinite mass; velocities untouched
    Immovable,
    /// At least one side has no body (static obstacle); velocities untouched
    NoBody,
}

impl ImpulseOutcome {
    /// Impulse magnitude, if one was applied
    pub fn magnitude(&self) -> Option<f32> {
        match self {
            Self::Applied(j) => Some(*j),
            _ => None,
        }
    }
}

/// Push both positions apart by half the penetration each
///
/// Returns the correction applied to `position_b` (`position_a` received
/// its negation).
pub fn separate(position_a: &mut Vec3, position_b: &mut Vec3, contact: &SphereContact) -> Vec3 {
    let correction = vector::scale(&contact.normal, contact.penetration * CORRECTION_SHARE);
    *position_a -= correction;
    *position_b += correction;
    correction
}

/// Exchange momentum between two bodies along `normal`
///
/// `normal` points from A to B. Bodies with non-positive mass act as
/// immovable; if both are immovable nothing changes.
pub fn apply_impulse(
    body_a: &mut PhysicsBody,
    body_b: &mut PhysicsBody,
    normal: &Vec3,
    restitution: f32,
) -> ImpulseOutcome {
    let relative_velocity = vector::sub(&body_b.velocity, &body_a.velocity);
    let velocity_along_normal = vector::dot(&relative_velocity, normal);

    if velocity_along_normal > 0.0 {
        return ImpulseOutcome::Separating;
    }

    let inv_mass_a = body_a.inverse_mass();
    let inv_mass_b = body_b.inverse_mass();
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    if inv_mass_sum <= 0.0 {
        return ImpulseOutcome::Immovable;
    }

    let j = -(1.0 + restitution) * velocity_along_normal / inv_mass_sum;
    let impulse = vector::scale(normal, j);

    body_a.velocity -= impulse * inv_mass_a;
    body_b.velocity += impulse * inv_mass_b;

    ImpulseOutcome::Applied(j)
}
