//! Sphere collision shape

use crate::foundation::math::Vec3;

/// Sphere collider stored relative to its entity
///
/// The offset is applied in entity-local space without rotation; the world
/// center is simply `position + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCollider {
    /// Sphere radius, never negative
    pub radius: f32,

    /// Center offset from the entity origin
    pub offset: Vec3,
}

impl SphereCollider {
    /// Create a sphere centered on the entity origin
    pub fn new(radius: f32) -> Self {
        Self::with_offset(radius, Vec3::zeros())
    }

    /// Create a sphere displaced from the entity origin
    pub fn with_offset(radius: f32, offset: Vec3) -> Self {
        Self {
            radius: radius.max(0.0),
            offset,
        }
    }

    /// World-space center for an entity at `position`
    pub fn world_center(&self, position: &Vec3) -> Vec3 {
        position + self.offset
    }
}
