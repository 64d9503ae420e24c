//! Sphere-sphere contact detection
//!
//! Spheres are tested in world space. Colliders store their center relative
//! to the owning entity; [`WorldSphere::from_collider`] applies the offset.

use crate::ecs::components::SphereCollider;
use crate::foundation::math::{vector, Vec3};

/// A sphere positioned in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

/// Overlap between two spheres, oriented from the first towards the second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereContact {
    /// Direction along which the spheres are pushed apart
    ///
    /// Unit length except for coincident centers, where it is the configured
    /// nudge on every axis.
    pub normal: Vec3,
    /// Sum of radii minus center distance, always positive
    pub penetration: f32,
    /// Center distance before any correction
    pub distance: f32,
    /// Whether the centers coincided and the nudge was used
    pub degenerate: bool,
}

impl WorldSphere {
    /// Creates a new world sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Place `collider` on an entity at `position`
    pub fn from_collider(collider: &SphereCollider, position: &Vec3) -> Self {
        Self::new(collider.world_center(position), collider.radius)
    }

    /// Contact from this sphere towards `other`, or `None` if they do not overlap
    ///
    /// Overlap is strict: touching spheres (distance equal to the sum of
    /// radii) produce no contact.
    ///
    /// Coincident centers have no direction, so every component of the
    /// center offset is replaced by `nudge`. The distance stays zero, so the
    /// normal is the nudged offset itself rather than a unit vector.
    #[allow(clippy::float_cmp)]
    pub fn contact(&self, other: &Self, nudge: f32) -> Option<SphereContact> {
        let mut delta = vector::sub(&other.center, &self.center);
        let distance = vector::length(&delta);

        let degenerate = distance == 0.0;
        if degenerate {
            delta = vector::splat(nudge);
        }

        let min_distance = self.radius + other.radius;
        if distance >= min_distance {
            return None;
        }

        let divisor = if degenerate { 1.0 } else { distance };

        Some(SphereContact {
            normal: vector::scale(&delta, 1.0 / divisor),
            penetration: min_distance - distance,
            distance,
            degenerate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NUDGE: f32 = 0.001;

    #[test]
    fn test_separated_spheres() {
        let a = WorldSphere::new(Vec3::zeros(), 1.0);
        let b = WorldSphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0);

        assert!(a.contact(&b, NUDGE).is_none());
    }

    #[test]
    fn test_touching_spheres_do_not_collide() {
        let a = WorldSphere::new(Vec3::zeros(), 1.0);
        let b = WorldSphere::new(Vec3::new(0.0, 2.0, 0.0), 1.0);

        assert!(a.contact(&b, NUDGE).is_none());
    }

    #[test]
    fn test_overlapping_spheres() {
        let a = WorldSphere::new(Vec3::zeros(), 1.0);
        let b = WorldSphere::new(Vec3::new(0.0, 0.0, 1.5), 1.0);

        let contact = a.contact(&b, NUDGE).unwrap();

        assert_relative_eq!(contact.normal, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
        assert_eq!(contact.penetration, 0.5);
        assert_eq!(contact.distance, 1.5);
        assert!(!contact.degenerate);
    }

    #[test]
    fn test_normal_points_from_first_to_second() {
        let a = WorldSphere::new(Vec3::new(1.0, 1.0, 0.0), 1.0);
        let b = WorldSphere::new(Vec3::zeros(), 1.0);

        let contact = a.contact(&b, NUDGE).unwrap();
        let expected = Vec3::new(-1.0, -1.0, 0.0).normalize();

        assert_relative_eq!(contact.normal, expected, epsilon = 1e-6);
        assert_relative_eq!(contact.penetration, 2.0 - 2.0_f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_coincident_centers_use_nudge() {
        let a = WorldSphere::new(Vec3::new(2.0, 2.0, 2.0), 0.5);
        let b = WorldSphere::new(Vec3::new(2.0, 2.0, 2.0), 0.25);

        let contact = a.contact(&b, NUDGE).unwrap();

        assert!(contact.degenerate);
        assert_eq!(contact.normal, Vec3::new(NUDGE, NUDGE, NUDGE));
        assert_eq!(contact.penetration, 0.75);
        assert_eq!(contact.distance, 0.0);
    }

    #[test]
    fn test_coincident_points_without_radius() {
        let a = WorldSphere::new(Vec3::zeros(), 0.0);
        let b = WorldSphere::new(Vec3::zeros(), 0.0);

        assert!(a.contact(&b, NUDGE).is_none());
    }

    #[test]
    fn test_from_collider_applies_offset() {
        let collider = SphereCollider::with_offset(2.0, Vec3::new(0.0, 1.0, 0.0));
        let sphere = WorldSphere::from_collider(&collider, &Vec3::new(5.0, 0.0, 0.0));

        assert_eq!(sphere.center, Vec3::new(5.0, 1.0, 0.0));
        assert_eq!(sphere.radius, 2.0);
    }
}
