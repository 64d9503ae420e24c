//! Math utilities and types
//!
//! Provides the vector type used by bodies, colliders and the world step.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Component-wise vector helpers
///
/// Thin free functions over [`Vec3`] for call sites that read better as
/// plain arithmetic than as operator chains.
pub mod vector {
    use super::Vec3;

    /// Sum of two vectors
    pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
        a + b
    }

    /// Difference `a - b`
    pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
        a - b
    }

    /// Multiply every component by `factor`
    pub fn scale(v: &Vec3, factor: f32) -> Vec3 {
        v * factor
    }

    /// Euclidean length
    pub fn length(v: &Vec3) -> f32 {
        v.magnitude()
    }

    /// Dot product
    pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
        a.dot(b)
    }

    /// Vector with the same value in every component
    pub fn splat(value: f32) -> Vec3 {
        Vec3::new(value, value, value)
    }
}
