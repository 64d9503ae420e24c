//! Physics module for integration and collision response
//!
//! Exhaustive pairwise sphere tests with single-pass positional correction
//! and impulse-based velocity response. There is no broad phase.

pub mod contact;
pub mod resolution;
pub mod world;

#[cfg(test)]
mod tests;

pub use contact::{SphereContact, WorldSphere};
pub use resolution::ImpulseOutcome;
pub use world::{step, ContactEvent, PhysicsWorld, StepReport};
