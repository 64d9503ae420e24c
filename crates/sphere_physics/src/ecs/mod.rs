//! Entity and component types consumed by the physics world
//!
//! Entities here are deliberately thin: the physics step only needs a mutable
//! position and an optional body/collider attachment per entity.

pub mod entity;
pub mod object;
pub mod components;

pub use entity::Entity;
pub use object::{PhysicsEntity, SceneObject};
