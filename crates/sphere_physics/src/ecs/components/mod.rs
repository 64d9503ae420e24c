//! Physics components
//!
//! Data attached to entities and read or mutated by the world step

pub mod physics_body;
pub mod sphere_collider;
pub mod attachment;

pub use physics_body::PhysicsBody;
pub use sphere_collider::SphereCollider;
pub use attachment::{Attachment, attach, attach_static, detach};
