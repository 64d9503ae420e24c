//! # Sphere Physics
//!
//! A minimal real-time rigid-body core: force accumulation, semi-implicit
//! Euler integration of point masses, and pairwise sphere-sphere collision
//! detection with positional correction and impulse-based response.
//!
//! ## Features
//!
//! - **Point-mass dynamics**: Forces accumulate until the next integration step
//! - **Sphere colliders**: Offset spheres tested pairwise every step
//! - **Impulse response**: Configurable restitution, infinite-mass bodies
//! - **Stateless world**: The caller owns the entity list and passes it each frame
//!
//! ## Quick Start
//!
//! ```rust
//! use sphere_physics::prelude::*;
//!
//! let mut ball = SceneObject::new(Entity::new(0), Vec3::new(0.0, 2.0, 0.0));
//! attach(&mut ball, PhysicsBody::new(1.0), Some(SphereCollider::new(0.5)));
//!
//! let mut floor = SceneObject::new(Entity::new(1), Vec3::zeros());
//! attach_static(&mut floor, SphereCollider::new(1.0));
//!
//! let mut entities = vec![ball, floor];
//! let world = PhysicsWorld::default();
//! for _ in 0..60 {
//!     if let Some(body) = entities[0].body_mut() {
//!         body.apply_force(Vec3::new(0.0, -9.81, 0.0));
//!     }
//!     world.step(&mut entities, 1.0 / 60.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod physics;

pub use config::{Config, ConfigError, ConfigFormat, PhysicsConfig};
pub use physics::{step, ContactEvent, PhysicsWorld, StepReport};

/// Common imports for physics users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PhysicsConfig},
        foundation::{
            math::Vec3,
            time::FixedTimestep,
        },
        ecs::{
            Entity, PhysicsEntity, SceneObject,
            components::{PhysicsBody, SphereCollider, Attachment, attach, attach_static, detach},
        },
        physics::{step, PhysicsWorld, StepReport, ContactEvent},
    };
}
