//! Body/collider attachment slot
//!
//! Every entity carries at most one attachment. Which halves are present
//! decides how the world step treats it:
//!
//! | body | collider | behaviour                                  |
//! |------|----------|--------------------------------------------|
//! | yes  | no       | integrated, never collides                 |
//! | no   | yes      | static obstacle: corrected, never impulsed |
//! | yes  | yes      | integrated and fully resolved              |

use super::{PhysicsBody, SphereCollider};
use crate::ecs::PhysicsEntity;

/// Optional body and collider owned by one entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachment {
    /// Linear dynamics, if the entity moves
    pub body: Option<PhysicsBody>,

    /// Collision sphere, if the entity collides
    pub collider: Option<SphereCollider>,
}

impl Attachment {
    /// Attachment with a body and an optional collider
    pub fn dynamic(body: PhysicsBody, collider: Option<SphereCollider>) -> Self {
        Self {
            body: Some(body),
            collider,
        }
    }

    /// Collider-only attachment for static obstacles
    pub fn fixed(collider: SphereCollider) -> Self {
        Self {
            body: None,
            collider: Some(collider),
        }
    }

    /// Whether the world step integrates this attachment
    pub fn is_dynamic(&self) -> bool {
        self.body.is_some()
    }

    /// Whether the world step tests this attachment for contacts
    pub fn is_collidable(&self) -> bool {
        self.collider.is_some()
    }
}

/// Attach a body and optional collider to `entity`
///
/// Overwrites any existing attachment and returns the one it replaced.
pub fn attach<E: PhysicsEntity + ?Sized>(
    entity: &mut E,
    body: PhysicsBody,
    collider: Option<SphereCollider>,
) -> Option<Attachment> {
    entity.set_attachment(Attachment::dynamic(body, collider))
}

/// Attach a collider with no body, making `entity` a static obstacle
///
/// Overwrites any existing attachment and returns the one it replaced.
pub fn attach_static<E: PhysicsEntity + ?Sized>(
    entity: &mut E,
    collider: SphereCollider,
) -> Option<Attachment> {
    entity.set_attachment(Attachment::fixed(collider))
}

/// Remove the attachment from `entity`, returning it
pub fn detach<E: PhysicsEntity + ?Sized>(entity: &mut E) -> Option<Attachment> {
    entity.take_attachment()
}
