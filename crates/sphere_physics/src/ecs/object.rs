//! Entity capability contract used by the world step
//!
//! The physics core never owns entities. Anything that exposes a mutable
//! position and an attachment slot can be stepped, whether it is the
//! [`SceneObject`] below or a node in some external scene graph.

use super::components::{Attachment, PhysicsBody, SphereCollider};
use super::Entity;
use crate::foundation::math::Vec3;

/// Minimal view of an entity required by [`PhysicsWorld::step`](crate::physics::PhysicsWorld::step)
pub trait PhysicsEntity {
    /// World-space position of the entity origin
    fn position(&self) -> &Vec3;

    /// Current attachment, if any
    fn attachment(&self) -> Option<&Attachment>;

    /// Mutable position and attachment slot, borrowed together
    fn split_mut(&mut self) -> (&mut Vec3, &mut Option<Attachment>);

    /// Mutable world-space position
    fn position_mut(&mut self) -> &mut Vec3 {
        self.split_mut().0
    }

    /// Mutable attachment, if any
    fn attachment_mut(&mut self) -> Option<&mut Attachment> {
        self.split_mut().1.as_mut()
    }

    /// Replace the attachment, returning the previous one
    fn set_attachment(&mut self, attachment: Attachment) -> Option<Attachment> {
        self.split_mut().1.replace(attachment)
    }

    /// Remove and return the attachment
    fn take_attachment(&mut self) -> Option<Attachment> {
        self.split_mut().1.take()
    }

    /// Attached body, if any
    fn body(&self) -> Option<&PhysicsBody> {
        self.attachment().and_then(|a| a.body.as_ref())
    }

    /// Mutable attached body, if any
    fn body_mut(&mut self) -> Option<&mut PhysicsBody> {
        self.attachment_mut().and_then(|a| a.body.as_mut())
    }

    /// Attached collider, if any
    fn collider(&self) -> Option<&SphereCollider> {
        self.attachment().and_then(|a| a.collider.as_ref())
    }
}

/// Plain entity: an identifier, a position and an attachment slot
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    id: Entity,

    /// World-space position of the entity origin
    pub position: Vec3,

    /// Physics attachment, if any
    pub attachment: Option<Attachment>,
}

impl SceneObject {
    /// Create an object with no attachment
    pub fn new(id: Entity, position: Vec3) -> Self {
        Self {
            id,
            position,
            attachment: None,
        }
    }

    /// Builder: set the attachment
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Entity identifier
    pub fn id(&self) -> Entity {
        self.id
    }
}

impl PhysicsEntity for SceneObject {
    fn position(&self) -> &Vec3 {
        &self.position
    }

    fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    fn split_mut(&mut self) -> (&mut Vec3, &mut Option<Attachment>) {
        (&mut self.position, &mut self.attachment)
    }
}
