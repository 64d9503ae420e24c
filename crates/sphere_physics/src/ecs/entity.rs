//! Scene object identifiers

use std::fmt;

/// Caller-assigned identifier for a scene object
///
/// The world never reads it; contacts are reported by slice index. It exists
/// so drivers can tell their objects apart in logs and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Wrap a raw id
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Raw id
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl From<u32> for Entity {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Entity::new(7).to_string(), "#7");
    }

    #[test]
    fn test_from_raw_id() {
        let entity: Entity = 3.into();
        assert_eq!(entity.id(), 3);
        assert_eq!(entity, Entity::new(3));
    }
}
