//! Per-frame world step
//!
//! The world holds configuration only. Entities are owned by the caller and
//! passed in as a slice on every call; indices reported back are positions in
//! that slice and mean nothing once the call returns.
//!
//! A step runs two phases:
//! 1. **Integration**: every entity with a body, in slice order.
//! 2. **Contacts**: every pair `i < j` of entities with colliders, in
//!    ascending order, detected and resolved immediately.
//!
//! There is a single relaxation pass per step. Chains of three or more
//! overlapping spheres are not fully separated in one call.

use std::path::Path;

use crate::config::{Config, ConfigError, PhysicsConfig};
use crate::ecs::PhysicsEntity;
use crate::foundation::math::Vec3;

use super::contact::WorldSphere;
use super::resolution::{self, ImpulseOutcome};

/// A contact found and resolved during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    /// Index of the first entity in the stepped slice
    pub a: usize,
    /// Index of the second entity in the stepped slice (`a < b`)
    pub b: usize,
    /// Contact normal from `a` towards `b`
    pub normal: Vec3,
    /// Penetration depth before correction
    pub penetration: f32,
    /// Result of the velocity pass
    pub outcome: ImpulseOutcome,
}

/// Summary of one call to [`PhysicsWorld::step`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Entities with a body visited by the integration phase
    pub bodies: usize,
    /// Collider pairs tested for overlap
    pub pairs_tested: usize,
    /// Contacts resolved, in pair order
    pub contacts: Vec<ContactEvent>,
}

impl StepReport {
    /// Number of contacts resolved
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether entities `a` and `b` were in contact (order-insensitive)
    pub fn has_contact(&self, a: usize, b: usize) -> bool {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        self.contacts.iter().any(|c| c.a == a && c.b == b)
    }
}

/// Stateless physics stepper
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a world with the given configuration
    ///
    /// The configuration is used as given; see [`Self::try_new`] to validate.
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    /// Create a world, rejecting configurations that fail validation
    pub fn try_new(config: PhysicsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Load and validate a configuration file (TOML or RON)
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = PhysicsConfig::load_from_file(path)?;
        log::info!("Loaded physics config from {}: {:?}", path.display(), config);
        Self::try_new(config)
    }

    /// Current configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Set restitution, clamped to `[0, 1]`; NaN keeps the current value
    pub fn set_restitution(&mut self, restitution: f32) {
        self.config = self.config.with_restitution(restitution);
    }

    /// Advance `entities` by `dt` seconds
    ///
    /// Bodies ignore a non-positive `dt`; the contact phase still runs.
    pub fn step<E: PhysicsEntity>(&self, entities: &mut [E], dt: f32) -> StepReport {
        let mut report = StepReport {
            bodies: Self::integrate(entities, dt),
            ..StepReport::default()
        };

        self.resolve_contacts(entities, &mut report);

        log::debug!(
            "Physics step dt={:.4}: {} bodies, {} pairs tested, {} contacts",
            dt,
            report.bodies,
            report.pairs_tested,
            report.contact_count()
        );

        report
    }

    fn integrate<E: PhysicsEntity>(entities: &mut [E], dt: f32) -> usize {
        let mut bodies = 0;
        for entity in entities.iter_mut() {
            let (position, slot) = entity.split_mut();
            if let Some(body) = slot.as_mut().and_then(|a| a.body.as_mut()) {
                body.integrate(position, dt);
                bodies += 1;
            }
        }
        bodies
    }

    fn resolve_contacts<E: PhysicsEntity>(&self, entities: &mut [E], report: &mut StepReport) {
        for i in 0..entities.len() {
            if entities[i].collider().is_none() {
                continue;
            }

            for j in (i + 1)..entities.len() {
                let (head, tail) = entities.split_at_mut(j);
                let entity_a = &mut head[i];
                let entity_b = &mut tail[0];

                let (Some(collider_a), Some(collider_b)) =
                    (entity_a.collider().copied(), entity_b.collider().copied())
                else {
                    continue;
                };
                report.pairs_tested += 1;

                let sphere_a = WorldSphere::from_collider(&collider_a, entity_a.position());
                let sphere_b = WorldSphere::from_collider(&collider_b, entity_b.position());

                let Some(contact) = sphere_a.contact(&sphere_b, self.config.degenerate_nudge) else {
                    continue;
                };

                if contact.degenerate {
                    log::debug!("Entities {} and {} share a center; using fixed nudge", i, j);
                }

                let (position_a, slot_a) = entity_a.split_mut();
                let (position_b, slot_b) = entity_b.split_mut();

                resolution::separate(position_a, position_b, &contact);

                let body_a = slot_a.as_mut().and_then(|a| a.body.as_mut());
                let body_b = slot_b.as_mut().and_then(|a| a.body.as_mut());
                let outcome = match (body_a, body_b) {
                    (Some(body_a), Some(body_b)) => resolution::apply_impulse(
                        body_a,
                        body_b,
                        &contact.normal,
                        self.config.restitution,
                    ),
                    _ => ImpulseOutcome::NoBody,
                };

                if outcome == ImpulseOutcome::Immovable {
                    log::debug!("Entities {} and {} are both immovable; skipping impulse", i, j);
                }

                log::trace!(
                    "Contact {}-{}: penetration {:.5}, normal {:?}, {:?}",
                    i,
                    j,
                    contact.penetration,
                    contact.normal,
                    outcome
                );

                report.contacts.push(ContactEvent {
                    a: i,
                    b: j,
                    normal: contact.normal,
                    penetration: contact.penetration,
                    outcome,
                });
            }
        }
    }
}

/// Step `entities` with a default-configured world
pub fn step<E: PhysicsEntity>(entities: &mut [E], dt: f32) -> StepReport {
    PhysicsWorld::default().step(entities, dt)
}
