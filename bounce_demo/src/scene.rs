//! Sphere pile scene: dynamic balls dropped onto a static obstacle

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sphere_physics::prelude::*;

use crate::config::DemoConfig;
use crate::DemoError;

/// Per-frame simulation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Physics steps run this frame
    pub substeps: u32,
    /// Contacts resolved across all substeps
    pub contacts: usize,
}

/// Caller-owned entity list plus the stateless world that steps it
pub struct BounceScene {
    objects: Vec<SceneObject>,
    world: PhysicsWorld,
    timestep: FixedTimestep,
    gravity: Vec3,
}

impl BounceScene {
    /// Build the scene described by `config`
    pub fn new(config: &DemoConfig) -> Result<Self, DemoError> {
        config.validate()?;
        let world = PhysicsWorld::try_new(config.physics)?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let objects = Self::spawn(config, &mut rng);
        log::info!(
            "Spawned {} spheres over a static obstacle of radius {}",
            config.sphere_count,
            config.obstacle_radius
        );

        Ok(Self {
            objects,
            world,
            timestep: FixedTimestep::new(config.fixed_step),
            gravity: config.gravity,
        })
    }

    fn spawn(config: &DemoConfig, rng: &mut StdRng) -> Vec<SceneObject> {
        let mut objects = Vec::with_capacity(config.sphere_count + 1);

        let obstacle = SceneObject::new(Entity::new(0), Vec3::zeros())
            .with_attachment(Attachment::fixed(SphereCollider::new(config.obstacle_radius)));
        objects.push(obstacle);

        let (min_radius, max_radius) = config.radius_range;
        let extent = config.spawn_extent;

        for index in 0..config.sphere_count {
            let radius = if max_radius > min_radius {
                rng.gen_range(min_radius..max_radius)
            } else {
                min_radius
            };
            let (x, z) = if extent > 0.0 {
                (rng.gen_range(-extent..extent), rng.gen_range(-extent..extent))
            } else {
                (0.0, 0.0)
            };
            #[allow(clippy::cast_precision_loss)]
            let y = config.obstacle_radius + config.spawn_height + index as f32 * 2.0 * max_radius;

            // Mass grows with volume so larger spheres push smaller ones around
            let mass = radius * radius * radius;

            let id = u32::try_from(index + 1).unwrap_or(u32::MAX);
            let mut object = SceneObject::new(id.into(), Vec3::new(x, y, z));
            attach(&mut object, PhysicsBody::new(mass), Some(SphereCollider::new(radius)));
            objects.push(object);
        }

        objects
    }

    /// Feed one frame of wall-clock time through the fixed-step loop
    pub fn advance(&mut self, frame_time: f32) -> FrameStats {
        let substeps = self.timestep.advance(frame_time);
        let dt = self.timestep.step();
        let mut stats = FrameStats { substeps, contacts: 0 };

        for _ in 0..substeps {
            self.apply_gravity();
            let report = self.world.step(&mut self.objects, dt);
            stats.contacts += report.contact_count();
        }

        stats
    }

    fn apply_gravity(&mut self) {
        for object in &mut self.objects {
            if let Some(body) = object.body_mut() {
                if !body.is_static() {
                    let weight = self.gravity * body.mass;
                    body.apply_force(weight);
                }
            }
        }
    }

    /// All objects; index 0 is the static obstacle
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Total fixed steps run so far
    pub fn total_steps(&self) -> u64 {
        self.timestep.total_steps()
    }
}
