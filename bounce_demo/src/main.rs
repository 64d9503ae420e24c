//! Bounce demo
//!
//! Drops a pile of seeded random spheres onto a static obstacle and steps the
//! world headlessly, logging progress. Pass a TOML or RON config path as the
//! first argument to override the defaults.

mod config;
mod scene;

use sphere_physics::foundation::logging;
use sphere_physics::prelude::*;
use thiserror::Error;

use crate::config::DemoConfig;
use crate::scene::BounceScene;

/// Errors that stop the demo before it runs
#[derive(Error, Debug)]
pub enum DemoError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn load_config() -> Result<DemoConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading demo config from {}", path);
            Ok(DemoConfig::load_from_file(&path)?)
        }
        None => {
            log::info!("No config path given; using defaults");
            Ok(DemoConfig::default())
        }
    }
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    let mut scene = BounceScene::new(&config)?;

    let report_every = (config.frames / 10).max(1);
    let mut total_contacts = 0;

    for frame in 0..config.frames {
        let stats = scene.advance(config.frame_time);
        total_contacts += stats.contacts;

        if frame % report_every == 0 {
            log::info!(
                "Frame {}: {} substeps, {} contacts",
                frame,
                stats.substeps,
                stats.contacts
            );
        }
    }

    log::info!(
        "Finished {} frames ({} physics steps, {} contacts)",
        config.frames,
        scene.total_steps(),
        total_contacts
    );

    for object in scene.objects() {
        let speed = object.body().map_or(0.0, |body| body.velocity.norm());
        log::info!(
            "Entity {}: position ({:.3}, {:.3}, {:.3}), speed {:.3}",
            object.id(),
            object.position.x,
            object.position.y,
            object.position.z,
            speed
        );
    }

    Ok(())
}

fn main() {
    logging::init_with_default("info");

    log::info!("Starting bounce demo");

    if let Err(e) = run() {
        log::error!("Bounce demo failed: {}", e);
        std::process::exit(1);
    }
}
