//! Target range demo application
//!
//! Runs the scene headless: a row of cube targets drifts toward the launch
//! point while an arrow is fired at them over and over. Each frame the
//! update loop moves the targets, tests them against the arrow's aim ray,
//! and flips their bounding-volume visuals; this driver stands in for the
//! windowed client and reports what the renderer would draw through the
//! logging stack.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use scene_engine::foundation::logging;
use scene_engine::prelude::*;

/// Everything tunable about a demo run
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppConfig {
    /// Target movement and respawn tuning
    range: RangeConfig,

    /// Arrow flight tuning
    projectile: ProjectileConfig,

    /// Frames to simulate
    frames: u32,

    /// Seconds advanced per frame
    timestep: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            range: RangeConfig::default(),
            projectile: ProjectileConfig::default(),
            frames: 600,
            timestep: 1.0 / 60.0,
        }
    }
}

impl Config for AppConfig {}

struct RangeApp {
    scene: Scene,
    timer: Timer,
    frames: u32,
    timestep: f32,
}

impl RangeApp {
    /// Build the demo scene: three bounded cube targets out at the respawn
    /// depth, plus the arrow with its direction ray.
    fn new(config: AppConfig) -> Result<Self, SceneError> {
        let mut scene = Scene::new(config.range);

        // Materials standing in for the textures the real client loads;
        // the texture ids are minted by the external loader.
        let target_material = scene.materials.insert(
            Material::textured(TextureHandle(0))
                .with_specular(Vec3::new(0.3, 0.3, 0.3))
                .with_shininess(8.0),
        );
        let arrow_material = scene.materials.insert(
            Material::textured(TextureHandle(1))
                .with_specular(Vec3::new(1.0, 1.0, 1.0))
                .with_shininess(255.0)
                .with_emissive(Vec3::new(0.1, 0.1, 0.1)),
        );

        let cube = scene.meshes.insert(prefabs::textured_cube(10.0));
        let mut first_target = None;
        for i in 0..3 {
            let x = 10.0 * i as f32 - 15.0;
            let target = scene.spawn(Entity::new(
                cube,
                target_material,
                Transform::from_position(Vec3::new(x, 0.0, 22.0)),
            ));
            scene.build_bounds(target)?;
            first_target.get_or_insert(target);
        }

        let arrow_mesh = scene.meshes.insert(prefabs::textured_cube(0.5));
        let ray_mesh = scene.meshes.insert(prefabs::line(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 40.0),
            Vec4::new(1.0, 1.0, 0.0, 1.0),
        ));
        let body = Entity::new(arrow_mesh, arrow_material, Transform::identity());
        let mut arrow = Projectile::new(body, ray_mesh, config.projectile);
        if let Some(target) = first_target {
            arrow.set_target(target);
        }
        scene.set_projectile(arrow);

        Ok(Self {
            scene,
            timer: Timer::new(),
            frames: config.frames,
            timestep: config.timestep,
        })
    }

    /// Step the simulation, re-firing whenever the arrow returns to idle.
    fn run(&mut self) {
        let mut alert_frames = 0u32;

        self.scene.apply(SceneCommand::Fire);

        for frame in 0..self.frames {
            self.timer.update();
            self.scene.update(self.timestep);

            let alerts = self
                .scene
                .entities()
                .filter(|(_, entity)| {
                    entity
                        .bounds()
                        .is_some_and(|volume| volume.state() == VisualState::Alert)
                })
                .count();
            if alerts > 0 {
                alert_frames += 1;
            }

            // What the renderer would consume this frame.
            let draws = self.scene.collect_draws();
            debug!(
                "frame {frame}: {} opaque draws, {} debug draws, {alerts} targets alert",
                draws.opaque.len(),
                draws.debug.len()
            );

            let idle = self
                .scene
                .projectile()
                .is_some_and(|arrow| !arrow.is_moving());
            if idle {
                self.scene.apply(SceneCommand::Fire);
            }
        }

        info!(
            "simulated {} frames in {:.2}s ({:.0} fps), targets alert on {alert_frames} frames",
            self.frames,
            self.timer.total_time(),
            self.timer.average_fps()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading configuration from {path}");
            AppConfig::load_from_file(&path)?
        }
        None => AppConfig::default(),
    };

    let mut app = RangeApp::new(config)?;
    app.run();
    Ok(())
}
