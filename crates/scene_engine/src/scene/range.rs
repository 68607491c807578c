//! The target range: scene state and the per-tick update loop

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::assets::{MaterialRegistry, MeshRegistry};
use crate::foundation::collections::{EntityHandle, HandleMap};
use crate::foundation::math::Vec3;
use crate::render::{DebugDraw, DrawCall, FrameDraws};

use super::bounding::VisualState;
use super::command::SceneCommand;
use super::entity::{Body, Entity};
use super::projectile::Projectile;
use super::SceneError;

/// Tuning for target movement and respawning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Point every bounded entity drifts toward
    pub attractor: Vec3,

    /// Distance a target covers per tick
    pub target_speed: f32,

    /// Left edge of the respawn band
    pub respawn_x_min: f32,

    /// Right edge of the respawn band
    pub respawn_x_max: f32,

    /// Depth a respawned target is placed at
    pub respawn_z: f32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            attractor: Vec3::new(0.0, 0.0, -10.0),
            target_speed: 0.1,
            respawn_x_min: -10.0,
            respawn_x_max: 10.0,
            respawn_z: 22.0,
        }
    }
}

/// The scene: asset registries, the entity arena, and at most one
/// projectile.
///
/// All cross-references go through handles. Update and render code receive
/// the scene explicitly; there is no process-wide state.
pub struct Scene {
    /// Mesh storage; scene setup inserts prefab or loader-produced meshes
    /// directly
    pub meshes: MeshRegistry,

    /// Material storage
    pub materials: MaterialRegistry,

    entities: HandleMap<EntityHandle, Entity>,
    projectile: Option<Projectile>,
    active: Option<EntityHandle>,
    config: RangeConfig,
    rng: StdRng,
}

impl Scene {
    /// Create an empty scene
    pub fn new(config: RangeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an empty scene with a deterministic respawn sequence
    pub fn with_rng_seed(config: RangeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: RangeConfig, rng: StdRng) -> Self {
        Self {
            meshes: MeshRegistry::new(),
            materials: MaterialRegistry::new(),
            entities: HandleMap::with_key(),
            projectile: None,
            active: None,
            config,
            rng,
        }
    }

    /// The range tuning
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Add an entity to the arena. The first entity spawned becomes the
    /// active one.
    pub fn spawn(&mut self, entity: Entity) -> EntityHandle {
        let handle = self.entities.insert(entity);
        if self.active.is_none() {
            self.active = Some(handle);
        }
        handle
    }

    /// Look up an entity
    pub fn entity(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle)
    }

    /// Look up an entity mutably
    pub fn entity_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.entities.get_mut(handle)
    }

    /// Iterate the arena
    pub fn entities(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> {
        self.entities.iter()
    }

    /// Build an entity's bounding volume from its mesh geometry
    ///
    /// # Errors
    /// [`SceneError::UnknownEntity`] for a dangling handle,
    /// [`SceneError::UnknownMesh`] if the entity's mesh was removed.
    pub fn build_bounds(&mut self, handle: EntityHandle) -> Result<(), SceneError> {
        let entity = self
            .entities
            .get_mut(handle)
            .ok_or(SceneError::UnknownEntity)?;
        entity.build_bounds(&mut self.meshes)
    }

    /// Install the scene's projectile
    pub fn set_projectile(&mut self, projectile: Projectile) {
        self.projectile = Some(projectile);
    }

    /// The projectile, if one is installed
    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    /// Mutable access to the projectile
    pub fn projectile_mut(&mut self) -> Option<&mut Projectile> {
        self.projectile.as_mut()
    }

    /// Apply an input command
    pub fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Fire => {
                if let Some(projectile) = self.projectile.as_mut() {
                    projectile.launch();
                }
            }
            SceneCommand::Rotate {
                angle_degrees,
                axis,
            } => {
                if let Some(entity) = self.active_entity_mut() {
                    entity.transform.rotate(angle_degrees, axis);
                }
            }
            SceneCommand::ResetOrientation => {
                if let Some(entity) = self.active_entity_mut() {
                    entity.transform.orientation = crate::foundation::math::Quat::identity();
                }
            }
            SceneCommand::Translate(offset) => {
                if let Some(entity) = self.active_entity_mut() {
                    entity.transform.translate(offset);
                }
            }
            SceneCommand::TranslateLocal(offset) => {
                if let Some(entity) = self.active_entity_mut() {
                    entity.transform.translate_local(offset);
                }
            }
            SceneCommand::NextEntity => self.cycle_active(1),
            SceneCommand::PrevEntity => self.cycle_active(-1),
        }
    }

    fn active_entity_mut(&mut self) -> Option<&mut Entity> {
        self.active.and_then(|handle| self.entities.get_mut(handle))
    }

    fn cycle_active(&mut self, step: isize) {
        let keys: Vec<EntityHandle> = self.entities.keys().collect();
        if keys.is_empty() {
            self.active = None;
            return;
        }

        let current = self
            .active
            .and_then(|active| keys.iter().position(|&k| k == active))
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(keys.len() as isize) as usize;
        self.active = Some(keys[next]);
    }

    /// Advance the scene by one tick.
    ///
    /// For every entity with a bounding volume, in order: move it toward
    /// the attractor, then test it against the projectile's aim ray using
    /// the position it now has. A hit shows the alert visual; a miss shows
    /// the normal one, re-evaluated every tick. A hit target whose near
    /// face the projectile has already passed is moved back out to the
    /// respawn band at a random X.
    ///
    /// The projectile's own per-tick target query and flight state machine
    /// run after the sweep.
    pub fn update(&mut self, delta_time: f32) {
        for (handle, entity) in &mut self.entities {
            if !entity.has_bounds() {
                continue;
            }

            // Move first: the hit test below must see this tick's position.
            let to_attractor = self.config.attractor - entity.transform.position;
            if to_attractor.magnitude() > f32::EPSILON {
                entity
                    .transform
                    .translate(to_attractor.normalize() * self.config.target_speed);
            }

            let Some(projectile) = &self.projectile else {
                continue;
            };
            let Ok(bounds) = entity.world_bounds() else {
                continue;
            };

            match projectile.aim_ray().intersect_aabb(&bounds) {
                Some(hit) => {
                    if let Some(volume) = entity.bounds_mut() {
                        volume.set_state(VisualState::Alert);
                    }
                    trace!(
                        "projectile ray hits entity {handle:?} at distance {:.3}",
                        hit.distance
                    );

                    // Heuristic, not geometry: the projectile flying past the
                    // target's near face is taken to mean it struck home, and
                    // the target goes back out to the respawn band.
                    if projectile.position().z > bounds.min.z {
                        let x = self
                            .rng
                            .gen_range(self.config.respawn_x_min..=self.config.respawn_x_max);
                        entity.transform.position =
                            Vec3::new(x, 0.0, self.config.respawn_z);
                        debug!("entity {handle:?} hit, respawned at x {x:.2}");
                    }
                }
                None => {
                    if let Some(volume) = entity.bounds_mut() {
                        volume.set_state(VisualState::Normal);
                    }
                }
            }
        }

        if let Some(projectile) = self.projectile.as_mut() {
            // The projectile checks its own target every tick, in flight or
            // not, before it moves.
            if let Some(target) = projectile.target().and_then(|t| self.entities.get(t)) {
                if let Ok(bounds) = target.world_bounds() {
                    let hit = projectile.aim_ray().intersect_aabb(&bounds);
                    trace!("projectile target intersection: {}", hit.is_some());
                }
            }

            projectile.tick(delta_time);
        }
    }

    /// Snapshot everything the renderer draws this frame: every entity with
    /// its material, the active bounding-volume wireframe of every bounded
    /// entity, and the projectile's body and direction ray.
    pub fn collect_draws(&self) -> FrameDraws {
        let mut frame = FrameDraws::default();

        for entity in self.entities.values() {
            let world = entity.world_matrix();
            frame.opaque.push(DrawCall {
                mesh: entity.mesh(),
                material: entity.material(),
                world,
            });
            if let Some(volume) = entity.bounds() {
                frame.debug.push(DebugDraw {
                    mesh: volume.active_visual(),
                    world,
                });
            }
        }

        if let Some(projectile) = &self.projectile {
            let world = projectile.world_matrix();
            frame.opaque.push(DrawCall {
                mesh: projectile.body().mesh(),
                material: projectile.body().material(),
                world,
            });
            frame.debug.push(DebugDraw {
                mesh: projectile.direction_ray(),
                world,
            });
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{prefabs, Material};
    use crate::foundation::math::{Transform, Vec4};
    use approx::assert_relative_eq;

    /// A scene with one cube target on the projectile's boresight.
    fn range_scene(config: RangeConfig, target_position: Vec3) -> (Scene, EntityHandle) {
        let mut scene = Scene::with_rng_seed(config, 7);

        let cube = scene.meshes.insert(prefabs::textured_cube(10.0));
        let material = scene.materials.insert(Material::default());
        let target = scene.spawn(Entity::new(
            cube,
            material,
            Transform::from_position(target_position),
        ));
        scene.build_bounds(target).unwrap();

        let arrow_mesh = scene.meshes.insert(prefabs::textured_cube(0.5));
        let ray_mesh = scene.meshes.insert(prefabs::line(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 40.0),
            Vec4::new(1.0, 1.0, 0.0, 1.0),
        ));
        let body = Entity::new(arrow_mesh, material, Transform::identity());
        let mut projectile =
            Projectile::new(body, ray_mesh, crate::scene::ProjectileConfig::default());
        projectile.set_target(target);
        scene.set_projectile(projectile);

        (scene, target)
    }

    fn visual_state(scene: &Scene, handle: EntityHandle) -> VisualState {
        scene.entity(handle).unwrap().bounds().unwrap().state()
    }

    #[test]
    fn hit_and_miss_toggle_the_visual_every_tick() {
        let config = RangeConfig {
            target_speed: 0.0,
            ..Default::default()
        };
        let (mut scene, target) = range_scene(config, Vec3::new(0.0, 0.0, 30.0));

        scene.update(0.1);
        assert_eq!(visual_state(&scene, target), VisualState::Alert);

        // Swing the projectile off the target: the state is re-evaluated,
        // not latched.
        scene
            .projectile_mut()
            .unwrap()
            .transform_mut()
            .rotate(90.0, Vec3::new(0.0, 1.0, 0.0));
        scene.update(0.1);
        assert_eq!(visual_state(&scene, target), VisualState::Normal);

        // And back on again.
        scene
            .projectile_mut()
            .unwrap()
            .transform_mut()
            .rotate(-90.0, Vec3::new(0.0, 1.0, 0.0));
        scene.update(0.1);
        assert_eq!(visual_state(&scene, target), VisualState::Alert);
    }

    #[test]
    fn targets_drift_toward_the_attractor() {
        let config = RangeConfig {
            target_speed: 0.5,
            ..Default::default()
        };
        let (mut scene, target) = range_scene(config, Vec3::new(0.0, 0.0, 30.0));

        let before = scene.entity(target).unwrap().transform.position;
        scene.update(0.1);
        let after = scene.entity(target).unwrap().transform.position;

        // Attractor sits at negative Z, so Z must shrink by the step size.
        assert_relative_eq!(after.z, before.z - 0.5, epsilon = 1e-5);
        assert_eq!(after.x, 0.0);
    }

    #[test]
    fn entities_without_bounds_are_left_alone() {
        let config = RangeConfig {
            target_speed: 1.0,
            ..Default::default()
        };
        let (mut scene, _) = range_scene(config, Vec3::new(0.0, 0.0, 30.0));

        let cube = scene.meshes.insert(prefabs::textured_cube(1.0));
        let material = scene.materials.insert(Material::default());
        let bystander = scene.spawn(Entity::new(
            cube,
            material,
            Transform::from_position(Vec3::new(5.0, 0.0, 5.0)),
        ));

        scene.update(0.1);
        assert_eq!(
            scene.entity(bystander).unwrap().transform.position,
            Vec3::new(5.0, 0.0, 5.0)
        );
    }

    #[test]
    fn passed_through_target_respawns_in_the_band() {
        let config = RangeConfig {
            target_speed: 0.0,
            ..Default::default()
        };
        // Cube spans z in [0, 10]; the projectile rests inside the slab at
        // z = -10 < 0, so no respawn until it flies past the near face.
        let (mut scene, target) = range_scene(config.clone(), Vec3::new(0.0, 0.0, 5.0));

        scene.update(0.1);
        assert_eq!(visual_state(&scene, target), VisualState::Alert);
        assert_eq!(
            scene.entity(target).unwrap().transform.position,
            Vec3::new(0.0, 0.0, 5.0)
        );

        // Teleport the projectile beyond the target's near face and tick.
        scene
            .projectile_mut()
            .unwrap()
            .transform_mut()
            .position = Vec3::new(0.0, 0.0, 2.0);
        scene.update(0.1);

        let position = scene.entity(target).unwrap().transform.position;
        assert_eq!(position.z, config.respawn_z);
        assert_eq!(position.y, 0.0);
        assert!(position.x >= config.respawn_x_min && position.x <= config.respawn_x_max);
    }

    #[test]
    fn respawn_sequence_is_deterministic_for_a_seed() {
        let run = || {
            let config = RangeConfig {
                target_speed: 0.0,
                ..Default::default()
            };
            let (mut scene, target) = range_scene(config, Vec3::new(0.0, 0.0, 5.0));
            scene
                .projectile_mut()
                .unwrap()
                .transform_mut()
                .position = Vec3::new(0.0, 0.0, 2.0);
            scene.update(0.1);
            scene.entity(target).unwrap().transform.position.x
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn fire_command_launches_the_projectile() {
        let (mut scene, _) = range_scene(RangeConfig::default(), Vec3::new(0.0, 0.0, 30.0));
        assert!(!scene.projectile().unwrap().is_moving());

        scene.apply(SceneCommand::Fire);
        assert!(scene.projectile().unwrap().is_moving());
    }

    #[test]
    fn manipulation_commands_reach_the_active_entity() {
        let (mut scene, target) = range_scene(RangeConfig::default(), Vec3::new(0.0, 0.0, 30.0));

        scene.apply(SceneCommand::Translate(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(
            scene.entity(target).unwrap().transform.position,
            Vec3::new(1.0, 0.0, 30.0)
        );

        scene.apply(SceneCommand::Rotate {
            angle_degrees: 90.0,
            axis: Vec3::new(0.0, 1.0, 0.0),
        });
        scene.apply(SceneCommand::TranslateLocal(Vec3::new(0.0, 0.0, 1.0)));
        let position = scene.entity(target).unwrap().transform.position;
        assert_relative_eq!(position, Vec3::new(2.0, 0.0, 30.0), epsilon = 1e-5);

        scene.apply(SceneCommand::ResetOrientation);
        assert_eq!(
            scene.entity(target).unwrap().transform.orientation,
            crate::foundation::math::Quat::identity()
        );
    }

    #[test]
    fn draw_collection_includes_bodies_and_debug_overlays() {
        let (scene, _) = range_scene(RangeConfig::default(), Vec3::new(0.0, 0.0, 30.0));
        let frame = scene.collect_draws();

        // Target plus projectile body.
        assert_eq!(frame.opaque.len(), 2);
        // Target's bounding wireframe plus the direction ray.
        assert_eq!(frame.debug.len(), 2);
    }

    #[test]
    fn draw_collection_reflects_the_active_visual() {
        let config = RangeConfig {
            target_speed: 0.0,
            ..Default::default()
        };
        let (mut scene, target) = range_scene(config, Vec3::new(0.0, 0.0, 30.0));

        scene.update(0.1);
        assert_eq!(visual_state(&scene, target), VisualState::Alert);

        let frame = scene.collect_draws();
        let entity = scene.entity(target).unwrap();
        let expected = entity.bounds().unwrap().active_visual();
        assert!(frame.debug.iter().any(|d| d.mesh == expected));
    }
}
