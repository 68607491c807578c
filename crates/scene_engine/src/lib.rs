//! # Scene Engine
//!
//! A small 3D scene library built around bounding-volume collision.
//!
//! ## Features
//!
//! - **Transforms**: position/orientation transforms with local and world
//!   space translation
//! - **Bounding volumes**: per-entity axis-aligned bounding boxes built from
//!   mesh geometry, with debug visuals for hit feedback
//! - **Ray casting**: slab-method ray/AABB intersection for hit detection
//!   and picking
//! - **Projectiles**: a timed flight state machine that tests its forward
//!   ray against a target each tick
//! - **Handle-based assets**: meshes and materials owned by registries,
//!   referenced by stable typed handles
//!
//! Rendering, window management, and asset file parsing are deliberately out
//! of scope: the renderer consumes [`render::FrameDraws`] snapshots, and the
//! mesh registry accepts pre-parsed vertex data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! let mut scene = Scene::new(RangeConfig::default());
//! let mesh = scene.meshes.insert(prefabs::textured_cube(10.0));
//! let material = scene.materials.insert(Material::default());
//! let target = scene.spawn(Entity::new(mesh, material, Transform::from_position(Vec3::new(0.0, 0.0, 30.0))));
//! scene.build_bounds(target).unwrap();
//! scene.apply(SceneCommand::Fire);
//! scene.update(1.0 / 60.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod physics;
pub mod render;
pub mod scene;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{
            prefabs, Material, MaterialRegistry, Mesh, MeshRegistry, TextureHandle, Topology,
            Vertex,
        },
        config::{Config, ConfigError},
        foundation::{
            collections::{EntityHandle, MaterialHandle, MeshHandle},
            math::{Mat4, Quat, Transform, Vec3, Vec4},
            time::Timer,
        },
        physics::collision::{Aabb, Ray, RayHit},
        render::{DebugDraw, DrawCall, FrameDraws},
        scene::{
            Body, BoundingVolume, Entity, Projectile, ProjectileConfig, RangeConfig, Scene,
            SceneCommand, SceneError, VisualState,
        },
    };
}
