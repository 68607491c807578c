//! Scene model: entities, bounding volumes, projectiles, and the per-tick
//! update loop
//!
//! A [`Scene`] owns the asset registries, an entity arena, and at most one
//! projectile. Each tick moves every bounded entity toward the range's
//! attractor point, tests it against the projectile's aim ray, and flips the
//! entity's bounding-volume visual between its normal and alert states based
//! on that result alone.
//!
//! # Key Types
//!
//! - [`Entity`] - mesh + material + transform, with an optional [`BoundingVolume`]
//! - [`Projectile`] - a timed flight state machine over an entity body
//! - [`Scene`] - the arena and update loop
//! - [`SceneCommand`] - the narrow input surface

pub mod bounding;
pub mod command;
pub mod entity;
pub mod projectile;

mod range;

pub use bounding::{BoundingVolume, VisualState};
pub use command::SceneCommand;
pub use entity::{Body, Entity};
pub use projectile::{Projectile, ProjectileConfig};
pub use range::{RangeConfig, Scene};

use thiserror::Error;

/// Errors from scene queries and mutations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// A world-space bounds query reached an entity that never built a
    /// bounding volume
    #[error("entity has no bounding volume")]
    NoBoundingVolume,

    /// An entity's mesh handle no longer resolves in the registry
    #[error("mesh handle is not registered")]
    UnknownMesh,

    /// An entity handle no longer resolves in the scene arena
    #[error("entity handle is not registered")]
    UnknownEntity,
}
