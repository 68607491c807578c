//! The scene's input surface
//!
//! The windowing layer polls devices and translates them into these
//! commands; the scene knows nothing about keys or axes. Manipulation
//! commands act on the scene's active entity, which the command stream can
//! cycle through the arena.

use crate::foundation::math::Vec3;

/// A discrete command applied to the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Launch the projectile
    Fire,

    /// Rotate the active entity about an axis, in degrees
    Rotate {
        /// Rotation amount in degrees
        angle_degrees: f32,
        /// Rotation axis in the entity's local frame
        axis: Vec3,
    },

    /// Reset the active entity's orientation to identity
    ResetOrientation,

    /// Translate the active entity along the world axes
    Translate(Vec3),

    /// Translate the active entity along its local axes
    TranslateLocal(Vec3),

    /// Make the next entity in the arena active
    NextEntity,

    /// Make the previous entity in the arena active
    PrevEntity,
}
