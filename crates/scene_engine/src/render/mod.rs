//! Renderer boundary types
//!
//! The external renderer never walks the scene graph; each frame it is
//! handed a [`FrameDraws`] snapshot produced by
//! [`Scene::collect_draws`](crate::scene::Scene::collect_draws) and draws
//! exactly what it is told: lit, textured meshes from the opaque list and
//! unlit colored line meshes from the debug list.

use crate::foundation::collections::{MaterialHandle, MeshHandle};
use crate::foundation::math::Mat4;

/// One lit, textured draw
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    /// Mesh to draw
    pub mesh: MeshHandle,
    /// Material to draw it with
    pub material: MaterialHandle,
    /// World (modeling) matrix
    pub world: Mat4,
}

/// One unlit debug draw (bounding-volume wireframes, direction rays)
#[derive(Debug, Clone, Copy)]
pub struct DebugDraw {
    /// Line mesh to draw; its color is baked into the mesh
    pub mesh: MeshHandle,
    /// World (modeling) matrix
    pub world: Mat4,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Default)]
pub struct FrameDraws {
    /// Lit, textured draws
    pub opaque: Vec<DrawCall>,
    /// Unlit overlay draws
    pub debug: Vec<DebugDraw>,
}
