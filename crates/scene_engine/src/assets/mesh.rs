//! Mesh representation for 3D models
//!
//! Pure geometry data with no rendering-backend coupling. The renderer
//! decides how to upload and draw these; this module only stores what the
//! scene needs to reason about shape.

use crate::foundation::math::{Vec3, Vec4};

/// 3D vertex data structure for rendering
///
/// The `#[repr(C)]` attribute keeps the memory layout stable for GPU buffer
/// uploads done by the external renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in local space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }

    /// The vertex position as a vector
    pub fn position_vec(&self) -> Vec3 {
        Vec3::new(self.position[0], self.position[1], self.position[2])
    }
}

/// How a mesh's vertices are assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every three indices form a triangle
    TriangleList,

    /// Every two indices form a line segment (debug geometry)
    LineList,
}

/// Geometry for a single drawable object
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex data in local space
    pub vertices: Vec<Vertex>,

    /// Indices into `vertices`, interpreted per `topology`
    pub indices: Vec<u32>,

    /// Primitive assembly mode
    pub topology: Topology,

    /// Flat color for unlit debug meshes; `None` for lit, textured meshes
    /// whose appearance comes from a material
    pub color: Option<Vec4>,
}

impl Mesh {
    /// Create a lit triangle mesh
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            topology: Topology::TriangleList,
            color: None,
        }
    }

    /// Create an unlit line-list mesh with a flat color
    pub fn lines(vertices: Vec<Vertex>, indices: Vec<u32>, color: Vec4) -> Self {
        Self {
            vertices,
            indices,
            topology: Topology::LineList,
            color: Some(color),
        }
    }

    /// Iterate the local-space vertex positions
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(Vertex::position_vec)
    }

    /// Number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
