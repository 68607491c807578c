//! Slot-map registries owning shared scene resources

use crate::foundation::collections::{HandleMap, MaterialHandle, MeshHandle};

use super::{Material, Mesh};

/// Owns every mesh in the scene; everything else refers to meshes by
/// [`MeshHandle`]
#[derive(Default)]
pub struct MeshRegistry {
    meshes: HandleMap<MeshHandle, Mesh>,
}

impl MeshRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a mesh, returning its handle
    pub fn insert(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.insert(mesh)
    }

    /// Look up a mesh; `None` if the handle's mesh was removed
    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle)
    }

    /// Remove a mesh, returning it if the handle was live
    pub fn remove(&mut self, handle: MeshHandle) -> Option<Mesh> {
        self.meshes.remove(handle)
    }

    /// Number of live meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the registry holds no meshes
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

/// Owns every material in the scene, addressed by [`MaterialHandle`]
#[derive(Default)]
pub struct MaterialRegistry {
    materials: HandleMap<MaterialHandle, Material>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a material, returning its handle
    pub fn insert(&mut self, material: Material) -> MaterialHandle {
        self.materials.insert(material)
    }

    /// Look up a material; `None` if the handle's material was removed
    pub fn get(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle)
    }

    /// Remove a material, returning it if the handle was live
    pub fn remove(&mut self, handle: MaterialHandle) -> Option<Material> {
        self.materials.remove(handle)
    }

    /// Number of live materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the registry holds no materials
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
