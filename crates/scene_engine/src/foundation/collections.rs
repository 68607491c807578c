//! Specialized collection types
//!
//! Scene resources live in slot maps and are addressed by stable typed
//! handles, so nothing outside a registry holds a direct reference to a
//! mesh, material, or entity. A handle whose resource has been removed
//! simply fails to resolve.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a mesh owned by a [`MeshRegistry`](crate::assets::MeshRegistry)
    pub struct MeshHandle;

    /// Stable handle to a material owned by a [`MaterialRegistry`](crate::assets::MaterialRegistry)
    pub struct MaterialHandle;

    /// Stable handle to an entity owned by a [`Scene`](crate::scene::Scene)
    pub struct EntityHandle;
}

/// Handle-based map using a slot map for stable references
pub type HandleMap<K, V> = SlotMap<K, V>;
