//! Scene entities
//!
//! An entity couples a mesh, a material, and a transform, and can build a
//! bounding volume from its mesh geometry on demand. World-space bounds are
//! derived per query by pushing the local corners through the world matrix.

use crate::assets::{prefabs, MeshRegistry};
use crate::foundation::collections::{MaterialHandle, MeshHandle};
use crate::foundation::math::{Mat4, Transform, Vec3};
use crate::physics::collision::Aabb;

use super::bounding::{BoundingVolume, ALERT_COLOR, NORMAL_COLOR};
use super::SceneError;

/// Shared accessor contract for anything that occupies space in the scene.
///
/// Plain entities and projectiles both implement this, so systems that only
/// care about position and orientation accept either without a subclassing
/// relationship between the two.
pub trait Body {
    /// The body's transform
    fn transform(&self) -> &Transform;

    /// Mutable access to the body's transform
    fn transform_mut(&mut self) -> &mut Transform;

    /// World position shorthand
    fn position(&self) -> Vec3 {
        self.transform().position
    }

    /// The body's world (modeling) matrix
    fn world_matrix(&self) -> Mat4 {
        self.transform().to_matrix()
    }
}

/// A drawable object in the scene.
///
/// The mesh and material are shared resources referenced by handle; the
/// transform is owned. The bounding volume is absent until
/// [`Entity::build_bounds`] derives one from the mesh geometry.
pub struct Entity {
    mesh: MeshHandle,
    material: MaterialHandle,

    /// Position and orientation, mutated freely by input and the update loop
    pub transform: Transform,

    bounds: Option<BoundingVolume>,
}

impl Body for Entity {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

impl Entity {
    /// Create an entity with no bounding volume
    pub fn new(mesh: MeshHandle, material: MaterialHandle, transform: Transform) -> Self {
        Self {
            mesh,
            material,
            transform,
            bounds: None,
        }
    }

    /// The entity's mesh
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// The entity's material
    pub fn material(&self) -> MaterialHandle {
        self.material
    }

    /// Whether a bounding volume has been built
    pub fn has_bounds(&self) -> bool {
        self.bounds.is_some()
    }

    /// The bounding volume, if one has been built
    pub fn bounds(&self) -> Option<&BoundingVolume> {
        self.bounds.as_ref()
    }

    /// Mutable access to the bounding volume, if one has been built
    pub fn bounds_mut(&mut self) -> Option<&mut BoundingVolume> {
        self.bounds.as_mut()
    }

    /// Build the bounding volume from the entity's mesh geometry.
    ///
    /// Scans the mesh's local-space vertex positions for per-axis extremes,
    /// then registers two wireframe visuals sized to exactly enclose the
    /// resulting box: one for the normal state, one for the alert state.
    /// Building again replaces the box and both visuals.
    pub fn build_bounds(&mut self, meshes: &mut MeshRegistry) -> Result<(), SceneError> {
        let mesh = meshes.get(self.mesh).ok_or(SceneError::UnknownMesh)?;
        let positions: Vec<Vec3> = mesh.positions().collect();
        let local = Aabb::from_points(&positions);

        let normal_visual =
            meshes.insert(prefabs::wireframe_box(local.extents(), local.center(), NORMAL_COLOR));
        let alert_visual =
            meshes.insert(prefabs::wireframe_box(local.extents(), local.center(), ALERT_COLOR));

        self.bounds = Some(BoundingVolume::new(local, normal_visual, alert_visual));
        Ok(())
    }

    /// The local-space bounding box
    ///
    /// # Errors
    /// [`SceneError::NoBoundingVolume`] if no volume has been built yet.
    pub fn local_bounds(&self) -> Result<&Aabb, SceneError> {
        self.bounds
            .as_ref()
            .map(BoundingVolume::local)
            .ok_or(SceneError::NoBoundingVolume)
    }

    /// The bounding box corners pushed through the world matrix.
    ///
    /// This transforms the two corner points directly rather than refitting
    /// the box, so under a non-axis-aligned orientation the result is an
    /// approximation that downstream intersection tests still treat as
    /// axis-aligned.
    ///
    /// # Errors
    /// [`SceneError::NoBoundingVolume`] if no volume has been built yet.
    pub fn world_bounds(&self) -> Result<Aabb, SceneError> {
        let local = self.local_bounds()?;
        Ok(Aabb::new(
            self.transform.transform_point(local.min),
            self.transform.transform_point(local.max),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MaterialRegistry;
    use crate::assets::{Material, Mesh, Vertex};
    use approx::assert_relative_eq;

    fn mesh_from_positions(positions: &[[f32; 3]]) -> Mesh {
        Mesh::new(
            positions
                .iter()
                .map(|p| Vertex::new(*p, [0.0, 1.0, 0.0], [0.0, 0.0]))
                .collect(),
            vec![],
        )
    }

    fn test_entity(meshes: &mut MeshRegistry, positions: &[[f32; 3]]) -> Entity {
        let mesh = meshes.insert(mesh_from_positions(positions));
        let material = MaterialRegistry::new().insert(Material::default());
        Entity::new(mesh, material, Transform::identity())
    }

    #[test]
    fn bounds_query_before_build_fails_predictably() {
        let mut meshes = MeshRegistry::new();
        let entity = test_entity(&mut meshes, &[[1.0, 1.0, 1.0]]);

        assert!(!entity.has_bounds());
        assert_eq!(entity.world_bounds(), Err(SceneError::NoBoundingVolume));
        assert_eq!(
            entity.local_bounds().err(),
            Some(SceneError::NoBoundingVolume)
        );
    }

    #[test]
    fn build_bounds_scans_mesh_extremes() {
        let mut meshes = MeshRegistry::new();
        let mut entity = test_entity(
            &mut meshes,
            &[[2.0, 2.0, 2.0], [5.0, 5.0, 5.0], [3.0, 4.0, 2.5]],
        );

        entity.build_bounds(&mut meshes).unwrap();

        let local = entity.local_bounds().unwrap();
        assert_eq!(local.min, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(local.max, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn build_bounds_registers_both_visuals() {
        let mut meshes = MeshRegistry::new();
        let mut entity = test_entity(&mut meshes, &[[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]]);

        let before = meshes.len();
        entity.build_bounds(&mut meshes).unwrap();
        assert_eq!(meshes.len(), before + 2);

        let volume = entity.bounds().unwrap();
        let visual = meshes.get(volume.active_visual()).unwrap();
        let visual_bounds = Aabb::from_points(&visual.positions().collect::<Vec<_>>());
        assert_relative_eq!(visual_bounds.min, Vec3::new(-1.0, -1.0, -1.0), epsilon = 1e-6);
        assert_relative_eq!(visual_bounds.max, Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn identity_transform_leaves_world_bounds_equal_to_local() {
        let mut meshes = MeshRegistry::new();
        let mut entity = test_entity(&mut meshes, &[[-1.0, -2.0, -3.0], [1.0, 2.0, 3.0]]);
        entity.build_bounds(&mut meshes).unwrap();

        let world = entity.world_bounds().unwrap();
        let local = entity.local_bounds().unwrap();
        assert_eq!(world.min, local.min);
        assert_eq!(world.max, local.max);
    }

    #[test]
    fn world_bounds_follow_the_transform() {
        let mut meshes = MeshRegistry::new();
        let mut entity = test_entity(&mut meshes, &[[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]]);
        entity.build_bounds(&mut meshes).unwrap();
        entity.transform.position = Vec3::new(0.0, 0.0, 10.0);

        let world = entity.world_bounds().unwrap();
        assert_relative_eq!(world.min, Vec3::new(-1.0, -1.0, 9.0), epsilon = 1e-6);
        assert_relative_eq!(world.max, Vec3::new(1.0, 1.0, 11.0), epsilon = 1e-6);
    }

    #[test]
    fn ray_from_origin_enters_a_translated_entity_at_its_near_face() {
        use crate::physics::collision::Ray;

        let mut meshes = MeshRegistry::new();
        let mut entity = test_entity(&mut meshes, &[[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]]);
        entity.build_bounds(&mut meshes).unwrap();
        entity.transform.position = Vec3::new(0.0, 0.0, 10.0);

        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let hit = ray
            .intersect_aabb(&entity.world_bounds().unwrap())
            .expect("entity sits on the ray");
        assert_relative_eq!(hit.distance, 9.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point, Vec3::new(0.0, 0.0, 9.0), epsilon = 1e-5);

        let away = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert!(away.intersect_aabb(&entity.world_bounds().unwrap()).is_none());
    }

    #[test]
    fn rebuilding_replaces_derived_state() {
        let mut meshes = MeshRegistry::new();
        let mut entity = test_entity(&mut meshes, &[[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]]);

        entity.build_bounds(&mut meshes).unwrap();
        let first_visual = entity.bounds().unwrap().active_visual();

        entity.build_bounds(&mut meshes).unwrap();
        let second_visual = entity.bounds().unwrap().active_visual();

        assert_ne!(first_visual, second_visual);
    }
}
