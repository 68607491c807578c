//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics, re-exported from
//! `nalgebra` behind short aliases, plus the scene [`Transform`].

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Position and orientation of an object in the scene.
///
/// The world matrix is the translation composed with the rotation; there is
/// no scale component. Orientation is stored as a unit quaternion, so it
/// stays normalized across rotation composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,

    /// Orientation as a unit quaternion
    pub orientation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            orientation: Quat::identity(),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and orientation
    pub fn from_position_orientation(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Convert to the world (modeling) matrix: translation * rotation
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position) * self.orientation.to_homogeneous()
    }

    /// Rotate about an arbitrary axis by an angle in degrees.
    ///
    /// The incremental rotation is composed on the right, so it applies in
    /// the object's current local frame. The composition order matters:
    /// swapping it would rotate in the world frame instead.
    pub fn rotate(&mut self, angle_degrees: f32, axis: Vec3) {
        let incremental = Quat::from_axis_angle(
            &Unit::new_normalize(axis),
            utils::deg_to_rad(angle_degrees),
        );
        self.orientation = self.orientation * incremental;
    }

    /// Translate along the world axes
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Translate along the object's local axes.
    ///
    /// The offset is rotated by the current orientation before being added,
    /// so the same offset moves the object differently depending on how it
    /// is currently turned.
    pub fn translate_local(&mut self, offset: Vec3) {
        let world_offset = self.orientation * offset;
        self.translate(world_offset);
    }

    /// Apply this transform to a local-space point, producing a world-space
    /// point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.orientation * point + self.position
    }

    /// The world-space direction of the local +Z axis.
    ///
    /// This is the third basis column of the world matrix, the direction a
    /// projectile modeled along +Z flies in.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::z()
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}
