//! Surface appearance parameters
//!
//! Blinn-Phong style material data consumed by the external renderer. The
//! texture itself is loaded elsewhere; materials hold an opaque id for it.

use crate::foundation::math::{Vec3, Vec4};

/// Opaque id of a texture owned by the external texture loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Blinn-Phong material parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Multiplied with the sampled texture color
    pub tint: Vec4,

    /// Specular highlight color
    pub specular: Vec3,

    /// Specular exponent
    pub shininess: f32,

    /// Self-illumination color
    pub emissive: Vec3,

    /// Texture sampled for the base color, if any
    pub texture: Option<TextureHandle>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            tint: Vec4::new(1.0, 1.0, 1.0, 1.0),
            specular: Vec3::zeros(),
            shininess: 1.0,
            emissive: Vec3::zeros(),
            texture: None,
        }
    }
}

impl Material {
    /// Create a material sampling the given texture with default lighting
    /// parameters
    pub fn textured(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            ..Default::default()
        }
    }

    /// Builder pattern: set the specular color
    pub fn with_specular(mut self, specular: Vec3) -> Self {
        self.specular = specular;
        self
    }

    /// Builder pattern: set the specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Builder pattern: set the emissive color
    pub fn with_emissive(mut self, emissive: Vec3) -> Self {
        self.emissive = emissive;
        self
    }
}
