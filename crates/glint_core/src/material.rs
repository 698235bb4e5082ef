//! Surface materials for Phong-style shading.

use glint_math::{Color, Vec3};
use serde::Deserialize;

/// Per-material weights of each light-transport term.
///
/// Channels left out of a scene description default to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Albedo {
    /// Weight of the Lambertian term
    pub diffuse: f32,

    /// Weight of the Phong highlight
    pub specular: f32,

    /// Weight of the mirror-reflected ray
    pub reflection: f32,

    /// Weight of the transmitted (refracted) ray
    pub refraction: f32,
}

impl Albedo {
    /// Create weights for an opaque material (no refraction channel).
    pub const fn new(diffuse: f32, specular: f32, reflection: f32) -> Self {
        Self {
            diffuse,
            specular,
            reflection,
            refraction: 0.0,
        }
    }

    /// Set the refraction weight.
    pub const fn with_refraction(mut self, refraction: f32) -> Self {
        self.refraction = refraction;
        self
    }

    fn is_finite(&self) -> bool {
        [self.diffuse, self.specular, self.reflection, self.refraction]
            .iter()
            .all(|w| w.is_finite())
    }
}

/// A surface material.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base color modulated by the diffuse term (RGB, 0-1)
    pub diffuse_color: Color,

    /// Term weights
    pub albedo: Albedo,

    /// Phong exponent, higher is a tighter highlight
    pub specular_exponent: f32,

    /// Index of refraction, only read when `albedo.refraction > 0`
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Color::ONE,
            albedo: Albedo::new(1.0, 0.0, 0.0),
            specular_exponent: 1.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create an opaque material.
    pub const fn new(diffuse_color: Color, albedo: Albedo, specular_exponent: f32) -> Self {
        Self {
            diffuse_color,
            albedo,
            specular_exponent,
            refractive_index: 1.0,
        }
    }

    /// Make the material transmissive with the given weight and index.
    pub const fn with_refraction(mut self, weight: f32, refractive_index: f32) -> Self {
        self.albedo = self.albedo.with_refraction(weight);
        self.refractive_index = refractive_index;
        self
    }

    /// Check if this material transmits light.
    pub fn is_refractive(&self) -> bool {
        self.albedo.refraction > 0.0
    }

    pub fn ivory() -> Self {
        Self::new(Vec3::new(0.4, 0.4, 0.3), Albedo::new(0.6, 0.3, 0.1), 50.0)
    }

    pub fn glass() -> Self {
        Self::new(Vec3::new(0.6, 0.7, 0.8), Albedo::new(0.0, 0.5, 0.1), 125.0)
            .with_refraction(0.8, 1.5)
    }

    pub fn red_rubber() -> Self {
        Self::new(Vec3::new(0.3, 0.1, 0.1), Albedo::new(0.9, 0.1, 0.0), 10.0)
    }

    pub fn mirror() -> Self {
        Self::new(Vec3::ONE, Albedo::new(0.0, 10.0, 0.8), 1425.0)
    }

    /// Returns the first invalid property, if any.
    pub(crate) fn check(&self) -> Result<(), &'static str> {
        if !self.diffuse_color.is_finite() || !self.albedo.is_finite() {
            return Err("non-finite color or albedo");
        }
        if !(self.specular_exponent > 0.0 && self.specular_exponent.is_finite()) {
            return Err("specular exponent must be positive");
        }
        let index_ok = self.refractive_index >= 1.0 && self.refractive_index.is_finite();
        if self.is_refractive() && !index_ok {
            return Err("refractive index must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(!Material::ivory().is_refractive());
        assert!(!Material::mirror().is_refractive());

        let glass = Material::glass();
        assert!(glass.is_refractive());
        assert_eq!(glass.refractive_index, 1.5);
        assert_eq!(glass.albedo, Albedo::new(0.0, 0.5, 0.1).with_refraction(0.8));
    }

    #[test]
    fn test_absent_channels_default_to_zero() {
        let albedo: Albedo =
            serde_json::from_str(r#"{ "diffuse": 0.9, "specular": 0.1 }"#).unwrap();
        assert_eq!(albedo.reflection, 0.0);
        assert_eq!(albedo.refraction, 0.0);
    }

    #[test]
    fn test_check() {
        assert!(Material::red_rubber().check().is_ok());
        assert!(Material::glass().check().is_ok());

        let mut flat = Material::ivory();
        flat.specular_exponent = 0.0;
        assert!(flat.check().is_err());

        let thin = Material::ivory().with_refraction(0.5, 0.5);
        assert!(thin.check().is_err());

        // Index is ignored for opaque materials
        let mut opaque = Material::ivory();
        opaque.refractive_index = 0.0;
        assert!(opaque.check().is_ok());
    }
}
