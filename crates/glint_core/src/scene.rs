//! Scene description: primitives and point lights.
//!
//! A scene is built once before rendering and only read afterwards, so it
//! can be shared across render threads without locking.

use glint_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::material::Material;
use crate::primitive::{Checkerboard, Primitive, Sphere};

/// Errors reported by [`Scene::validate`].
#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("Primitive {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Primitive {index}: non-finite coordinates")]
    NonFinite { index: usize },

    #[error("Primitive {index}: invalid material ({reason})")]
    InvalidMaterial { index: usize, reason: &'static str },

    #[error("Primitive {index}: checkerboard footprint is empty")]
    InvalidFootprint { index: usize },

    #[error("Light {index}: intensity must be non-negative and finite, got {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },

    #[error("Light {index}: non-finite position")]
    InvalidLightPosition { index: usize },
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A complete scene.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Geometry, tested brute-force in order
    pub primitives: Vec<Primitive>,

    /// Point lights
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Check if the scene holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Four spheres over a checkerboard, lit by three lights.
    pub fn reference() -> Self {
        let mut scene = Scene::new("reference");

        scene.add(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()));
        scene.add(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()));
        scene.add(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()));
        scene.add(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()));
        scene.add(Checkerboard::default());

        scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
        scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8));
        scene.add_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7));

        scene
    }

    /// Check the construction preconditions the renderer relies on.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, primitive) in self.primitives.iter().enumerate() {
            match primitive {
                Primitive::Sphere(sphere) => {
                    if !sphere.center.is_finite() {
                        return Err(SceneError::NonFinite { index });
                    }
                    if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                        return Err(SceneError::InvalidRadius {
                            index,
                            radius: sphere.radius,
                        });
                    }
                    sphere
                        .material
                        .check()
                        .map_err(|reason| SceneError::InvalidMaterial { index, reason })?;
                }
                Primitive::Checkerboard(board) => {
                    let values = [board.height, board.half_width, board.z_min, board.z_max];
                    if !values.iter().all(|v| v.is_finite())
                        || !board.even_color.is_finite()
                        || !board.odd_color.is_finite()
                    {
                        return Err(SceneError::NonFinite { index });
                    }
                    if board.half_width <= 0.0 || board.z_min >= board.z_max {
                        return Err(SceneError::InvalidFootprint { index });
                    }
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.position.is_finite() {
                return Err(SceneError::InvalidLightPosition { index });
            }
            if !(light.intensity >= 0.0 && light.intensity.is_finite()) {
                return Err(SceneError::InvalidIntensity {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(())
    }
}
