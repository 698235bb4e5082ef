//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};

use crate::RenderConfig;

/// Camera at the world origin looking down -Z with +Y up.
///
/// Image row 0 is the top of the frame.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Cached computed values
    /// tan(fov / 2) for the vertical field of view
    scale: f32,
    aspect: f32,
}

impl Camera {
    /// Create a camera with a vertical field of view in radians.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            scale: (fov / 2.0).tan(),
            aspect: image_width as f32 / image_height as f32,
        }
    }

    /// Create a camera matching a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height, config.fov)
    }

    /// Generate the ray through the center of pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let px = (2.0 * (x as f32 + 0.5) / width - 1.0) * self.scale * self.aspect;
        let py = -(2.0 * (y as f32 + 0.5) / height - 1.0) * self.scale;

        Ray::new(Vec3::ZERO, Vec3::new(px, py, -1.0).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}
