//! Core recursive ray tracer.
//!
//! Implements Whitted-style ray tracing with:
//! - Phong direct lighting with hard shadows
//! - Mirror reflection and dielectric refraction, recursing to a fixed depth
//! - A serial row-major frame driver

use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use glint_core::Scene;
use glint_math::{reflect, refract, Color, Ray};
use serde::Deserialize;
use thiserror::Error;

use crate::hittable::scene_intersect;
use crate::shading::{direct_lighting, offset_origin};
use crate::{Camera, Framebuffer, DEFAULT_BUCKET_SIZE};

/// Deepest reflection/refraction recursion a configuration may request.
///
/// Each level adds a `cast_ray` frame, so this bounds stack use.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Errors reported by [`RenderConfig::validate`].
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Image resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("Field of view must be in (0, pi) radians, got {0}")]
    InvalidFov(f32),

    #[error("Recursion depth must be at most {limit}, got {depth}")]
    DepthTooLarge { depth: u32, limit: u32 },

    #[error("Bias must be positive and finite, got {0}")]
    InvalidBias(f32),

    #[error("Max distance must be positive, got {0}")]
    InvalidMaxDistance(f32),

    #[error("Bucket size must be non-zero")]
    ZeroBucketSize,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Maximum recursion depth for reflected and refracted rays
    pub max_depth: u32,
    /// Offset applied to secondary ray origins to escape the surface
    pub bias: f32,
    /// Hits at or beyond this distance count as background
    pub max_distance: f32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Bucket edge length for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: FRAC_PI_2,
            max_depth: 4,
            bias: 1e-3,
            max_distance: 1000.0,
            background: Color::new(0.2, 0.7, 0.8),
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set vertical field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set recursion depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set self-intersection bias.
    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    /// Set render-distance cutoff.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set bucket size for parallel rendering.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Check that the configuration can drive a render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::DepthTooLarge {
                depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        if !(self.bias > 0.0 && self.bias.is_finite()) {
            return Err(ConfigError::InvalidBias(self.bias));
        }
        if !(self.max_distance > 0.0) {
            return Err(ConfigError::InvalidMaxDistance(self.max_distance));
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        Ok(())
    }
}

/// Compute the color seen along a ray.
///
/// Returns the background once `depth` reaches zero, before any
/// intersection test, or when the ray escapes the scene. Otherwise the hit is
/// shaded from four weighted terms: diffuse and specular direct lighting, a
/// reflected ray and a refracted ray, both traced with `depth - 1`.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth == 0 {
        return config.background;
    }

    let Some(hit) = scene_intersect(scene, ray, config.max_distance) else {
        return config.background;
    };
    let material = &hit.material;
    let albedo = &material.albedo;

    let reflect_color = if albedo.reflection != 0.0 {
        let direction = reflect(ray.direction, hit.normal).normalize();
        let origin = offset_origin(hit.point, hit.normal, direction, config.bias);
        cast_ray(&Ray::new(origin, direction), scene, depth - 1, config)
    } else {
        Color::ZERO
    };

    let refract_color = if material.is_refractive() {
        let direction = refract(ray.direction, hit.normal, material.refractive_index).normalize();
        let origin = offset_origin(hit.point, hit.normal, direction, config.bias);
        cast_ray(&Ray::new(origin, direction), scene, depth - 1, config)
    } else {
        Color::ZERO
    };

    let lighting = direct_lighting(scene, ray, &hit, config);

    material.diffuse_color * (lighting.diffuse * albedo.diffuse)
        + Color::ONE * (lighting.specular * albedo.specular)
        + reflect_color * albedo.reflection
        + refract_color * albedo.refraction
}

/// Render a single pixel.
#[inline]
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.primary_ray(x, y);
    cast_ray(&ray, scene, config.max_depth, config)
}

/// Render the entire scene to a framebuffer.
///
/// This is the single-threaded reference driver; see
/// [`render_parallel`](crate::render_parallel) for the bucketed version.
pub fn render(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let start = Instant::now();
    log::info!(
        "Rendering '{}' at {}x{}, depth {}",
        scene.name,
        config.width,
        config.height,
        config.max_depth
    );

    let camera = Camera::from_config(config);
    let mut image = Framebuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            let color = render_pixel(&camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
