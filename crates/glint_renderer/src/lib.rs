//! Glint Renderer - CPU Whitted-style ray tracing.
//!
//! Brute-force intersection over spheres and a checkerboard floor, Phong
//! direct lighting with hard shadows, and recursive mirror reflection and
//! refraction. Output is a linear-color [`Framebuffer`].

mod bucket;
mod camera;
mod checkerboard;
mod framebuffer;
mod hittable;
mod renderer;
mod shading;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use checkerboard::{intersect_checkerboard, PARALLEL_EPSILON};
pub use framebuffer::Framebuffer;
pub use hittable::{scene_intersect, Hit, Intersect};
pub use renderer::{cast_ray, render, render_pixel, ConfigError, RenderConfig, MAX_DEPTH_LIMIT};
pub use shading::{direct_lighting, light_contribution, offset_origin, LightingTerms};
pub use sphere::intersect_sphere;

/// Re-export common types from glint_math
pub use glint_math::{Color, Ray, Vec3};
