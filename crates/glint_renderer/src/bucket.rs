//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Pixels only read the shared scene, so the
//! result is identical to the serial driver.

use std::time::Instant;

use glint_core::Scene;
use glint_math::Color;
use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{Camera, Framebuffer, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted in spiral order from center.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    // Generate grid of buckets
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    // Sort by distance from center (spiral order)
    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let a_center_x = a.x as f32 + a.width as f32 / 2.0;
        let a_center_y = a.y as f32 + a.height as f32 / 2.0;
        let b_center_x = b.x as f32 + b.width as f32 / 2.0;
        let b_center_y = b.y as f32 + b.height as f32 / 2.0;

        let a_dist = (a_center_x - center_x).powi(2) + (a_center_y - center_y).powi(2);
        let b_dist = (b_center_x - center_x).powi(2) + (b_center_y - center_y).powi(2);

        a_dist.partial_cmp(&b_dist).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(camera, scene, global_x, global_y, config));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

/// Render the entire scene, one bucket per rayon task.
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let start = Instant::now();
    let camera = Camera::from_config(config);
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    log::info!(
        "Rendering '{}' at {}x{}, depth {}, {} buckets on {} threads",
        scene.name,
        config.width,
        config.height,
        config.max_depth,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| {
            let pixels = render_bucket(&bucket, &camera, scene, config);
            log::debug!(
                "Bucket {} done ({}x{} at {},{})",
                bucket.index,
                bucket.width,
                bucket.height,
                bucket.x,
                bucket.y
            );
            BucketResult::new(bucket, pixels)
        })
        .collect();

    let mut image = Framebuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
