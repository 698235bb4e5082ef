use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, Scene};
use glint_renderer::{render, render_parallel, Framebuffer, RenderConfig};

/// Render a scene of spheres to a PNG with a recursive ray tracer.
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
struct Args {
    /// JSON scene description (defaults to the built-in reference scene)
    #[arg(long)]
    scene: Option<PathBuf>,

    /// JSON render configuration; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    fov: Option<f32>,

    /// Maximum reflection/refraction recursion depth
    #[arg(long)]
    depth: Option<u32>,

    /// Self-intersection bias for secondary rays
    #[arg(long)]
    bias: Option<f32>,

    /// Distance beyond which rays count as escaped
    #[arg(long)]
    max_distance: Option<f32>,

    /// Render on one thread instead of in parallel buckets
    #[arg(long, default_value_t = false)]
    serial: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,
}

/// Resolve the render configuration from the optional file and flags.
fn build_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<RenderConfig>(&json)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(fov) = args.fov {
        config.fov = fov.to_radians();
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if let Some(bias) = args.bias {
        config.bias = bias;
    }
    if let Some(max_distance) = args.max_distance {
        config.max_distance = max_distance;
    }

    config.validate().context("Invalid render configuration")?;
    Ok(config)
}

fn build_scene(args: &Args) -> Result<Scene> {
    match &args.scene {
        Some(path) => {
            load_scene(path).with_context(|| format!("Failed to load scene {}", path.display()))
        }
        None => {
            log::info!("No scene given, using the reference scene");
            Ok(Scene::reference())
        }
    }
}

fn save_png(image: &Framebuffer, path: &Path) -> Result<()> {
    let buffer = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba8())
        .context("Framebuffer size does not match its dimensions")?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let start = Instant::now();
    let scene = build_scene(&args)?;
    log::debug!("Scene built in {:?}", start.elapsed());

    let image = if args.serial {
        render(&scene, &config)
    } else {
        render_parallel(&scene, &config)
    };

    save_png(&image, &args.output)?;
    log::info!("Rendering done, saved to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glint"]);
        let config = build_config(&args).unwrap();

        assert_eq!(config, RenderConfig::default());
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert!(!args.serial);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "glint", "--width", "320", "--height", "200", "--fov", "60", "--depth", "2", "--serial",
        ]);
        let config = build_config(&args).unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 200);
        assert_eq!(config.max_depth, 2);
        assert!((config.fov - 60.0_f32.to_radians()).abs() < 1e-6);
        assert!(args.serial);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let args = Args::parse_from(["glint", "--width", "0"]);
        assert!(build_config(&args).is_err());

        let args = Args::parse_from(["glint", "--fov", "180"]);
        assert!(build_config(&args).is_err());

        let args = Args::parse_from(["glint", "--depth", "1000"]);
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_missing_scene_file() {
        let args = Args::parse_from(["glint", "--scene", "/nonexistent/scene.json"]);
        assert!(build_scene(&args).is_err());
    }

    #[test]
    fn test_save_png_roundtrip_dimensions() {
        let mut image = Framebuffer::new(4, 3);
        image.set(1, 1, glint_renderer::Color::ONE);

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.png");
        save_png(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 255, 255, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
