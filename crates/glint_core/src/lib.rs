//! Glint Core - Scene description for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `Sphere`, `Checkerboard`, `Light`
//! - **Materials**: `Material` with named `Albedo` weights and presets
//! - **Loading**: JSON scene descriptions via serde
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitives.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod material;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use material::{Albedo, Material};
pub use primitive::{Checkerboard, Primitive, Sphere};
pub use scene::{Light, Scene, SceneError};
