//! JSON scene loading.
//!
//! A scene document lists primitives (tagged by `"type"`) and lights.
//! Vectors are `[x, y, z]` arrays:
//!
//! ```json
//! {
//!   "primitives": [
//!     { "type": "sphere", "center": [0, 0, -5], "radius": 2,
//!       "material": { "diffuse_color": [0.3, 0.1, 0.1],
//!                     "albedo": { "diffuse": 0.9, "specular": 0.1 },
//!                     "specular_exponent": 10 } },
//!     { "type": "checkerboard" }
//!   ],
//!   "lights": [ { "position": [10, 10, 10], "intensity": 1.5 } ]
//! }
//! ```

use std::path::Path;

use thiserror::Error;

use crate::scene::{Scene, SceneError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene from a JSON file.
///
/// The scene is named after the file stem unless the document names it.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&json)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::info!(
        "Loaded scene '{}' from {}: {} primitives, {} lights",
        scene.name,
        path.display(),
        scene.primitives.len(),
        scene.lights.len()
    );
    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<Scene> {
    let scene: Scene = serde_json::from_str(json)?;
    scene.validate()?;
    log::debug!("Parsed scene with {} primitives", scene.primitives.len());
    Ok(scene)
}
