// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod interval;
mod optics;
mod ray;

pub use color::{to_rgba8, Color};
pub use interval::Interval;
pub use optics::{reflect, refract, REFRACTION_SENTINEL};
pub use ray::Ray;
