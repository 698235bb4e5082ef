//! Scene primitives: spheres and the checkerboard floor.

use glint_math::{Color, Interval, Vec3};
use serde::Deserialize;

use crate::material::{Albedo, Material};

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// An infinite horizontal plane `y = height`, clipped to a rectangular
/// footprint and shaded with a procedural two-color checker pattern.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Checkerboard {
    /// Plane height on the Y axis
    pub height: f32,

    /// Footprint covers `-half_width < x < half_width`
    pub half_width: f32,

    /// Footprint covers `z_min < z < z_max`
    pub z_min: f32,
    pub z_max: f32,

    /// Color of cells with even parity
    pub even_color: Color,

    /// Color of cells with odd parity
    pub odd_color: Color,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            half_width: 10.0,
            z_min: -30.0,
            z_max: -10.0,
            even_color: Color::ONE * 0.3,
            odd_color: Color::new(1.0, 0.7, 0.3) * 0.3,
        }
    }
}

impl Checkerboard {
    /// Range of X covered by the board (exclusive).
    pub fn footprint_x(&self) -> Interval {
        Interval::new(-self.half_width, self.half_width)
    }

    /// Range of Z covered by the board (exclusive).
    pub fn footprint_z(&self) -> Interval {
        Interval::new(self.z_min, self.z_max)
    }

    /// Cell color at a point on the board.
    ///
    /// Cells are 2 units wide. X is shifted by +1000 before flooring so the
    /// pattern stays regular across x = 0.
    pub fn color_at(&self, point: Vec3) -> Color {
        let cell = (0.5 * point.x + 1000.0).floor() as i64 + (0.5 * point.z).floor() as i64;
        if cell & 1 == 1 {
            self.odd_color
        } else {
            self.even_color
        }
    }

    /// Material at a point on the board: pure diffuse in the cell color.
    pub fn material_at(&self, point: Vec3) -> Material {
        Material {
            diffuse_color: self.color_at(point),
            albedo: Albedo::new(1.0, 0.0, 0.0),
            specular_exponent: 0.0,
            refractive_index: 1.0,
        }
    }
}

/// Every kind of geometry a scene can hold.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Sphere(Sphere),
    Checkerboard(Checkerboard),
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Checkerboard> for Primitive {
    fn from(board: Checkerboard) -> Self {
        Primitive::Checkerboard(board)
    }
}
