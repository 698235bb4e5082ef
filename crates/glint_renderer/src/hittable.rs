//! Intersect trait and Hit record for ray-object intersection.

use glint_core::{Material, Primitive, Scene};
use glint_math::{Ray, Vec3};

use crate::checkerboard::intersect_checkerboard;
use crate::sphere::intersect_sphere;

/// Record of a ray-object intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Distance along the ray
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal (not flipped towards the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// Trait for geometry that can be hit by rays.
pub trait Intersect: Send + Sync {
    /// Intersect `ray` with this object.
    ///
    /// Returns a hit only when it is strictly closer than `nearest`.
    fn intersect(&self, ray: &Ray, nearest: f32) -> Option<Hit>;
}

impl Intersect for Primitive {
    fn intersect(&self, ray: &Ray, nearest: f32) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => {
                let distance = intersect_sphere(ray, sphere).filter(|&t| t < nearest)?;
                let point = ray.at(distance);
                Some(Hit {
                    distance,
                    point,
                    normal: (point - sphere.center).normalize(),
                    material: sphere.material,
                })
            }
            Primitive::Checkerboard(board) => {
                let distance = intersect_checkerboard(ray, board).filter(|&t| t < nearest)?;
                let point = ray.at(distance);
                Some(Hit {
                    distance,
                    point,
                    normal: Vec3::Y,
                    material: board.material_at(point),
                })
            }
        }
    }
}

impl Intersect for Scene {
    fn intersect(&self, ray: &Ray, nearest: f32) -> Option<Hit> {
        let mut closest_so_far = nearest;
        let mut closest = None;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray, closest_so_far) {
                closest_so_far = hit.distance;
                closest = Some(hit);
            }
        }

        closest
    }
}

/// Find the nearest hit in the scene closer than `max_distance`.
///
/// Anything at or beyond `max_distance` counts as having escaped the scene.
#[inline]
pub fn scene_intersect(scene: &Scene, ray: &Ray, max_distance: f32) -> Option<Hit> {
    scene.intersect(ray, max_distance)
}
