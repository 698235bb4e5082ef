//! Ray intersection with the checkerboard floor.

use glint_core::Checkerboard;
use glint_math::Ray;

/// Rays whose vertical direction component is this small are treated as
/// parallel to the board and never hit it.
pub const PARALLEL_EPSILON: f32 = 1e-3;

/// Distance along `ray` to the board, if it lands inside the footprint.
pub fn intersect_checkerboard(ray: &Ray, board: &Checkerboard) -> Option<f32> {
    if ray.direction.y.abs() <= PARALLEL_EPSILON {
        return None;
    }

    let t = -(ray.origin.y - board.height) / ray.direction.y;
    if t <= 0.0 {
        return None;
    }

    let point = ray.at(t);
    if board.footprint_x().surrounds(point.x) && board.footprint_z().surrounds(point.z) {
        Some(t)
    } else {
        None
    }
}
