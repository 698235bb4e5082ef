//! Reflection and refraction of directions about a surface normal.

use crate::{Interval, Vec3};

/// Direction returned by [`refract`] under total internal reflection.
///
/// It carries no physical meaning: the transmitted ray is still traced, just
/// along +X, and rendered output depends on that exact value.
pub const REFRACTION_SENTINEL: Vec3 = Vec3::X;

/// Reflect the incoming direction `incident` about the unit normal `normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Refract `incident` through a surface with unit outward `normal` (Snell's law).
///
/// The medium outside the surface is vacuum (index 1) and `eta_t` is the index
/// inside. When `incident` points along the normal the ray is leaving the
/// medium, so the indices are swapped and the normal flipped. The result is
/// not normalized.
///
/// The scalar terms are evaluated in f64: at grazing angles `1 - cosi²` rounds
/// to 1 in f32 and the ray would bend even when the indices match.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32) -> Vec3 {
    let mut cosi = -f64::from(Interval::SIGNED_UNIT.clamp(incident.dot(normal)));
    let (mut eta_i, mut eta_t) = (1.0_f64, f64::from(eta_t));
    let mut n = normal;

    if cosi < 0.0 {
        cosi = -cosi;
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return REFRACTION_SENTINEL;
    }

    (eta as f32) * incident + ((eta * cosi - k.sqrt()) as f32) * n
}
