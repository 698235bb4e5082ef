use crate::{Interval, Vec3};

/// Linear RGB color, channels nominally in [0, 1].
pub type Color = Vec3;

/// Quantize a linear color to 8-bit RGBA.
///
/// Channels are clamped to [0, 1] and truncated; no gamma is applied and
/// alpha is always opaque.
pub fn to_rgba8(color: Color) -> [u8; 4] {
    let channel = |c: f32| (Interval::UNIT.clamp(c) * 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z), 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(to_rgba8(Color::new(-1.0, 0.0, 2.0)), [0, 0, 255, 255]);
        assert_eq!(to_rgba8(Color::ONE), [255, 255, 255, 255]);
    }

    #[test]
    fn test_to_rgba8_truncates_without_gamma() {
        // 0.5 * 255 = 127.5 -> 127, no sqrt applied
        assert_eq!(to_rgba8(Color::new(0.5, 0.2, 0.8)), [127, 51, 204, 255]);
    }
}
