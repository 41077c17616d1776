//! The canonical intermediate texel: four `f32` channels in R, G, B, A order.
//!
//! Canonical buffers are row-major and tightly packed, `width * height * depth` texels long.

use crate::color_8888::Color8888;

/// One texel of the canonical `4 x f32` RGBA representation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Texel {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Texel {
    /// `(0, 0, 0, 0)`
    pub const TRANSPARENT_BLACK: Texel = Texel::new(0.0, 0.0, 0.0, 0.0);
    /// `(0, 0, 0, 1)`
    pub const OPAQUE_BLACK: Texel = Texel::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a texel from its four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a texel from an `[r, g, b, a]` array.
    #[inline]
    pub const fn from_array(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }

    /// Returns the channels as an `[r, g, b, a]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Normalizes an 8-bit UNorm colour.
    #[inline]
    pub fn from_color_8888(color: Color8888) -> Self {
        Self::new(
            unorm8_to_f32(color.r),
            unorm8_to_f32(color.g),
            unorm8_to_f32(color.b),
            unorm8_to_f32(color.a),
        )
    }

    /// Quantizes to an 8-bit UNorm colour, clamping to `[0, 1]` and rounding to nearest.
    #[inline]
    pub fn to_color_8888(self) -> Color8888 {
        Color8888::new(
            f32_to_unorm8(self.r),
            f32_to_unorm8(self.g),
            f32_to_unorm8(self.b),
            f32_to_unorm8(self.a),
        )
    }

    /// Largest absolute per-channel difference between two texels.
    pub fn max_abs_diff(self, other: Texel) -> f32 {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }
}

/// Maps an 8-bit UNorm value onto `[0, 1]`.
#[inline]
pub fn unorm8_to_f32(value: u8) -> f32 {
    value as f32 / 255.0
}

/// Maps `[0, 1]` onto an 8-bit UNorm value, rounding half away from zero.
#[inline]
pub fn f32_to_unorm8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Maps `[-1, 1]` onto an 8-bit SNorm value.
#[inline]
pub fn f32_to_snorm8(value: f32) -> i8 {
    (value.clamp(-1.0, 1.0) * 127.0).round() as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(127)]
    #[case(128)]
    #[case(254)]
    #[case(255)]
    fn unorm8_round_trips(#[case] value: u8) {
        assert_eq!(f32_to_unorm8(unorm8_to_f32(value)), value);
    }

    #[test]
    fn to_color_8888_clamps_out_of_range() {
        let texel = Texel::new(-0.5, 2.0, 0.5, f32::NAN);
        assert_eq!(texel.to_color_8888(), Color8888::new(0, 255, 128, 0));
    }

    #[rstest]
    #[case(-2.0, -127)]
    #[case(-1.0, -127)]
    #[case(0.0, 0)]
    #[case(1.0, 127)]
    fn snorm8_clamps(#[case] value: f32, #[case] expected: i8) {
        assert_eq!(f32_to_snorm8(value), expected);
    }
}
