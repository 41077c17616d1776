//! Exact piecewise sRGB transfer functions (IEC 61966-2-1).
//!
//! The two branches meet at `0.0031308` (linear) / `0.04045` (encoded).

/// Linear threshold below which the encoding is the linear segment.
pub const LINEAR_THRESHOLD: f64 = 0.0031308;
/// Encoded threshold below which decoding is the linear segment.
pub const ENCODED_THRESHOLD: f64 = 0.04045;

/// Converts a linear intensity to its sRGB encoded value.
#[inline]
pub fn linear_to_srgb_f64(x: f64) -> f64 {
    if x <= LINEAR_THRESHOLD {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts an sRGB encoded value to linear intensity.
#[inline]
pub fn srgb_to_linear_f64(x: f64) -> f64 {
    if x <= ENCODED_THRESHOLD {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// [`linear_to_srgb_f64`] for single precision.
#[inline]
pub fn linear_to_srgb(x: f32) -> f32 {
    linear_to_srgb_f64(x as f64) as f32
}

/// [`srgb_to_linear_f64`] for single precision.
#[inline]
pub fn srgb_to_linear(x: f32) -> f32 {
    srgb_to_linear_f64(x as f64) as f32
}
