//! Numeric conversion engine.
//!
//! Converts single channel values between arbitrary integer bit widths, and whole texels between
//! integer/float layouts and the canonical [`Texel`]. Every codec routes its per-channel math
//! through here.
//!
//! # Rounding
//!
//! Integer results are computed in `f64` from the normalized value and rounded half away from
//! zero, which keeps 32-bit channels exact.
//!
//! # Missing channels
//!
//! A channel with zero bits in the source decodes as `0` for colour and as fully opaque for
//! alpha. A channel with zero bits in the destination is dropped.

use crate::layout::{ChannelType, PixelLayout};
use crate::srgb::{linear_to_srgb_f64, srgb_to_linear_f64};
use crate::texel::Texel;
use derive_enum_all_values::AllValues;
use half::f16;
use multiversion::multiversion;

/// Optional transfer function applied to colour channels during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum Gamma {
    /// Values are copied through unchanged.
    #[default]
    None,
    /// Linear input is encoded to sRGB.
    LinearToSrgb,
    /// sRGB input is decoded to linear.
    SrgbToLinear,
}

impl Gamma {
    /// Applies the transfer function to a normalized value.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Gamma::None => value,
            Gamma::LinearToSrgb => linear_to_srgb_f64(value),
            Gamma::SrgbToLinear => srgb_to_linear_f64(value),
        }
    }
}

/// Largest value representable in `bits` bits.
#[inline]
pub const fn max_value(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Converts a single channel value from `src_bits` to `dst_bits`.
///
/// # Parameters
///
/// - `src_bits`: Width of `value`. `0` means the channel is absent in the source.
/// - `dst_bits`: Width of the result. `0` means the channel is absent in the destination.
/// - `treat_zero_src_bits_as_max`: When the source channel is absent, return the maximum value
///   instead of `0`. Used so layouts without alpha read as opaque.
/// - `value`: The source value. Bits above `src_bits` are ignored.
/// - `gamma`: Transfer function applied to the normalized value.
///
/// # Returns
///
/// The converted value, rounded half away from zero.
///
/// # Examples
///
/// ```
/// use texture_codec_common::convert::{convert_component, Gamma};
///
/// assert_eq!(convert_component(5, 8, false, 31, Gamma::None), 255);
/// assert_eq!(convert_component(8, 5, false, 128, Gamma::None), 16);
/// assert_eq!(convert_component(0, 8, true, 0, Gamma::None), 255);
/// ```
#[inline]
pub fn convert_component(
    src_bits: u32,
    dst_bits: u32,
    treat_zero_src_bits_as_max: bool,
    value: u32,
    gamma: Gamma,
) -> u32 {
    if dst_bits == 0 {
        return 0;
    }

    let dst_max = max_value(dst_bits);
    if src_bits == 0 {
        return if treat_zero_src_bits_as_max {
            dst_max
        } else {
            0
        };
    }

    let src_max = max_value(src_bits);
    let value = value & src_max;
    if src_bits == dst_bits && gamma == Gamma::None {
        return value;
    }

    let normalized = value as f64 / src_max as f64;
    quantize_unorm(gamma.apply(normalized), dst_max)
}

/// Rescales a normalized value onto `[0, max]`, clamping first.
#[inline]
fn quantize_unorm(normalized: f64, max: u32) -> u32 {
    let clamped = if normalized.is_nan() {
        0.0
    } else {
        normalized.clamp(0.0, 1.0)
    };
    (clamped * max as f64).round() as u32
}

/// Decodes one integer texel to `[f32; 4]`.
///
/// `gamma` applies to R, G and B only. Absent colour channels decode to `0.0`, an absent alpha
/// channel to `1.0`.
pub fn integer_texel_to_f32(layout: &PixelLayout, raw: u64, gamma: Gamma) -> [f32; 4] {
    let mut result = [0.0, 0.0, 0.0, 1.0];
    for (channel, out) in result.iter_mut().enumerate() {
        let bits = layout.bits[channel] as u32;
        if bits == 0 {
            continue;
        }

        let max = max_value(bits);
        let value = (raw >> layout.offsets[channel]) as u32 & max;
        let normalized = value as f64 / max as f64;
        *out = if channel < 3 {
            gamma.apply(normalized) as f32
        } else {
            normalized as f32
        };
    }
    result
}

/// Decodes one integer texel to half precision floats.
///
/// Same rules as [`integer_texel_to_f32`].
pub fn integer_texel_to_f16(layout: &PixelLayout, raw: u64, gamma: Gamma) -> [f16; 4] {
    integer_texel_to_f32(layout, raw, gamma).map(f16::from_f32)
}

/// Encodes one texel into an integer layout.
///
/// Each channel is clamped to `[0, 1]`. Colour channels are gamma encoded first, alpha is
/// never gamma encoded. Channels are rescaled, rounded and OR-ed in at their bit offsets.
pub fn f32_texel_to_integer(layout: &PixelLayout, texel: [f32; 4], gamma: Gamma) -> u64 {
    let mut raw = 0u64;
    for (channel, &value) in texel.iter().enumerate() {
        let bits = layout.bits[channel] as u32;
        if bits == 0 {
            continue;
        }

        let mut normalized = value as f64;
        if channel < 3 {
            normalized = gamma.apply(normalized.clamp(0.0, 1.0));
        }

        let quantized = quantize_unorm(normalized, max_value(bits)) as u64;
        raw |= quantized << layout.offsets[channel];
    }
    raw
}

/// [`f32_texel_to_integer`] for half precision input.
pub fn f16_texel_to_integer(layout: &PixelLayout, texel: [f16; 4], gamma: Gamma) -> u64 {
    f32_texel_to_integer(layout, texel.map(f16::to_f32), gamma)
}

/// Converts `count` tightly packed texels between two integer layouts.
///
/// Absent source alpha becomes opaque, absent source colour becomes `0`. `gamma` applies to
/// colour channels. When both layouts match and no gamma is requested the bytes are copied.
///
/// # Panics
///
/// If either slice is shorter than `count` texels of its layout.
pub fn convert_texels(
    src_layout: &PixelLayout,
    src: &[u8],
    dst_layout: &PixelLayout,
    dst: &mut [u8],
    count: usize,
    gamma: Gamma,
) {
    let src_bytes = src_layout.texel_bytes();
    let dst_bytes = dst_layout.texel_bytes();
    if src_layout == dst_layout && gamma == Gamma::None {
        let len = count * src_bytes;
        dst[..len].copy_from_slice(&src[..len]);
        return;
    }

    for (src_texel, dst_texel) in src
        .chunks_exact(src_bytes)
        .zip(dst.chunks_exact_mut(dst_bytes))
        .take(count)
    {
        let raw = src_layout.read_raw(src_texel);
        let mut converted = 0u64;
        for channel in 0..4 {
            let src_bits = src_layout.bits[channel] as u32;
            let dst_bits = dst_layout.bits[channel] as u32;
            let value = (raw >> src_layout.offsets[channel]) as u32;
            let channel_gamma = if channel < 3 { gamma } else { Gamma::None };
            let result = convert_component(src_bits, dst_bits, channel == 3, value, channel_gamma);
            converted |= (result as u64) << dst_layout.offsets[channel];
        }
        dst_layout.write_raw(converted, dst_texel);
    }
}

/// Decodes tightly packed integer texels into canonical texels.
///
/// Converts `min(src.len() / texel_bytes, dst.len())` texels.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn integer_texels_to_f32(layout: &PixelLayout, src: &[u8], dst: &mut [Texel], gamma: Gamma) {
    let texel_bytes = layout.texel_bytes();
    for (bytes, out) in src.chunks_exact(texel_bytes).zip(dst.iter_mut()) {
        *out = Texel::from_array(integer_texel_to_f32(layout, layout.read_raw(bytes), gamma));
    }
}

/// Encodes canonical texels into tightly packed integer texels.
///
/// Converts `min(src.len(), dst.len() / texel_bytes)` texels.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn f32_texels_to_integer(layout: &PixelLayout, src: &[Texel], dst: &mut [u8], gamma: Gamma) {
    let texel_bytes = layout.texel_bytes();
    for (texel, bytes) in src.iter().zip(dst.chunks_exact_mut(texel_bytes)) {
        let raw = f32_texel_to_integer(layout, texel.to_array(), gamma);
        layout.write_raw(raw, bytes);
    }
}

/// Decodes tightly packed half/single float texels into canonical texels.
///
/// Absent channels default to `(0, 0, 0, 1)`. `gamma` applies to colour channels.
pub fn float_texels_to_f32(layout: &PixelLayout, src: &[u8], dst: &mut [Texel], gamma: Gamma) {
    debug_assert_eq!(layout.channel_type, ChannelType::Float);
    let texel_bytes = layout.texel_bytes();
    for (bytes, out) in src.chunks_exact(texel_bytes).zip(dst.iter_mut()) {
        let mut texel = [0.0, 0.0, 0.0, 1.0];
        for (channel, value) in texel.iter_mut().enumerate() {
            let start = layout.offsets[channel] as usize / 8;
            let decoded = match layout.bits[channel] {
                16 => f16::from_le_bytes([bytes[start], bytes[start + 1]]).to_f32(),
                32 => f32::from_le_bytes([
                    bytes[start],
                    bytes[start + 1],
                    bytes[start + 2],
                    bytes[start + 3],
                ]),
                _ => continue,
            };
            *value = if channel < 3 && gamma != Gamma::None {
                gamma.apply(decoded as f64) as f32
            } else {
                decoded
            };
        }
        *out = Texel::from_array(texel);
    }
}

/// Encodes canonical texels into tightly packed half/single float texels.
///
/// Float layouts are not clamped; `gamma` applies to colour channels.
pub fn f32_texels_to_float(layout: &PixelLayout, src: &[Texel], dst: &mut [u8], gamma: Gamma) {
    debug_assert_eq!(layout.channel_type, ChannelType::Float);
    let texel_bytes = layout.texel_bytes();
    for (texel, bytes) in src.iter().zip(dst.chunks_exact_mut(texel_bytes)) {
        for (channel, &value) in texel.to_array().iter().enumerate() {
            let value = if channel < 3 && gamma != Gamma::None {
                gamma.apply(value as f64) as f32
            } else {
                value
            };
            let start = layout.offsets[channel] as usize / 8;
            match layout.bits[channel] {
                16 => bytes[start..start + 2].copy_from_slice(&f16::from_f32(value).to_le_bytes()),
                32 => bytes[start..start + 4].copy_from_slice(&value.to_le_bytes()),
                _ => {}
            }
        }
    }
}
