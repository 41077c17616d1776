//! BC6H half float RGB blocks.
//!
//! Decoding is native and covers all 14 modes, signed and unsigned. Encoding delegates to the
//! `block_compression` crate and only exists for the unsigned variant.
//!
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d11/bc6h-format>

use crate::bits::BitReader;
use crate::tables::{ANCHORS_2, BC6H_FIELDS, PARTITIONS_2, WEIGHTS_3, WEIGHTS_4};
use block_compression::{encode::compress_rgba16, BC6HSettings, CompressionVariant};
use half::f16;
use likely_stable::unlikely;
use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    texel::Texel,
};

/// Size of a BC6H block.
pub const BC6H_BLOCK_BYTES: usize = 16;

/// Endpoint precision per mode: base endpoint, then the red, green and blue delta widths.
const ENDPOINT_BITS: [[u8; 14]; 4] = [
    [10, 7, 11, 11, 11, 9, 8, 8, 8, 6, 10, 11, 12, 16],
    [5, 6, 5, 4, 4, 5, 6, 5, 5, 6, 10, 9, 8, 4],
    [5, 6, 4, 5, 4, 5, 5, 6, 5, 6, 10, 9, 8, 4],
    [5, 6, 4, 4, 5, 5, 5, 5, 6, 6, 10, 9, 8, 4],
];

/// Maps the 2 or 5 mode bits to a mode index; `None` for the reserved values.
fn mode_index(mode_bits: u32) -> Option<usize> {
    match mode_bits {
        0 => Some(0),
        1 => Some(1),
        // Two-subset modes with 5 mode bits: 0b00010, 0b00110, .., 0b11110.
        bits if bits & 0b11 == 0b10 => Some(2 + (bits >> 2) as usize),
        // One-subset modes: 0b00011, 0b00111, 0b01011, 0b01111.
        bits if bits & 0b11 == 0b11 && bits >> 2 < 4 => Some(10 + (bits >> 2) as usize),
        _ => None,
    }
}

#[inline]
fn extend_sign(value: i32, bits: u8) -> i32 {
    let shift = 32 - bits as u32;
    (value << shift) >> shift
}

#[inline]
fn transform_inverse(value: i32, base: i32, bits: u8, signed: bool) -> i32 {
    let value = (value + base) & ((1 << bits) - 1);
    if signed {
        extend_sign(value, bits)
    } else {
        value
    }
}

fn unquantize(value: i32, bits: u8, signed: bool) -> i32 {
    let bits = bits as i32;
    if !signed {
        return if bits >= 15 {
            value
        } else if value == 0 {
            0
        } else if value == (1 << bits) - 1 {
            0xFFFF
        } else {
            ((value << 16) + 0x8000) >> bits
        };
    }

    if bits >= 16 {
        return value;
    }
    let magnitude = value.abs();
    let unquantized = if magnitude == 0 {
        0
    } else if magnitude >= (1 << (bits - 1)) - 1 {
        0x7FFF
    } else {
        ((magnitude << 15) + 0x4000) >> (bits - 1)
    };
    if value < 0 {
        -unquantized
    } else {
        unquantized
    }
}

/// Scales an interpolated value into half float bits.
#[inline]
fn finish_unquantize(value: i32, signed: bool) -> u16 {
    if !signed {
        return ((value * 31) >> 6) as u16;
    }
    if value < 0 {
        0x8000 | (((-value) * 31) >> 5) as u16
    } else {
        ((value * 31) >> 5) as u16
    }
}

#[inline]
fn interpolate(a: i32, b: i32, weight: u8) -> i32 {
    let weight = weight as i32;
    (a * (64 - weight) + b * weight + 32) >> 6
}

/// Decodes a BC6H block into 16 texels; alpha is always 1.
///
/// Reserved mode values decode as opaque black.
pub fn decode_bc6h_block(block: &[u8], signed: bool, out: &mut [Texel]) {
    let mut reader = BitReader::new(block);
    let mut mode_bits = reader.read(2);
    if mode_bits > 1 {
        mode_bits |= reader.read(3) << 2;
    }
    let Some(mode) = mode_index(mode_bits) else {
        out.iter_mut()
            .take(16)
            .for_each(|t| *t = Texel::OPAQUE_BLACK);
        return;
    };

    // endpoints[channel][endpoint]
    let mut endpoints = [[0i32; 4]; 3];
    for field in BC6H_FIELDS[mode] {
        let value = if unlikely(field.reversed) {
            reader.read_reversed(field.bits as u32)
        } else {
            reader.read(field.bits as u32)
        };
        endpoints[field.channel as usize][field.endpoint as usize] |= (value << field.shift) as i32;
    }

    let two_subsets = mode < 10;
    let partition = if two_subsets {
        reader.read(5) as usize
    } else {
        0
    };
    let endpoint_count = if two_subsets { 4 } else { 2 };
    let base_bits = ENDPOINT_BITS[0][mode];
    // Modes 10 and 11 (indices 9 and 10) store every endpoint in full.
    let transformed = mode != 9 && mode != 10;

    for (channel, values) in endpoints.iter_mut().enumerate() {
        let delta_bits = ENDPOINT_BITS[channel + 1][mode];
        if signed {
            values[0] = extend_sign(values[0], base_bits);
        }
        for value in values.iter_mut().take(endpoint_count).skip(1) {
            if transformed || signed {
                *value = extend_sign(*value, delta_bits);
            }
        }
        let base = values[0];
        for value in values.iter_mut().take(endpoint_count).skip(1) {
            if transformed {
                *value = transform_inverse(*value, base, base_bits, signed);
            }
        }
        for value in values.iter_mut().take(endpoint_count) {
            *value = unquantize(*value, base_bits, signed);
        }
    }

    let (weights, index_bits): (&[u8], u32) = if two_subsets {
        (&WEIGHTS_3, 3)
    } else {
        (&WEIGHTS_4, 4)
    };
    for (i, texel) in out.iter_mut().take(16).enumerate() {
        let subset = if two_subsets {
            ((PARTITIONS_2[partition] >> (i * 2)) & 0b11) as usize
        } else {
            0
        };
        let anchor = i == 0 || (two_subsets && i == ANCHORS_2[partition] as usize);
        let index = reader.read(index_bits - anchor as u32) as usize;
        let weight = weights[index];

        let channel = |c: usize| {
            let value = interpolate(
                endpoints[c][subset * 2],
                endpoints[c][subset * 2 + 1],
                weight,
            );
            f16::from_bits(finish_unquantize(value, signed)).to_f32()
        };
        *texel = Texel::new(channel(0), channel(1), channel(2), 1.0);
    }
}

/// Encodes 16 texels as one unsigned BC6H block. Negative and NaN inputs encode as 0.
pub fn encode_bc6h_block(texels: &[Texel], out: &mut [u8]) {
    let mut rgba = [f16::ZERO; 64];
    for (dst, texel) in rgba.chunks_exact_mut(4).zip(texels) {
        dst[0] = f16::from_f32(texel.r.max(0.0));
        dst[1] = f16::from_f32(texel.g.max(0.0));
        dst[2] = f16::from_f32(texel.b.max(0.0));
        dst[3] = f16::ONE;
    }
    compress_rgba16(
        CompressionVariant::BC6H(BC6HSettings::very_slow()),
        &rgba,
        &mut out[..BC6H_BLOCK_BYTES],
        4,
        4,
        16,
    );
}

/// BC6H block codec. Only the unsigned variant can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc6hCodec {
    /// Signed half float variant.
    pub signed: bool,
}

impl BlockCodec for Bc6hCodec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        BC6H_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_bc6h_block(block, self.signed, out);
    }

    /// Signed blocks are not encodable and are left untouched; see [`Self::can_encode`].
    fn encode_block(&self, texels: &[Texel], _params: &EncodeParams, out: &mut [u8]) {
        debug_assert!(!self.signed, "signed BC6H has no encoder");
        if !self.signed {
            encode_bc6h_block(texels, out);
        }
    }

    fn can_encode(&self) -> bool {
        !self.signed
    }
}
