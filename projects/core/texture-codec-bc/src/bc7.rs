//! BC7 RGBA blocks: eight modes selected by the position of the first set bit.
//!
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d11/bc7-format-mode-reference>

use crate::bits::BitReader;
use crate::tables::{ANCHORS_2, ANCHORS_3, PARTITIONS_2, PARTITIONS_3, WEIGHTS_2, WEIGHTS_3, WEIGHTS_4};
use block_compression::{encode::compress_rgba8, BC7Settings, CompressionVariant};
use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    color_8888::Color8888,
    texel::Texel,
};

/// Size of a BC7 block.
pub const BC7_BLOCK_BYTES: usize = 16;

/// Colour and alpha endpoint precision per mode, before p-bits.
const COLOR_BITS: [u8; 8] = [4, 6, 5, 7, 5, 7, 7, 5];
const ALPHA_BITS: [u8; 8] = [0, 0, 0, 0, 6, 8, 7, 5];

/// Modes carrying one p-bit per endpoint (bit set per mode). Mode 1 shares them per subset.
const MODE_HAS_PBITS: u8 = 0b1100_1011;

#[inline]
fn interpolate(a: u8, b: u8, weight: u8) -> u8 {
    let (a, b, w) = (a as u32, b as u32, weight as u32);
    ((a * (64 - w) + b * w + 32) >> 6) as u8
}

#[inline]
fn weights_for(bits: u32) -> &'static [u8] {
    match bits {
        2 => &WEIGHTS_2,
        3 => &WEIGHTS_3,
        _ => &WEIGHTS_4,
    }
}

/// Decodes one BC7 block into 16 8-bit colours.
///
/// A block without a mode bit in its first byte is reserved and decodes as transparent black.
pub fn decode_bc7_block(block: &[u8], out: &mut [Color8888; 16]) {
    let mut reader = BitReader::new(block);
    let mut mode = 0usize;
    while mode < 8 && reader.read(1) == 0 {
        mode += 1;
    }
    if mode >= 8 {
        out.fill(Color8888::default());
        return;
    }

    let subsets = match mode {
        0 | 2 => 3,
        1 | 3 | 7 => 2,
        _ => 1,
    };
    let partition = match subsets {
        1 => 0,
        _ => reader.read(if mode == 0 { 4 } else { 6 }) as usize,
    };
    let (rotation, index_selection) = match mode {
        4 => (reader.read(2), reader.read(1)),
        5 => (reader.read(2), 0),
        _ => (0, 0),
    };

    // endpoints[endpoint][channel]
    let endpoint_count = subsets * 2;
    let mut endpoints = [[0u32; 4]; 6];
    for channel in 0..3 {
        for endpoint in endpoints.iter_mut().take(endpoint_count) {
            endpoint[channel] = reader.read(COLOR_BITS[mode] as u32);
        }
    }
    if ALPHA_BITS[mode] > 0 {
        for endpoint in endpoints.iter_mut().take(endpoint_count) {
            endpoint[3] = reader.read(ALPHA_BITS[mode] as u32);
        }
    }

    let has_pbits = MODE_HAS_PBITS & (1 << mode) != 0;
    if mode == 1 {
        let shared = [reader.read(1), reader.read(1)];
        for (i, endpoint) in endpoints.iter_mut().take(endpoint_count).enumerate() {
            for value in endpoint.iter_mut().take(3) {
                *value = (*value << 1) | shared[i / 2];
            }
        }
    } else if has_pbits {
        for endpoint in endpoints.iter_mut().take(endpoint_count) {
            let pbit = reader.read(1);
            for value in endpoint.iter_mut() {
                *value = (*value << 1) | pbit;
            }
        }
    }

    let extra = (has_pbits || mode == 1) as u32;
    let color_bits = COLOR_BITS[mode] as u32 + extra;
    let alpha_bits = ALPHA_BITS[mode] as u32 + extra;
    let mut expanded = [[0u8; 4]; 6];
    for (dst, src) in expanded.iter_mut().zip(endpoints.iter()).take(endpoint_count) {
        for channel in 0..3 {
            dst[channel] = expand(src[channel], color_bits);
        }
        dst[3] = if ALPHA_BITS[mode] == 0 {
            0xFF
        } else {
            expand(src[3], alpha_bits)
        };
    }

    let index_bits = match mode {
        0 | 1 => 3,
        6 => 4,
        _ => 2,
    };
    let secondary_bits = match mode {
        4 => 3,
        5 => 2,
        _ => 0,
    };

    let subset_of = |texel: usize| -> usize {
        match subsets {
            2 => ((PARTITIONS_2[partition] >> (texel * 2)) & 0b11) as usize,
            3 => ((PARTITIONS_3[partition] >> (texel * 2)) & 0b11) as usize,
            _ => 0,
        }
    };
    let is_anchor = |texel: usize| -> bool {
        texel == 0
            || match subsets {
                2 => texel == ANCHORS_2[partition] as usize,
                3 => ANCHORS_3[partition].contains(&(texel as u8)),
                _ => false,
            }
    };

    let mut indices = [0u8; 16];
    for (texel, index) in indices.iter_mut().enumerate() {
        *index = reader.read(index_bits - is_anchor(texel) as u32) as u8;
    }

    let primary = weights_for(index_bits);
    let secondary = weights_for(secondary_bits);
    for (texel, color) in out.iter_mut().enumerate() {
        let subset = subset_of(texel);
        let (e0, e1) = (expanded[subset * 2], expanded[subset * 2 + 1]);
        let lerp = |channel: usize, weight: u8| interpolate(e0[channel], e1[channel], weight);
        let weight = primary[indices[texel] as usize];

        let mut rgba = if secondary_bits == 0 {
            [lerp(0, weight), lerp(1, weight), lerp(2, weight), lerp(3, weight)]
        } else {
            let index2 = reader.read(secondary_bits - (texel == 0) as u32) as usize;
            let weight2 = secondary[index2];
            // The selection bit swaps which index set drives colour and which drives alpha.
            let (color_weight, alpha_weight) = if index_selection == 0 {
                (weight, weight2)
            } else {
                (weight2, weight)
            };
            [
                lerp(0, color_weight),
                lerp(1, color_weight),
                lerp(2, color_weight),
                lerp(3, alpha_weight),
            ]
        };

        if rotation > 0 {
            rgba.swap(3, rotation as usize - 1);
        }
        *color = Color8888::new(rgba[0], rgba[1], rgba[2], rgba[3]);
    }
}

/// Replicates the top bits of a `bits` wide value into the low bits of a byte.
#[inline]
fn expand(value: u32, bits: u32) -> u8 {
    let value = value << (8 - bits);
    (value | (value >> bits)) as u8
}

/// Encodes 16 texels as one BC7 block.
pub fn encode_bc7_block(texels: &[Texel], out: &mut [u8]) {
    let mut rgba = [0u8; 64];
    for (dst, texel) in rgba.chunks_exact_mut(4).zip(texels) {
        dst.copy_from_slice(&texel.to_color_8888().to_array());
    }
    compress_rgba8(
        CompressionVariant::BC7(BC7Settings::alpha_basic()),
        &rgba,
        &mut out[..BC7_BLOCK_BYTES],
        4,
        4,
        16,
    );
}

/// BC7 block codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bc7Codec;

impl BlockCodec for Bc7Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        BC7_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        let mut colors = [Color8888::default(); 16];
        decode_bc7_block(block, &mut colors);
        for (texel, color) in out.iter_mut().zip(colors) {
            *texel = Texel::from_color_8888(color);
        }
    }

    fn encode_block(&self, texels: &[Texel], _params: &EncodeParams, out: &mut [u8]) {
        encode_bc7_block(texels, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    /// Mode 6: one subset, 7-bit RGBA endpoints with a p-bit each, 4-bit indices.
    fn mode_6_block(e0: u32, p0: u32, e1: u32, p1: u32, indices: &[u32; 16]) -> [u8; 16] {
        let mut bits = 1u128 << 6;
        let mut pos = 7;
        let mut push = |value: u32, width: u32| {
            bits |= (value as u128) << pos;
            pos += width;
        };
        for _channel in 0..4 {
            push(e0, 7);
            push(e1, 7);
        }
        push(p0, 1);
        push(p1, 1);
        for (i, &index) in indices.iter().enumerate() {
            push(index, if i == 0 { 3 } else { 4 });
        }
        assert_eq!(pos, 128);
        bits.to_le_bytes()
    }

    #[rstest]
    #[case([0u8; 16])]
    #[case([0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF])]
    fn reserved_mode_is_transparent_black(#[case] block: [u8; 16]) {
        let mut out = [Color8888::new(1, 2, 3, 4); 16];
        decode_bc7_block(&block, &mut out);
        assert!(out.iter().all(|c| *c == Color8888::new(0, 0, 0, 0)));
    }

    #[test]
    fn decodes_mode_6_interpolation() {
        let mut indices = [0; 16];
        indices[1] = 15;
        indices[2] = 8;
        let block = mode_6_block(127, 1, 0, 0, &indices);
        let mut out = [Color8888::default(); 16];
        decode_bc7_block(&block, &mut out);

        assert_eq!(out[0], Color8888::new(255, 255, 255, 255));
        assert_eq!(out[1], Color8888::new(0, 0, 0, 0));
        // Weight 34: (255 * 30 + 32) >> 6 = 120.
        assert_eq!(out[2], Color8888::new(120, 120, 120, 120));
    }

    #[test]
    fn expands_by_replicating_top_bits() {
        assert_eq!(expand(0b10110, 5), 0b1011_0101);
        assert_eq!(expand(0x7F, 7), 0xFE | 0x01);
        assert_eq!(expand(0xAB, 8), 0xAB);
    }

    #[test]
    fn round_trips_smooth_block() {
        let texels: [Texel; 16] = core::array::from_fn(|i| {
            let (x, y) = ((i % 4) as f32 / 3.0, (i / 4) as f32 / 3.0);
            Texel::new(0.2 + 0.6 * x, 0.3 + 0.4 * y, 0.5, 0.6 + 0.4 * x)
        });
        let mut block = [0u8; 16];
        Bc7Codec.encode_block(&texels, &EncodeParams::default(), &mut block);
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        Bc7Codec.decode_block(&block, ColorDecodeMode::Ideal, &mut out);
        for (a, b) in texels.iter().zip(out.iter()) {
            assert!(a.max_abs_diff(*b) < 0.03, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn solid_colour_is_exact() {
        let color = Color8888::new(10, 200, 77, 255);
        let texels = [Texel::from_color_8888(color); 16];
        let mut block = [0u8; 16];
        encode_bc7_block(&texels, &mut block);
        let mut out = [Color8888::default(); 16];
        decode_bc7_block(&block, &mut out);
        for decoded in out {
            for (a, b) in decoded.to_array().iter().zip(color.to_array().iter()) {
                assert!(a.abs_diff(*b) <= 1);
            }
        }
    }
}
