//! BC3 (DXT4/DXT5): a BC4 style alpha block followed by a 4-colour BC1 colour block.

use crate::bc1::{decode_color_block, encode_color_block, ColorBlockKind};
use crate::bc4::{decode_scalar_block, encode_scalar_block};
use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    texel::Texel,
};

/// Size of a BC3 block.
pub const BC3_BLOCK_BYTES: usize = 16;

/// BC3 block codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bc3Codec;

impl BlockCodec for Bc3Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        BC3_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_color_block(&block[8..16], mode, ColorBlockKind::FourColour, out);
        let mut alpha = [0.0; 16];
        decode_scalar_block(&block[..8], false, &mut alpha);
        for (texel, a) in out.iter_mut().zip(alpha) {
            texel.a = a;
        }
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        let alpha: [f32; 16] = core::array::from_fn(|i| texels[i].a);
        encode_scalar_block(&alpha, false, &mut out[..8]);
        encode_color_block(texels, params, ColorBlockKind::FourColour, &mut out[8..16]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn decodes_white_with_interpolated_alpha() {
        let block = [
            // Alpha: 255, 0, every index 2 ((6 * 255 + 0) / 7)
            255, 0, 0b1001_0010, 0b0010_0100, 0b0100_1001, 0b1001_0010, 0b0010_0100, 0b0100_1001,
            // Colour: white, index 0
            0xFF, 0xFF, 0x00, 0x00, 0, 0, 0, 0,
        ];
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        Bc3Codec.decode_block(&block, ColorDecodeMode::Ideal, &mut out);
        for texel in out {
            assert_eq!((texel.r, texel.g, texel.b), (1.0, 1.0, 1.0));
            assert!((texel.a - 6.0 / 7.0).abs() < 1e-6);
        }
    }

    #[test]
    fn round_trips_colour_and_alpha() {
        let texels: [Texel; 16] = core::array::from_fn(|i| {
            let t = i as f32 / 15.0;
            Texel::new(0.2 + 0.6 * t, 0.4, 0.8 - 0.6 * t, t)
        });
        let mut block = [0u8; 16];
        Bc3Codec.encode_block(&texels, &EncodeParams::default(), &mut block);
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        Bc3Codec.decode_block(&block, ColorDecodeMode::Ideal, &mut out);
        for (a, b) in texels.iter().zip(out.iter()) {
            assert!(a.max_abs_diff(*b) < 0.15, "{a:?} vs {b:?}");
        }
    }
}
