//! BC2 (DXT2/DXT3): explicit 4-bit alpha followed by a 4-colour BC1 colour block.

use crate::bc1::{decode_color_block, encode_color_block, ColorBlockKind};
use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    texel::{f32_to_unorm8, unorm8_to_f32, Texel},
};

/// Size of a BC2 block.
pub const BC2_BLOCK_BYTES: usize = 16;

/// BC2 block codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bc2Codec;

impl BlockCodec for Bc2Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        BC2_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_color_block(&block[8..16], mode, ColorBlockKind::FourColour, out);

        let alpha = u64::from_le_bytes([
            block[0], block[1], block[2], block[3], block[4], block[5], block[6], block[7],
        ]);
        for (i, texel) in out.iter_mut().take(16).enumerate() {
            let a = ((alpha >> (i * 4)) & 0xF) as u8;
            texel.a = unorm8_to_f32((a << 4) | a);
        }
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        let mut alpha = 0u64;
        for (i, texel) in texels.iter().take(16).enumerate() {
            let a = f32_to_unorm8(texel.a) as u64;
            alpha |= ((a * 15 + 127) / 255) << (i * 4);
        }
        out[..8].copy_from_slice(&alpha.to_le_bytes());
        encode_color_block(texels, params, ColorBlockKind::FourColour, &mut out[8..16]);
    }
}
