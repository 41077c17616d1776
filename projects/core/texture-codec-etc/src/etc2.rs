//! ETC2 colour formats: RGB, RGB with punch-through alpha, and RGBA8 (EAC alpha + ETC2 colour).

use crate::eac::{decode_eac_block, encode_eac_block, EacVariant, EAC_BLOCK_BYTES};
use crate::etc1::{decode_with, encode_etc1_block, encode_etc2_punch_through_block, ETC_BLOCK_BYTES};
use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    texel::Texel,
};

/// Decodes one opaque ETC2 RGB block.
pub fn decode_etc2_rgb_block(block: &[u8], out: &mut [Texel]) {
    decode_with(
        |data, pixels| texture2ddecoder::decode_etc2_rgb(data, 4, 4, pixels),
        block,
        out,
    );
}

/// ETC2 RGB block codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Etc2RgbCodec;

impl BlockCodec for Etc2RgbCodec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        ETC_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_etc2_rgb_block(block, out);
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        encode_etc1_block(texels, params, out);
    }
}

/// ETC2 RGB with 1-bit punch-through alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Etc2Rgba1Codec;

impl BlockCodec for Etc2Rgba1Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        ETC_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_with(
            |data, pixels| texture2ddecoder::decode_etc2_rgba1(data, 4, 4, pixels),
            block,
            out,
        );
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        encode_etc2_punch_through_block(texels, params, out);
    }
}

/// ETC2 RGBA8: an EAC alpha block followed by an ETC2 RGB block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Etc2Rgba8Codec;

impl BlockCodec for Etc2Rgba8Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        EAC_BLOCK_BYTES + ETC_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_etc2_rgb_block(&block[EAC_BLOCK_BYTES..], out);
        let mut alpha = [0.0; 16];
        decode_eac_block(&block[..EAC_BLOCK_BYTES], EacVariant::Alpha8, &mut alpha);
        for (texel, a) in out.iter_mut().zip(alpha) {
            texel.a = a;
        }
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        let alpha: [f32; 16] = core::array::from_fn(|i| texels[i].a);
        encode_eac_block(&alpha, EacVariant::Alpha8, &mut out[..EAC_BLOCK_BYTES]);
        encode_etc1_block(texels, params, &mut out[EAC_BLOCK_BYTES..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etc1::decode_etc1_block;
    use crate::test_prelude::*;

    fn gradient() -> [Texel; 16] {
        core::array::from_fn(|i| {
            let (x, y) = ((i % 4) as f32 / 3.0, (i / 4) as f32 / 3.0);
            Texel::new(0.3 + 0.2 * x, 0.4 + 0.1 * y, 0.5, 0.2 + 0.6 * y)
        })
    }

    #[test]
    fn etc1_output_decodes_identically_as_etc2() {
        let mut block = [0u8; 8];
        Etc2RgbCodec.encode_block(&gradient(), &EncodeParams::default(), &mut block);
        let mut as_etc1 = [Texel::TRANSPARENT_BLACK; 16];
        let mut as_etc2 = [Texel::TRANSPARENT_BLACK; 16];
        decode_etc1_block(&block, &mut as_etc1);
        decode_etc2_rgb_block(&block, &mut as_etc2);
        assert_eq!(as_etc1, as_etc2);
    }

    #[test]
    fn punch_through_marks_transparent_texels() {
        let colour = Texel::new(0.2, 0.6, 0.4, 1.0);
        let texels: [Texel; 16] = core::array::from_fn(|i| {
            if i % 4 < 2 {
                Texel::new(0.9, 0.9, 0.9, 0.1)
            } else {
                colour
            }
        });
        let mut block = [0u8; 8];
        Etc2Rgba1Codec.encode_block(&texels, &EncodeParams::default(), &mut block);
        let mut out = [Texel::OPAQUE_BLACK; 16];
        Etc2Rgba1Codec.decode_block(&block, ColorDecodeMode::Ideal, &mut out);

        for (i, texel) in out.iter().enumerate() {
            if i % 4 < 2 {
                assert_eq!(texel.a, 0.0, "texel {i}");
            } else {
                assert_eq!(texel.a, 1.0, "texel {i}");
                assert!(texel.max_abs_diff(colour) < 0.05, "{texel:?}");
            }
        }
    }

    #[test]
    fn opaque_punch_through_block_is_plain_etc2() {
        let mut block = [0u8; 8];
        Etc2Rgba1Codec.encode_block(&gradient().map(|t| Texel { a: 1.0, ..t }), &EncodeParams::default(), &mut block);
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        Etc2Rgba1Codec.decode_block(&block, ColorDecodeMode::Ideal, &mut out);
        assert!(out.iter().all(|t| t.a == 1.0));
    }

    #[test]
    fn rgba8_round_trip() {
        let texels = gradient();
        let mut block = [0u8; 16];
        Etc2Rgba8Codec.encode_block(&texels, &EncodeParams::default(), &mut block);
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        Etc2Rgba8Codec.decode_block(&block, ColorDecodeMode::Ideal, &mut out);
        for (a, b) in texels.iter().zip(out.iter()) {
            assert!(a.max_abs_diff(*b) < 0.08, "{a:?} vs {b:?}");
        }
    }
}
