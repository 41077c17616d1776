#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]
#![warn(missing_docs)]

pub mod encode;
pub mod layout;

#[cfg(test)]
pub mod test_prelude;

use derive_enum_all_values::AllValues;
use layout::ASTC_BLOCK_BYTES;
use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    color_8888::Color8888,
    texel::Texel,
};

/// Largest footprint, 12x12.
const MAX_TEXELS: usize = 144;

/// The 2D block footprints defined for ASTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum AstcFootprint {
    /// 4x4
    F4x4,
    /// 5x4
    F5x4,
    /// 5x5
    F5x5,
    /// 6x5
    F6x5,
    /// 6x6
    F6x6,
    /// 8x5
    F8x5,
    /// 8x6
    F8x6,
    /// 8x8
    F8x8,
    /// 10x5
    F10x5,
    /// 10x6
    F10x6,
    /// 10x8
    F10x8,
    /// 10x10
    F10x10,
    /// 12x10
    F12x10,
    /// 12x12
    F12x12,
}

impl AstcFootprint {
    /// Width and height in texels.
    pub const fn dims(self) -> BlockDims {
        let (width, height) = match self {
            AstcFootprint::F4x4 => (4, 4),
            AstcFootprint::F5x4 => (5, 4),
            AstcFootprint::F5x5 => (5, 5),
            AstcFootprint::F6x5 => (6, 5),
            AstcFootprint::F6x6 => (6, 6),
            AstcFootprint::F8x5 => (8, 5),
            AstcFootprint::F8x6 => (8, 6),
            AstcFootprint::F8x8 => (8, 8),
            AstcFootprint::F10x5 => (10, 5),
            AstcFootprint::F10x6 => (10, 6),
            AstcFootprint::F10x8 => (10, 8),
            AstcFootprint::F10x10 => (10, 10),
            AstcFootprint::F12x10 => (12, 10),
            AstcFootprint::F12x12 => (12, 12),
        };
        BlockDims::new(width, height)
    }

    /// The shared, stateless codec for this footprint.
    pub fn codec(self) -> &'static dyn BlockCodec {
        &CODECS[self as usize]
    }
}

static CODECS: [AstcCodec; 14] = [
    AstcCodec::new(AstcFootprint::F4x4),
    AstcCodec::new(AstcFootprint::F5x4),
    AstcCodec::new(AstcFootprint::F5x5),
    AstcCodec::new(AstcFootprint::F6x5),
    AstcCodec::new(AstcFootprint::F6x6),
    AstcCodec::new(AstcFootprint::F8x5),
    AstcCodec::new(AstcFootprint::F8x6),
    AstcCodec::new(AstcFootprint::F8x8),
    AstcCodec::new(AstcFootprint::F10x5),
    AstcCodec::new(AstcFootprint::F10x6),
    AstcCodec::new(AstcFootprint::F10x8),
    AstcCodec::new(AstcFootprint::F10x10),
    AstcCodec::new(AstcFootprint::F12x10),
    AstcCodec::new(AstcFootprint::F12x12),
];

/// LDR ASTC codec for one footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstcCodec {
    dims: BlockDims,
}

impl AstcCodec {
    /// Creates the codec of a footprint.
    pub const fn new(footprint: AstcFootprint) -> Self {
        Self {
            dims: footprint.dims(),
        }
    }
}

impl BlockCodec for AstcCodec {
    fn dims(&self) -> BlockDims {
        self.dims
    }

    fn block_bytes(&self) -> usize {
        ASTC_BLOCK_BYTES
    }

    /// Decodes through `texture2ddecoder`. A block it rejects decodes as opaque black.
    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        let (width, height) = (self.dims.width as usize, self.dims.height as usize);
        let count = width * height;
        let mut pixels = [0u32; MAX_TEXELS];
        let result = texture2ddecoder::decode_astc(
            &block[..ASTC_BLOCK_BYTES],
            width,
            height,
            width,
            height,
            &mut pixels[..count],
        );
        match result {
            Ok(()) => {
                for (texel, pixel) in out.iter_mut().zip(&pixels[..count]) {
                    *texel = Texel::from_color_8888(Color8888::from_bgra_u32(*pixel));
                }
            }
            Err(_) => out.iter_mut().take(count).for_each(|t| *t = Texel::OPAQUE_BLACK),
        }
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        encode::encode_astc_block(texels, self.dims, params, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::pack_block;
    use crate::test_prelude::*;

    fn decode(footprint: AstcFootprint, block: &[u8]) -> Vec<Texel> {
        let codec = footprint.codec();
        let mut out = vec![Texel::TRANSPARENT_BLACK; codec.dims().texel_count()];
        codec.decode_block(block, ColorDecodeMode::Ideal, &mut out);
        out
    }

    #[test]
    fn footprints_map_to_their_codecs() {
        for &footprint in AstcFootprint::all_values() {
            let codec = footprint.codec();
            assert_eq!(codec.dims(), footprint.dims(), "{footprint:?}");
            assert_eq!(codec.block_bytes(), 16);
        }
        assert_eq!(AstcFootprint::F12x10.dims(), BlockDims::new(12, 10));
    }

    #[test]
    fn decodes_hand_packed_block() {
        let low = [10, 20, 30, 255];
        let high = [200, 150, 100, 255];
        let mut weights = [0u8; 16];
        weights[5] = 3;
        weights[6] = 1;
        let out = decode(AstcFootprint::F4x4, &pack_block([low, high], &weights));

        assert_eq!(out[0].to_color_8888(), Color8888::new(10, 20, 30, 255));
        assert_eq!(out[5].to_color_8888(), Color8888::new(200, 150, 100, 255));
        let mid = out[6].to_color_8888();
        assert!(mid.r.abs_diff(72) <= 1, "{mid:?}");
    }

    #[rstest]
    #[case(AstcFootprint::F4x4)]
    #[case(AstcFootprint::F6x5)]
    #[case(AstcFootprint::F8x8)]
    #[case(AstcFootprint::F12x12)]
    fn solid_colour_round_trips(#[case] footprint: AstcFootprint) {
        let codec = footprint.codec();
        let colour = Texel::from_color_8888(Color8888::new(40, 90, 160, 200));
        let texels = vec![colour; codec.dims().texel_count()];
        let mut block = [0u8; 16];
        codec.encode_block(&texels, &EncodeParams::default(), &mut block);
        for texel in decode(footprint, &block) {
            assert!(texel.max_abs_diff(colour) <= 1.0 / 255.0 + 1e-6, "{texel:?}");
        }
    }

    #[test]
    fn gradient_round_trips_within_weight_precision() {
        let texels: Vec<Texel> = (0..16)
            .map(|i| {
                let t = ((i % 4) + (i / 4)) as f32 / 6.0;
                Texel::new(0.1 + 0.6 * t, 0.8 - 0.5 * t, 0.3, 1.0)
            })
            .collect();
        let mut block = [0u8; 16];
        AstcFootprint::F4x4
            .codec()
            .encode_block(&texels, &EncodeParams::default(), &mut block);
        for (a, b) in texels.iter().zip(decode(AstcFootprint::F4x4, &block)) {
            assert!(a.max_abs_diff(b) < 0.12, "{a:?} vs {b:?}");
        }
    }
}
