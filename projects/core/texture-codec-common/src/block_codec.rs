//! The interface every block-compressed format family implements.
//!
//! A codec only ever sees whole blocks: the surface level code in `texture-codec-api` handles
//! edge clipping on decode, edge replication on encode, sRGB and scheduling.

use crate::texel::Texel;
use derive_enum_all_values::AllValues;

/// Footprint of one block in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockDims {
    /// Width in texels.
    pub width: u8,
    /// Height in texels.
    pub height: u8,
    /// Depth in texels; `1` for every 2D format.
    pub depth: u8,
}

impl BlockDims {
    /// A 2D footprint.
    pub const fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            depth: 1,
        }
    }

    /// The footprint of a single texel, used by uncompressed formats.
    pub const UNIT: BlockDims = BlockDims::new(1, 1);

    /// The 4x4 footprint shared by the BC, ETC and EAC families.
    pub const FOUR_BY_FOUR: BlockDims = BlockDims::new(4, 4);

    /// Number of texels in one block.
    pub const fn texel_count(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Number of blocks needed to cover `width` x `height` texels.
    pub const fn blocks_for(&self, width: usize, height: usize) -> (usize, usize) {
        (
            width.div_ceil(self.width as usize),
            height.div_ceil(self.height as usize),
        )
    }
}

/// Rounding used when interpolating BC1-BC3 colour palettes.
///
/// Hardware vendors and reference decoders disagree on the last bit of the interpolated
/// colours; both behaviours are kept available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum ColorDecodeMode {
    /// `(2 * c0 + c1) / 3` and `(c0 + c1) / 2`, truncating, as specified by D3D.
    #[default]
    Ideal,
    /// `(2 * c0 + c1 + 1) / 3` and `(c0 + c1 + 1) / 2`, as several software decoders do.
    Rounded,
}

/// Parameters consumed by encoders that search a palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeParams {
    /// Texels with alpha below this value are encoded as transparent by formats that only
    /// support 1-bit alpha.
    pub alpha_threshold: f32,
    /// Weight of each channel's squared error in the palette search, R, G, B, A.
    pub channel_weights: [f32; 4],
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            alpha_threshold: 0.5,
            channel_weights: [1.0; 4],
        }
    }
}

impl EncodeParams {
    /// Weighted squared distance between two texels over the RGB channels.
    #[inline]
    pub fn rgb_error(&self, a: &Texel, b: &Texel) -> f32 {
        let w = &self.channel_weights;
        w[0] * (a.r - b.r) * (a.r - b.r)
            + w[1] * (a.g - b.g) * (a.g - b.g)
            + w[2] * (a.b - b.b) * (a.b - b.b)
    }

    /// Weighted squared distance between two texels over all four channels.
    #[inline]
    pub fn rgba_error(&self, a: &Texel, b: &Texel) -> f32 {
        self.rgb_error(a, b) + self.channel_weights[3] * (a.a - b.a) * (a.a - b.a)
    }
}

/// A block-compressed format family.
///
/// Implementations are stateless and shared between worker threads.
pub trait BlockCodec: Send + Sync {
    /// Footprint of one block.
    fn dims(&self) -> BlockDims;

    /// Packed size of one block in bytes.
    fn block_bytes(&self) -> usize;

    /// Decodes one block.
    ///
    /// # Parameters
    ///
    /// - `block`: Exactly [`Self::block_bytes`] bytes.
    /// - `mode`: Palette rounding for the formats that have a choice.
    /// - `out`: [`BlockDims::texel_count`] texels, written row-major.
    fn decode_block(&self, block: &[u8], mode: ColorDecodeMode, out: &mut [Texel]);

    /// Encodes one block.
    ///
    /// # Parameters
    ///
    /// - `texels`: [`BlockDims::texel_count`] texels, row-major.
    /// - `params`: Palette search parameters.
    /// - `out`: Exactly [`Self::block_bytes`] bytes.
    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]);

    /// Whether [`Self::encode_block`] is implemented. Decode-only codecs return `false`.
    fn can_encode(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(BlockDims::FOUR_BY_FOUR, 100, 37, (25, 10))]
    #[case(BlockDims::new(5, 4), 5, 4, (1, 1))]
    #[case(BlockDims::new(12, 12), 13, 1, (2, 1))]
    #[case(BlockDims::UNIT, 7, 3, (7, 3))]
    fn blocks_for_rounds_up(
        #[case] dims: BlockDims,
        #[case] width: usize,
        #[case] height: usize,
        #[case] expected: (usize, usize),
    ) {
        assert_eq!(dims.blocks_for(width, height), expected);
    }

    #[test]
    fn default_decode_mode_is_ideal() {
        assert_eq!(ColorDecodeMode::default(), ColorDecodeMode::Ideal);
        assert_eq!(ColorDecodeMode::all_values().len(), 2);
    }

    #[test]
    fn weighted_error_ignores_zero_weights() {
        let params = EncodeParams {
            alpha_threshold: 0.5,
            channel_weights: [1.0, 0.0, 1.0, 0.0],
        };
        let a = Texel::new(0.0, 0.0, 0.0, 0.0);
        let b = Texel::new(0.5, 1.0, 0.0, 1.0);
        assert_eq!(params.rgba_error(&a, &b), 0.25);
    }
}
