//! ETC1 colour blocks and the native encoder shared with ETC2.
//!
//! A block is a big endian 64-bit word. The upper 32 bits hold two base colours (individual
//! 4-4-4 pairs or a 5-5-5 colour with a 3-bit signed delta), two 3-bit modifier table indices, the
//! differential bit (bit 33) and the flip bit (bit 32). The lower 32 bits hold a 2-bit index per
//! texel, most significant bits in bits 16-31 and least significant bits in bits 0-15, both in
//! column-major texel order.
//!
//! Decoding goes through `texture2ddecoder`; the ETC2 decoders there accept every block this
//! encoder produces, since differential mode is only used when the delta fits.

use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    color_8888::Color8888,
    texel::Texel,
};

/// Size of an ETC1 or ETC2 colour block.
pub const ETC_BLOCK_BYTES: usize = 8;

/// Small and large modifier of each of the 8 tables.
pub static ETC1_MODIFIERS: [[i32; 2]; 8] = [
    [2, 8],
    [5, 17],
    [9, 29],
    [13, 42],
    [18, 60],
    [24, 80],
    [33, 106],
    [47, 183],
];

/// Index a punch-through block uses for transparent texels.
const TRANSPARENT_INDEX: u8 = 2;

/// Runs a `texture2ddecoder` image decoder over a single 4x4 block.
///
/// The reference decoders only fail on buffer size mismatches, which a whole block rules out;
/// should one fail anyway the block decodes as opaque black.
pub(crate) fn decode_with<E>(
    decoder: impl FnOnce(&[u8], &mut [u32]) -> Result<(), E>,
    block: &[u8],
    out: &mut [Texel],
) {
    let mut pixels = [0u32; 16];
    match decoder(&block[..ETC_BLOCK_BYTES], &mut pixels) {
        Ok(()) => {
            for (texel, pixel) in out.iter_mut().zip(pixels) {
                *texel = Texel::from_color_8888(Color8888::from_bgra_u32(pixel));
            }
        }
        Err(_) => out.iter_mut().take(16).for_each(|t| *t = Texel::OPAQUE_BLACK),
    }
}

/// Decodes one ETC1 block.
pub fn decode_etc1_block(block: &[u8], out: &mut [Texel]) {
    decode_with(
        |data, pixels| texture2ddecoder::decode_etc1(data, 4, 4, pixels),
        block,
        out,
    );
}

/// Encodes 16 texels as an ETC1 block, which is also a valid opaque ETC2 RGB block.
pub fn encode_etc1_block(texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
    let bits = encode_color_bits(texels, params, false);
    out[..ETC_BLOCK_BYTES].copy_from_slice(&bits.to_be_bytes());
}

/// Encodes 16 texels as an ETC2 RGB block with punch-through alpha.
///
/// When any texel's alpha is below [`EncodeParams::alpha_threshold`] the opaque bit is cleared and
/// those texels take the transparent index.
pub fn encode_etc2_punch_through_block(texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
    let bits = encode_color_bits(texels, params, true);
    out[..ETC_BLOCK_BYTES].copy_from_slice(&bits.to_be_bytes());
}

fn encode_color_bits(texels: &[Texel], params: &EncodeParams, punch_through: bool) -> u64 {
    let transparent = punch_through && texels.iter().take(16).any(|t| t.a < params.alpha_threshold);
    let is_transparent = |t: &Texel| transparent && t.a < params.alpha_threshold;

    let mut best = (f32::INFINITY, 0u64);
    for flip in [false, true] {
        // A fully transparent sub-block borrows the other's colour so the delta stays small.
        let averages = match [0, 1].map(|sub| subblock_average(texels, flip, sub, &is_transparent)) {
            [Some(a), Some(b)] => [a, b],
            [Some(a), None] => [a, a],
            [None, Some(b)] => [b, b],
            [None, None] => [[0.0; 3]; 2],
        };

        // Punch-through blocks reuse the differential bit as the opaque bit.
        if !punch_through {
            let q = averages.map(|avg| avg.map(|v| quantize(v, 15)));
            let bases = q.map(|c| c.map(|v| (v << 4) | v));
            let (error, tables, indices) = fit_block(texels, params, flip, bases, &is_transparent);
            if error < best.0 {
                let header = (q[0][0] as u64) << 60
                    | (q[1][0] as u64) << 56
                    | (q[0][1] as u64) << 52
                    | (q[1][1] as u64) << 48
                    | (q[0][2] as u64) << 44
                    | (q[1][2] as u64) << 40;
                best = (error, pack(header, tables, false, flip, indices));
            }
        }

        let q0 = averages[0].map(|v| quantize(v, 31));
        let mut q1 = averages[1].map(|v| quantize(v, 31));
        let mut delta = [0i32; 3];
        for c in 0..3 {
            delta[c] = (q1[c] - q0[c]).clamp(-4, 3);
            q1[c] = q0[c] + delta[c];
        }
        let bases = [q0, q1].map(|c| c.map(|v| (v << 3) | (v >> 2)));
        let (error, tables, indices) = fit_block(texels, params, flip, bases, &is_transparent);
        if error < best.0 {
            let header = (q0[0] as u64) << 59
                | ((delta[0] & 0b111) as u64) << 56
                | (q0[1] as u64) << 51
                | ((delta[1] & 0b111) as u64) << 48
                | (q0[2] as u64) << 43
                | ((delta[2] & 0b111) as u64) << 40;
            best = (error, pack(header, tables, !transparent, flip, indices));
        }
    }
    best.1
}

#[inline]
fn quantize(value: f32, max: i32) -> i32 {
    ((value / 255.0) * max as f32).round().clamp(0.0, max as f32) as i32
}

#[inline]
fn in_second_subblock(texel: usize, flip: bool) -> bool {
    let (x, y) = (texel % 4, texel / 4);
    if flip {
        y >= 2
    } else {
        x >= 2
    }
}

/// Mean colour of a sub-block's opaque texels in 8-bit units; `None` when all are transparent.
fn subblock_average(
    texels: &[Texel],
    flip: bool,
    sub: usize,
    is_transparent: &impl Fn(&Texel) -> bool,
) -> Option<[f32; 3]> {
    let mut sum = [0.0f32; 3];
    let mut count = 0;
    for (i, texel) in texels.iter().take(16).enumerate() {
        if in_second_subblock(i, flip) != (sub == 1) || is_transparent(texel) {
            continue;
        }
        sum[0] += texel.r.clamp(0.0, 1.0);
        sum[1] += texel.g.clamp(0.0, 1.0);
        sum[2] += texel.b.clamp(0.0, 1.0);
        count += 1;
    }
    (count > 0).then(|| sum.map(|s| s * 255.0 / count as f32))
}

/// Picks the best modifier table per sub-block and the best index per texel.
fn fit_block(
    texels: &[Texel],
    params: &EncodeParams,
    flip: bool,
    bases: [[i32; 3]; 2],
    is_transparent: &impl Fn(&Texel) -> bool,
) -> (f32, [u8; 2], [u8; 16]) {
    let any_transparent = texels.iter().take(16).any(is_transparent);
    let mut total = 0.0;
    let mut tables = [0u8; 2];
    let mut indices = [0u8; 16];

    for (sub, base) in bases.iter().enumerate() {
        let mut best = (f32::INFINITY, 0u8, [0u8; 16]);
        for (table, &[small, large]) in ETC1_MODIFIERS.iter().enumerate() {
            // With the opaque bit cleared, index 0 carries no modifier and index 2 is transparent.
            let modifiers = if any_transparent {
                [0, large, 0, -large]
            } else {
                [small, large, -small, -large]
            };
            let palette = modifiers.map(|m| {
                Texel::from_color_8888(Color8888::new(
                    (base[0] + m).clamp(0, 255) as u8,
                    (base[1] + m).clamp(0, 255) as u8,
                    (base[2] + m).clamp(0, 255) as u8,
                    255,
                ))
            });

            let mut error = 0.0;
            let mut chosen = [0u8; 16];
            for (i, texel) in texels.iter().take(16).enumerate() {
                if in_second_subblock(i, flip) != (sub == 1) {
                    continue;
                }
                if is_transparent(texel) {
                    chosen[i] = TRANSPARENT_INDEX;
                    continue;
                }
                let (index, e) = palette
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| !any_transparent || *index as u8 != TRANSPARENT_INDEX)
                    .map(|(index, p)| (index as u8, params.rgb_error(texel, p)))
                    .fold((0, f32::INFINITY), |best, cur| if cur.1 < best.1 { cur } else { best });
                chosen[i] = index;
                error += e;
            }
            if error < best.0 {
                best = (error, table as u8, chosen);
            }
        }

        total += best.0;
        tables[sub] = best.1;
        for (i, index) in best.2.iter().enumerate() {
            if in_second_subblock(i, flip) == (sub == 1) {
                indices[i] = *index;
            }
        }
    }
    (total, tables, indices)
}

/// Assembles a block from its colour header, tables, mode bit, flip bit and row-major indices.
fn pack(header: u64, tables: [u8; 2], diff: bool, flip: bool, indices: [u8; 16]) -> u64 {
    let mut bits = header
        | (tables[0] as u64) << 37
        | (tables[1] as u64) << 34
        | (diff as u64) << 33
        | (flip as u64) << 32;
    for (i, index) in indices.iter().enumerate() {
        let position = (i % 4) * 4 + i / 4;
        bits |= ((*index >> 1) as u64) << (16 + position);
        bits |= ((*index & 1) as u64) << position;
    }
    bits
}

/// ETC1 block codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Etc1Codec;

impl BlockCodec for Etc1Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        ETC_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_etc1_block(block, out);
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        encode_etc1_block(texels, params, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn round_trip(texels: &[Texel; 16]) -> [Texel; 16] {
        let mut block = [0u8; 8];
        encode_etc1_block(texels, &EncodeParams::default(), &mut block);
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        decode_etc1_block(&block, &mut out);
        out
    }

    #[test]
    fn zero_block_applies_smallest_modifier() {
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        decode_etc1_block(&[0; 8], &mut out);
        let expected = Texel::from_color_8888(Color8888::new(2, 2, 2, 255));
        assert!(out.iter().all(|t| *t == expected));
    }

    #[test]
    fn packs_indices_column_major() {
        let mut indices = [0u8; 16];
        // Row-major texel 1 is x = 1, y = 0, column-major position 4.
        indices[1] = 3;
        let bits = pack(0, [0, 0], false, false, indices);
        assert_eq!(bits, (1 << 20) | (1 << 4));
    }

    #[test]
    fn round_trips_grey_ramp() {
        let texels: [Texel; 16] = core::array::from_fn(|i| {
            let v = 0.3 + 0.1 * (i % 4) as f32;
            Texel::new(v, v, v, 1.0)
        });
        for (a, b) in texels.iter().zip(round_trip(&texels).iter()) {
            assert!(a.max_abs_diff(*b) < 0.06, "{a:?} vs {b:?}");
        }
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn splits_colours_along_flip(#[case] flip: bool) {
        let red = Texel::new(1.0, 0.0, 0.0, 1.0);
        let blue = Texel::new(0.0, 0.0, 1.0, 1.0);
        let texels: [Texel; 16] =
            core::array::from_fn(|i| if in_second_subblock(i, flip) { blue } else { red });
        for (a, b) in texels.iter().zip(round_trip(&texels).iter()) {
            assert!(a.max_abs_diff(*b) < 0.02, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn differential_delta_stays_in_range() {
        // Sub-block averages far apart force the delta clamp.
        let texels: [Texel; 16] = core::array::from_fn(|i| {
            if in_second_subblock(i, false) {
                Texel::new(0.9, 0.9, 0.9, 1.0)
            } else {
                Texel::new(0.1, 0.1, 0.1, 1.0)
            }
        });
        let bits = encode_color_bits(&texels, &EncodeParams::default(), true);
        let r0 = ((bits >> 59) & 0x1F) as i32;
        let dr = (((bits >> 56) & 0b111) as i32) << 29 >> 29;
        assert!((0..32).contains(&(r0 + dr)));
        assert_eq!((bits >> 33) & 1, 1, "opaque bit");
    }
}
