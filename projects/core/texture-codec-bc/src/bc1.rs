//! BC1 (DXT1) colour blocks, also used as the colour half of BC2 and BC3.
//!
//! A block is two RGB565 endpoints followed by sixteen 2-bit indices, texel 0 in the lowest bits.
//! When `c0 > c1` the palette has four colours; otherwise it has three colours and index 3 is
//! black, transparent for BC1 with alpha.
//!
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc1>

use likely_stable::unlikely;
use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    color_565::Color565,
    color_8888::Color8888,
    texel::{f32_to_unorm8, Texel},
};

/// Size of a BC1 block, and of the colour half of BC2/BC3 blocks.
pub const BC1_BLOCK_BYTES: usize = 8;

/// How a colour block treats the `c0 <= c1` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBlockKind {
    /// BC1 with 1-bit alpha: index 3 of the 3-colour palette is transparent black.
    PunchThrough,
    /// BC1 without alpha: index 3 of the 3-colour palette is opaque black.
    Opaque,
    /// BC2/BC3: the palette always has four colours.
    FourColour,
}

/// Builds the four-entry palette of a colour block.
///
/// # Parameters
///
/// - `c0`, `c1`: The block endpoints.
/// - `mode`: Rounding of the interpolated entries.
/// - `kind`: Whether the 3-colour palette is available and what index 3 decodes to.
pub fn color_palette(
    c0: Color565,
    c1: Color565,
    mode: ColorDecodeMode,
    kind: ColorBlockKind,
) -> [Color8888; 4] {
    let e0 = c0.to_color_8888();
    let e1 = c1.to_color_8888();

    let three_colour = kind != ColorBlockKind::FourColour && !c0.greater_than(&c1);
    if unlikely(three_colour) {
        let black = match kind {
            ColorBlockKind::PunchThrough => Color8888::new(0, 0, 0, 0),
            _ => Color8888::new(0, 0, 0, 255),
        };
        let mid = Color8888::new(
            half(e0.r, e1.r, mode),
            half(e0.g, e1.g, mode),
            half(e0.b, e1.b, mode),
            255,
        );
        return [e0, e1, mid, black];
    }

    [
        e0,
        e1,
        Color8888::new(
            third(e0.r, e1.r, mode),
            third(e0.g, e1.g, mode),
            third(e0.b, e1.b, mode),
            255,
        ),
        Color8888::new(
            third(e1.r, e0.r, mode),
            third(e1.g, e0.g, mode),
            third(e1.b, e0.b, mode),
            255,
        ),
    ]
}

#[inline(always)]
fn third(near: u8, far: u8, mode: ColorDecodeMode) -> u8 {
    let sum = 2 * near as u32 + far as u32;
    match mode {
        ColorDecodeMode::Ideal => (sum / 3) as u8,
        ColorDecodeMode::Rounded => ((sum + 1) / 3) as u8,
    }
}

#[inline(always)]
fn half(a: u8, b: u8, mode: ColorDecodeMode) -> u8 {
    let sum = a as u32 + b as u32;
    match mode {
        ColorDecodeMode::Ideal => (sum / 2) as u8,
        ColorDecodeMode::Rounded => ((sum + 1) / 2) as u8,
    }
}

/// Decodes an 8-byte colour block into 16 texels.
pub fn decode_color_block(
    block: &[u8],
    mode: ColorDecodeMode,
    kind: ColorBlockKind,
    out: &mut [Texel],
) {
    let c0 = Color565::from_raw(u16::from_le_bytes([block[0], block[1]]));
    let c1 = Color565::from_raw(u16::from_le_bytes([block[2], block[3]]));
    let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    let palette = color_palette(c0, c1, mode, kind).map(Texel::from_color_8888);
    for (i, texel) in out.iter_mut().take(16).enumerate() {
        *texel = palette[((indices >> (i * 2)) & 0b11) as usize];
    }
}

/// Encodes 16 texels into an 8-byte colour block.
///
/// Every pair of candidate endpoints (the quantized block colours and the corners of the block's
/// bounding box) is tried in both palette modes; the pair with the lowest weighted error wins.
/// For [`ColorBlockKind::PunchThrough`], texels with alpha below `params.alpha_threshold` force
/// the 3-colour palette and take index 3.
pub fn encode_color_block(
    texels: &[Texel],
    params: &EncodeParams,
    kind: ColorBlockKind,
    out: &mut [u8],
) {
    let mut transparent = [false; 16];
    if kind == ColorBlockKind::PunchThrough {
        for (flag, texel) in transparent.iter_mut().zip(texels) {
            *flag = texel.a < params.alpha_threshold;
        }
    }
    let any_transparent = transparent.iter().any(|&t| t);

    let candidates = endpoint_candidates(texels, &transparent);
    if candidates.is_empty() {
        // Only transparent texels: 3-colour palette, every index 3.
        out[..4].fill(0);
        out[4..8].fill(0xFF);
        return;
    }

    let mut best = Candidate {
        c0: candidates[0],
        c1: candidates[0],
        indices: 0,
        error: f32::INFINITY,
    };
    for (i, &a) in candidates.iter().enumerate() {
        for &b in &candidates[..=i] {
            let (lo, hi) = if a.raw_value() <= b.raw_value() {
                (a, b)
            } else {
                (b, a)
            };

            // 4-colour mode needs c0 > c1, so it is skipped when the endpoints are equal.
            if !any_transparent && lo != hi {
                let candidate = evaluate(hi, lo, texels, &transparent, params, kind);
                if candidate.error < best.error {
                    best = candidate;
                }
            }
            if kind != ColorBlockKind::FourColour {
                let candidate = evaluate(lo, hi, texels, &transparent, params, kind);
                if candidate.error < best.error {
                    best = candidate;
                }
            }
        }
        if best.error == 0.0 {
            break;
        }
    }

    // A single endpoint in 4-colour only blocks: c0 == c1 decodes every index to c0 anyway.
    if best.error == f32::INFINITY {
        best = evaluate(best.c0, best.c1, texels, &transparent, params, kind);
    }

    out[0..2].copy_from_slice(&best.c0.raw_value().to_le_bytes());
    out[2..4].copy_from_slice(&best.c1.raw_value().to_le_bytes());
    out[4..8].copy_from_slice(&best.indices.to_le_bytes());
}

struct Candidate {
    c0: Color565,
    c1: Color565,
    indices: u32,
    error: f32,
}

fn evaluate(
    c0: Color565,
    c1: Color565,
    texels: &[Texel],
    transparent: &[bool; 16],
    params: &EncodeParams,
    kind: ColorBlockKind,
) -> Candidate {
    let palette = color_palette(c0, c1, ColorDecodeMode::Ideal, kind).map(Texel::from_color_8888);
    let three_colour = kind != ColorBlockKind::FourColour && !c0.greater_than(&c1);
    // Transparent black must not stand in for opaque texels.
    let usable = if three_colour && kind == ColorBlockKind::PunchThrough {
        3
    } else {
        4
    };

    let mut indices = 0u32;
    let mut error = 0.0;
    for (i, texel) in texels.iter().take(16).enumerate() {
        let index = if transparent[i] {
            3
        } else {
            let mut best_index = 0;
            let mut best_error = f32::INFINITY;
            for (index, entry) in palette.iter().take(usable).enumerate() {
                let e = params.rgb_error(texel, entry);
                if e < best_error {
                    best_error = e;
                    best_index = index;
                }
            }
            error += best_error;
            best_index
        };
        indices |= (index as u32) << (i * 2);
    }

    Candidate {
        c0,
        c1,
        indices,
        error,
    }
}

/// Quantized colours of the opaque texels plus the bounding box corners, deduplicated.
fn endpoint_candidates(texels: &[Texel], transparent: &[bool; 16]) -> Vec<Color565> {
    let mut min = [255u8; 3];
    let mut max = [0u8; 3];
    let mut candidates = Vec::with_capacity(18);
    for (texel, &skip) in texels.iter().zip(transparent.iter()) {
        if skip {
            continue;
        }
        let rgb = [
            f32_to_unorm8(texel.r),
            f32_to_unorm8(texel.g),
            f32_to_unorm8(texel.b),
        ];
        for c in 0..3 {
            min[c] = min[c].min(rgb[c]);
            max[c] = max[c].max(rgb[c]);
        }
        candidates.push(Color565::from_rgb(rgb[0], rgb[1], rgb[2]));
    }
    if candidates.is_empty() {
        return candidates;
    }

    candidates.push(Color565::from_rgb(min[0], min[1], min[2]));
    candidates.push(Color565::from_rgb(max[0], max[1], max[2]));
    candidates.sort_unstable();
    candidates.dedup();
    candidates
}

/// BC1 block codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc1Codec {
    kind: ColorBlockKind,
}

impl Bc1Codec {
    /// BC1 without alpha.
    pub const OPAQUE: Self = Self {
        kind: ColorBlockKind::Opaque,
    };

    /// BC1 with 1-bit punch-through alpha.
    pub const WITH_ALPHA: Self = Self {
        kind: ColorBlockKind::PunchThrough,
    };
}

impl BlockCodec for Bc1Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        BC1_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], mode: ColorDecodeMode, out: &mut [Texel]) {
        decode_color_block(block, mode, self.kind, out);
    }

    fn encode_block(&self, texels: &[Texel], params: &EncodeParams, out: &mut [u8]) {
        encode_color_block(texels, params, self.kind, out);
    }
}
