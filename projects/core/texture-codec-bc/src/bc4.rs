//! BC4 single channel blocks, also used for BC3 alpha and both BC5 channels.
//!
//! Two 8-bit endpoints followed by sixteen 3-bit indices (48 bits, little endian, texel 0 in the
//! lowest bits). The palette is interpolated in floating point, so no rounding mode applies.

use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    texel::{f32_to_snorm8, f32_to_unorm8, Texel},
};

/// Size of one scalar block.
pub const BC4_BLOCK_BYTES: usize = 8;

/// Palette of a scalar block, in endpoint units (`0..=255`, or `-127..=127` when signed).
///
/// `c0 > c1` selects the 8-entry interpolation; otherwise 6 entries are interpolated and the
/// last two are the ends of the range.
pub fn scalar_palette(raw0: u8, raw1: u8, signed: bool) -> [f32; 8] {
    let (e0, e1, min, max) = if signed {
        // -128 aliases -127.
        let e0 = (raw0 as i8).max(-127) as f32;
        let e1 = (raw1 as i8).max(-127) as f32;
        (e0, e1, -127.0, 127.0)
    } else {
        (raw0 as f32, raw1 as f32, 0.0, 255.0)
    };

    let mut palette = [e0, e1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    if e0 > e1 {
        for (i, entry) in palette.iter_mut().enumerate().skip(2) {
            let i = i as f32;
            *entry = ((8.0 - i) * e0 + (i - 1.0) * e1) / 7.0;
        }
    } else {
        for (i, entry) in palette.iter_mut().enumerate().take(6).skip(2) {
            let i = i as f32;
            *entry = ((6.0 - i) * e0 + (i - 1.0) * e1) / 5.0;
        }
        palette[6] = min;
        palette[7] = max;
    }
    palette
}

/// Decodes an 8-byte scalar block into 16 normalized values (`[0, 1]`, or `[-1, 1]` when signed).
pub fn decode_scalar_block(block: &[u8], signed: bool, out: &mut [f32; 16]) {
    let scale = if signed { 127.0 } else { 255.0 };
    let palette = scalar_palette(block[0], block[1], signed).map(|v| v / scale);

    let mut indices = [0u8; 8];
    indices[..6].copy_from_slice(&block[2..8]);
    let indices = u64::from_le_bytes(indices);
    for (i, value) in out.iter_mut().enumerate() {
        *value = palette[((indices >> (i * 3)) & 0b111) as usize];
    }
}

/// Encodes 16 normalized values into an 8-byte scalar block.
///
/// Both palette modes are tried: the 8-entry mode spanning the minimum and maximum, and the
/// 6-entry mode spanning the values strictly inside the range, whose ends are reproduced exactly
/// by the two fixed entries. The one with the lower squared error is kept.
pub fn encode_scalar_block(values: &[f32; 16], signed: bool, out: &mut [u8]) {
    let quantize = |v: f32| -> u8 {
        if signed {
            f32_to_snorm8(v) as u8
        } else {
            f32_to_unorm8(v)
        }
    };
    let as_endpoint = |raw: u8| -> i32 {
        if signed {
            raw as i8 as i32
        } else {
            raw as i32
        }
    };
    let (range_min, range_max) = if signed { (-127, 127) } else { (0, 255) };

    let mut lo = quantize(values[0]);
    let mut hi = lo;
    let mut inner_lo = None::<u8>;
    let mut inner_hi = None::<u8>;
    for &v in values {
        let q = quantize(v);
        if as_endpoint(q) < as_endpoint(lo) {
            lo = q;
        }
        if as_endpoint(q) > as_endpoint(hi) {
            hi = q;
        }
        if as_endpoint(q) != range_min && as_endpoint(q) != range_max {
            inner_lo = Some(match inner_lo {
                Some(x) if as_endpoint(x) <= as_endpoint(q) => x,
                _ => q,
            });
            inner_hi = Some(match inner_hi {
                Some(x) if as_endpoint(x) >= as_endpoint(q) => x,
                _ => q,
            });
        }
    }

    // 8-entry mode needs e0 > e1; a flat block falls through to the 6-entry mode.
    let mut best = (f32::INFINITY, [0u8; 8]);
    if hi != lo {
        best = try_scalar_endpoints(hi, lo, values, signed);
    }
    let (e0, e1) = match (inner_lo, inner_hi) {
        (Some(a), Some(b)) => (a, b),
        _ => (lo, lo),
    };
    let six = try_scalar_endpoints(e0, e1, values, signed);
    if six.0 < best.0 {
        best = six;
    }
    out[..8].copy_from_slice(&best.1);
}

fn try_scalar_endpoints(e0: u8, e1: u8, values: &[f32; 16], signed: bool) -> (f32, [u8; 8]) {
    let scale = if signed { 127.0 } else { 255.0 };
    let palette = scalar_palette(e0, e1, signed).map(|v| v / scale);

    let mut indices = 0u64;
    let mut error = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let v = if signed {
            v.clamp(-1.0, 1.0)
        } else {
            v.clamp(0.0, 1.0)
        };
        let (index, e) = palette
            .iter()
            .enumerate()
            .map(|(index, &p)| (index, (p - v) * (p - v)))
            .fold((0, f32::INFINITY), |best, cur| if cur.1 < best.1 { cur } else { best });
        error += e;
        indices |= (index as u64) << (i * 3);
    }

    let mut block = [0u8; 8];
    block[0] = e0;
    block[1] = e1;
    block[2..8].copy_from_slice(&indices.to_le_bytes()[..6]);
    (error, block)
}

/// BC4 codec: the red channel; green and blue decode to 0 and alpha to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc4Codec {
    /// SNorm variant, decoding to `[-1, 1]`.
    pub signed: bool,
}

impl BlockCodec for Bc4Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        BC4_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        let mut red = [0.0; 16];
        decode_scalar_block(block, self.signed, &mut red);
        for (texel, r) in out.iter_mut().zip(red) {
            *texel = Texel::new(r, 0.0, 0.0, 1.0);
        }
    }

    fn encode_block(&self, texels: &[Texel], _params: &EncodeParams, out: &mut [u8]) {
        let red: [f32; 16] = core::array::from_fn(|i| texels[i].r);
        encode_scalar_block(&red, self.signed, out);
    }
}

/// BC5 codec: two BC4 blocks, red then green; blue decodes to 0 and alpha to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc5Codec {
    /// SNorm variant, decoding to `[-1, 1]`.
    pub signed: bool,
}

impl BlockCodec for Bc5Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        2 * BC4_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        let mut red = [0.0; 16];
        let mut green = [0.0; 16];
        decode_scalar_block(&block[..8], self.signed, &mut red);
        decode_scalar_block(&block[8..16], self.signed, &mut green);
        for (i, texel) in out.iter_mut().take(16).enumerate() {
            *texel = Texel::new(red[i], green[i], 0.0, 1.0);
        }
    }

    fn encode_block(&self, texels: &[Texel], _params: &EncodeParams, out: &mut [u8]) {
        let red: [f32; 16] = core::array::from_fn(|i| texels[i].r);
        let green: [f32; 16] = core::array::from_fn(|i| texels[i].g);
        encode_scalar_block(&red, self.signed, &mut out[..8]);
        encode_scalar_block(&green, self.signed, &mut out[8..16]);
    }
}
