//! EAC scalar blocks: the ETC2 alpha channel and the R11/RG11 formats.
//!
//! A block is a big endian 64-bit word: 8-bit base, 4-bit multiplier, 4-bit modifier table and
//! sixteen 3-bit indices. Indices are stored column-major, so index `i` belongs to the texel at
//! `x = i / 4`, `y = i % 4`.

use texture_codec_common::{
    block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams},
    texel::Texel,
};

/// Size of one EAC block.
pub const EAC_BLOCK_BYTES: usize = 8;

/// Modifier tables, indexed by the table field then the texel index.
pub static EAC_MODIFIERS: [[i8; 8]; 16] = [
    [-3, -6, -9, -15, 2, 5, 8, 14],
    [-3, -7, -10, -13, 2, 6, 9, 12],
    [-2, -5, -8, -13, 1, 4, 7, 12],
    [-2, -4, -6, -13, 1, 3, 5, 12],
    [-3, -6, -8, -12, 2, 5, 7, 11],
    [-3, -7, -9, -11, 2, 6, 8, 10],
    [-4, -7, -8, -11, 3, 6, 7, 10],
    [-3, -5, -8, -11, 2, 4, 7, 10],
    [-2, -6, -8, -10, 1, 5, 7, 9],
    [-2, -5, -8, -10, 1, 4, 7, 9],
    [-2, -4, -8, -10, 1, 3, 7, 9],
    [-2, -5, -7, -10, 1, 4, 6, 9],
    [-3, -4, -7, -10, 2, 3, 6, 9],
    [-1, -2, -3, -10, 0, 1, 2, 9],
    [-4, -6, -8, -9, 3, 5, 7, 8],
    [-3, -5, -7, -9, 2, 4, 6, 8],
];

/// How the base, modifier and multiplier of a block combine into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EacVariant {
    /// ETC2 alpha: 8-bit result.
    Alpha8,
    /// Unsigned 11-bit result.
    R11,
    /// Signed 11-bit result in `-1023..=1023`.
    R11Signed,
}

impl EacVariant {
    /// Reconstructs the integer value of one texel.
    #[inline]
    pub fn value(self, base: u8, modifier: i32, multiplier: i32) -> i32 {
        match self {
            EacVariant::Alpha8 => (base as i32 + modifier * multiplier).clamp(0, 255),
            EacVariant::R11 => {
                (base as i32 * 8 + 4 + scaled_modifier(modifier, multiplier)).clamp(0, 2047)
            }
            EacVariant::R11Signed => {
                // -128 aliases -127.
                let base = (base as i8).max(-127) as i32;
                (base * 8 + scaled_modifier(modifier, multiplier)).clamp(-1023, 1023)
            }
        }
    }

    /// Largest magnitude of the integer domain, used to normalize.
    #[inline]
    fn scale(self) -> f32 {
        match self {
            EacVariant::Alpha8 => 255.0,
            EacVariant::R11 => 2047.0,
            EacVariant::R11Signed => 1023.0,
        }
    }

    /// Maps an integer value to `[0, 1]`, or `[-1, 1]` for the signed variant.
    #[inline]
    pub fn normalize(self, value: i32) -> f32 {
        value as f32 / self.scale()
    }

    fn quantize(self, value: f32) -> i32 {
        let value = match self {
            EacVariant::R11Signed => value.clamp(-1.0, 1.0),
            _ => value.clamp(0.0, 1.0),
        };
        (value * self.scale()).round() as i32
    }

    /// Base byte whose reconstruction with a zero modifier lands closest to `center`.
    fn base_for(self, center: f32) -> u8 {
        match self {
            EacVariant::Alpha8 => center.round().clamp(0.0, 255.0) as u8,
            EacVariant::R11 => ((center - 4.0) / 8.0).round().clamp(0.0, 255.0) as u8,
            EacVariant::R11Signed => (center / 8.0).round().clamp(-127.0, 127.0) as i8 as u8,
        }
    }

    /// Modifier step of one multiplier unit.
    fn step(self) -> i32 {
        match self {
            EacVariant::Alpha8 => 1,
            _ => 8,
        }
    }
}

/// R11 scales the modifier by `multiplier * 8`; a zero multiplier keeps the raw modifier.
#[inline]
fn scaled_modifier(modifier: i32, multiplier: i32) -> i32 {
    if multiplier == 0 {
        modifier
    } else {
        modifier * multiplier * 8
    }
}

/// Decodes one block into 16 integer values in row-major texel order.
pub fn decode_eac_values(block: &[u8], variant: EacVariant) -> [i32; 16] {
    let bits = u64::from_be_bytes([
        block[0], block[1], block[2], block[3], block[4], block[5], block[6], block[7],
    ]);
    let base = block[0];
    let multiplier = (block[1] >> 4) as i32;
    let table = &EAC_MODIFIERS[(block[1] & 0xF) as usize];

    let mut values = [0; 16];
    for i in 0..16 {
        let index = ((bits >> (45 - 3 * i)) & 0b111) as usize;
        let (x, y) = (i / 4, i % 4);
        values[y * 4 + x] = variant.value(base, table[index] as i32, multiplier);
    }
    values
}

/// Decodes one block into 16 normalized values in row-major texel order.
pub fn decode_eac_block(block: &[u8], variant: EacVariant, out: &mut [f32; 16]) {
    let values = decode_eac_values(block, variant);
    for (dst, value) in out.iter_mut().zip(values) {
        *dst = variant.normalize(value);
    }
}

/// Encodes 16 normalized values, row-major, into one block.
///
/// Every table and multiplier is tried with two bases: the midpoint of the value range, and the
/// base that centres the table's modifier span on that range.
pub fn encode_eac_block(values: &[f32; 16], variant: EacVariant, out: &mut [u8]) {
    let targets = values.map(|v| variant.quantize(v));
    let min = targets.iter().copied().min().unwrap_or(0);
    let max = targets.iter().copied().max().unwrap_or(0);
    let mid = (min + max) as f32 / 2.0;

    let mut best = (i64::MAX, 0u64);
    for (table_index, table) in EAC_MODIFIERS.iter().enumerate() {
        let span_mid = (table[3] as i32 + table[7] as i32) as f32 / 2.0;
        for multiplier in 0..16 {
            let unit = if multiplier == 0 {
                1
            } else {
                multiplier * variant.step()
            };
            for center in [mid, mid - span_mid * unit as f32] {
                let base = variant.base_for(center);
                let candidate = fit_eac(&targets, variant, base, table_index, multiplier);
                if candidate.0 < best.0 {
                    best = candidate;
                }
                if best.0 == 0 {
                    out[..EAC_BLOCK_BYTES].copy_from_slice(&best.1.to_be_bytes());
                    return;
                }
            }
        }
    }
    out[..EAC_BLOCK_BYTES].copy_from_slice(&best.1.to_be_bytes());
}

fn fit_eac(
    targets: &[i32; 16],
    variant: EacVariant,
    base: u8,
    table_index: usize,
    multiplier: i32,
) -> (i64, u64) {
    let table = &EAC_MODIFIERS[table_index];
    let palette: [i32; 8] = core::array::from_fn(|i| variant.value(base, table[i] as i32, multiplier));

    let mut bits = (base as u64) << 56 | (multiplier as u64) << 52 | (table_index as u64) << 48;
    let mut error = 0i64;
    for i in 0..16 {
        let (x, y) = (i / 4, i % 4);
        let target = targets[y * 4 + x];
        let (index, e) = palette
            .iter()
            .enumerate()
            .map(|(index, &p)| (index, ((p - target) as i64).pow(2)))
            .fold((0, i64::MAX), |best, cur| if cur.1 < best.1 { cur } else { best });
        error += e;
        bits |= (index as u64) << (45 - 3 * i);
    }
    (error, bits)
}

/// EAC R11 codec: red only; green and blue decode to 0 and alpha to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EacR11Codec {
    /// Signed variant, decoding to `[-1, 1]`.
    pub signed: bool,
}

fn r11_variant(signed: bool) -> EacVariant {
    if signed {
        EacVariant::R11Signed
    } else {
        EacVariant::R11
    }
}

impl BlockCodec for EacR11Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        EAC_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        let mut red = [0.0; 16];
        decode_eac_block(block, r11_variant(self.signed), &mut red);
        for (texel, r) in out.iter_mut().zip(red) {
            *texel = Texel::new(r, 0.0, 0.0, 1.0);
        }
    }

    fn encode_block(&self, texels: &[Texel], _params: &EncodeParams, out: &mut [u8]) {
        let red: [f32; 16] = core::array::from_fn(|i| texels[i].r);
        encode_eac_block(&red, r11_variant(self.signed), out);
    }
}

/// EAC RG11 codec: a red block then a green block; blue decodes to 0 and alpha to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EacRg11Codec {
    /// Signed variant, decoding to `[-1, 1]`.
    pub signed: bool,
}

impl BlockCodec for EacRg11Codec {
    fn dims(&self) -> BlockDims {
        BlockDims::FOUR_BY_FOUR
    }

    fn block_bytes(&self) -> usize {
        2 * EAC_BLOCK_BYTES
    }

    fn decode_block(&self, block: &[u8], _mode: ColorDecodeMode, out: &mut [Texel]) {
        let variant = r11_variant(self.signed);
        let mut red = [0.0; 16];
        let mut green = [0.0; 16];
        decode_eac_block(&block[..8], variant, &mut red);
        decode_eac_block(&block[8..16], variant, &mut green);
        for (i, texel) in out.iter_mut().take(16).enumerate() {
            *texel = Texel::new(red[i], green[i], 0.0, 1.0);
        }
    }

    fn encode_block(&self, texels: &[Texel], _params: &EncodeParams, out: &mut [u8]) {
        let variant = r11_variant(self.signed);
        let red: [f32; 16] = core::array::from_fn(|i| texels[i].r);
        let green: [f32; 16] = core::array::from_fn(|i| texels[i].g);
        encode_eac_block(&red, variant, &mut out[..8]);
        encode_eac_block(&green, variant, &mut out[8..16]);
    }
}
