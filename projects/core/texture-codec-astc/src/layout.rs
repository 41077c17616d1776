//! Bit layout of the single-partition blocks written by the encoder.
//!
//! The 128-bit block is little endian. Bits 0-10 hold the block mode, bits 11-12 the partition
//! count minus one, bits 13-16 the colour endpoint mode, and the 8 endpoint values follow from bit
//! 17. Weights are stored from the top of the block downwards: the bit-reversed block is read as a
//! plain 2-bit stream.

/// Size of every ASTC block.
pub const ASTC_BLOCK_BYTES: usize = 16;

/// Block mode `0x042`: 4x4 weight grid, 2-bit weights, one plane.
pub const BLOCK_MODE: u16 = 0x042;

/// Colour endpoint mode 12: LDR RGBA, direct.
pub const CEM_LDR_RGBA_DIRECT: u8 = 12;

/// Width and height of the weight grid.
pub const GRID_SIZE: usize = 4;

/// Decoded weight of each 2-bit weight value, out of 64.
pub const WEIGHT_VALUES: [u32; 4] = [0, 21, 43, 64];

/// Packs two RGBA endpoints and a row-major 4x4 grid of 2-bit weights.
///
/// Endpoint values are stored interleaved as `r0 r1 g0 g1 b0 b1 a0 a1`.
pub fn pack_block(endpoints: [[u8; 4]; 2], weights: &[u8; GRID_SIZE * GRID_SIZE]) -> [u8; ASTC_BLOCK_BYTES] {
    let mut bits = BLOCK_MODE as u128 | (CEM_LDR_RGBA_DIRECT as u128) << 13;
    for channel in 0..4 {
        bits |= (endpoints[0][channel] as u128) << (17 + 16 * channel);
        bits |= (endpoints[1][channel] as u128) << (17 + 16 * channel + 8);
    }
    for (i, &weight) in weights.iter().enumerate() {
        bits |= ((weight & 1) as u128) << (127 - 2 * i);
        bits |= (((weight >> 1) & 1) as u128) << (126 - 2 * i);
    }
    bits.to_le_bytes()
}

/// Interpolates one 8-bit channel the way an LDR decoder does, via 16-bit endpoints.
#[inline]
pub fn interpolate(e0: u8, e1: u8, weight: u32) -> u8 {
    let c0 = (e0 as u32) << 8 | e0 as u32;
    let c1 = (e1 as u32) << 8 | e1 as u32;
    let c = (c0 * (64 - weight) + c1 * weight + 32) >> 6;
    ((c * 255 + 32768) / 65536) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fields() {
        let block = u128::from_le_bytes(pack_block([[0; 4]; 2], &[0; 16]));
        assert_eq!(block & 0x7FF, 0x042);
        assert_eq!((block >> 11) & 0b11, 0, "one partition");
        assert_eq!((block >> 13) & 0xF, 12);
    }

    #[test]
    fn endpoints_interleave_by_channel() {
        let block = u128::from_le_bytes(pack_block([[1, 2, 3, 4], [5, 6, 7, 8]], &[0; 16]));
        let values: Vec<u8> = (0..8).map(|i| (block >> (17 + 8 * i)) as u8).collect();
        assert_eq!(values, [1, 5, 2, 6, 3, 7, 4, 8]);
    }

    #[test]
    fn weights_fill_from_the_top() {
        let mut weights = [0u8; 16];
        weights[0] = 0b01;
        weights[15] = 0b10;
        let block = u128::from_le_bytes(pack_block([[0; 4]; 2], &weights));
        assert_eq!(block >> 126, 0b10);
        assert_eq!((block >> 96) & 0b11, 0b01);
        // Nothing between the endpoints and the weights.
        assert_eq!((block >> 81) & ((1u128 << 15) - 1), 0);
    }

    #[test]
    fn interpolation_hits_endpoints() {
        assert_eq!(interpolate(10, 200, 0), 10);
        assert_eq!(interpolate(10, 200, 64), 200);
        assert_eq!(interpolate(0, 255, 64), 255);
    }
}
