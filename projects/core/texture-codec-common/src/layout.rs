//! Channel layouts of uncompressed pixel formats.

/// How the bits of each channel are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    /// Unsigned normalized integer, `[0, (1 << bits) - 1]` maps onto `[0, 1]`.
    Unorm,
    /// IEEE 754 half (16 bit) or single (32 bit) precision float.
    Float,
}

/// Per-channel bit widths and bit offsets of one uncompressed texel, in R, G, B, A order.
///
/// A channel with zero bits is absent from the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelLayout {
    /// Bit width of each channel.
    pub bits: [u8; 4],
    /// Bit offset of each channel from the least significant bit of the texel.
    pub offsets: [u8; 4],
    /// Interpretation of the channel bits.
    pub channel_type: ChannelType,
}

impl PixelLayout {
    /// An integer layout with explicit offsets.
    pub const fn unorm(bits: [u8; 4], offsets: [u8; 4]) -> Self {
        Self {
            bits,
            offsets,
            channel_type: ChannelType::Unorm,
        }
    }

    /// A float layout; present channels are packed consecutively from R to A.
    pub const fn float(bits: [u8; 4]) -> Self {
        let mut offsets = [0u8; 4];
        let mut offset = 0u8;
        let mut x = 0;
        while x < 4 {
            offsets[x] = offset;
            offset += bits[x];
            x += 1;
        }
        Self {
            bits,
            offsets,
            channel_type: ChannelType::Float,
        }
    }

    /// Sum of all channel widths.
    pub const fn texel_bits(&self) -> u32 {
        self.bits[0] as u32 + self.bits[1] as u32 + self.bits[2] as u32 + self.bits[3] as u32
    }

    /// Size of one texel in bytes.
    pub const fn texel_bytes(&self) -> usize {
        self.texel_bits().div_ceil(8) as usize
    }

    /// Whether the channel at `index` (0 = R .. 3 = A) exists.
    #[inline]
    pub const fn has_channel(&self, index: usize) -> bool {
        self.bits[index] != 0
    }

    /// Reads one little endian integer texel of up to 64 bits.
    #[inline]
    pub fn read_raw(&self, bytes: &[u8]) -> u64 {
        let mut raw = [0u8; 8];
        let len = self.texel_bytes().min(8);
        raw[..len].copy_from_slice(&bytes[..len]);
        u64::from_le_bytes(raw)
    }

    /// Writes one little endian integer texel of up to 64 bits.
    #[inline]
    pub fn write_raw(&self, raw: u64, bytes: &mut [u8]) {
        let len = self.texel_bytes().min(8);
        bytes[..len].copy_from_slice(&raw.to_le_bytes()[..len]);
    }
}
