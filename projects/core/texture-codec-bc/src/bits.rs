/// Reads a 128-bit block as a little endian bit stream, least significant bit first.
pub(crate) struct BitReader {
    bits: u128,
}

impl BitReader {
    #[inline]
    pub(crate) fn new(block: &[u8]) -> Self {
        let mut bytes = [0u8; 16];
        let len = block.len().min(16);
        bytes[..len].copy_from_slice(&block[..len]);
        Self {
            bits: u128::from_le_bytes(bytes),
        }
    }

    /// Reads `count` bits (at most 32).
    #[inline]
    pub(crate) fn read(&mut self, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        let value = (self.bits & ((1u128 << count) - 1)) as u32;
        self.bits >>= count;
        value
    }

    /// Reads `count` bits stored most significant bit first.
    #[inline]
    pub(crate) fn read_reversed(&mut self, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        self.read(count).reverse_bits() >> (32 - count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lsb_first_across_bytes() {
        let mut reader = BitReader::new(&[0b1011_0101, 0b0000_0011]);
        assert_eq!(reader.read(1), 1);
        assert_eq!(reader.read(3), 0b010);
        assert_eq!(reader.read(6), 0b11_1011);
        assert_eq!(reader.read(0), 0);
    }

    #[test]
    fn reversed_read_flips_field() {
        let mut reader = BitReader::new(&[0b0000_0110]);
        assert_eq!(reader.read_reversed(3), 0b011);
    }
}
