//! Packed RGB565 endpoint colours, as stored by the BC1-BC3 colour blocks.

use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the BC1, BC2 and BC3 colour blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from 8-bit RGB components, rounding each channel to the
    /// nearest representable 5/6-bit value.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 * 31 + 127) / 255;
        let g = (g as u16 * 63 + 127) / 255;
        let b = (b as u16 * 31 + 127) / 255;
        Self {
            value: (r << 11) | (g << 5) | b,
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    // Endpoints expand from 5/6 bits to 8 bits by replicating the top bits,
    // then convert exactly from 8-bit UNorm to float.
    // https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Compares the raw values, which selects the BC1 palette mode.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts to an opaque [`Color8888`].
    #[inline]
    pub fn to_color_8888(&self) -> Color8888 {
        self.to_color_8888_with_alpha(255)
    }

    /// Converts to a [`Color8888`] with the given alpha.
    #[inline]
    pub fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0xF800, 255, 0, 0)]
    #[case(0x07E0, 0, 255, 0)]
    #[case(0x001F, 0, 0, 255)]
    #[case(0xFFFF, 255, 255, 255)]
    #[case(0x0000, 0, 0, 0)]
    #[case(0x8410, 132, 130, 132)]
    fn expands_by_bit_replication(#[case] raw: u16, #[case] r: u8, #[case] g: u8, #[case] b: u8) {
        let color = Color565::from_raw(raw);
        assert_eq!((color.red(), color.green(), color.blue()), (r, g, b));
    }

    #[test]
    fn from_rgb_round_trips_every_expanded_value() {
        for raw in 0..=u16::MAX {
            let color = Color565::from_raw(raw);
            let requantized = Color565::from_rgb(color.red(), color.green(), color.blue());
            assert_eq!(requantized.raw_value(), raw);
        }
    }
}
