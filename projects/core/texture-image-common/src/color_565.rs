//! # RGB565 Endpoint Colours
//!
//! BC1, BC2 and BC3 store their two colour endpoints as packed 16-bit RGB565 values
//! (5 bits red, 6 bits green, 5 bits blue), little endian.
//!
//! Decoders need the endpoint in two shapes:
//!
//! - The raw 5/6/5 bit fields ([`Color565::red5`], [`Color565::green6`], [`Color565::blue5`]),
//!   which hardware-emulating decoders expand with their own arithmetic.
//! - The expanded 8-bit components ([`Color565::red`], [`Color565::green`], [`Color565::blue`]),
//!   produced by replicating the top bits into the low bits, as written in the D3D functional spec.

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the colour section of BC1, BC2 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from two little endian bytes, as laid out in a block.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self {
            value: u16::from_le_bytes(bytes),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// The 5-bit red field (0-31).
    #[inline]
    pub const fn red5(&self) -> u8 {
        ((self.value >> 11) & 0b11111) as u8
    }

    /// The 6-bit green field (0-63).
    #[inline]
    pub const fn green6(&self) -> u8 {
        ((self.value >> 5) & 0b111111) as u8
    }

    /// The 5-bit blue field (0-31).
    #[inline]
    pub const fn blue5(&self) -> u8 {
        (self.value & 0b11111) as u8
    }

    // NOTE: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/
    // The D3D11 functional spec expands endpoints from 5 or 6 bits to 8 bits by replicating the
    // top bits; all three vendors do this or something equivalent.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = self.red5();
        (r << 3) | (r >> 2)
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = self.green6();
        (g << 2) | (g >> 4)
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.blue5();
        (b << 3) | (b >> 2)
    }

    /// Compares two [`Color565`] values by their raw 16-bit representation.
    ///
    /// BC1 uses this comparison to pick between four-colour and three-colour (1-bit alpha) mode.
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x0000, 0, 0, 0)]
    #[case(0xFFFF, 31, 63, 31)]
    #[case(0xF800, 31, 0, 0)]
    #[case(0x07E0, 0, 63, 0)]
    #[case(0x001F, 0, 0, 31)]
    fn extracts_raw_fields(#[case] raw: u16, #[case] r: u8, #[case] g: u8, #[case] b: u8) {
        let color = Color565::from_raw(raw);
        assert_eq!(color.red5(), r);
        assert_eq!(color.green6(), g);
        assert_eq!(color.blue5(), b);
    }

    #[rstest]
    #[case(0xFFFF, 255, 255, 255)]
    #[case(0x8410, 132, 130, 132)]
    #[case(0x0841, 8, 8, 8)]
    fn expands_by_replicating_top_bits(#[case] raw: u16, #[case] r: u8, #[case] g: u8, #[case] b: u8) {
        let color = Color565::from_raw(raw);
        assert_eq!((color.red(), color.green(), color.blue()), (r, g, b));
    }

    #[test]
    fn reads_little_endian_bytes() {
        assert_eq!(Color565::from_le_bytes([0x00, 0xF8]), Color565::from_raw(0xF800));
    }
}
