//! Colour palette derivation shared by the BC1, BC2 and BC3 colour sections.
//!
//! The colour section is 8 bytes: two RGB565 endpoints followed by 16 2-bit indices
//! into a 4 entry palette built from those endpoints.

use crate::DecoderVariant;
use texture_image_common::{color_565::Color565, color_8888::Color8888};

/// Whether the block may use BC1's three-colour + transparent mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaletteMode {
    /// Three-colour mode is selected when `c0 <= c1` (BC1).
    AllowThreeColour,
    /// Always four-colour, regardless of endpoint order (BC2, BC3).
    FourColourOnly,
}

/// A decoded colour section: the palette, and the 32 bits of indices.
pub(crate) struct ColourSection {
    pub palette: [Color8888; 4],
    pub indices: u32,
}

impl ColourSection {
    /// Reads the 8 byte colour section and builds its palette.
    #[inline(always)]
    pub fn read(src: &[u8; 8], mode: PaletteMode, variant: DecoderVariant) -> Self {
        let c0 = Color565::from_le_bytes([src[0], src[1]]);
        let c1 = Color565::from_le_bytes([src[2], src[3]]);
        let indices = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

        let four_colour = match mode {
            PaletteMode::AllowThreeColour => c0.greater_than(&c1),
            PaletteMode::FourColourOnly => true,
        };

        let palette = match variant {
            DecoderVariant::Reference => reference_palette(c0, c1, four_colour),
            DecoderVariant::HardwareEmulated => nv5x_palette(c0, c1, four_colour),
        };

        Self { palette, indices }
    }

    /// Palette entry used by the pixel at `pixel_index` (0-15, row-major).
    #[inline(always)]
    pub fn colour(&self, pixel_index: usize) -> Color8888 {
        let palette_index = (self.indices >> (pixel_index * 2)) & 0x3;
        self.palette[palette_index as usize]
    }
}

/// Interpolates on endpoints expanded to 8 bits, with truncating division.
#[inline(always)]
fn reference_palette(c0: Color565, c1: Color565, four_colour: bool) -> [Color8888; 4] {
    let (r0, g0, b0) = (c0.red() as u32, c0.green() as u32, c0.blue() as u32);
    let (r1, g1, b1) = (c1.red() as u32, c1.green() as u32, c1.blue() as u32);

    let mut dict = [Color8888::new(0, 0, 0, 0); 4];
    dict[0] = Color8888::new(r0 as u8, g0 as u8, b0 as u8, 255);
    dict[1] = Color8888::new(r1 as u8, g1 as u8, b1 as u8, 255);

    if four_colour {
        let r = (2 * r0 + r1) / 3;
        let g = (2 * g0 + g1) / 3;
        let b = (2 * b0 + b1) / 3;
        dict[2] = Color8888::new(r as u8, g as u8, b as u8, 255);

        let r = (r0 + 2 * r1) / 3;
        let g = (g0 + 2 * g1) / 3;
        let b = (b0 + 2 * b1) / 3;
        dict[3] = Color8888::new(r as u8, g as u8, b as u8, 255);
    } else {
        let r = (r0 + r1) / 2;
        let g = (g0 + g1) / 2;
        let b = (b0 + b1) / 2;
        dict[2] = Color8888::new(r as u8, g as u8, b as u8, 255);
        // dict[3] stays transparent black
    }

    dict
}

/// NV5x hardware: red and blue are expanded and interpolated straight from the 5-bit fields
/// with a `* 22 / 8` (or `* 33 / 8` for the midpoint) scale, green is blended in 8.8 fixed point.
#[inline(always)]
fn nv5x_palette(c0: Color565, c1: Color565, four_colour: bool) -> [Color8888; 4] {
    let (r0, b0) = (c0.red5() as i32, c0.blue5() as i32);
    let (r1, b1) = (c1.red5() as i32, c1.blue5() as i32);
    let g0 = c0.green() as i32;
    let g1 = c1.green() as i32;
    let gdiff = g1 - g0;

    let mut dict = [Color8888::new(0, 0, 0, 0); 4];
    dict[0] = Color8888::new(
        ((3 * r0 * 22) / 8) as u8,
        g0 as u8,
        ((3 * b0 * 22) / 8) as u8,
        255,
    );
    dict[1] = Color8888::new(
        ((3 * r1 * 22) / 8) as u8,
        g1 as u8,
        ((3 * b1 * 22) / 8) as u8,
        255,
    );

    if four_colour {
        dict[2] = Color8888::new(
            (((2 * r0 + r1) * 22) / 8) as u8,
            ((256 * g0 + gdiff / 4 + 128 + gdiff * 80) / 256) as u8,
            (((2 * b0 + b1) * 22) / 8) as u8,
            255,
        );
        dict[3] = Color8888::new(
            (((2 * r1 + r0) * 22) / 8) as u8,
            ((256 * g1 - gdiff / 4 + 128 - gdiff * 80) / 256) as u8,
            (((2 * b1 + b0) * 22) / 8) as u8,
            255,
        );
    } else {
        dict[2] = Color8888::new(
            (((r0 + r1) * 33) / 8) as u8,
            ((256 * g0 + gdiff / 4 + 128 + gdiff * 128) / 256) as u8,
            (((b0 + b1) * 33) / 8) as u8,
            255,
        );
    }

    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Color565 = Color565::from_raw(0x07E0);
    const BLACK: Color565 = Color565::from_raw(0x0000);

    #[test]
    fn variants_agree_on_endpoints() {
        for raw in [0x0000_u16, 0xFFFF, 0xF800, 0x07E0, 0x001F, 0x8410, 0x1234, 0xABCD] {
            let color = Color565::from_raw(raw);
            let reference = reference_palette(color, BLACK, true);
            let hardware = nv5x_palette(color, BLACK, true);
            assert_eq!(reference[0], hardware[0], "endpoint mismatch for {raw:#06X}");
        }
    }

    #[test]
    fn hardware_green_interpolation_differs_from_reference() {
        let reference = reference_palette(GREEN, BLACK, true);
        let hardware = nv5x_palette(GREEN, BLACK, true);

        assert_eq!(reference[2].g, 170);
        assert_eq!(reference[3].g, 85);
        assert_eq!(hardware[2].g, 175);
        assert_eq!(hardware[3].g, 80);
    }

    #[test]
    fn three_colour_mode_has_transparent_fourth_entry() {
        for palette in [
            reference_palette(BLACK, GREEN, false),
            nv5x_palette(BLACK, GREEN, false),
        ] {
            assert_eq!(palette[3], Color8888::new(0, 0, 0, 0));
        }
    }
}
