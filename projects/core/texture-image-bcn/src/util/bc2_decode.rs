//! BC2 (DXT2/DXT3) decoding; based on etcpak <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>

use super::palette::{ColourSection, PaletteMode};
use super::BC2_BLOCK_SIZE;
use crate::DecoderVariant;
use texture_image_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Decodes a BC2 block into a structured representation of pixels
///
/// The first 8 bytes hold 16 explicit 4-bit alpha values (low nibble first), the last 8 bytes
/// are a colour section which always uses four-colour mode.
///
/// Decoders that share the BC1 palette for this section switch to three-colour mode when
/// `c0 <= c1`; this one never does, so such blocks decode differently from them.
///
/// # Example
///
/// ```
/// use texture_image_bcn::util::decode_bc2_block;
/// use texture_image_bcn::DecoderVariant;
///
/// let bc2_block = [0u8; 16];
/// let decoded = decode_bc2_block(&bc2_block, DecoderVariant::Reference);
/// assert!(decoded.has_identical_pixels());
/// ```
#[inline(always)]
pub fn decode_bc2_block(src: &[u8; BC2_BLOCK_SIZE], variant: DecoderVariant) -> Decoded4x4Block {
    // Last 8 bytes contain the color data (same format as BC1)
    let alpha_bytes: [u8; 8] = core::array::from_fn(|i| src[i]);
    let colour_bytes: [u8; 8] = core::array::from_fn(|i| src[8 + i]);
    let colours = ColourSection::read(&colour_bytes, PaletteMode::FourColourOnly, variant);

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    for (index, pixel) in result.pixels.iter_mut().enumerate() {
        let mut colour = colours.colour(index);

        let shift_amount = (index & 0x1) * 4;
        let alpha_value = (alpha_bytes[index >> 1] >> shift_amount) & 0x0F;

        // Scale 4-bit alpha (0-15) to 8-bit (0-255): multiply by 17 (255/15)
        colour.a = alpha_value * 17;
        *pixel = colour;
    }

    result
}

/// Safely wraps [`decode_bc2_block`] for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc2_block_from_slice(src: &[u8], variant: DecoderVariant) -> Option<Decoded4x4Block> {
    let block: &[u8; BC2_BLOCK_SIZE] = src.get(..BC2_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc2_block(block, variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_decode_bc2_block() {
        // Test case: Simple red color with varying alpha
        let bc2_block = [
            // Alpha data (4 bits per pixel): 0x0 to 0xF across the 16 pixels
            0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE,
            // Color data (identical to BC1)
            0x00, 0xF8, // c0 = R:31 G:0 B:0
            0x00, 0xF8, // c1 = R:31 G:0 B:0 (identical for solid color)
            0x00, 0x00, 0x00, 0x00, // All pixels use index 0
        ];

        let decoded = decode_bc2_block(&bc2_block, DecoderVariant::Reference);

        for (pixel_idx, (x, y, pixel)) in decoded.iter_pixels().enumerate() {
            assert_eq!(
                pixel,
                Color8888::new(255, 0, 0, pixel_idx as u8 * 17),
                "Pixel incorrect at ({x}, {y})"
            );
        }
    }

    #[test]
    fn equal_endpoints_stay_in_four_colour_mode() {
        // With BC1 rules, c0 == c1 and index 3 would produce transparent black.
        let bc2_block = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // opaque
            0x00, 0xF8, 0x00, 0xF8, // red, red
            0xFF, 0xFF, 0xFF, 0xFF, // index 3 everywhere
        ];

        let decoded = decode_bc2_block(&bc2_block, DecoderVariant::Reference);

        assert!(decoded.has_identical_pixels());
        assert_eq!(decoded.pixel(2, 2), Color8888::new(255, 0, 0, 255));
    }

    #[test]
    fn test_slice_too_small() {
        assert!(decode_bc2_block_from_slice(&[0u8; 15], DecoderVariant::Reference).is_none());
    }
}
