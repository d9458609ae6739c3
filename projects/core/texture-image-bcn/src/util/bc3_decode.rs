//! BC3 (DXT4/DXT5) decoding; based on etcpak <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>

use super::palette::{ColourSection, PaletteMode};
use super::BC3_BLOCK_SIZE;
use crate::DecoderVariant;
use texture_image_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Decodes a BC3 block into a structured representation of pixels
///
/// The first 8 bytes hold a BC4-style alpha block (two 8-bit endpoints and 16 3-bit indices),
/// the last 8 bytes are a colour section which always uses four-colour mode.
///
/// Decoders that share the BC1 palette for this section switch to three-colour mode when
/// `c0 <= c1`; this one never does, so such blocks decode differently from them.
///
/// # Example
///
/// ```
/// use texture_image_bcn::util::decode_bc3_block;
/// use texture_image_bcn::DecoderVariant;
///
/// let bc3_block = [0u8; 16];
/// let decoded = decode_bc3_block(&bc3_block, DecoderVariant::HardwareEmulated);
/// assert!(decoded.has_identical_pixels());
/// ```
#[inline(always)]
pub fn decode_bc3_block(src: &[u8; BC3_BLOCK_SIZE], variant: DecoderVariant) -> Decoded4x4Block {
    let colour_bytes: [u8; 8] = core::array::from_fn(|i| src[8 + i]);
    let colours = ColourSection::read(&colour_bytes, PaletteMode::FourColourOnly, variant);

    let alpha_values = alpha_palette(src[0], src[1]);

    // 48 bits of alpha indices, 3 bits per pixel
    let alpha_indices = u64::from_le_bytes([src[2], src[3], src[4], src[5], src[6], src[7], 0, 0]);

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    for (index, pixel) in result.pixels.iter_mut().enumerate() {
        let mut colour = colours.colour(index);
        let alpha_idx = (alpha_indices >> (index * 3)) & 0b111;
        colour.a = alpha_values[alpha_idx as usize];
        *pixel = colour;
    }

    result
}

/// Builds the 8 entry alpha palette from the two alpha endpoints.
///
/// If `alpha0 > alpha1` there are 6 interpolated values, otherwise 4 interpolated values
/// plus fully transparent and fully opaque.
#[inline(always)]
#[allow(clippy::identity_op)]
fn alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
    let a0 = alpha0 as u16;
    let a1 = alpha1 as u16;

    let mut alpha_values = [0u8; 8];
    alpha_values[0] = alpha0; // bit code 000
    alpha_values[1] = alpha1; // bit code 001

    if alpha0 > alpha1 {
        alpha_values[2] = ((6 * a0 + 1 * a1) / 7) as u8;
        alpha_values[3] = ((5 * a0 + 2 * a1) / 7) as u8;
        alpha_values[4] = ((4 * a0 + 3 * a1) / 7) as u8;
        alpha_values[5] = ((3 * a0 + 4 * a1) / 7) as u8;
        alpha_values[6] = ((2 * a0 + 5 * a1) / 7) as u8;
        alpha_values[7] = ((1 * a0 + 6 * a1) / 7) as u8;
    } else {
        alpha_values[2] = ((4 * a0 + 1 * a1) / 5) as u8;
        alpha_values[3] = ((3 * a0 + 2 * a1) / 5) as u8;
        alpha_values[4] = ((2 * a0 + 3 * a1) / 5) as u8;
        alpha_values[5] = ((1 * a0 + 4 * a1) / 5) as u8;
        alpha_values[6] = 0;
        alpha_values[7] = 255;
    }

    alpha_values
}

/// Safely wraps [`decode_bc3_block`] for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc3_block_from_slice(src: &[u8], variant: DecoderVariant) -> Option<Decoded4x4Block> {
    let block: &[u8; BC3_BLOCK_SIZE] = src.get(..BC3_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc3_block(block, variant))
}
