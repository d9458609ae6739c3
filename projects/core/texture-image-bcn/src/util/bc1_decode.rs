//! BC1 (DXT1) decoding; based on etcpak <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>

use super::palette::{ColourSection, PaletteMode};
use super::BC1_BLOCK_SIZE;
use crate::DecoderVariant;
use texture_image_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Decodes a BC1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The 8 byte BC1 block
/// - `variant`: Which decoder rounding to reproduce
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels. Pixels using palette index 3 of a
/// three-colour block (`c0 <= c1`) are transparent black.
///
/// # Example
///
/// ```
/// use texture_image_bcn::util::decode_bc1_block;
/// use texture_image_bcn::DecoderVariant;
///
/// let bc1_block = [0u8; 8];
/// let decoded = decode_bc1_block(&bc1_block, DecoderVariant::Reference);
/// let pixel_at_0_0 = decoded.pixel(0, 0);
/// ```
#[inline(always)]
pub fn decode_bc1_block(src: &[u8; BC1_BLOCK_SIZE], variant: DecoderVariant) -> Decoded4x4Block {
    let colours = ColourSection::read(src, PaletteMode::AllowThreeColour, variant);

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    for (index, pixel) in result.pixels.iter_mut().enumerate() {
        *pixel = colours.colour(index);
    }

    result
}

/// Safely wraps [`decode_bc1_block`] for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc1_block_from_slice(src: &[u8], variant: DecoderVariant) -> Option<Decoded4x4Block> {
    let block: &[u8; BC1_BLOCK_SIZE] = src.get(..BC1_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc1_block(block, variant))
}
