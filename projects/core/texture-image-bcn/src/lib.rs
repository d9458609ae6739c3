#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod format;
pub mod util;

pub use format::*;

use texture_image_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a single block of any decodable [`CompressedFormat`].
///
/// # Parameters
///
/// - `format`: The format of the block
/// - `variant`: Which decoder rounding to reproduce
/// - `src`: The block bytes; must hold at least [`CompressedFormat::block_size`] bytes
///
/// # Returns
///
/// The decoded block, else [`None`] if the format is not decodable or `src` is too short.
///
/// # Example
///
/// ```
/// use texture_image_bcn::{decode_block, CompressedFormat, DecoderVariant};
///
/// let block = [0u8; 8];
/// let decoded = decode_block(CompressedFormat::Bc1, DecoderVariant::Reference, &block).unwrap();
/// assert!(decoded.has_identical_pixels());
/// ```
#[inline]
pub fn decode_block(
    format: CompressedFormat,
    variant: DecoderVariant,
    src: &[u8],
) -> Option<Decoded4x4Block> {
    match format {
        CompressedFormat::Bc1 => util::decode_bc1_block_from_slice(src, variant),
        CompressedFormat::Bc2 => util::decode_bc2_block_from_slice(src, variant),
        CompressedFormat::Bc3 => util::decode_bc3_block_from_slice(src, variant),
        _ => None,
    }
}
