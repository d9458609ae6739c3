//! # Ingestion
//!
//! Writing caller-supplied pixels into an existing face.
//!
//! All entry points require the face to be populated with exactly the given extent (see
//! [`TextureImage::allocate`]); they never allocate or resize. Buffers must have exactly the
//! length implied by the extent:
//!
//! | Source                      | Expected length                          |
//! | --------------------------- | ---------------------------------------- |
//! | [`InterleavedPixels`]       | `width * height * 4` elements            |
//! | [`PlanarPixels`]            | `width * height` elements per channel    |
//! | Compressed                  | `block_size * ceil(w / 4) * ceil(h / 4)` |
//!
//! Everything is validated, and compressed blocks are decoded, before the face is touched.

use crate::texture_image::TextureImage;
use crate::{InputFormat, TextureError, TextureResult};
use texture_image_bcn::{block_count, decode_block, CompressedFormat, DecoderVariant};
use texture_image_common::color_8888::Color8888;
use texture_image_common::decoded_4x4_block::{Decoded4x4Block, BLOCK_DIMENSION};
use tracing::{debug, warn};

/// Interleaved 4-channel pixels, row-major.
#[derive(Debug, Clone, Copy)]
pub enum InterleavedPixels<'a> {
    /// 8-bit channels in B, G, R, A order. Scaled by `1 / 255`.
    Bgra8(&'a [u8]),
    /// 32-bit float channels in R, G, B, A order. Copied as is.
    Rgba32F(&'a [f32]),
}

impl InterleavedPixels<'_> {
    /// Encoding of the pixels.
    pub fn format(&self) -> InputFormat {
        match self {
            InterleavedPixels::Bgra8(_) => InputFormat::Bgra8,
            InterleavedPixels::Rgba32F(_) => InputFormat::Rgba32F,
        }
    }

    /// Number of channel values (not pixels) in the buffer.
    pub fn len(&self) -> usize {
        match self {
            InterleavedPixels::Bgra8(data) => data.len(),
            InterleavedPixels::Rgba32F(data) => data.len(),
        }
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One buffer per output channel, in R, G, B, A order, each row-major.
#[derive(Debug, Clone, Copy)]
pub enum PlanarPixels<'a> {
    /// 8-bit values. Scaled by `1 / 255`.
    Unorm8([&'a [u8]; 4]),
    /// 32-bit float values. Copied as is.
    Float32([&'a [f32]; 4]),
}

impl PlanarPixels<'_> {
    fn channel_lengths(&self) -> [usize; 4] {
        match self {
            PlanarPixels::Unorm8(channels) => channels.map(<[u8]>::len),
            PlanarPixels::Float32(channels) => channels.map(<[f32]>::len),
        }
    }
}

impl TextureImage {
    /// Writes interleaved pixels into face `face`.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidFaceIndex`] / [`TextureError::FaceNotAllocated`] if the face
    ///   does not exist or is unpopulated.
    /// - [`TextureError::DimensionMismatch`] if the face is not `width` x `height`.
    /// - [`TextureError::BufferSizeMismatch`] if `pixels` is not `width * height * 4` long.
    pub fn set_image_2d(
        &mut self,
        pixels: InterleavedPixels<'_>,
        width: usize,
        height: usize,
        face: usize,
    ) -> TextureResult<()> {
        self.face_with_extent(face, width, height)
            .and_then(|_| check_length(width * height * 4, pixels.len()))
            .inspect_err(|e| warn!(face, error = %e, "rejecting interleaved image"))?;

        debug!(face, width, height, format = ?pixels.format(), "ingesting interleaved pixels");
        let image = self.detached_face(face)?;
        let [r, g, b, a] = image.rgba_mut();
        match pixels {
            InterleavedPixels::Bgra8(data) => {
                for (i, bgra) in data.chunks_exact(4).enumerate() {
                    let bgra = [bgra[0], bgra[1], bgra[2], bgra[3]];
                    [r[i], g[i], b[i], a[i]] = Color8888::from_bgra(bgra).to_unorm_f32();
                }
            }
            InterleavedPixels::Rgba32F(data) => {
                for (i, rgba) in data.chunks_exact(4).enumerate() {
                    [r[i], g[i], b[i], a[i]] = [rgba[0], rgba[1], rgba[2], rgba[3]];
                }
            }
        }
        Ok(())
    }

    /// Writes one buffer per channel into face `face`.
    ///
    /// # Errors
    ///
    /// As [`TextureImage::set_image_2d`], with every channel buffer required to be
    /// `width * height` long.
    pub fn set_image_2d_planar(
        &mut self,
        pixels: PlanarPixels<'_>,
        width: usize,
        height: usize,
        face: usize,
    ) -> TextureResult<()> {
        self.face_with_extent(face, width, height)
            .and_then(|_| {
                pixels
                    .channel_lengths()
                    .into_iter()
                    .try_for_each(|len| check_length(width * height, len))
            })
            .inspect_err(|e| warn!(face, error = %e, "rejecting planar image"))?;

        debug!(face, width, height, "ingesting planar pixels");
        let image = self.detached_face(face)?;
        match pixels {
            PlanarPixels::Unorm8(sources) => {
                for (target, source) in image.rgba_mut().into_iter().zip(sources) {
                    for (value, byte) in target.iter_mut().zip(source) {
                        *value = f32::from(*byte) / 255.0;
                    }
                }
            }
            PlanarPixels::Float32(sources) => {
                for (target, source) in image.rgba_mut().into_iter().zip(sources) {
                    target.copy_from_slice(source);
                }
            }
        }
        Ok(())
    }

    /// Decodes block-compressed data into face `face`.
    ///
    /// `data` is a row-major grid of `ceil(width / 4)` x `ceil(height / 4)` blocks. Texels of
    /// edge blocks that fall outside `width` x `height` are discarded.
    ///
    /// # Errors
    ///
    /// - [`TextureError::UnsupportedFormat`] unless `format` is BC1, BC2 or BC3.
    /// - The face and extent errors of [`TextureImage::set_image_2d`].
    /// - [`TextureError::BufferSizeMismatch`] if `data` is not exactly
    ///   [`CompressedFormat::compressed_size`] bytes.
    pub fn set_image_2d_compressed(
        &mut self,
        format: CompressedFormat,
        variant: DecoderVariant,
        width: usize,
        height: usize,
        face: usize,
        data: &[u8],
    ) -> TextureResult<()> {
        let blocks = self
            .face_with_extent(face, width, height)
            .and_then(|_| decode_blocks(format, variant, width, height, data))
            .inspect_err(|e| warn!(face, ?format, error = %e, "rejecting compressed image"))?;

        debug!(face, width, height, ?format, ?variant, "ingesting compressed blocks");
        let (blocks_x, _) = block_count(width, height);
        let image = self.detached_face(face)?;
        for (index, block) in blocks.iter().enumerate() {
            let origin_x = (index % blocks_x) * BLOCK_DIMENSION;
            let origin_y = (index / blocks_x) * BLOCK_DIMENSION;
            for (x, y, pixel) in block.iter_pixels() {
                let (x, y) = (origin_x + x, origin_y + y);
                if x < width && y < height {
                    image.set_rgba(x, y, pixel.to_unorm_f32());
                }
            }
        }
        Ok(())
    }
}

fn check_length(expected: usize, actual: usize) -> TextureResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(TextureError::BufferSizeMismatch { expected, actual })
    }
}

fn decode_blocks(
    format: CompressedFormat,
    variant: DecoderVariant,
    width: usize,
    height: usize,
    data: &[u8],
) -> TextureResult<Vec<Decoded4x4Block>> {
    if !format.is_decodable() {
        return Err(TextureError::UnsupportedFormat(format));
    }
    check_length(format.compressed_size(width, height), data.len())?;

    data.chunks_exact(format.block_size())
        .map(|block| decode_block(format, variant, block))
        .collect::<Option<Vec<_>>>()
        .ok_or(TextureError::UnsupportedFormat(format))
}
