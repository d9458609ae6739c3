use derive_enum_all_values::AllValues;

/// Block compressed formats known to the texture image.
///
/// Only [`CompressedFormat::Bc1`], [`CompressedFormat::Bc2`] and [`CompressedFormat::Bc3`]
/// can be decoded; the remaining formats are reserved so that sizes can be computed for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum CompressedFormat {
    /// BC1 (DXT1), opaque or 1-bit alpha. 8 bytes per block.
    Bc1,
    /// BC1 with alpha (DXT1a). 8 bytes per block.
    Bc1a,
    /// BC2 (DXT3), explicit 4-bit alpha. 16 bytes per block.
    Bc2,
    /// BC3 (DXT5), interpolated alpha. 16 bytes per block.
    Bc3,
    /// BC3 storing a swizzled normal map (DXT5n). 16 bytes per block.
    Bc3n,
    /// BC4, single channel. 8 bytes per block.
    Bc4,
    /// BC5, two channels. 16 bytes per block.
    Bc5,
    /// BC7. 16 bytes per block.
    Bc7,
}

impl CompressedFormat {
    /// Size of a single 4x4 block in bytes.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            CompressedFormat::Bc1 | CompressedFormat::Bc1a | CompressedFormat::Bc4 => 8,
            CompressedFormat::Bc2
            | CompressedFormat::Bc3
            | CompressedFormat::Bc3n
            | CompressedFormat::Bc5
            | CompressedFormat::Bc7 => 16,
        }
    }

    /// Whether [`crate::decode_block`] can decode this format.
    #[inline]
    pub const fn is_decodable(self) -> bool {
        matches!(
            self,
            CompressedFormat::Bc1 | CompressedFormat::Bc2 | CompressedFormat::Bc3
        )
    }

    /// Number of bytes needed to store an image of `width` x `height` pixels.
    ///
    /// Partial blocks at the right and bottom edges count as whole blocks.
    ///
    /// ```
    /// use texture_image_bcn::CompressedFormat;
    ///
    /// assert_eq!(CompressedFormat::Bc1.compressed_size(5, 4), 16);
    /// assert_eq!(CompressedFormat::Bc3.compressed_size(4, 4), 16);
    /// ```
    #[inline]
    pub const fn compressed_size(self, width: usize, height: usize) -> usize {
        let (blocks_x, blocks_y) = block_count(width, height);
        blocks_x * blocks_y * self.block_size()
    }
}

/// Selects which decoder rounding behaviour to reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum DecoderVariant {
    /// Bit-exact 'ideal' decoding, as described in the D3D9 docs.
    #[default]
    Reference,
    /// Emulates the rounding of NVIDIA NV5x hardware decoders.
    HardwareEmulated,
}

/// Number of 4x4 blocks covering an image, as `(blocks_x, blocks_y)`.
#[inline]
pub const fn block_count(width: usize, height: usize) -> (usize, usize) {
    (width.div_ceil(4), height.div_ceil(4))
}
