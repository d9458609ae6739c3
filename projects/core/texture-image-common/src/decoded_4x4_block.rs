//! # Decoded 4x4 Block
//!
//! Block compressed formats divide a texture into 4x4 pixel blocks. A [`Decoded4x4Block`]
//! holds the 16 pixels of one such block after decompression, in row-major order:
//!
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! ## Usage
//!
//! ```
//! use texture_image_common::color_8888::Color8888;
//! use texture_image_common::decoded_4x4_block::Decoded4x4Block;
//!
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//! assert!(block.has_identical_pixels());
//! ```

use crate::color_8888::Color8888;

/// Width and height of a block, in pixels.
pub const BLOCK_DIMENSION: usize = 4;

/// Represents a decoded 4x4 block of BC pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    #[inline]
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Gets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 4 or more.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        self.pixels[y * BLOCK_DIMENSION + x]
    }

    /// Iterates the pixels as `(x, y, pixel)` in row-major order.
    pub fn iter_pixels(&self) -> impl Iterator<Item = (usize, usize, Color8888)> + '_ {
        self.pixels.iter().enumerate().map(|(index, pixel)| {
            (index % BLOCK_DIMENSION, index / BLOCK_DIMENSION, *pixel)
        })
    }

    /// Checks if all pixels in the block have the same color values
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_row_major_order() {
        let mut block = Decoded4x4Block::new(Color8888::default());
        block.pixels[9] = Color8888::new(1, 2, 3, 4);

        let (x, y, pixel) = block.iter_pixels().nth(9).unwrap();
        assert_eq!((x, y), (1, 2));
        assert_eq!(pixel, Color8888::new(1, 2, 3, 4));
    }

    #[test]
    fn detects_identical_pixels() {
        let identical_block = Decoded4x4Block::new(Color8888::new(100, 150, 200, 255));

        let mut different_block = identical_block;
        different_block.pixels[10] = Color8888::new(101, 150, 200, 255);

        assert!(identical_block.has_identical_pixels());
        assert!(!different_block.has_identical_pixels());
    }
}
