//! # Float Image
//!
//! A dense floating point image with an arbitrary number of channels, stored planar:
//!
//! ```text
//! [ channel 0: w*h floats ][ channel 1: w*h floats ] ... [ channel n-1: w*h floats ]
//! ```
//!
//! Within a channel, pixels are row-major (`y * width + x`).

use crate::WrapMode;

/// A dense, planar, floating point image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloatImage {
    width: usize,
    height: usize,
    component_count: usize,
    data: Vec<f32>,
}

impl FloatImage {
    /// Creates an image of the given size with every sample set to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_image_float::FloatImage;
    ///
    /// let image = FloatImage::new(4, 8, 2);
    /// assert_eq!(image.pixel_count(), 16);
    /// assert!(image.channel(3).iter().all(|&v| v == 0.0));
    /// ```
    pub fn new(component_count: usize, width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            component_count,
            data: vec![0.0; component_count * width * height],
        }
    }

    /// Creates an image from planar data.
    ///
    /// # Returns
    ///
    /// [`None`] if `data` does not hold exactly `component_count * width * height` floats.
    pub fn from_planar(
        component_count: usize,
        width: usize,
        height: usize,
        data: Vec<f32>,
    ) -> Option<Self> {
        if data.len() != component_count * width * height {
            return None;
        }

        Some(Self {
            width,
            height,
            component_count,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of channels.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Number of pixels in a single channel.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether the image has the given extent.
    #[inline]
    pub fn has_extent(&self, width: usize, height: usize) -> bool {
        self.width == width && self.height == height
    }

    /// All samples of channel `c`.
    ///
    /// # Panics
    ///
    /// If `c` is not a valid channel.
    #[inline]
    pub fn channel(&self, c: usize) -> &[f32] {
        assert!(c < self.component_count, "channel {c} out of range");
        let count = self.pixel_count();
        &self.data[c * count..(c + 1) * count]
    }

    /// All samples of channel `c`, mutably.
    ///
    /// # Panics
    ///
    /// If `c` is not a valid channel.
    #[inline]
    pub fn channel_mut(&mut self, c: usize) -> &mut [f32] {
        assert!(c < self.component_count, "channel {c} out of range");
        let count = self.pixel_count();
        &mut self.data[c * count..(c + 1) * count]
    }

    /// Mutable views of the first 4 channels at once.
    ///
    /// # Panics
    ///
    /// If the image has fewer than 4 channels.
    pub fn rgba_mut(&mut self) -> [&mut [f32]; 4] {
        assert!(self.component_count >= 4, "image has fewer than 4 channels");
        let count = self.pixel_count();
        let (r, rest) = self.data.split_at_mut(count);
        let (g, rest) = rest.split_at_mut(count);
        let (b, rest) = rest.split_at_mut(count);
        let a = &mut rest[..count];
        [r, g, b, a]
    }

    /// Value of channel `c` at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize, c: usize) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.channel(c)[y * self.width + x]
    }

    /// Mutable reference to channel `c` at `(x, y)`.
    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize, c: usize) -> &mut f32 {
        debug_assert!(x < self.width && y < self.height);
        let width = self.width;
        &mut self.channel_mut(c)[y * width + x]
    }

    /// Writes all 4 leading channels of `(x, y)` at once.
    #[inline]
    pub fn set_rgba(&mut self, x: usize, y: usize, rgba: [f32; 4]) {
        let index = y * self.width + x;
        for (channel, value) in self.rgba_mut().into_iter().zip(rgba) {
            channel[index] = value;
        }
    }

    /// Index of `(x, y)` within a channel, resolving out of range coordinates with `wrap`.
    #[inline]
    pub fn index(&self, x: isize, y: isize, wrap: WrapMode) -> usize {
        let x = wrap.wrap(x, self.width);
        let y = wrap.wrap(y, self.height);
        y * self.width + x
    }

    /// Changes the number of channels.
    ///
    /// Existing channels are kept; new channels are filled with 0, except a newly added 4th
    /// (alpha) channel which is filled with 1.
    pub fn resize_channel_count(&mut self, component_count: usize) {
        if component_count == self.component_count {
            return;
        }

        let count = self.pixel_count();
        let previous = self.component_count;
        self.data.resize(component_count * count, 0.0);
        self.component_count = component_count;

        if previous < 4 && component_count >= 4 {
            self.channel_mut(3).fill(1.0);
        }
    }

    /// Copies channel `src_channel` of `source` into channel `dst_channel` of `self`.
    ///
    /// # Panics
    ///
    /// If the images differ in size or either channel is out of range.
    pub fn copy_channel_from(&mut self, source: &FloatImage, src_channel: usize, dst_channel: usize) {
        assert!(source.has_extent(self.width, self.height));
        self.channel_mut(dst_channel)
            .copy_from_slice(source.channel(src_channel));
    }
}
