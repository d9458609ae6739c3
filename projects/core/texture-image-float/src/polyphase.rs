//! # Polyphase Kernels
//!
//! Resampling a row of `src` samples into `dst` samples is a convolution whose filter taps
//! depend on where each output sample lands relative to the input grid. A [`PolyphaseKernel`]
//! precomputes those taps once per output position so the per-pixel loop is a dot product.
//!
//! For output sample `i`:
//!
//! ```text
//! centre = (i + 0.5) * src / dst
//! left   = floor(centre - width)
//! out[i] = sum(j in 0..window) weight(i, j) * in[left + j]
//! ```
//!
//! When downsampling the filter is stretched by `src / dst` and each tap is the box-average of
//! the filter over the source pixel (supersampled). When upsampling the filter keeps its
//! natural width and is point sampled.

use crate::Filter;

/// Default number of supersamples used to integrate the filter over a source pixel.
pub const DEFAULT_SAMPLES: usize = 32;

/// Precomputed filter taps for resampling a line of `src` samples into `dst` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyphaseKernel {
    width: f32,
    inverse_scale: f32,
    window_size: usize,
    length: usize,
    weights: Vec<f32>,
}

impl PolyphaseKernel {
    /// Builds the taps of `filter` for a `src_length` to `dst_length` resample.
    ///
    /// # Parameters
    ///
    /// - `filter`: The reconstruction filter.
    /// - `src_length`: Number of input samples. Must be non-zero.
    /// - `dst_length`: Number of output samples. Must be non-zero.
    /// - `samples`: Supersamples per tap when downsampling. See [`DEFAULT_SAMPLES`].
    pub fn new<F: Filter + ?Sized>(
        filter: &F,
        src_length: usize,
        dst_length: usize,
        samples: usize,
    ) -> Self {
        debug_assert!(src_length > 0 && dst_length > 0);

        let mut scale = dst_length as f32 / src_length as f32;
        let inverse_scale = 1.0 / scale;
        let mut samples = samples.max(1);
        if scale > 1.0 {
            // Upsampling: point sample the unstretched filter.
            samples = 1;
            scale = 1.0;
        }

        let width = filter.width() * inverse_scale;
        let window_size = (width * 2.0).ceil() as usize + 1;
        let mut weights = vec![0.0; window_size * dst_length];

        for (i, taps) in weights.chunks_exact_mut(window_size).enumerate() {
            let centre = (0.5 + i as f32) * inverse_scale;
            let left = (centre - width).floor();

            let mut total = 0.0;
            for (j, tap) in taps.iter_mut().enumerate() {
                *tap = filter.sample_box(left + j as f32 - centre, scale, samples);
                total += *tap;
            }

            if total != 0.0 {
                for tap in taps.iter_mut() {
                    *tap /= total;
                }
            }
        }

        Self {
            width,
            inverse_scale,
            window_size,
            length: dst_length,
            weights,
        }
    }

    /// Half-width of the (possibly stretched) filter, in source samples.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Number of taps per output sample.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of output samples.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Index of the first source sample read by output sample `column`. May be negative or past
    /// the end of the source; callers resolve it with a [`WrapMode`](crate::WrapMode).
    #[inline]
    pub fn window_start(&self, column: usize) -> isize {
        let centre = (0.5 + column as f32) * self.inverse_scale;
        (centre - self.width).floor() as isize
    }

    /// The taps of output sample `column`, summing to 1.
    #[inline]
    pub fn taps(&self, column: usize) -> &[f32] {
        &self.weights[column * self.window_size..(column + 1) * self.window_size]
    }
}
