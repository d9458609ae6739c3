//! # Resampling
//!
//! Separable resizing of a [`FloatImage`]: every channel is filtered along X into a temporary
//! image, then along Y into the result, each pass driven by a [`PolyphaseKernel`].
//!
//! ## Alpha weighting
//!
//! With an alpha channel selected, colour samples are weighted by `alpha + 1/256` before being
//! normalised, so fully transparent texels contribute (almost) nothing to their neighbours.
//! The alpha channel itself is filtered unweighted.

use crate::polyphase::DEFAULT_SAMPLES;
use crate::{Filter, FloatImage, PolyphaseKernel, WrapMode};

/// Keeps fully transparent texels from producing a zero weight sum.
const ALPHA_BIAS: f32 = 1.0 / 256.0;

impl FloatImage {
    /// Resizes the image to `width` x `height` using `filter`.
    ///
    /// # Parameters
    ///
    /// - `filter`: The reconstruction filter.
    /// - `width`, `height`: Target size. Values of 0 are treated as 1.
    /// - `wrap`: How samples outside the image are resolved.
    /// - `alpha_channel`: Channel used to weight the others, if any.
    pub fn resize<F: Filter + ?Sized>(
        &self,
        filter: &F,
        width: usize,
        height: usize,
        wrap: WrapMode,
        alpha_channel: Option<usize>,
    ) -> FloatImage {
        let width = width.max(1);
        let height = height.max(1);
        if self.pixel_count() == 0 {
            return FloatImage::new(self.component_count(), width, height);
        }
        let alpha_channel = alpha_channel.filter(|&a| a < self.component_count());

        let x_kernel = PolyphaseKernel::new(filter, self.width(), width, DEFAULT_SAMPLES);
        let y_kernel = PolyphaseKernel::new(filter, self.height(), height, DEFAULT_SAMPLES);

        let mut horizontal = FloatImage::new(self.component_count(), width, self.height());
        for c in 0..self.component_count() {
            let weights = alpha_channel.filter(|&a| a != c).map(|a| self.channel(a));
            let output = horizontal.channel_mut(c);
            filter_rows(self, &x_kernel, c, weights, wrap, output);
        }

        let mut result = FloatImage::new(self.component_count(), width, height);
        for c in 0..self.component_count() {
            let weights = alpha_channel
                .filter(|&a| a != c)
                .map(|a| horizontal.channel(a));
            let output = result.channel_mut(c);
            filter_columns(&horizontal, &y_kernel, c, weights, wrap, output);
        }

        result
    }

    /// Halves the image in each dimension (rounding down, minimum 1) using `filter`.
    pub fn down_sample<F: Filter + ?Sized>(
        &self,
        filter: &F,
        wrap: WrapMode,
        alpha_channel: Option<usize>,
    ) -> FloatImage {
        self.resize(
            filter,
            (self.width() / 2).max(1),
            (self.height() / 2).max(1),
            wrap,
            alpha_channel,
        )
    }

    /// Halves the image in each dimension with a dedicated 2x box filter.
    ///
    /// Even extents average pixel pairs. Odd extents `n = 2m + 1` use a 3-tap polyphase box,
    /// so every source pixel contributes with total weight 1:
    ///
    /// ```text
    /// dst[x] = ((m - x) * src[2x] + m * src[2x + 1] + (x + 1) * src[2x + 2]) / n
    /// ```
    pub fn fast_down_sample(&self) -> FloatImage {
        let width = (self.width() / 2).max(1);
        let height = (self.height() / 2).max(1);
        if self.pixel_count() == 0 {
            return FloatImage::new(self.component_count(), width, height);
        }

        let mut horizontal = FloatImage::new(self.component_count(), width, self.height());
        for c in 0..self.component_count() {
            let source = self.channel(c);
            let output = horizontal.channel_mut(c);
            for (src_row, dst_row) in source
                .chunks_exact(self.width())
                .zip(output.chunks_exact_mut(width))
            {
                halve_line(|x| src_row[x], self.width(), dst_row);
            }
        }

        let mut result = FloatImage::new(self.component_count(), width, height);
        let mut column = vec![0.0; height];
        for c in 0..self.component_count() {
            let source = horizontal.channel(c);
            for x in 0..width {
                halve_line(|y| source[y * width + x], self.height(), &mut column);
                let output = result.channel_mut(c);
                for (y, value) in column.iter().enumerate() {
                    output[y * width + x] = *value;
                }
            }
        }

        result
    }
}

fn halve_line(source: impl Fn(usize) -> f32, length: usize, output: &mut [f32]) {
    if length == 1 {
        output[0] = source(0);
    } else if length % 2 == 0 {
        for (x, value) in output.iter_mut().enumerate() {
            *value = (source(2 * x) + source(2 * x + 1)) * 0.5;
        }
    } else {
        let m = (length / 2) as f32;
        let scale = 1.0 / length as f32;
        for (x, value) in output.iter_mut().enumerate() {
            let fx = x as f32;
            *value = ((m - fx) * source(2 * x)
                + m * source(2 * x + 1)
                + (fx + 1.0) * source(2 * x + 2))
                * scale;
        }
    }
}

/// Dot product of `taps` with the samples at `index(j)`, optionally alpha weighted.
#[inline]
fn convolve(
    taps: &[f32],
    index: impl Fn(usize) -> usize,
    values: &[f32],
    weights: Option<&[f32]>,
) -> f32 {
    match weights {
        None => taps
            .iter()
            .enumerate()
            .map(|(j, tap)| tap * values[index(j)])
            .sum(),
        Some(alpha) => {
            let mut sum = 0.0;
            let mut norm = 0.0;
            for (j, tap) in taps.iter().enumerate() {
                let i = index(j);
                let w = tap * (alpha[i] + ALPHA_BIAS);
                norm += w;
                sum += w * values[i];
            }
            if norm != 0.0 {
                sum / norm
            } else {
                0.0
            }
        }
    }
}

fn filter_rows(
    image: &FloatImage,
    kernel: &PolyphaseKernel,
    channel: usize,
    weights: Option<&[f32]>,
    wrap: WrapMode,
    output: &mut [f32],
) {
    let values = image.channel(channel);
    let out_width = kernel.length();
    for (y, row) in output.chunks_exact_mut(out_width).enumerate() {
        for (i, value) in row.iter_mut().enumerate() {
            let left = kernel.window_start(i);
            *value = convolve(
                kernel.taps(i),
                |j| image.index(left + j as isize, y as isize, wrap),
                values,
                weights,
            );
        }
    }
}

fn filter_columns(
    image: &FloatImage,
    kernel: &PolyphaseKernel,
    channel: usize,
    weights: Option<&[f32]>,
    wrap: WrapMode,
    output: &mut [f32],
) {
    let values = image.channel(channel);
    let width = image.width();
    for i in 0..kernel.length() {
        let top = kernel.window_start(i);
        let taps = kernel.taps(i);
        for x in 0..width {
            output[i * width + x] = convolve(
                taps,
                |j| image.index(x as isize, top + j as isize, wrap),
                values,
                weights,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxFilter, KaiserFilter, Kernel, MitchellFilter, TriangleFilter};
    use rstest::rstest;

    fn gradient(width: usize, height: usize) -> FloatImage {
        let mut image = FloatImage::new(4, width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (x + y * width) as f32 / (width * height) as f32;
                image.set_rgba(x, y, [v, 1.0 - v, 0.5, 1.0]);
            }
        }
        image
    }

    #[rstest]
    #[case(BoxFilter::default().into())]
    #[case(TriangleFilter::default().into())]
    #[case(KaiserFilter::default().into())]
    #[case(MitchellFilter::default().into())]
    fn constant_image_stays_constant(#[case] kernel: Kernel) {
        let mut image = FloatImage::new(4, 8, 6);
        image.channel_mut(1).fill(0.25);

        let resized = image.resize(&kernel, 5, 3, WrapMode::Mirror, None);

        assert!(resized.has_extent(5, 3));
        assert!(resized.channel(1).iter().all(|v| (v - 0.25).abs() < 1e-5));
    }

    #[test]
    fn transparent_texels_do_not_bleed_colour() {
        // Left half opaque white, right half transparent black.
        let mut image = FloatImage::new(4, 4, 1);
        for x in 0..2 {
            image.set_rgba(x, 0, [1.0, 1.0, 1.0, 1.0]);
        }

        let weighted = image.resize(&BoxFilter::default(), 1, 1, WrapMode::Clamp, Some(3));
        let unweighted = image.resize(&BoxFilter::default(), 1, 1, WrapMode::Clamp, None);

        assert!(weighted.pixel(0, 0, 0) > 0.99);
        assert!((unweighted.pixel(0, 0, 0) - 0.5).abs() < 1e-5);
        assert!((weighted.pixel(0, 0, 3) - 0.5).abs() < 1e-5);
    }

    #[rstest]
    #[case(8, 8, 4, 4)]
    #[case(5, 3, 2, 1)]
    #[case(1, 7, 1, 3)]
    #[case(1, 1, 1, 1)]
    fn down_sample_halves_extent(
        #[case] width: usize,
        #[case] height: usize,
        #[case] expected_width: usize,
        #[case] expected_height: usize,
    ) {
        let image = gradient(width, height);
        let filter = TriangleFilter::default();

        let slow = image.down_sample(&filter, WrapMode::Mirror, None);
        let fast = image.fast_down_sample();

        assert!(slow.has_extent(expected_width, expected_height));
        assert!(fast.has_extent(expected_width, expected_height));
    }

    #[test]
    fn fast_down_sample_averages_even_blocks() {
        let mut image = FloatImage::new(4, 2, 2);
        image.channel_mut(0).copy_from_slice(&[0.0, 1.0, 0.5, 0.5]);

        let half = image.fast_down_sample();

        assert_eq!(half.pixel(0, 0, 0), 0.5);
    }

    #[test]
    fn fast_down_sample_weights_odd_lines() {
        // n = 3, m = 1: dst[0] = (1 * s0 + 1 * s1 + 1 * s2) / 3
        let mut image = FloatImage::new(4, 3, 1);
        image.channel_mut(0).copy_from_slice(&[0.0, 0.3, 0.6]);

        let half = image.fast_down_sample();

        assert!(half.has_extent(1, 1));
        assert!((half.pixel(0, 0, 0) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn fast_down_sample_preserves_mean_of_odd_lines() {
        let image = gradient(7, 1);
        let mean: f32 = image.channel(0).iter().sum::<f32>() / 7.0;

        let half = image.fast_down_sample();
        let half_mean: f32 = half.channel(0).iter().sum::<f32>() / 3.0;

        assert!((mean - half_mean).abs() < 1e-5);
    }
}
