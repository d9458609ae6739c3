//! # Per-Pixel Transforms
//!
//! In-place colour and channel operations on a [`FloatImage`]. Operations that name "RGBA"
//! act on channels 0 to 3 and expect the image to have at least 4 channels; the gamma
//! conversions touch only the colour channels that exist (at most 0 to 2).

use crate::channel_ops;
use crate::FloatImage;

impl FloatImage {
    /// Converts colour channels 0 to 2 from gamma space to linear: `v = v^gamma`.
    pub fn to_linear(&mut self, gamma: f32) {
        self.power_colour_channels(gamma);
    }

    /// Converts colour channels 0 to 2 from linear to gamma space: `v = v^(1/gamma)`.
    pub fn to_gamma(&mut self, gamma: f32) {
        self.power_colour_channels(1.0 / gamma);
    }

    fn power_colour_channels(&mut self, exponent: f32) {
        for c in 0..self.component_count().min(3) {
            channel_ops::power(self.channel_mut(c), exponent);
        }
    }

    /// `v = v * scale + bias` on channel `c`.
    pub fn scale_bias(&mut self, c: usize, scale: f32, bias: f32) {
        channel_ops::scale_bias(self.channel_mut(c), scale, bias);
    }

    /// Clamps channel `c` into `[min, max]`.
    ///
    /// Computed as `min(max(v, min), max)`: inverted bounds give `max`, NaN bounds are ignored.
    pub fn clamp(&mut self, c: usize, min: f32, max: f32) {
        channel_ops::clamp(self.channel_mut(c), min, max);
    }

    /// Maps every RGBA vector through an affine transform.
    ///
    /// `columns[k]` is the contribution of input channel `k` to each output channel:
    ///
    /// ```text
    /// out = r * columns[0] + g * columns[1] + b * columns[2] + a * columns[3] + offset
    /// ```
    pub fn transform(&mut self, columns: &[[f32; 4]; 4], offset: &[f32; 4]) {
        let [r, g, b, a] = self.rgba_mut();
        for i in 0..r.len() {
            let input = [r[i], g[i], b[i], a[i]];
            let mut output = *offset;
            for (value, column) in input.iter().zip(columns) {
                for (out, weight) in output.iter_mut().zip(column) {
                    *out += value * weight;
                }
            }
            [r[i], g[i], b[i], a[i]] = output;
        }
    }

    /// Rearranges the RGBA channels: output channel `i` receives input channel `sources[i]`.
    ///
    /// # Panics
    ///
    /// If any source index is not in `0..4`.
    pub fn swizzle(&mut self, sources: [usize; 4]) {
        let original: [Vec<f32>; 4] = core::array::from_fn(|c| self.channel(c).to_vec());
        for (target, source) in self.rgba_mut().into_iter().zip(sources) {
            target.copy_from_slice(&original[source]);
        }
    }

    /// Moves every RGBA value towards `colour` by fraction `t`.
    pub fn blend(&mut self, colour: [f32; 4], t: f32) {
        for (channel, target) in self.rgba_mut().into_iter().zip(colour) {
            channel_ops::lerp_towards(channel, target, t);
        }
    }

    /// Multiplies the colour channels by alpha.
    pub fn premultiply_alpha(&mut self) {
        let [r, g, b, a] = self.rgba_mut();
        for colour in [r, g, b] {
            channel_ops::multiply(colour, a);
        }
    }

    /// Replaces every RGBA channel with `dot(rgba, weights)`.
    ///
    /// The weights are used as given; callers normalise them.
    pub fn grey_scale(&mut self, weights: [f32; 4]) {
        let [r, g, b, a] = self.rgba_mut();
        for i in 0..r.len() {
            let grey = r[i] * weights[0] + g[i] * weights[1] + b[i] * weights[2] + a[i] * weights[3];
            r[i] = grey;
            g[i] = grey;
            b[i] = grey;
            a[i] = grey;
        }
    }

    /// Sets every pixel to `colour`.
    pub fn fill(&mut self, colour: [f32; 4]) {
        for (channel, value) in self.rgba_mut().into_iter().zip(colour) {
            channel.fill(value);
        }
    }

    /// Sets the outermost ring of pixels to `colour`.
    pub fn set_border(&mut self, colour: [f32; 4]) {
        let width = self.width();
        let height = self.height();
        if width == 0 || height == 0 {
            return;
        }

        for (channel, value) in self.rgba_mut().into_iter().zip(colour) {
            channel[..width].fill(value);
            channel[(height - 1) * width..].fill(value);
            for row in channel.chunks_exact_mut(width) {
                row[0] = value;
                row[width - 1] = value;
            }
        }
    }

    /// Reverses the order of rows in every channel.
    pub fn flip_vertically(&mut self) {
        let width = self.width();
        let height = self.height();
        for c in 0..self.component_count() {
            let channel = self.channel_mut(c);
            for y in 0..height / 2 {
                let (top, bottom) = channel.split_at_mut((height - 1 - y) * width);
                top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
            }
        }
    }

    /// Fraction of pixels whose channel `alpha_channel` is strictly greater than `alpha_ref`.
    ///
    /// Returns 0 for an empty image.
    pub fn alpha_test_coverage(&self, alpha_ref: f32, alpha_channel: usize) -> f32 {
        let alpha = self.channel(alpha_channel);
        if alpha.is_empty() {
            return 0.0;
        }

        let covered = alpha.iter().filter(|&&a| a > alpha_ref).count();
        covered as f32 / alpha.len() as f32
    }

    /// Scales channel `alpha_channel` so that [`alpha_test_coverage`](Self::alpha_test_coverage)
    /// at `alpha_ref` approaches `desired_coverage`.
    ///
    /// Finds the threshold at which the current image has the desired coverage with a 10 step
    /// binary search, then scales alpha by `alpha_ref / threshold` and clamps it to `[0, 1]`.
    pub fn scale_alpha_to_coverage(
        &mut self,
        desired_coverage: f32,
        alpha_ref: f32,
        alpha_channel: usize,
    ) {
        let mut min_ref = 0.0f32;
        let mut max_ref = 1.0f32;
        let mut mid_ref = 0.5f32;

        for _ in 0..10 {
            let coverage = self.alpha_test_coverage(mid_ref, alpha_channel);
            if coverage > desired_coverage {
                min_ref = mid_ref;
            } else if coverage < desired_coverage {
                max_ref = mid_ref;
            } else {
                break;
            }
            mid_ref = (min_ref + max_ref) * 0.5;
        }

        self.scale_bias(alpha_channel, alpha_ref / mid_ref, 0.0);
        self.clamp(alpha_channel, 0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn image_from_rows(rows: &[[f32; 4]], width: usize) -> FloatImage {
        let mut image = FloatImage::new(4, width, rows.len() / width);
        for (i, rgba) in rows.iter().enumerate() {
            image.set_rgba(i % width, i / width, *rgba);
        }
        image
    }

    #[test]
    fn gamma_round_trips_and_skips_alpha() {
        let mut image = image_from_rows(&[[0.25, 0.5, 0.75, 0.5]], 1);

        image.to_linear(2.2);
        assert_eq!(image.pixel(0, 0, 3), 0.5);
        assert!(image.pixel(0, 0, 0) < 0.25);

        image.to_gamma(2.2);
        assert!((image.pixel(0, 0, 0) - 0.25).abs() < 1e-5);
        assert!((image.pixel(0, 0, 2) - 0.75).abs() < 1e-5);
    }

    #[test]
    fn transform_applies_columns_and_offset() {
        let mut image = image_from_rows(&[[1.0, 2.0, 3.0, 4.0]], 1);
        // Swap red and green, keep blue, drop alpha, add 0.5 to alpha.
        let columns = [
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ];

        image.transform(&columns, &[0.0, 0.0, 0.0, 0.5]);

        let pixel: Vec<f32> = (0..4).map(|c| image.pixel(0, 0, c)).collect();
        assert_eq!(pixel, [2.0, 1.0, 3.0, 0.5]);
    }

    #[rstest]
    #[case([0, 1, 2, 3], [0.1, 0.2, 0.3, 0.4])]
    #[case([2, 1, 0, 3], [0.3, 0.2, 0.1, 0.4])]
    #[case([3, 3, 3, 0], [0.4, 0.4, 0.4, 0.1])]
    fn swizzle_reorders_channels(#[case] sources: [usize; 4], #[case] expected: [f32; 4]) {
        let mut image = image_from_rows(&[[0.1, 0.2, 0.3, 0.4]], 1);
        image.swizzle(sources);
        let pixel: Vec<f32> = (0..4).map(|c| image.pixel(0, 0, c)).collect();
        assert_eq!(pixel, expected);
    }

    #[test]
    fn premultiply_scales_colour_only() {
        let mut image = image_from_rows(&[[1.0, 0.5, 0.25, 0.5]], 1);
        image.premultiply_alpha();
        let pixel: Vec<f32> = (0..4).map(|c| image.pixel(0, 0, c)).collect();
        assert_eq!(pixel, [0.5, 0.25, 0.125, 0.5]);
    }

    #[test]
    fn set_border_leaves_interior() {
        let mut image = FloatImage::new(4, 3, 3);
        image.set_border([1.0, 1.0, 1.0, 1.0]);

        for y in 0..3 {
            for x in 0..3 {
                let expected = if x == 1 && y == 1 { 0.0 } else { 1.0 };
                assert_eq!(image.pixel(x, y, 0), expected, "({x}, {y})");
            }
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn flip_reverses_rows(#[case] height: usize) {
        let mut image = FloatImage::new(4, 2, height);
        for y in 0..height {
            image.set_rgba(0, y, [y as f32; 4]);
        }

        image.flip_vertically();

        for y in 0..height {
            assert_eq!(image.pixel(0, y, 2), (height - 1 - y) as f32);
        }
    }

    #[test]
    fn coverage_counts_strictly_greater() {
        let image = image_from_rows(
            &[
                [0.0, 0.0, 0.0, 0.25],
                [0.0, 0.0, 0.0, 0.5],
                [0.0, 0.0, 0.0, 0.75],
                [0.0, 0.0, 0.0, 1.0],
            ],
            2,
        );
        assert_eq!(image.alpha_test_coverage(0.5, 3), 0.5);
        assert_eq!(image.alpha_test_coverage(0.0, 3), 1.0);
    }

    #[test]
    fn scale_alpha_to_coverage_raises_coverage() {
        let rows: Vec<[f32; 4]> = (0..16).map(|i| [0.0, 0.0, 0.0, i as f32 / 32.0]).collect();
        let mut image = image_from_rows(&rows, 4);
        assert_eq!(image.alpha_test_coverage(0.5, 3), 0.0);

        image.scale_alpha_to_coverage(0.5, 0.5, 3);

        let coverage = image.alpha_test_coverage(0.5, 3);
        assert!((coverage - 0.5).abs() <= 1.0 / 16.0, "coverage {coverage}");
        assert!(image.channel(3).iter().all(|&a| (0.0..=1.0).contains(&a)));
    }
}
