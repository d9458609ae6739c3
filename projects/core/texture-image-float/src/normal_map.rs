//! # Normal Maps
//!
//! Derives tangent-space normals from a height field, and renormalises existing normal maps.
//!
//! The height gradient is measured with a 9x9 kernel that blends Sobel operators of four sizes
//! (3x3, 5x5, 7x7, 9x9). Each size picks up detail at a different scale, and
//! [`NormalMapWeights`] sets how much each contributes.
//!
//! Normals are produced in `[-1, 1]`. Callers that store them in unsigned textures pack them
//! with `v * 0.5 + 0.5`.

use crate::{FloatImage, WrapMode};

const KERNEL_SIZE: usize = 9;

/// Z component of every unnormalised normal before normalisation; sets how steep slopes appear.
const HEIGHT_SCALE: f32 = 1.0 / 16.0;

#[rustfmt::skip]
const SOBEL_9X9: [f32; 81] = [
    -1.0, -2.0, -3.0, -4.0, 0.0, 4.0, 3.0, 2.0, 1.0,
    -2.0, -3.0, -4.0, -5.0, 0.0, 5.0, 4.0, 3.0, 2.0,
    -3.0, -4.0, -5.0, -6.0, 0.0, 6.0, 5.0, 4.0, 3.0,
    -4.0, -5.0, -6.0, -7.0, 0.0, 7.0, 6.0, 5.0, 4.0,
    -5.0, -6.0, -7.0, -8.0, 0.0, 8.0, 7.0, 6.0, 5.0,
    -4.0, -5.0, -6.0, -7.0, 0.0, 7.0, 6.0, 5.0, 4.0,
    -3.0, -4.0, -5.0, -6.0, 0.0, 6.0, 5.0, 4.0, 3.0,
    -2.0, -3.0, -4.0, -5.0, 0.0, 5.0, 4.0, 3.0, 2.0,
    -1.0, -2.0, -3.0, -4.0, 0.0, 4.0, 3.0, 2.0, 1.0,
];

#[rustfmt::skip]
const SOBEL_7X7: [f32; 49] = [
    -1.0, -2.0, -3.0, 0.0, 3.0, 2.0, 1.0,
    -2.0, -3.0, -4.0, 0.0, 4.0, 3.0, 2.0,
    -3.0, -4.0, -5.0, 0.0, 5.0, 4.0, 3.0,
    -4.0, -5.0, -6.0, 0.0, 6.0, 5.0, 4.0,
    -3.0, -4.0, -5.0, 0.0, 5.0, 4.0, 3.0,
    -2.0, -3.0, -4.0, 0.0, 4.0, 3.0, 2.0,
    -1.0, -2.0, -3.0, 0.0, 3.0, 2.0, 1.0,
];

#[rustfmt::skip]
const SOBEL_5X5: [f32; 25] = [
    -1.0, -2.0, 0.0, 2.0, 1.0,
    -2.0, -3.0, 0.0, 3.0, 2.0,
    -3.0, -4.0, 0.0, 4.0, 3.0,
    -2.0, -3.0, 0.0, 3.0, 2.0,
    -1.0, -2.0, 0.0, 2.0, 1.0,
];

#[rustfmt::skip]
const SOBEL_3X3: [f32; 9] = [
    -1.0, 0.0, 1.0,
    -2.0, 0.0, 2.0,
    -1.0, 0.0, 1.0,
];

/// Per-scale contributions to the height gradient used by [`create_normal_map`].
///
/// Build one with [`NormalMapWeights::new`] and the setters, or use the [`Default`], which
/// halves the weight at every larger scale: `(1, 0.5, 0.25, 0.125) / 1.875`.
///
/// # Examples
///
/// ```
/// use texture_image_float::NormalMapWeights;
///
/// let weights = NormalMapWeights::new().small(1.0).medium(0.5);
/// assert_eq!(weights.as_array(), [1.0, 0.5, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalMapWeights {
    small: f32,
    medium: f32,
    big: f32,
    large: f32,
}

impl NormalMapWeights {
    /// Creates a set of weights that are all 0.
    pub fn new() -> Self {
        Self {
            small: 0.0,
            medium: 0.0,
            big: 0.0,
            large: 0.0,
        }
    }

    /// Creates weights from `[small, medium, big, large]`.
    pub fn from_array([small, medium, big, large]: [f32; 4]) -> Self {
        Self {
            small,
            medium,
            big,
            large,
        }
    }

    /// Weight of the 3x3 Sobel operator (finest detail).
    pub fn small(mut self, weight: f32) -> Self {
        self.small = weight;
        self
    }

    /// Weight of the 5x5 Sobel operator.
    pub fn medium(mut self, weight: f32) -> Self {
        self.medium = weight;
        self
    }

    /// Weight of the 7x7 Sobel operator.
    pub fn big(mut self, weight: f32) -> Self {
        self.big = weight;
        self
    }

    /// Weight of the 9x9 Sobel operator (coarsest detail).
    pub fn large(mut self, weight: f32) -> Self {
        self.large = weight;
        self
    }

    /// The weights as `[small, medium, big, large]`.
    pub fn as_array(&self) -> [f32; 4] {
        [self.small, self.medium, self.big, self.large]
    }
}

impl Default for NormalMapWeights {
    fn default() -> Self {
        let sum = 1.0 + 0.5 + 0.25 + 0.125;
        Self::from_array([1.0 / sum, 0.5 / sum, 0.25 / sum, 0.125 / sum])
    }
}

/// 9x9 row-major kernel with the weighted Sobel operators stacked around its centre,
/// normalised so the absolute values of its entries sum to 1.
fn blended_sobel(weights: &NormalMapWeights) -> [f32; KERNEL_SIZE * KERNEL_SIZE] {
    let mut kernel = SOBEL_9X9.map(|v| v * weights.large);

    let mut add = |table: &[f32], size: usize, weight: f32| {
        let offset = (KERNEL_SIZE - size) / 2;
        for (i, row) in table.chunks_exact(size).enumerate() {
            for (e, value) in row.iter().enumerate() {
                kernel[(i + offset) * KERNEL_SIZE + e + offset] += value * weight;
            }
        }
    };
    add(&SOBEL_7X7, 7, weights.big);
    add(&SOBEL_5X5, 5, weights.medium);
    add(&SOBEL_3X3, 3, weights.small);

    let total: f32 = kernel.iter().map(|v| v.abs()).sum();
    if total != 0.0 {
        for value in kernel.iter_mut() {
            *value /= total;
        }
    }
    kernel
}

fn transpose(kernel: &[f32; KERNEL_SIZE * KERNEL_SIZE]) -> [f32; KERNEL_SIZE * KERNEL_SIZE] {
    core::array::from_fn(|i| {
        let (y, x) = (i / KERNEL_SIZE, i % KERNEL_SIZE);
        kernel[x * KERNEL_SIZE + y]
    })
}

/// Applies a centred 9x9 kernel to `channel` at `(x, y)`.
fn apply_kernel(
    image: &FloatImage,
    kernel: &[f32; KERNEL_SIZE * KERNEL_SIZE],
    x: usize,
    y: usize,
    channel: usize,
    wrap: WrapMode,
) -> f32 {
    let values = image.channel(channel);
    let half = (KERNEL_SIZE / 2) as isize;
    let mut sum = 0.0;
    for (i, row) in kernel.chunks_exact(KERNEL_SIZE).enumerate() {
        let src_y = y as isize + i as isize - half;
        for (e, weight) in row.iter().enumerate() {
            let src_x = x as isize + e as isize - half;
            sum += weight * values[image.index(src_x, src_y, wrap)];
        }
    }
    sum
}

/// Derives a normal map from the height stored in channel 3 of `image`.
///
/// Returns a new 4-channel image holding unit normals in `[-1, 1]` in channels 0 to 2 and the
/// original height in channel 3.
pub fn create_normal_map(
    image: &FloatImage,
    wrap: WrapMode,
    weights: &NormalMapWeights,
) -> FloatImage {
    let du_kernel = blended_sobel(weights);
    let dv_kernel = transpose(&du_kernel);

    let mut normals = FloatImage::new(4, image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let du = apply_kernel(image, &du_kernel, x, y, 3, wrap);
            let dv = apply_kernel(image, &dv_kernel, x, y, 3, wrap);
            let [nx, ny, nz] = normalize([du, dv, HEIGHT_SCALE]);
            normals.set_rgba(x, y, [nx, ny, nz, image.pixel(x, y, 3)]);
        }
    }
    normals
}

/// Renormalises a packed (`[0, 1]` range) normal map to unit length, in place.
///
/// Vectors of length 0 are left as 0.
pub fn normalize_normal_map(image: &mut FloatImage) {
    for c in 0..3 {
        image.scale_bias(c, 2.0, -1.0);
    }

    let [r, g, b, _] = image.rgba_mut();
    for i in 0..r.len() {
        [r[i], g[i], b[i]] = normalize([r[i], g[i], b[i]]);
    }

    for c in 0..3 {
        image.scale_bias(c, 0.5, 0.5);
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if length == 0.0 {
        return [0.0; 3];
    }
    v.map(|c| c / length)
}
