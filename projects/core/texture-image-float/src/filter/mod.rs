//! # Reconstruction Filters
//!
//! One dimensional filters used to build the [`PolyphaseKernel`](crate::PolyphaseKernel)s that
//! drive resizing and mipmap generation.
//!
//! Every filter is symmetric around 0 and has finite support `[-width, width]`.
//!
//! | Filter             | Width | Notes                                  |
//! | ------------------ | ----- | -------------------------------------- |
//! | [`BoxFilter`]      | 0.5   | Nearest neighbour when upsampling.     |
//! | [`TriangleFilter`] | 1.0   | Linear interpolation.                  |
//! | [`KaiserFilter`]   | 3.0   | Windowed sinc, sharp.                  |
//! | [`MitchellFilter`] | 2.0   | Cubic, `B = C = 1/3`.                  |

mod box_filter;
mod kaiser;
mod mitchell;
mod triangle;

pub use box_filter::BoxFilter;
pub use kaiser::KaiserFilter;
pub use mitchell::MitchellFilter;
pub use triangle::TriangleFilter;

/// A one dimensional, symmetric reconstruction filter.
pub trait Filter {
    /// Half-width of the filter's support.
    fn width(&self) -> f32;

    /// Value of the filter at offset `x` from its centre.
    fn evaluate(&self, x: f32) -> f32;

    /// Average of the filter over the unit interval starting at `x`, taken at `samples`
    /// evenly spaced points, with the filter stretched by `scale`.
    fn sample_box(&self, x: f32, scale: f32, samples: usize) -> f32 {
        let inverse_samples = 1.0 / samples as f32;
        let sum: f32 = (0..samples)
            .map(|s| self.evaluate((x + (s as f32 + 0.5) * inverse_samples) * scale))
            .sum();
        sum * inverse_samples
    }
}

/// One of the built-in filters, selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    /// See [`BoxFilter`].
    Box(BoxFilter),
    /// See [`TriangleFilter`].
    Triangle(TriangleFilter),
    /// See [`KaiserFilter`].
    Kaiser(KaiserFilter),
    /// See [`MitchellFilter`].
    Mitchell(MitchellFilter),
}

impl Filter for Kernel {
    #[inline]
    fn width(&self) -> f32 {
        match self {
            Kernel::Box(f) => f.width(),
            Kernel::Triangle(f) => f.width(),
            Kernel::Kaiser(f) => f.width(),
            Kernel::Mitchell(f) => f.width(),
        }
    }

    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        match self {
            Kernel::Box(f) => f.evaluate(x),
            Kernel::Triangle(f) => f.evaluate(x),
            Kernel::Kaiser(f) => f.evaluate(x),
            Kernel::Mitchell(f) => f.evaluate(x),
        }
    }
}

impl From<BoxFilter> for Kernel {
    fn from(value: BoxFilter) -> Self {
        Kernel::Box(value)
    }
}

impl From<TriangleFilter> for Kernel {
    fn from(value: TriangleFilter) -> Self {
        Kernel::Triangle(value)
    }
}

impl From<KaiserFilter> for Kernel {
    fn from(value: KaiserFilter) -> Self {
        Kernel::Kaiser(value)
    }
}

impl From<MitchellFilter> for Kernel {
    fn from(value: MitchellFilter) -> Self {
        Kernel::Mitchell(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BoxFilter::default().into())]
    #[case(TriangleFilter::default().into())]
    #[case(KaiserFilter::default().into())]
    #[case(MitchellFilter::default().into())]
    fn filters_are_symmetric_and_vanish_outside_support(#[case] kernel: Kernel) {
        for step in 0..20 {
            let x = step as f32 * 0.15;
            assert!((kernel.evaluate(x) - kernel.evaluate(-x)).abs() < 1e-6);
        }
        assert_eq!(kernel.evaluate(kernel.width() + 0.01), 0.0);
    }

    #[test]
    fn sample_box_averages_constant_filter() {
        let filter = BoxFilter::default();
        assert_eq!(filter.sample_box(-0.5, 1.0, 32), 1.0);
    }
}
