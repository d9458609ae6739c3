use super::Filter;
use core::f32::consts::PI;

/// Kaiser-windowed sinc filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaiserFilter {
    width: f32,
    alpha: f32,
    stretch: f32,
}

impl KaiserFilter {
    /// Creates a Kaiser filter.
    ///
    /// # Parameters
    ///
    /// - `width`: Half-width of the window.
    /// - `alpha`: Shape of the window. Larger values narrow the main lobe.
    /// - `stretch`: Frequency multiplier applied to the sinc.
    pub fn with_parameters(width: f32, alpha: f32, stretch: f32) -> Self {
        Self {
            width,
            alpha,
            stretch,
        }
    }
}

impl Default for KaiserFilter {
    fn default() -> Self {
        Self::with_parameters(3.0, 4.0, 1.0)
    }
}

impl Filter for KaiserFilter {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    fn evaluate(&self, x: f32) -> f32 {
        let sinc_value = sinc(PI * x * self.stretch);
        let t = x / self.width;
        let window = 1.0 - t * t;
        if window >= 0.0 {
            sinc_value * bessel0(self.alpha * window.sqrt()) / bessel0(self.alpha)
        } else {
            0.0
        }
    }
}

fn sinc(x: f32) -> f32 {
    if x.abs() < f32::EPSILON {
        // Taylor expansion around 0
        1.0 + x * x * (-1.0 / 6.0 + x * x / 120.0)
    } else {
        x.sin() / x
    }
}

/// Zeroth order modified Bessel function of the first kind, by power series.
fn bessel0(x: f32) -> f32 {
    const EPSILON_RATIO: f32 = 1e-6;

    let half_x = 0.5 * x;
    let mut sum = 1.0f32;
    let mut power = 1.0f32;
    let mut term = 1.0f32;
    let mut k = 0u32;
    while term > sum * EPSILON_RATIO {
        k += 1;
        power *= half_x / k as f32;
        term = power * power;
        sum += term;
    }
    sum
}
