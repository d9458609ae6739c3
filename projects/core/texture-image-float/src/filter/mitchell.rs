use super::Filter;

/// Mitchell-Netravali cubic filter.
///
/// The default uses `B = C = 1/3`, the values recommended in the original paper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MitchellFilter {
    p0: f32,
    p2: f32,
    p3: f32,
    q0: f32,
    q1: f32,
    q2: f32,
    q3: f32,
}

impl MitchellFilter {
    /// Creates a Mitchell filter with the given `B` and `C` parameters.
    pub fn with_parameters(b: f32, c: f32) -> Self {
        Self {
            p0: (6.0 - 2.0 * b) / 6.0,
            p2: (-18.0 + 12.0 * b + 6.0 * c) / 6.0,
            p3: (12.0 - 9.0 * b - 6.0 * c) / 6.0,
            q0: (8.0 * b + 24.0 * c) / 6.0,
            q1: (-12.0 * b - 48.0 * c) / 6.0,
            q2: (6.0 * b + 30.0 * c) / 6.0,
            q3: (-b - 6.0 * c) / 6.0,
        }
    }
}

impl Default for MitchellFilter {
    fn default() -> Self {
        Self::with_parameters(1.0 / 3.0, 1.0 / 3.0)
    }
}

impl Filter for MitchellFilter {
    #[inline]
    fn width(&self) -> f32 {
        2.0
    }

    fn evaluate(&self, x: f32) -> f32 {
        let x = x.abs();
        if x < 1.0 {
            self.p0 + x * x * (self.p2 + x * self.p3)
        } else if x < 2.0 {
            self.q0 + x * (self.q1 + x * (self.q2 + x * self.q3))
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_continuous_at_one() {
        let filter = MitchellFilter::default();
        let below = filter.evaluate(0.9999);
        let above = filter.evaluate(1.0001);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn centre_weight_matches_closed_form() {
        // (6 - 2B) / 6 with B = 1/3
        let filter = MitchellFilter::default();
        assert!((filter.evaluate(0.0) - 8.0 / 9.0).abs() < 1e-6);
    }
}
