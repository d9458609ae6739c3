use super::Filter;

/// Triangle (tent) filter. Equivalent to linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleFilter {
    width: f32,
}

impl TriangleFilter {
    /// Creates a triangle filter with the given half-width.
    pub fn with_width(width: f32) -> Self {
        Self { width }
    }
}

impl Default for TriangleFilter {
    fn default() -> Self {
        Self { width: 1.0 }
    }
}

impl Filter for TriangleFilter {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        let x = x.abs();
        if x < self.width {
            self.width - x
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_at_centre() {
        let filter = TriangleFilter::default();
        assert_eq!(filter.evaluate(0.0), 1.0);
        assert_eq!(filter.evaluate(0.5), 0.5);
        assert_eq!(filter.evaluate(1.0), 0.0);
    }
}
