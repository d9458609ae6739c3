use super::Filter;

/// Box filter: 1 inside the support, 0 outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxFilter {
    width: f32,
}

impl BoxFilter {
    /// Creates a box filter with the given half-width.
    pub fn with_width(width: f32) -> Self {
        Self { width }
    }
}

impl Default for BoxFilter {
    fn default() -> Self {
        Self { width: 0.5 }
    }
}

impl Filter for BoxFilter {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        if x.abs() <= self.width {
            1.0
        } else {
            0.0
        }
    }
}
