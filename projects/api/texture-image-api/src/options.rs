//! Enumerations accepted by [`TextureImage`](crate::TextureImage) operations.

use derive_enum_all_values::AllValues;
use texture_image_float::{BoxFilter, KaiserFilter, Kernel, MitchellFilter, TriangleFilter};

/// Shape of a texture, which fixes its number of faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum TextureType {
    /// A single 2D image.
    #[default]
    Plane,
    /// Six square faces: +X, -X, +Y, -Y, +Z, -Z.
    Cube,
}

impl TextureType {
    /// Number of faces a texture of this type has.
    #[inline]
    pub const fn face_count(self) -> usize {
        match self {
            TextureType::Plane => 1,
            TextureType::Cube => 6,
        }
    }
}

/// How alpha is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum AlphaMode {
    /// Alpha is data unrelated to colour.
    #[default]
    None,
    /// Alpha is opacity. Resampling weights colour by alpha, and error metrics weight
    /// colour differences by the reference alpha.
    Transparency,
}

/// A colour channel of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Channel {
    /// Channel 0.
    Red,
    /// Channel 1.
    Green,
    /// Channel 2.
    Blue,
    /// Channel 3.
    Alpha,
}

impl Channel {
    /// Index of the channel within a face.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

/// Encoding of uncompressed input pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum InputFormat {
    /// 8 bits per channel, stored B, G, R, A. Scaled to `[0, 1]`.
    Bgra8,
    /// 32-bit float per channel, stored R, G, B, A. Copied unscaled.
    Rgba32F,
}

/// Filter used by [`TextureImage::resize`](crate::TextureImage::resize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum ResizeFilter {
    /// Averages the source pixels under each target pixel.
    Box,
    /// Linear interpolation.
    Triangle,
    /// Kaiser-windowed sinc. Sharp.
    #[default]
    Kaiser,
    /// Mitchell-Netravali cubic.
    Mitchell,
}

impl ResizeFilter {
    /// The reconstruction kernel for this filter.
    pub fn kernel(self) -> Kernel {
        match self {
            ResizeFilter::Box => BoxFilter::default().into(),
            ResizeFilter::Triangle => TriangleFilter::default().into(),
            ResizeFilter::Kaiser => kaiser(),
            ResizeFilter::Mitchell => MitchellFilter::default().into(),
        }
    }
}

/// Filter used by [`TextureImage::build_next_mipmap`](crate::TextureImage::build_next_mipmap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum MipmapFilter {
    /// 2x2 average. Fastest.
    #[default]
    Box,
    /// Linear interpolation.
    Triangle,
    /// Kaiser-windowed sinc. Sharp.
    Kaiser,
}

impl MipmapFilter {
    /// The reconstruction kernel for this filter.
    pub fn kernel(self) -> Kernel {
        match self {
            MipmapFilter::Box => BoxFilter::default().into(),
            MipmapFilter::Triangle => TriangleFilter::default().into(),
            MipmapFilter::Kaiser => kaiser(),
        }
    }
}

/// Kaiser window used by textures: 3 taps each side, alpha 4, unstretched.
fn kaiser() -> Kernel {
    KaiserFilter::with_parameters(3.0, 4.0, 1.0).into()
}

/// Power-of-two rounding applied by
/// [`TextureImage::resize_to_extent`](crate::TextureImage::resize_to_extent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum RoundMode {
    /// Keep the scaled extent as is.
    #[default]
    None,
    /// Round each dimension up to a power of two.
    ToNext,
    /// Round each dimension to the closest power of two. Ties round up.
    ToNearest,
    /// Round each dimension down to a power of two.
    ToPrevious,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use texture_image_float::Filter;

    #[rstest]
    #[case(TextureType::Plane, 1)]
    #[case(TextureType::Cube, 6)]
    fn face_count_matches_type(#[case] texture_type: TextureType, #[case] expected: usize) {
        assert_eq!(texture_type.face_count(), expected);
    }

    #[test]
    fn channel_indices_are_rgba_order() {
        let indices: Vec<usize> = Channel::all_values().iter().map(|c| c.index()).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[rstest]
    #[case(ResizeFilter::Box, 0.5)]
    #[case(ResizeFilter::Triangle, 1.0)]
    #[case(ResizeFilter::Kaiser, 3.0)]
    #[case(ResizeFilter::Mitchell, 2.0)]
    fn resize_filter_widths(#[case] filter: ResizeFilter, #[case] width: f32) {
        assert_eq!(filter.kernel().width(), width);
    }

    #[test]
    fn mipmap_filters_share_resize_kernels() {
        assert_eq!(MipmapFilter::Box.kernel(), ResizeFilter::Box.kernel());
        assert_eq!(MipmapFilter::Triangle.kernel(), ResizeFilter::Triangle.kernel());
        assert_eq!(MipmapFilter::Kaiser.kernel(), ResizeFilter::Kaiser.kernel());
    }
}
