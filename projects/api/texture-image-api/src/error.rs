//! Error types for texture image operations.

use texture_image_bcn::CompressedFormat;
use thiserror::Error;

/// Result of a fallible [`TextureImage`](crate::TextureImage) operation.
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors that can occur when operating on a [`TextureImage`](crate::TextureImage).
///
/// Every variant except [`TextureError::Image`] describes a precondition that was checked
/// before the texture was modified.
#[derive(Debug, Error)]
pub enum TextureError {
    /// The face index does not exist for the texture's type.
    #[error("Invalid face index {index}: texture has {face_count} face(s).")]
    InvalidFaceIndex {
        /// The requested face
        index: usize,
        /// Number of faces of the texture
        face_count: usize,
    },

    /// The face exists but holds no image. Call `allocate` or `load` first.
    #[error("Face {0} has no image allocated.")]
    FaceNotAllocated(usize),

    /// The given extent does not match the existing image.
    #[error("Dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}.")]
    DimensionMismatch {
        /// Width of the existing image
        expected_width: usize,
        /// Height of the existing image
        expected_height: usize,
        /// Width that was given
        width: usize,
        /// Height that was given
        height: usize,
    },

    /// A pixel buffer does not have the length implied by the extent and format.
    #[error("Buffer size mismatch: expected {expected} elements, got {actual}.")]
    BufferSizeMismatch {
        /// The required length
        expected: usize,
        /// The length that was given
        actual: usize,
    },

    /// The compressed format cannot be decoded.
    #[error("Unsupported compressed format: {0:?}.")]
    UnsupportedFormat(CompressedFormat),

    /// Two textures that must have the same number of faces do not.
    #[error("Face count mismatch: expected {expected}, got {actual}.")]
    FaceCountMismatch {
        /// Face count of this texture
        expected: usize,
        /// Face count of the other texture
        actual: usize,
    },

    /// A face required by the operation holds no image.
    #[error("Face {0} is missing.")]
    MissingFace(usize),

    /// Cube faces must be square.
    #[error("Cube faces must be square, got {width}x{height}.")]
    NonSquareCubeFace {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// The requested extent has a zero dimension.
    #[error("Invalid extent {width}x{height}: both dimensions must be non-zero.")]
    EmptyExtent {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// The texture has no populated face.
    #[error("Texture has no populated face.")]
    NoFaces,

    /// The file format cannot hold 4-channel float pixels.
    #[cfg(feature = "file-io")]
    #[error("Cannot save float pixels as {0:?}.")]
    UnsupportedFileFormat(image::ImageFormat),

    /// Reading or writing an image file failed.
    #[cfg(feature = "file-io")]
    #[error("Image I/O failed: {0}")]
    Image(#[from] image::ImageError),
}
