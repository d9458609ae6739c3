//! Whole-image load and save through the `image` crate.

use crate::texture_image::{TextureImage, FACE_CHANNELS};
use crate::{TextureError, TextureResult, TextureType};
use image::{DynamicImage, ImageFormat, Rgba, Rgba32FImage};
use std::path::Path;
use texture_image_float::FloatImage;
use tracing::{debug, warn};

/// Containers that store 4-channel 32-bit float pixels.
const FLOAT_FORMATS: [ImageFormat; 1] = [ImageFormat::OpenExr];

impl TextureImage {
    /// Replaces the texture with a single-face plane read from `path`.
    ///
    /// The format is inferred from the file. Pixels are converted to 32-bit float RGBA, so 8-bit
    /// sources land in `[0, 1]`. Wrap mode, alpha mode and the normal map flag are kept.
    ///
    /// # Errors
    ///
    /// [`TextureError::Image`] if the file cannot be read or decoded. The texture is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> TextureResult<()> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .inspect_err(|e| warn!(path = %path.display(), error = %e, "failed to load image"))?
            .into_rgba32f();

        let (width, height) = (decoded.width() as usize, decoded.height() as usize);
        let mut face = FloatImage::new(FACE_CHANNELS, width, height);
        for (x, y, pixel) in decoded.enumerate_pixels() {
            face.set_rgba(x as usize, y as usize, pixel.0);
        }

        debug!(path = %path.display(), width, height, "loaded image");
        let payload = self.detach();
        payload.texture_type = TextureType::Plane;
        payload.faces = vec![Some(face)];
        Ok(())
    }

    /// Writes face 0 to `path` as a 4-channel 32-bit float image.
    ///
    /// The format follows the file extension and must store float RGBA, which means OpenEXR.
    ///
    /// # Errors
    ///
    /// - [`TextureError::NoFaces`] if face 0 is not populated.
    /// - [`TextureError::UnsupportedFileFormat`] if the format cannot hold float RGBA.
    /// - [`TextureError::Image`] if the extension is unknown or encoding fails.
    pub fn save(&self, path: impl AsRef<Path>) -> TextureResult<()> {
        let path = path.as_ref();
        let Some(face) = self.face(0) else {
            warn!(path = %path.display(), "cannot save a texture without faces");
            return Err(TextureError::NoFaces);
        };

        let format = ImageFormat::from_path(path)?;
        if !FLOAT_FORMATS.contains(&format) {
            warn!(path = %path.display(), ?format, "refusing to save floats to a non-float format");
            return Err(TextureError::UnsupportedFileFormat(format));
        }

        let buffer = Rgba32FImage::from_fn(face.width() as u32, face.height() as u32, |x, y| {
            let (x, y) = (x as usize, y as usize);
            Rgba([0, 1, 2, 3].map(|c| face.pixel(x, y, c)))
        });
        DynamicImage::ImageRgba32F(buffer)
            .save_with_format(path, format)
            .inspect_err(|e| warn!(path = %path.display(), error = %e, "failed to save image"))?;

        debug!(path = %path.display(), width = face.width(), height = face.height(), "saved image");
        Ok(())
    }
}
