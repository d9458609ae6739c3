//! Colour and channel operations.
//!
//! Each operation applies to every populated face and detaches the payload once per call.
//! Colours are `[r, g, b, a]`.

use crate::texture_image::TextureImage;
use crate::{Channel, TextureError, TextureResult};
use tracing::{debug, warn};

const NORMAL_CHANNELS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

impl TextureImage {
    /// Converts the colour channels from gamma space to linear. Does nothing for a gamma of 1.
    pub fn to_linear(&mut self, gamma: f32) {
        if gamma == 1.0 {
            return;
        }
        self.for_each_face(|face| face.to_linear(gamma));
    }

    /// Converts the colour channels from linear to gamma space. Does nothing for a gamma of 1.
    pub fn to_gamma(&mut self, gamma: f32) {
        if gamma == 1.0 {
            return;
        }
        self.for_each_face(|face| face.to_gamma(gamma));
    }

    /// Maps every pixel through an affine colour transform:
    ///
    /// ```text
    /// out = r * columns[0] + g * columns[1] + b * columns[2] + a * columns[3] + offset
    /// ```
    pub fn transform(&mut self, columns: [[f32; 4]; 4], offset: [f32; 4]) {
        self.for_each_face(|face| face.transform(&columns, &offset));
    }

    /// Rearranges the channels: the new red is the old `red`, and so on.
    ///
    /// Does nothing for the identity mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_image_api::{Channel, TextureImage};
    ///
    /// let mut texture = TextureImage::new();
    /// texture.allocate(2, 2)?;
    /// texture.fill([0.1, 0.2, 0.3, 0.4]);
    ///
    /// // Swap red and blue.
    /// texture.swizzle(Channel::Blue, Channel::Green, Channel::Red, Channel::Alpha);
    /// assert_eq!(texture.face(0).unwrap().pixel(0, 0, 0), 0.3);
    /// # Ok::<(), texture_image_api::TextureError>(())
    /// ```
    pub fn swizzle(&mut self, red: Channel, green: Channel, blue: Channel, alpha: Channel) {
        let sources = [red, green, blue, alpha].map(Channel::index);
        if sources == [0, 1, 2, 3] {
            return;
        }
        self.for_each_face(|face| face.swizzle(sources));
    }

    /// `value = value * scale + bias` on `channel`. Does nothing for a scale of 1 and bias of 0.
    pub fn scale_bias(&mut self, channel: Channel, scale: f32, bias: f32) {
        if scale == 1.0 && bias == 0.0 {
            return;
        }
        self.for_each_face(|face| face.scale_bias(channel.index(), scale, bias));
    }

    /// Clamps `channel` into `[low, high]`.
    ///
    /// When `low > high` every value becomes `high`. A NaN bound is ignored.
    pub fn clamp(&mut self, channel: Channel, low: f32, high: f32) {
        self.for_each_face(|face| face.clamp(channel.index(), low, high));
    }

    /// Moves normals in red, green and blue from `[-1, 1]` to `[0, 1]`: `v * 0.5 + 0.5`.
    pub fn pack_normal(&mut self) {
        self.for_each_face(|face| {
            for channel in NORMAL_CHANNELS {
                face.scale_bias(channel.index(), 0.5, 0.5);
            }
        });
    }

    /// Moves normals in red, green and blue from `[0, 1]` to `[-1, 1]`: `v * 2 - 1`.
    pub fn expand_normal(&mut self) {
        self.for_each_face(|face| {
            for channel in NORMAL_CHANNELS {
                face.scale_bias(channel.index(), 2.0, -1.0);
            }
        });
    }

    /// Moves every pixel towards `colour` by fraction `t`.
    pub fn blend(&mut self, colour: [f32; 4], t: f32) {
        self.for_each_face(|face| face.blend(colour, t));
    }

    /// Multiplies red, green and blue by alpha.
    pub fn premultiply_alpha(&mut self) {
        self.for_each_face(|face| face.premultiply_alpha());
    }

    /// Replaces every channel with the weighted sum of all four.
    ///
    /// The weights are normalised to sum to 1. Weights summing to 0 leave the texture unchanged.
    pub fn to_grey_scale(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        let sum = red + green + blue + alpha;
        if sum == 0.0 {
            warn!("ignoring greyscale conversion with weights summing to zero");
            return;
        }

        let weights = [red, green, blue, alpha].map(|w| w / sum);
        self.for_each_face(|face| face.grey_scale(weights));
    }

    /// Sets the outermost ring of pixels of every face to `colour`.
    pub fn set_border(&mut self, colour: [f32; 4]) {
        self.for_each_face(|face| face.set_border(colour));
    }

    /// Sets every pixel to `colour`.
    pub fn fill(&mut self, colour: [f32; 4]) {
        self.for_each_face(|face| face.fill(colour));
    }

    /// Scales alpha so that the fraction of pixels with alpha above `alpha_ref` is close to
    /// `coverage`.
    ///
    /// Use after building a mipmap to keep alpha-tested edges as thick as in the base level.
    pub fn scale_alpha_to_coverage(&mut self, coverage: f32, alpha_ref: f32) {
        self.for_each_face(|face| {
            face.scale_alpha_to_coverage(coverage, alpha_ref, Channel::Alpha.index())
        });
    }

    /// Reverses the order of rows of every face.
    pub fn flip_vertically(&mut self) {
        self.for_each_face(|face| face.flip_vertically());
    }

    /// Copies `channel` of every face of `source` into the same channel of this texture.
    ///
    /// # Errors
    ///
    /// As [`TextureImage::copy_channel_into`].
    pub fn copy_channel(&mut self, source: &TextureImage, channel: Channel) -> TextureResult<()> {
        self.copy_channel_into(source, channel, channel)
    }

    /// Copies `source_channel` of every face of `source` into `target_channel` of the
    /// corresponding face of this texture. Faces unpopulated in both are skipped.
    ///
    /// # Errors
    ///
    /// - [`TextureError::FaceCountMismatch`] if the textures have different face counts.
    /// - [`TextureError::MissingFace`] if a face is populated in only one of the textures.
    /// - [`TextureError::DimensionMismatch`] if a pair of faces differ in extent.
    pub fn copy_channel_into(
        &mut self,
        source: &TextureImage,
        source_channel: Channel,
        target_channel: Channel,
    ) -> TextureResult<()> {
        self.check_channel_source(source)
            .inspect_err(|e| warn!(error = %e, "rejecting channel copy"))?;

        debug!(?source_channel, ?target_channel, "copying channel");
        let (src, dst) = (source_channel.index(), target_channel.index());
        let sources = &source.payload().faces;
        for (target, source) in self.detach().faces.iter_mut().zip(sources) {
            if let (Some(target), Some(source)) = (target, source) {
                target.copy_channel_from(source, src, dst);
            }
        }
        Ok(())
    }

    fn check_channel_source(&self, source: &TextureImage) -> TextureResult<()> {
        if self.face_count() != source.face_count() {
            return Err(TextureError::FaceCountMismatch {
                expected: self.face_count(),
                actual: source.face_count(),
            });
        }

        let pairs = self.payload().faces.iter().zip(&source.payload().faces);
        for (index, pair) in pairs.enumerate() {
            match pair {
                (None, None) => {}
                (Some(_), None) | (None, Some(_)) => return Err(TextureError::MissingFace(index)),
                (Some(target), Some(source)) if !target.has_extent(source.width(), source.height()) => {
                    return Err(TextureError::DimensionMismatch {
                        expected_width: target.width(),
                        expected_height: target.height(),
                        width: source.width(),
                        height: source.height(),
                    });
                }
                (Some(_), Some(_)) => {}
            }
        }
        Ok(())
    }
}
