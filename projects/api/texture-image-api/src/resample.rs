//! Resizing and mipmap generation.

use crate::texture_image::TextureImage;
use crate::{
    next_power_of_two, nearest_power_of_two, previous_power_of_two, AlphaMode, MipmapFilter,
    ResizeFilter, RoundMode, TextureError, TextureResult, TextureType,
};
use tracing::{debug, warn};

/// Channel that weights colour when alpha means opacity.
const ALPHA_CHANNEL: usize = 3;

impl TextureImage {
    fn weighting_channel(&self) -> Option<usize> {
        match self.alpha_mode() {
            AlphaMode::Transparency => Some(ALPHA_CHANNEL),
            AlphaMode::None => None,
        }
    }

    /// Resizes every face to `width` x `height`.
    ///
    /// Requesting the current extent does nothing. Otherwise cube textures stay square:
    /// `height` is replaced by `width`. Textures with [`AlphaMode::Transparency`] are filtered with alpha
    /// weighting so transparent texels do not bleed into their neighbours.
    ///
    /// # Errors
    ///
    /// - [`TextureError::NoFaces`] if no face is populated.
    /// - [`TextureError::EmptyExtent`] if either dimension is 0.
    pub fn resize(
        &mut self,
        width: usize,
        mut height: usize,
        filter: ResizeFilter,
    ) -> TextureResult<()> {
        if self.face_count() == 0 || self.width() == 0 {
            warn!(width, height, "rejecting resize of a texture without faces");
            return Err(TextureError::NoFaces);
        }
        if self.width() == width && self.height() == height {
            return Ok(());
        }
        if self.texture_type() == TextureType::Cube {
            height = width;
        }
        if width == 0 || height == 0 {
            warn!(width, height, "rejecting resize to an empty extent");
            return Err(TextureError::EmptyExtent { width, height });
        }

        debug!(
            from_width = self.width(),
            from_height = self.height(),
            width,
            height,
            ?filter,
            "resizing texture"
        );
        let kernel = filter.kernel();
        let wrap = self.wrap_mode();
        let alpha = self.weighting_channel();
        self.for_each_face(|face| *face = face.resize(&kernel, width, height, wrap, alpha));
        Ok(())
    }

    /// Scales the texture down so that its larger dimension is at most `max_extent`, keeping
    /// the aspect ratio, then rounds each dimension according to `round`.
    ///
    /// With a rounding mode other than [`RoundMode::None`], `max_extent` itself is first
    /// rounded down to a power of two. A `max_extent` of 0 means no limit. Cube textures are
    /// made square using the larger dimension.
    ///
    /// # Errors
    ///
    /// As [`TextureImage::resize`].
    pub fn resize_to_extent(
        &mut self,
        max_extent: usize,
        round: RoundMode,
        filter: ResizeFilter,
    ) -> TextureResult<()> {
        let mut width = self.width();
        let mut height = self.height();

        let max_extent = if round != RoundMode::None && max_extent > 0 {
            previous_power_of_two(max_extent)
        } else {
            max_extent
        };

        let largest = width.max(height);
        if max_extent > 0 && largest > max_extent {
            let scale = |value: usize| (value as u128 * max_extent as u128 / largest as u128) as usize;
            width = scale(width).max(1);
            height = scale(height).max(1);
        }

        let rounding: fn(usize) -> usize = match round {
            RoundMode::None => core::convert::identity,
            RoundMode::ToNext => next_power_of_two,
            RoundMode::ToNearest => nearest_power_of_two,
            RoundMode::ToPrevious => previous_power_of_two,
        };
        width = rounding(width);
        height = rounding(height);

        if self.texture_type() == TextureType::Cube {
            let side = width.max(height);
            width = side;
            height = side;
        }

        self.resize(width, height, filter)
    }

    /// Replaces every face with the next, half-sized, level of its mip chain.
    ///
    /// Returns `false`, leaving the texture untouched, once the texture is 1x1 or if no face is
    /// populated.
    ///
    /// Without alpha weighting, [`MipmapFilter::Box`] uses a dedicated 2x2 box path. All other
    /// combinations use the general polyphase down-sampler.
    pub fn build_next_mipmap(&mut self, filter: MipmapFilter) -> bool {
        let (width, height) = (self.width(), self.height());
        if width == 0 || (width == 1 && height == 1) {
            return false;
        }

        debug!(width, height, ?filter, "building next mipmap");
        let wrap = self.wrap_mode();
        match (self.weighting_channel(), filter) {
            (None, MipmapFilter::Box) => self.for_each_face(|face| *face = face.fast_down_sample()),
            (alpha, filter) => {
                let kernel = filter.kernel();
                self.for_each_face(|face| *face = face.down_sample(&kernel, wrap, alpha));
            }
        }
        true
    }
}
