//! # Texture Image
//!
//! The [`TextureImage`] handle and its copy-on-write payload.
//!
//! A handle points at a reference counted `TexturePayload`. Cloning a handle only bumps the
//! count. Every mutating method goes through `TextureImage::detach`, which clones the payload
//! if (and only if) another handle still points at it, so writes are never observed through
//! other handles.
//!
//! ```text
//! let a = TextureImage::new();   a ──► payload#1 (count 1)
//! let mut b = a.clone();         a ──► payload#1 ◄── b (count 2)
//! b.fill(..);                    a ──► payload#1 (count 1)
//!                                b ──► payload#2 (count 1, filled)
//! ```
//!
//! Operations are split across modules by concern; this module holds metadata, geometry
//! and the detach choke point.

use crate::{AlphaMode, TextureError, TextureResult, TextureType};
use std::sync::Arc;
use texture_image_float::{FloatImage, WrapMode};
use tracing::{debug, trace, warn};

/// Number of channels of every face: R, G, B, A.
pub(crate) const FACE_CHANNELS: usize = 4;

/// Texture state shared between handles until one of them writes.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct TexturePayload {
    pub(crate) texture_type: TextureType,
    pub(crate) wrap_mode: WrapMode,
    pub(crate) alpha_mode: AlphaMode,
    pub(crate) is_normal_map: bool,
    /// Always `texture_type.face_count()` long. `None` marks an unpopulated face.
    pub(crate) faces: Vec<Option<FloatImage>>,
}

impl TexturePayload {
    pub(crate) fn populated_faces_mut(&mut self) -> impl Iterator<Item = &mut FloatImage> {
        self.faces.iter_mut().flatten()
    }
}

/// A multi-face, 4-channel floating point texture with value semantics and O(1) copies.
///
/// Clones share one payload until either of them is written through.
#[derive(Debug, Clone)]
pub struct TextureImage {
    payload: Arc<TexturePayload>,
}

impl Default for TextureImage {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TextureImage {
    /// Two textures are equal when their metadata and pixels are equal.
    fn eq(&self, other: &Self) -> bool {
        self.is_shared_with(other) || self.payload == other.payload
    }
}

impl TextureImage {
    /// Creates a [`TextureType::Plane`] texture whose single face is unpopulated.
    pub fn new() -> Self {
        Self {
            payload: Arc::new(TexturePayload {
                faces: vec![None; TextureType::Plane.face_count()],
                ..TexturePayload::default()
            }),
        }
    }

    #[inline]
    pub(crate) fn payload(&self) -> &TexturePayload {
        &self.payload
    }

    /// Gives this handle exclusive ownership of its payload, cloning it if it is shared.
    ///
    /// Every mutation goes through here, exactly once per public call.
    pub(crate) fn detach(&mut self) -> &mut TexturePayload {
        if Arc::strong_count(&self.payload) > 1 {
            trace!(
                holders = Arc::strong_count(&self.payload),
                "detaching shared texture payload"
            );
        }
        Arc::make_mut(&mut self.payload)
    }

    /// Detaches once, then runs `operation` on every populated face.
    pub(crate) fn for_each_face(&mut self, mut operation: impl FnMut(&mut FloatImage)) {
        for face in self.detach().populated_faces_mut() {
            operation(face);
        }
    }

    /// Whether both handles currently point at the same payload.
    ///
    /// Holds after a clone until either handle is written through.
    #[inline]
    pub fn is_shared_with(&self, other: &TextureImage) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }

    /// Shape of the texture.
    #[inline]
    pub fn texture_type(&self) -> TextureType {
        self.payload.texture_type
    }

    /// Border handling used when resampling.
    #[inline]
    pub fn wrap_mode(&self) -> WrapMode {
        self.payload.wrap_mode
    }

    /// How alpha is interpreted.
    #[inline]
    pub fn alpha_mode(&self) -> AlphaMode {
        self.payload.alpha_mode
    }

    /// Whether the texture holds packed normals.
    #[inline]
    pub fn is_normal_map(&self) -> bool {
        self.payload.is_normal_map
    }

    /// Number of face slots (1 for [`TextureType::Plane`], 6 for [`TextureType::Cube`]).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.payload.faces.len()
    }

    /// The image of face `index`, if it is populated.
    #[inline]
    pub fn face(&self, index: usize) -> Option<&FloatImage> {
        self.payload.faces.get(index).and_then(Option::as_ref)
    }

    /// The first populated face. All populated faces share its extent.
    fn first_face(&self) -> Option<&FloatImage> {
        self.payload.faces.iter().flatten().next()
    }

    /// Width of the populated faces, or 0 if there are none.
    pub fn width(&self) -> usize {
        self.first_face().map_or(0, FloatImage::width)
    }

    /// Height of the populated faces, or 0 if there are none.
    pub fn height(&self) -> usize {
        self.first_face().map_or(0, FloatImage::height)
    }

    /// Depth of the texture. Always 1.
    #[inline]
    pub fn depth(&self) -> usize {
        1
    }

    /// Length of the mip chain from the current extent down to 1x1, including the current
    /// level. 0 if no face is populated.
    pub fn count_mipmaps(&self) -> usize {
        match self.first_face() {
            Some(face) => crate::count_mipmaps(face.width(), face.height(), self.depth()),
            None => 0,
        }
    }

    /// Changes the shape of the texture.
    ///
    /// Growing adds unpopulated faces; shrinking drops the surplus faces.
    ///
    /// # Errors
    ///
    /// [`TextureError::NonSquareCubeFace`] when switching to [`TextureType::Cube`] while the
    /// populated faces are not square. The texture is unchanged.
    pub fn set_texture_type(&mut self, texture_type: TextureType) -> TextureResult<()> {
        if self.payload.texture_type == texture_type {
            return Ok(());
        }

        let (width, height) = (self.width(), self.height());
        if texture_type == TextureType::Cube && width != height {
            warn!(width, height, "rejecting cube type for non-square faces");
            return Err(TextureError::NonSquareCubeFace { width, height });
        }

        debug!(from = ?self.payload.texture_type, to = ?texture_type, "changing texture type");
        let payload = self.detach();
        payload.texture_type = texture_type;
        payload.faces.resize(texture_type.face_count(), None);
        Ok(())
    }

    /// Sets the border handling used when resampling.
    pub fn set_wrap_mode(&mut self, wrap_mode: WrapMode) {
        if self.payload.wrap_mode != wrap_mode {
            self.detach().wrap_mode = wrap_mode;
        }
    }

    /// Sets how alpha is interpreted.
    pub fn set_alpha_mode(&mut self, alpha_mode: AlphaMode) {
        if self.payload.alpha_mode != alpha_mode {
            self.detach().alpha_mode = alpha_mode;
        }
    }

    /// Marks the texture as holding (or not holding) packed normals.
    pub fn set_normal_map(&mut self, is_normal_map: bool) {
        if self.payload.is_normal_map != is_normal_map {
            self.detach().is_normal_map = is_normal_map;
        }
    }

    /// Replaces every face with a `width` x `height` image of transparent black.
    ///
    /// This establishes the geometry the raw ingestion methods write into.
    ///
    /// # Errors
    ///
    /// - [`TextureError::EmptyExtent`] if either dimension is 0.
    /// - [`TextureError::NonSquareCubeFace`] if the texture is a cube and `width != height`.
    pub fn allocate(&mut self, width: usize, height: usize) -> TextureResult<()> {
        if width == 0 || height == 0 {
            warn!(width, height, "rejecting allocation with an empty extent");
            return Err(TextureError::EmptyExtent { width, height });
        }
        if self.texture_type() == TextureType::Cube && width != height {
            warn!(width, height, "rejecting non-square cube allocation");
            return Err(TextureError::NonSquareCubeFace { width, height });
        }

        debug!(width, height, faces = self.face_count(), "allocating texture faces");
        let payload = self.detach();
        for face in payload.faces.iter_mut() {
            *face = Some(FloatImage::new(FACE_CHANNELS, width, height));
        }
        Ok(())
    }

    /// The populated face `index`.
    pub(crate) fn populated_face(&self, index: usize) -> TextureResult<&FloatImage> {
        let face_count = self.face_count();
        match self.payload.faces.get(index) {
            None => Err(TextureError::InvalidFaceIndex { index, face_count }),
            Some(None) => Err(TextureError::FaceNotAllocated(index)),
            Some(Some(face)) => Ok(face),
        }
    }

    /// The populated face `index`, checked to be `width` x `height`.
    pub(crate) fn face_with_extent(
        &self,
        index: usize,
        width: usize,
        height: usize,
    ) -> TextureResult<&FloatImage> {
        let face = self.populated_face(index)?;
        if !face.has_extent(width, height) {
            return Err(TextureError::DimensionMismatch {
                expected_width: face.width(),
                expected_height: face.height(),
                width,
                height,
            });
        }
        Ok(face)
    }

    /// Mutable access to a face validated by [`Self::populated_face`].
    pub(crate) fn detached_face(&mut self, index: usize) -> TextureResult<&mut FloatImage> {
        self.detach()
            .faces
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(TextureError::FaceNotAllocated(index))
    }
}
