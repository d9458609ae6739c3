//! Normal map derivation.

use crate::texture_image::TextureImage;
use texture_image_float::{create_normal_map, normalize_normal_map, NormalMapWeights};
use tracing::debug;

impl TextureImage {
    /// Replaces every face with a normal map derived from the height stored in its alpha
    /// channel, and marks the texture as a normal map.
    ///
    /// Normals are packed into `[0, 1]` in red, green and blue. Alpha keeps the height.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_image_api::{NormalMapWeights, TextureImage};
    ///
    /// let mut texture = TextureImage::new();
    /// texture.allocate(4, 4)?;
    /// texture.fill([0.0, 0.0, 0.0, 0.5]);
    ///
    /// texture.to_normal_map(&NormalMapWeights::default());
    ///
    /// // A flat height field points straight up.
    /// let face = texture.face(0).unwrap();
    /// assert!((face.pixel(1, 1, 2) - 1.0).abs() < 1e-6);
    /// assert!(texture.is_normal_map());
    /// # Ok::<(), texture_image_api::TextureError>(())
    /// ```
    pub fn to_normal_map(&mut self, weights: &NormalMapWeights) {
        debug!(weights = ?weights.as_array(), "deriving normal map");
        let wrap = self.wrap_mode();
        let payload = self.detach();
        for face in payload.populated_faces_mut() {
            let mut normals = create_normal_map(face, wrap, weights);
            for c in 0..3 {
                normals.scale_bias(c, 0.5, 0.5);
            }
            *face = normals;
        }
        payload.is_normal_map = true;
    }

    /// Renormalises packed normals in red, green and blue to unit length.
    pub fn normalize_normal_map(&mut self) {
        self.for_each_face(normalize_normal_map);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;
    use crate::TextureImage;
    use texture_image_float::NormalMapWeights;

    fn length(pixel: [f32; 4]) -> f32 {
        pixel[..3]
            .iter()
            .map(|v| (v * 2.0 - 1.0).powi(2))
            .sum::<f32>()
            .sqrt()
    }

    #[test]
    fn slope_tilts_normals_and_keeps_height() {
        let mut texture = gradient_texture(8, 8);
        let heights: Vec<f32> = face_pixels(&texture, 0).iter().map(|p| p[3]).collect();

        texture.to_normal_map(&NormalMapWeights::default());

        assert!(texture.is_normal_map());
        let pixels = face_pixels(&texture, 0);
        for (pixel, height) in pixels.iter().zip(heights) {
            assert!((length(*pixel) - 1.0).abs() < 1e-4);
            assert_eq!(pixel[3], height);
        }
        // Height rises along x, so x is positive before packing.
        assert!(pixels[3 * 8 + 3][0] > 0.5);
    }

    #[test]
    fn normal_map_leaves_copies_untouched() {
        let mut texture = gradient_texture(4, 4);
        let copy = texture.clone();

        texture.to_normal_map(&NormalMapWeights::default());

        assert!(!copy.is_normal_map());
        assert_ne!(face_pixels(&copy, 0), face_pixels(&texture, 0));
    }

    #[test]
    fn normalize_rescales_to_unit_length() {
        let mut texture = allocated_texture(2, 1);
        set_face_pixels(
            &mut texture,
            0,
            &[[0.75, 0.5, 0.5, 1.0], [0.5, 0.5, 0.5, 0.0]],
        );

        texture.normalize_normal_map();

        let pixels = face_pixels(&texture, 0);
        assert!((pixels[0][0] - 1.0).abs() < 1e-5);
        assert_eq!(pixels[0][3], 1.0);
        assert_eq!(pixels[1], [0.5, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn normal_map_of_empty_texture_only_sets_flag() {
        let mut texture = TextureImage::new();
        texture.to_normal_map(&NormalMapWeights::default());
        assert!(texture.is_normal_map());
        assert_eq!(texture.width(), 0);
    }
}
