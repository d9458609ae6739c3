//! Error and coverage measurements.

use crate::texture_image::TextureImage;
use crate::AlphaMode;
use texture_image_float::FloatImage;
use tracing::warn;

/// Returned by the error metrics when two textures cannot be compared.
pub const MAX_ERROR: f32 = f32::MAX;

const ALPHA_CHANNEL: usize = 3;

impl TextureImage {
    /// Mean, across populated faces, of the fraction of pixels whose alpha is strictly greater
    /// than `alpha_ref`. Returns 0 if no face is populated.
    pub fn alpha_test_coverage(&self, alpha_ref: f32) -> f32 {
        let (sum, count) = self
            .payload()
            .faces
            .iter()
            .flatten()
            .fold((0.0f32, 0usize), |(sum, count), face| {
                (sum + face.alpha_test_coverage(alpha_ref, ALPHA_CHANNEL), count + 1)
            });

        if count == 0 {
            return 0.0;
        }
        sum / count as f32
    }

    /// Root mean squared error of red, green and blue against `reference`, over all faces.
    ///
    /// If `reference` has [`AlphaMode::Transparency`], each squared difference is weighted by
    /// the reference alpha divided by 255.
    ///
    /// Returns [`MAX_ERROR`] if the face counts differ, a face is missing from either texture,
    /// or a pair of faces differ in extent.
    pub fn root_mean_squared_error_rgb(&self, reference: &TextureImage) -> f32 {
        let weighted = reference.alpha_mode() == AlphaMode::Transparency;
        self.root_mean_squared_error(reference, |img, reference, mse| {
            let [r0, g0, b0] = [0, 1, 2].map(|c| img.channel(c));
            let [r1, g1, b1, a1] = [0, 1, 2, 3].map(|c| reference.channel(c));
            for i in 0..img.pixel_count() {
                for d in [r0[i] - r1[i], g0[i] - g1[i], b0[i] - b1[i]] {
                    *mse += if weighted {
                        f64::from(d * d * a1[i]) / 255.0
                    } else {
                        f64::from(d * d)
                    };
                }
            }
        })
    }

    /// Root mean squared error of alpha against `reference`, over all faces.
    ///
    /// Returns [`MAX_ERROR`] under the same conditions as
    /// [`TextureImage::root_mean_squared_error_rgb`].
    pub fn root_mean_squared_error_alpha(&self, reference: &TextureImage) -> f32 {
        self.root_mean_squared_error(reference, |img, reference, mse| {
            let a0 = img.channel(ALPHA_CHANNEL);
            let a1 = reference.channel(ALPHA_CHANNEL);
            for (a0, a1) in a0.iter().zip(a1) {
                let d = a0 - a1;
                *mse += f64::from(d * d);
            }
        })
    }

    fn root_mean_squared_error(
        &self,
        reference: &TextureImage,
        mut accumulate: impl FnMut(&FloatImage, &FloatImage, &mut f64),
    ) -> f32 {
        if self.face_count() != reference.face_count() {
            warn!(
                faces = self.face_count(),
                reference_faces = reference.face_count(),
                "cannot compare textures with different face counts"
            );
            return MAX_ERROR;
        }

        let mut mse = 0.0f64;
        let mut total = 0usize;
        let pairs = self.payload().faces.iter().zip(&reference.payload().faces);
        for (face, pair) in pairs.enumerate() {
            let (Some(img), Some(reference)) = pair else {
                warn!(face, "cannot compare textures with a missing face");
                return MAX_ERROR;
            };
            if !img.has_extent(reference.width(), reference.height()) {
                warn!(face, "cannot compare faces of different extent");
                return MAX_ERROR;
            }

            total += img.pixel_count();
            accumulate(img, reference, &mut mse);
        }

        if total == 0 {
            return 0.0;
        }
        (mse / total as f64).sqrt() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use crate::TextureType;
    use rstest::rstest;

    #[test]
    fn coverage_counts_strictly_greater_alpha() {
        let mut texture = allocated_texture(2, 2);
        set_face_pixels(
            &mut texture,
            0,
            &[[0.0, 0.0, 0.0, 0.5], [0.0, 0.0, 0.0, 0.6], [0.0; 4], [0.0, 0.0, 0.0, 1.0]],
        );

        assert_eq!(texture.alpha_test_coverage(0.5), 0.5);
    }

    #[test]
    fn coverage_averages_populated_faces() {
        let mut texture = TextureImage::new();
        texture.set_texture_type(TextureType::Cube).unwrap();
        texture.allocate(1, 1).unwrap();
        texture.fill([0.0, 0.0, 0.0, 1.0]);
        set_face_pixels(&mut texture, 0, &[[0.0; 4]]);
        set_face_pixels(&mut texture, 1, &[[0.0; 4]]);

        assert!((texture.alpha_test_coverage(0.5) - 4.0 / 6.0).abs() < 1e-6);
        assert_eq!(TextureImage::new().alpha_test_coverage(0.5), 0.0);
    }

    #[test]
    fn error_against_self_is_zero() {
        let texture = gradient_texture(5, 3);
        assert_eq!(texture.root_mean_squared_error_rgb(&texture), 0.0);
        assert_eq!(texture.root_mean_squared_error_alpha(&texture), 0.0);
    }

    #[test]
    fn unweighted_error_averages_channels() {
        let texture = solid_texture(2, 2, [0.5, 0.5, 0.5, 0.25]);
        let reference = solid_texture(2, 2, [0.0, 0.5, 0.5, 1.0]);

        // Only red differs: sqrt(0.25 * 4 / 4).
        assert!((texture.root_mean_squared_error_rgb(&reference) - 0.5).abs() < 1e-6);
        assert!((texture.root_mean_squared_error_alpha(&reference) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn transparency_weights_by_reference_alpha_over_255() {
        let texture = solid_texture(2, 2, [1.0, 0.0, 0.0, 1.0]);
        let mut reference = solid_texture(2, 2, [0.0, 0.0, 0.0, 1.0]);
        reference.set_alpha_mode(AlphaMode::Transparency);

        let expected = (1.0f64 / 255.0).sqrt() as f32;
        assert!((texture.root_mean_squared_error_rgb(&reference) - expected).abs() < 1e-6);
        // Only the reference's alpha mode matters.
        assert!((reference.root_mean_squared_error_rgb(&texture) - 1.0).abs() < 1e-6);
    }

    #[rstest]
    #[case::face_count(TextureType::Cube, 2)]
    #[case::extent(TextureType::Plane, 4)]
    fn incomparable_textures_return_sentinel(
        #[case] texture_type: TextureType,
        #[case] extent: usize,
    ) {
        let texture = solid_texture(2, 2, [0.5; 4]);
        let mut reference = TextureImage::new();
        reference.set_texture_type(texture_type).unwrap();
        reference.allocate(extent, extent).unwrap();

        assert_eq!(texture.root_mean_squared_error_rgb(&reference), MAX_ERROR);
        assert_eq!(texture.root_mean_squared_error_alpha(&reference), MAX_ERROR);
    }

    #[test]
    fn missing_face_returns_sentinel() {
        let texture = solid_texture(2, 2, [0.5; 4]);
        assert_eq!(
            texture.root_mean_squared_error_rgb(&TextureImage::new()),
            MAX_ERROR
        );
    }
}
