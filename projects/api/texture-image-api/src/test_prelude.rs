//! Common test imports and helpers for unit tests across the crate.
//!
//! Import it with `use crate::test_prelude::*;`.

pub use crate::texture_image::TextureImage;
pub use crate::InterleavedPixels;

/// A plane of `width` x `height` transparent black pixels.
pub fn allocated_texture(width: usize, height: usize) -> TextureImage {
    let mut texture = TextureImage::new();
    texture
        .allocate(width, height)
        .expect("test extent should be valid");
    texture
}

/// A plane filled with `colour`.
pub fn solid_texture(width: usize, height: usize, colour: [f32; 4]) -> TextureImage {
    let mut texture = allocated_texture(width, height);
    texture.fill(colour);
    texture
}

/// A plane with red rising along x, green along y, constant blue, and alpha rising with the
/// row-major pixel index from 0 to 1.
pub fn gradient_texture(width: usize, height: usize) -> TextureImage {
    let step = |value: usize, extent: usize| value as f32 / extent.saturating_sub(1).max(1) as f32;
    let pixels: Vec<[f32; 4]> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            [
                step(x, width),
                step(y, height),
                0.5,
                step(y * width + x, width * height),
            ]
        })
        .collect();

    let mut texture = allocated_texture(width, height);
    set_face_pixels(&mut texture, 0, &pixels);
    texture
}

/// Row-major `[r, g, b, a]` pixels of face `face`.
pub fn face_pixels(texture: &TextureImage, face: usize) -> Vec<[f32; 4]> {
    let image = texture.face(face).expect("face should be populated");
    (0..image.height())
        .flat_map(|y| (0..image.width()).map(move |x| (x, y)))
        .map(|(x, y)| [0, 1, 2, 3].map(|c| image.pixel(x, y, c)))
        .collect()
}

/// Overwrites face `face` with row-major `[r, g, b, a]` pixels.
pub fn set_face_pixels(texture: &mut TextureImage, face: usize, pixels: &[[f32; 4]]) {
    let (width, height) = {
        let image = texture.face(face).expect("face should be populated");
        (image.width(), image.height())
    };
    let data: Vec<f32> = pixels.iter().flatten().copied().collect();
    texture
        .set_image_2d(InterleavedPixels::Rgba32F(&data), width, height, face)
        .expect("pixels should match the face extent");
}

/// Routes `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
