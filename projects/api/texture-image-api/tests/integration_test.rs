//! End-to-end tests through the public API only.

use texture_image_api::{
    nearest_power_of_two, Channel, CompressedFormat, DecoderVariant, InterleavedPixels,
    MipmapFilter, NormalMapWeights, ResizeFilter, TextureError, TextureImage, TextureType,
};

fn opaque_red_bgra(width: usize, height: usize) -> Vec<u8> {
    [0u8, 0, 255, 255].repeat(width * height)
}

fn pixel(texture: &TextureImage, face: usize, x: usize, y: usize) -> [f32; 4] {
    let image = texture.face(face).unwrap();
    [0, 1, 2, 3].map(|c| image.pixel(x, y, c))
}

#[test]
fn red_bgra_is_fully_covered_and_greys_evenly() {
    let mut texture = TextureImage::new();
    texture.set_texture_type(TextureType::Plane).unwrap();
    texture.allocate(4, 4).unwrap();
    texture
        .set_image_2d(InterleavedPixels::Bgra8(&opaque_red_bgra(4, 4)), 4, 4, 0)
        .unwrap();

    assert_eq!(texture.alpha_test_coverage(0.5), 1.0);

    texture.to_grey_scale(1.0, 1.0, 1.0, 1.0);
    for y in 0..4 {
        for x in 0..4 {
            let [r, g, b, a] = pixel(&texture, 0, x, y);
            assert_eq!([r, g, b], [a; 3]);
        }
    }
}

#[test]
fn copies_are_independent() {
    let mut original = TextureImage::new();
    original.allocate(2, 2).unwrap();
    original.fill([0.25, 0.5, 0.75, 1.0]);
    let mut copy = original.clone();

    copy.swizzle(Channel::Alpha, Channel::Blue, Channel::Green, Channel::Red);
    original.scale_bias(Channel::Red, 2.0, 0.0);

    assert_eq!(pixel(&original, 0, 1, 1), [0.5, 0.5, 0.75, 1.0]);
    assert_eq!(pixel(&copy, 0, 1, 1), [1.0, 0.75, 0.5, 0.25]);
}

#[test]
fn no_op_operations_keep_payload_shared() {
    let mut texture = TextureImage::new();
    texture.allocate(4, 4).unwrap();
    let copy = texture.clone();

    texture.to_linear(1.0);
    texture.to_gamma(1.0);
    texture.scale_bias(Channel::Alpha, 1.0, 0.0);
    texture.swizzle(Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha);
    texture.set_texture_type(TextureType::Plane).unwrap();
    texture.resize(4, 4, ResizeFilter::Mitchell).unwrap();

    assert!(texture.is_shared_with(&copy));
}

#[test]
fn pack_then_expand_is_identity() {
    let mut texture = TextureImage::new();
    texture.allocate(1, 1).unwrap();
    texture.fill([-0.5, 0.25, 1.0, 0.5]);

    texture.pack_normal();
    assert_eq!(pixel(&texture, 0, 0, 0), [0.25, 0.625, 1.0, 0.5]);
    texture.expand_normal();

    assert_eq!(pixel(&texture, 0, 0, 0), [-0.5, 0.25, 1.0, 0.5]);
}

#[test]
fn cube_mip_chain_matches_count() {
    let mut texture = TextureImage::new();
    texture.set_texture_type(TextureType::Cube).unwrap();
    texture.allocate(16, 16).unwrap();
    texture.fill([0.5; 4]);
    assert_eq!(texture.count_mipmaps(), 5);

    let mut levels = 1;
    while texture.build_next_mipmap(MipmapFilter::Box) {
        levels += 1;
        assert!((0..6).all(|f| texture.face(f).unwrap().has_extent(texture.width(), texture.width())));
    }

    assert_eq!(levels, 5);
    assert_eq!(pixel(&texture, 5, 0, 0), [0.5; 4]);
}

#[test]
fn nearest_power_of_two_prefers_larger_on_ties() {
    assert_eq!(nearest_power_of_two(6), 8);
    assert_eq!(nearest_power_of_two(5), 4);
}

#[test]
fn error_against_self_is_zero() {
    let mut texture = TextureImage::new();
    texture.allocate(4, 4).unwrap();
    texture
        .set_image_2d(InterleavedPixels::Bgra8(&opaque_red_bgra(4, 4)), 4, 4, 0)
        .unwrap();

    assert_eq!(texture.root_mean_squared_error_rgb(&texture), 0.0);
    assert_eq!(texture.root_mean_squared_error_alpha(&texture.clone()), 0.0);
}

#[test]
fn channel_copy_face_count_mismatch_leaves_destination_unchanged() {
    let mut source = TextureImage::new();
    source.set_texture_type(TextureType::Cube).unwrap();
    source.allocate(2, 2).unwrap();
    source.fill([1.0; 4]);

    let mut target = TextureImage::new();
    target.allocate(2, 2).unwrap();
    target.fill([0.0, 0.0, 0.0, 1.0]);

    let result = target.copy_channel(&source, Channel::Red);

    assert!(matches!(result, Err(TextureError::FaceCountMismatch { .. })));
    assert_eq!(pixel(&target, 0, 0, 0), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn compressed_bc1_decodes_into_face() {
    // Colour0 = white, colour1 = black, every index 0.
    let block = [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let mut texture = TextureImage::new();
    texture.allocate(4, 4).unwrap();

    texture
        .set_image_2d_compressed(
            CompressedFormat::Bc1,
            DecoderVariant::Reference,
            4,
            4,
            0,
            &block,
        )
        .unwrap();

    assert_eq!(pixel(&texture, 0, 3, 3), [1.0; 4]);
}

#[test]
fn normal_map_then_resize_stays_normalised() {
    let mut texture = TextureImage::new();
    texture.allocate(8, 8).unwrap();
    texture.fill([0.0, 0.0, 0.0, 0.25]);
    texture.set_border([0.0, 0.0, 0.0, 1.0]);

    texture.to_normal_map(&NormalMapWeights::default());
    texture.resize(4, 4, ResizeFilter::Triangle).unwrap();
    texture.normalize_normal_map();

    for y in 0..4 {
        for x in 0..4 {
            let [r, g, b, _] = pixel(&texture, 0, x, y);
            let length = [r, g, b]
                .iter()
                .map(|v| (v * 2.0 - 1.0).powi(2))
                .sum::<f32>()
                .sqrt();
            assert!((length - 1.0).abs() < 1e-4);
        }
    }
}

#[cfg(feature = "file-io")]
#[test]
fn saved_exr_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("red.exr");
    let mut texture = TextureImage::new();
    texture.allocate(4, 4).unwrap();
    texture
        .set_image_2d(InterleavedPixels::Bgra8(&opaque_red_bgra(4, 4)), 4, 4, 0)
        .unwrap();
    texture.scale_bias(Channel::Red, 1.5, -0.25);

    texture.save(&path).unwrap();
    let mut loaded = TextureImage::new();
    loaded.load(&path).unwrap();

    assert_eq!(pixel(&loaded, 0, 3, 3), [1.25, 0.0, 0.0, 1.0]);
    assert!(matches!(
        texture.save(dir.path().join("red.png")),
        Err(TextureError::UnsupportedFileFormat(_))
    ));
}
