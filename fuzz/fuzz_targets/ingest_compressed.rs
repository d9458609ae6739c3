#![no_main]

// Feeds arbitrary extents and bytes to compressed ingestion. Every input must either be
// rejected without touching the texture or decode into it.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_image_api::{CompressedFormat, DecoderVariant, TextureImage};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub height: u8,
    pub allocated_width: u8,
    pub hardware: bool,
    pub format: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let format = match input.format % 3 {
        0 => CompressedFormat::Bc1,
        1 => CompressedFormat::Bc2,
        _ => CompressedFormat::Bc3,
    };
    let variant = if input.hardware {
        DecoderVariant::HardwareEmulated
    } else {
        DecoderVariant::Reference
    };
    let (width, height) = (input.width as usize, input.height as usize);

    let mut texture = TextureImage::new();
    if texture
        .allocate(input.allocated_width as usize, height)
        .is_err()
    {
        return;
    }
    let before = texture.clone();

    let result = texture.set_image_2d_compressed(format, variant, width, height, 0, &input.data);
    if result.is_err() {
        assert!(texture.is_shared_with(&before));
    } else {
        assert_eq!(input.data.len(), format.compressed_size(width, height));
    }
});
