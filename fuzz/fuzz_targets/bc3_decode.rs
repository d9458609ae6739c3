#![no_main]

// Compares the reference BC3 decoder against rgbcx.
// BC3 always decodes its colour section in four-colour mode, which rgbcx only matches when
// c0 > c1, so other blocks are skipped.

use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use texture_image_bcn::util::decode_bc3_block;
use texture_image_bcn::DecoderVariant;
use texture_image_common::{color_565::Color565, color_8888::Color8888};
use texture_image_common::decoded_4x4_block::Decoded4x4Block;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc3Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc3Block| {
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let ours = decode_bc3_block(&block.bytes, DecoderVariant::Reference);
    let mut rgba = [0u8; 4 * 16];
    unsafe {
        rgbcx::unpack_bc3(
            block.bytes.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    let mut theirs = Decoded4x4Block::new(Color8888::default());
    for (pixel, bytes) in theirs.pixels.iter_mut().zip(rgba.chunks_exact(4)) {
        *pixel = Color8888::new(bytes[0], bytes[1], bytes[2], bytes[3]);
    }
    assert_eq!(ours, theirs, "Decoded blocks don't match");
});
