#![no_main]

// Compares the reference BC1 decoder against rgbcx's Ideal mode, which truncates the
// interpolation on endpoints expanded to 8 bits.
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use texture_image_bcn::util::decode_bc1_block;
use texture_image_bcn::DecoderVariant;
use texture_image_common::color_8888::Color8888;
use texture_image_common::decoded_4x4_block::Decoded4x4Block;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Block| {
    let ours = decode_bc1_block(&block.bytes, DecoderVariant::Reference);
    let theirs = rgbcx_decode_bc1(&block.bytes);
    assert_eq!(ours, theirs, "Decoded blocks don't match");
});

fn rgbcx_decode_bc1(block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba = [0u8; 4 * 16];
    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }
    to_block(&rgba)
}

fn to_block(rgba: &[u8; 64]) -> Decoded4x4Block {
    let mut block = Decoded4x4Block::new(Color8888::default());
    for (pixel, bytes) in block.pixels.iter_mut().zip(rgba.chunks_exact(4)) {
        *pixel = Color8888::new(bytes[0], bytes[1], bytes[2], bytes[3]);
    }
    block
}
