//! Block decoding routines.
//!
//! Each format exposes a function taking a fixed-size block and a `*_from_slice` wrapper
//! that checks the length of an arbitrary slice first.

mod bc1_decode;
mod bc2_decode;
mod bc3_decode;
pub(crate) mod palette;

pub use bc1_decode::*;
pub use bc2_decode::*;
pub use bc3_decode::*;

/// Size of a BC1 block, in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;
/// Size of a BC2 block, in bytes.
pub const BC2_BLOCK_SIZE: usize = 16;
/// Size of a BC3 block, in bytes.
pub const BC3_BLOCK_SIZE: usize = 16;
