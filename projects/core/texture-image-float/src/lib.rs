#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]
// Not yet in stable today
#![allow(stable_features)]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]

mod channel_ops;
pub mod filter;
mod float_image;
mod normal_map;
mod polyphase;
mod resample;
mod transform;
mod wrap;

pub use filter::{BoxFilter, Filter, Kernel, KaiserFilter, MitchellFilter, TriangleFilter};
pub use float_image::FloatImage;
pub use normal_map::{create_normal_map, normalize_normal_map, NormalMapWeights};
pub use polyphase::PolyphaseKernel;
pub use wrap::WrapMode;
