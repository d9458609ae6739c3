#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

mod color;
mod error;
mod ingest;
#[cfg(feature = "file-io")]
mod io;
mod metrics;
mod normal_map;
mod options;
mod power_of_two;
mod resample;
mod texture_image;

#[cfg(test)]
mod test_prelude;

pub use error::{TextureError, TextureResult};
pub use ingest::{InterleavedPixels, PlanarPixels};
pub use metrics::MAX_ERROR;
pub use options::{
    AlphaMode, Channel, InputFormat, MipmapFilter, ResizeFilter, RoundMode, TextureType,
};
pub use power_of_two::{
    count_mipmaps, nearest_power_of_two, next_power_of_two, previous_power_of_two,
};
pub use texture_image::TextureImage;

// Types that appear in the public API.
pub use texture_image_bcn::{CompressedFormat, DecoderVariant};
pub use texture_image_float::{FloatImage, NormalMapWeights, WrapMode};
