//! Common test imports for the surface level API tests.

pub use rstest::rstest;

pub use crate::registry::TextureFormat;
pub use texture_codec_common::block_codec::ColorDecodeMode;
pub use texture_codec_common::texel::Texel;

/// A smooth opaque gradient, `width` x `height` texels.
pub fn gradient(width: usize, height: usize) -> Vec<Texel> {
    (0..width * height)
        .map(|i| {
            let x = (i % width) as f32 / width.max(2) as f32;
            let y = (i / width) as f32 / height.max(2) as f32;
            Texel::new(0.1 + 0.8 * x, 0.2 + 0.6 * y, 0.5 * (x + y), 1.0)
        })
        .collect()
}
