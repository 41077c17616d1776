//! Common test imports for the ETC codec tests

// External crates commonly used in tests
pub use rstest::rstest;

pub use texture_codec_common::block_codec::{BlockCodec, BlockDims, ColorDecodeMode, EncodeParams};
pub use texture_codec_common::color_8888::Color8888;
pub use texture_codec_common::texel::Texel;
