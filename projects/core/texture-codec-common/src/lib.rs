#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]
#![warn(missing_docs)]

pub mod allocate;
pub mod block_codec;
pub mod color_565;
pub mod color_8888;
pub mod convert;
pub mod edge;
pub mod layout;
pub mod srgb;
pub mod texel;

#[cfg(test)]
pub mod test_prelude;
