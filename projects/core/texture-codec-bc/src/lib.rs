#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]
#![warn(missing_docs)]

pub mod bc1;
pub mod bc2;
pub mod bc3;
pub mod bc4;
pub mod bc6h;
pub mod bc7;

mod bits;
mod tables;

#[cfg(test)]
pub mod test_prelude;

pub use bc1::{Bc1Codec, ColorBlockKind};
pub use bc2::Bc2Codec;
pub use bc3::Bc3Codec;
pub use bc4::{Bc4Codec, Bc5Codec};
pub use bc6h::Bc6hCodec;
pub use bc7::Bc7Codec;

use derive_enum_all_values::AllValues;
use texture_codec_common::block_codec::BlockCodec;

/// Every BC block family and signedness variant provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum BcFamily {
    /// BC1 without the 1-bit alpha interpretation.
    Bc1,
    /// BC1 where the 3-colour mode encodes transparent black.
    Bc1Alpha,
    /// BC2, explicit 4-bit alpha.
    Bc2,
    /// BC3, interpolated alpha.
    Bc3,
    /// BC4 unsigned.
    Bc4,
    /// BC4 signed.
    Bc4Signed,
    /// BC5 unsigned.
    Bc5,
    /// BC5 signed.
    Bc5Signed,
    /// BC6H unsigned half float.
    Bc6h,
    /// BC6H signed half float, decode only.
    Bc6hSigned,
    /// BC7.
    Bc7,
}

static BC1: Bc1Codec = Bc1Codec::OPAQUE;
static BC1_ALPHA: Bc1Codec = Bc1Codec::WITH_ALPHA;
static BC4: Bc4Codec = Bc4Codec { signed: false };
static BC4_SIGNED: Bc4Codec = Bc4Codec { signed: true };
static BC5: Bc5Codec = Bc5Codec { signed: false };
static BC5_SIGNED: Bc5Codec = Bc5Codec { signed: true };
static BC6H: Bc6hCodec = Bc6hCodec { signed: false };
static BC6H_SIGNED: Bc6hCodec = Bc6hCodec { signed: true };

impl BcFamily {
    /// The shared, stateless codec for this family.
    pub fn codec(self) -> &'static dyn BlockCodec {
        match self {
            BcFamily::Bc1 => &BC1,
            BcFamily::Bc1Alpha => &BC1_ALPHA,
            BcFamily::Bc2 => &Bc2Codec,
            BcFamily::Bc3 => &Bc3Codec,
            BcFamily::Bc4 => &BC4,
            BcFamily::Bc4Signed => &BC4_SIGNED,
            BcFamily::Bc5 => &BC5,
            BcFamily::Bc5Signed => &BC5_SIGNED,
            BcFamily::Bc6h => &BC6H,
            BcFamily::Bc6hSigned => &BC6H_SIGNED,
            BcFamily::Bc7 => &Bc7Codec,
        }
    }
}
