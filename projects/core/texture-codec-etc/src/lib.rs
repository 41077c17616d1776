#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]
#![warn(missing_docs)]

pub mod eac;
pub mod etc1;
pub mod etc2;

#[cfg(test)]
pub mod test_prelude;

pub use eac::{EacR11Codec, EacRg11Codec, EacVariant};
pub use etc1::Etc1Codec;
pub use etc2::{Etc2Rgba1Codec, Etc2Rgba8Codec, Etc2RgbCodec};

use derive_enum_all_values::AllValues;
use texture_codec_common::block_codec::BlockCodec;

/// Every ETC and EAC block variant provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum EtcFamily {
    /// ETC1 RGB.
    Etc1,
    /// ETC2 RGB.
    Etc2Rgb,
    /// ETC2 RGB with punch-through alpha.
    Etc2Rgba1,
    /// ETC2 RGBA with EAC alpha.
    Etc2Rgba8,
    /// EAC R11 unsigned.
    EacR11,
    /// EAC R11 signed.
    EacR11Signed,
    /// EAC RG11 unsigned.
    EacRg11,
    /// EAC RG11 signed.
    EacRg11Signed,
}

static EAC_R11: EacR11Codec = EacR11Codec { signed: false };
static EAC_R11_SIGNED: EacR11Codec = EacR11Codec { signed: true };
static EAC_RG11: EacRg11Codec = EacRg11Codec { signed: false };
static EAC_RG11_SIGNED: EacRg11Codec = EacRg11Codec { signed: true };

impl EtcFamily {
    /// The shared, stateless codec for this variant.
    pub fn codec(self) -> &'static dyn BlockCodec {
        match self {
            EtcFamily::Etc1 => &Etc1Codec,
            EtcFamily::Etc2Rgb => &Etc2RgbCodec,
            EtcFamily::Etc2Rgba1 => &Etc2Rgba1Codec,
            EtcFamily::Etc2Rgba8 => &Etc2Rgba8Codec,
            EtcFamily::EacR11 => &EAC_R11,
            EtcFamily::EacR11Signed => &EAC_R11_SIGNED,
            EtcFamily::EacRg11 => &EAC_RG11,
            EtcFamily::EacRg11Signed => &EAC_RG11_SIGNED,
        }
    }
}
