//! Static table of every known texture format.
//!
//! Each [`TextureFormat`] has one immutable [`FormatInfo`] record, describing its layout and the
//! codec that converts it to and from [`Texel`](texture_codec_common::texel::Texel)s. Formats
//! without a codec are known but unsupported: their sizes can be computed, but decoding or
//! encoding them fails with [`TextureCodecError::UnsupportedFormat`].

use crate::error::TextureCodecError;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use texture_codec_astc::{AstcCodec, AstcFootprint};
use texture_codec_bc::{Bc1Codec, Bc2Codec, Bc3Codec, Bc4Codec, Bc5Codec, Bc6hCodec, Bc7Codec};
use texture_codec_common::block_codec::{BlockCodec, BlockDims};
use texture_codec_common::layout::PixelLayout;
use texture_codec_etc::{EacR11Codec, EacRg11Codec, Etc1Codec, Etc2Rgba1Codec, Etc2Rgba8Codec, Etc2RgbCodec};

/// Identifies a texture format.
///
/// The numeric identifier returned by [`TextureFormat::id`] is the declaration order and is
/// stable within a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum TextureFormat {
    /// 8-bit red.
    R8Unorm,
    /// 8-bit red and green.
    Rg8Unorm,
    /// 24-bit RGB, rows padded to 4 bytes.
    Rgb8Unorm,
    /// 32-bit RGBA.
    Rgba8Unorm,
    /// 32-bit RGBA, sRGB colour.
    Rgba8Srgb,
    /// 32-bit BGRA.
    Bgra8Unorm,
    /// 32-bit BGRA, sRGB colour.
    Bgra8Srgb,
    /// Alpha only.
    A8Unorm,
    /// 16-bit 565 colour.
    B5G6R5Unorm,
    /// 16-bit 5551 colour.
    B5G5R5A1Unorm,
    /// 16-bit 4444 colour.
    B4G4R4A4Unorm,
    /// 10-bit colour with 2-bit alpha.
    Rgb10A2Unorm,
    /// 16-bit red.
    R16Unorm,
    /// 16-bit red and green.
    Rg16Unorm,
    /// 64-bit RGBA.
    Rgba16Unorm,
    /// Half float red.
    R16Float,
    /// Half float red and green.
    Rg16Float,
    /// Half float RGBA.
    Rgba16Float,
    /// Single float red.
    R32Float,
    /// Single float red and green.
    Rg32Float,
    /// Single float RGBA, the canonical layout.
    Rgba32Float,
    /// BC1 (DXT1) colour.
    Bc1Unorm,
    /// BC1 (DXT1) colour, sRGB.
    Bc1Srgb,
    /// BC1 with 1-bit alpha.
    Bc1AlphaUnorm,
    /// BC1 with 1-bit alpha, sRGB.
    Bc1AlphaSrgb,
    /// BC2 (DXT3).
    Bc2Unorm,
    /// BC2 (DXT3), sRGB.
    Bc2Srgb,
    /// BC3 (DXT5).
    Bc3Unorm,
    /// BC3 (DXT5), sRGB.
    Bc3Srgb,
    /// BC4 single channel.
    Bc4Unorm,
    /// BC4 single channel, signed.
    Bc4Snorm,
    /// BC5 two channel.
    Bc5Unorm,
    /// BC5 two channel, signed.
    Bc5Snorm,
    /// BC6H unsigned half float.
    Bc6hUfloat,
    /// BC6H signed half float. Decode only.
    Bc6hSfloat,
    /// BC7.
    Bc7Unorm,
    /// BC7, sRGB.
    Bc7Srgb,
    /// ETC1.
    Etc1Rgb8,
    /// ETC2 RGB.
    Etc2Rgb8Unorm,
    /// ETC2 RGB, sRGB.
    Etc2Rgb8Srgb,
    /// ETC2 RGB with punch-through alpha.
    Etc2Rgb8A1Unorm,
    /// ETC2 RGB with punch-through alpha, sRGB.
    Etc2Rgb8A1Srgb,
    /// ETC2 RGB with EAC alpha.
    Etc2Rgba8Unorm,
    /// ETC2 RGB with EAC alpha, sRGB.
    Etc2Rgba8Srgb,
    /// EAC 11-bit red.
    EacR11Unorm,
    /// EAC 11-bit red, signed.
    EacR11Snorm,
    /// EAC 11-bit red and green.
    EacRg11Unorm,
    /// EAC 11-bit red and green, signed.
    EacRg11Snorm,
    /// ASTC 4x4 LDR.
    Astc4x4Unorm,
    /// ASTC 5x4 LDR.
    Astc5x4Unorm,
    /// ASTC 5x5 LDR.
    Astc5x5Unorm,
    /// ASTC 6x5 LDR.
    Astc6x5Unorm,
    /// ASTC 6x6 LDR.
    Astc6x6Unorm,
    /// ASTC 8x5 LDR.
    Astc8x5Unorm,
    /// ASTC 8x6 LDR.
    Astc8x6Unorm,
    /// ASTC 8x8 LDR.
    Astc8x8Unorm,
    /// ASTC 10x5 LDR.
    Astc10x5Unorm,
    /// ASTC 10x6 LDR.
    Astc10x6Unorm,
    /// ASTC 10x8 LDR.
    Astc10x8Unorm,
    /// ASTC 10x10 LDR.
    Astc10x10Unorm,
    /// ASTC 12x10 LDR.
    Astc12x10Unorm,
    /// ASTC 12x12 LDR.
    Astc12x12Unorm,
    /// ASTC 4x4 LDR, sRGB.
    Astc4x4Srgb,
    /// ASTC 5x4 LDR, sRGB.
    Astc5x4Srgb,
    /// ASTC 5x5 LDR, sRGB.
    Astc5x5Srgb,
    /// ASTC 6x5 LDR, sRGB.
    Astc6x5Srgb,
    /// ASTC 6x6 LDR, sRGB.
    Astc6x6Srgb,
    /// ASTC 8x5 LDR, sRGB.
    Astc8x5Srgb,
    /// ASTC 8x6 LDR, sRGB.
    Astc8x6Srgb,
    /// ASTC 8x8 LDR, sRGB.
    Astc8x8Srgb,
    /// ASTC 10x5 LDR, sRGB.
    Astc10x5Srgb,
    /// ASTC 10x6 LDR, sRGB.
    Astc10x6Srgb,
    /// ASTC 10x8 LDR, sRGB.
    Astc10x8Srgb,
    /// ASTC 10x10 LDR, sRGB.
    Astc10x10Srgb,
    /// ASTC 12x10 LDR, sRGB.
    Astc12x10Srgb,
    /// ASTC 12x12 LDR, sRGB.
    Astc12x12Srgb,
    /// ASTC 4x4 HDR. Not supported.
    Astc4x4Hdr,
    /// ASTC 5x4 HDR. Not supported.
    Astc5x4Hdr,
    /// ASTC 5x5 HDR. Not supported.
    Astc5x5Hdr,
    /// ASTC 6x5 HDR. Not supported.
    Astc6x5Hdr,
    /// ASTC 6x6 HDR. Not supported.
    Astc6x6Hdr,
    /// ASTC 8x5 HDR. Not supported.
    Astc8x5Hdr,
    /// ASTC 8x6 HDR. Not supported.
    Astc8x6Hdr,
    /// ASTC 8x8 HDR. Not supported.
    Astc8x8Hdr,
    /// ASTC 10x5 HDR. Not supported.
    Astc10x5Hdr,
    /// ASTC 10x6 HDR. Not supported.
    Astc10x6Hdr,
    /// ASTC 10x8 HDR. Not supported.
    Astc10x8Hdr,
    /// ASTC 10x10 HDR. Not supported.
    Astc10x10Hdr,
    /// ASTC 12x10 HDR. Not supported.
    Astc12x10Hdr,
    /// ASTC 12x12 HDR. Not supported.
    Astc12x12Hdr,
    /// PVRTC 2 bits per texel. Not supported.
    Pvrtc2Bpp,
    /// PVRTC 4 bits per texel. Not supported.
    Pvrtc4Bpp,
}

impl TextureFormat {
    /// Numeric identifier of the format.
    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Looks a format up by its numeric identifier.
    ///
    /// # Errors
    ///
    /// [`TextureCodecError::UnknownFormat`] if no format has this identifier.
    pub fn from_id(id: u32) -> Result<Self, TextureCodecError> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.id() == id)
            .ok_or_else(|| TextureCodecError::UnknownFormat(id.to_string()))
    }

    /// Looks a format up by name, ignoring ASCII case. Names follow the Vulkan spelling
    /// without the `VK_FORMAT_` prefix, e.g. `BC1_RGB_UNORM` or `R8G8B8A8_SRGB`.
    ///
    /// # Errors
    ///
    /// [`TextureCodecError::UnknownFormat`] if no format has this name.
    pub fn from_name(name: &str) -> Result<Self, TextureCodecError> {
        FORMATS
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(name))
            .map(|info| info.format)
            .ok_or_else(|| TextureCodecError::UnknownFormat(name.to_owned()))
    }

    /// Canonical name of the format.
    pub fn name(self) -> &'static str {
        FORMATS[self as usize].name
    }

    /// The registry record of the format.
    #[inline]
    pub fn info(self) -> &'static FormatInfo {
        &FORMATS[self as usize]
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextureFormat {
    type Err = TextureCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// How a format is converted to and from canonical texels.
#[derive(Clone, Copy)]
pub enum FormatCodec {
    /// Block-compressed; converted one block at a time.
    Block(&'static dyn BlockCodec),
    /// Uncompressed unsigned normalized integer channels.
    Packed(PixelLayout),
    /// Uncompressed half or single float channels.
    Float(PixelLayout),
}

impl fmt::Debug for FormatCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatCodec::Block(codec) => f
                .debug_struct("Block")
                .field("dims", &codec.dims())
                .field("block_bytes", &codec.block_bytes())
                .finish(),
            FormatCodec::Packed(layout) => f.debug_tuple("Packed").field(layout).finish(),
            FormatCodec::Float(layout) => f.debug_tuple("Float").field(layout).finish(),
        }
    }
}

/// Immutable description of one [`TextureFormat`].
#[derive(Debug, Clone, Copy)]
pub struct FormatInfo {
    /// The format this record describes.
    pub format: TextureFormat,
    /// Canonical name, see [`TextureFormat::from_name`].
    pub name: &'static str,
    /// Bit width of the R, G, B and A channels. Nominal for compressed formats.
    pub channel_bits: [u8; 4],
    /// Bit offset of each channel within a texel. Zero for compressed formats.
    pub channel_offsets: [u8; 4],
    /// Bytes per texel, or per block for compressed formats.
    pub bytes: usize,
    /// Whether the format is block-compressed.
    pub compressed: bool,
    /// Block footprint; [`BlockDims::UNIT`] for uncompressed formats.
    pub block_dims: BlockDims,
    /// Whether colour channels are stored sRGB encoded.
    pub srgb: bool,
    /// The codec, absent for known but unsupported formats.
    pub codec: Option<FormatCodec>,
}

impl FormatInfo {
    const fn packed(
        format: TextureFormat,
        name: &'static str,
        bits: [u8; 4],
        offsets: [u8; 4],
        srgb: bool,
    ) -> Self {
        let layout = PixelLayout::unorm(bits, offsets);
        Self {
            format,
            name,
            channel_bits: bits,
            channel_offsets: offsets,
            bytes: layout.texel_bytes(),
            compressed: false,
            block_dims: BlockDims::UNIT,
            srgb,
            codec: Some(FormatCodec::Packed(layout)),
        }
    }

    const fn float(format: TextureFormat, name: &'static str, bits: [u8; 4]) -> Self {
        let layout = PixelLayout::float(bits);
        Self {
            format,
            name,
            channel_bits: bits,
            channel_offsets: layout.offsets,
            bytes: layout.texel_bytes(),
            compressed: false,
            block_dims: BlockDims::UNIT,
            srgb: false,
            codec: Some(FormatCodec::Float(layout)),
        }
    }

    const fn block(
        format: TextureFormat,
        name: &'static str,
        dims: BlockDims,
        block_bytes: usize,
        bits: [u8; 4],
        srgb: bool,
        codec: Option<&'static dyn BlockCodec>,
    ) -> Self {
        Self {
            format,
            name,
            channel_bits: bits,
            channel_offsets: [0; 4],
            bytes: block_bytes,
            compressed: true,
            block_dims: dims,
            srgb,
            codec: match codec {
                Some(codec) => Some(FormatCodec::Block(codec)),
                None => None,
            },
        }
    }

    /// Bytes in one row of an uncompressed surface, padded to a multiple of 4.
    pub(crate) fn row_pitch(&self, width: usize) -> Option<usize> {
        width.checked_mul(self.bytes)?.checked_next_multiple_of(4)
    }
}

/// Returns the record of `format`.
///
/// A linear scan; the table is small and looked up once per surface.
pub fn find(format: TextureFormat) -> Option<&'static FormatInfo> {
    FORMATS.iter().find(|info| info.format == format)
}

/// Size in bytes of a `width` x `height` x `depth` surface stored in the format of `info`.
///
/// - Compressed: `ceil(width / block_width) * ceil(height / block_height) * block_bytes`.
///   `depth` must be 1.
/// - Uncompressed: `round_up_4(bytes_per_texel * width) * height * depth`.
///
/// # Errors
///
/// [`TextureCodecError::InvalidDimensions`] for a compressed format with `depth != 1`, or when
/// the size overflows `usize`.
pub fn texture_size(
    width: usize,
    height: usize,
    depth: usize,
    info: &FormatInfo,
) -> Result<usize, TextureCodecError> {
    let invalid = || TextureCodecError::InvalidDimensions {
        width,
        height,
        depth,
    };

    if info.compressed {
        if depth != 1 {
            return Err(invalid());
        }
        let (blocks_x, blocks_y) = info.block_dims.blocks_for(width, height);
        return blocks_x
            .checked_mul(blocks_y)
            .and_then(|blocks| blocks.checked_mul(info.bytes))
            .ok_or_else(invalid);
    }

    info.row_pitch(width)
        .and_then(|pitch| pitch.checked_mul(height))
        .and_then(|slice| slice.checked_mul(depth))
        .ok_or_else(invalid)
}

static BC1: Bc1Codec = Bc1Codec::OPAQUE;
static BC1_ALPHA: Bc1Codec = Bc1Codec::WITH_ALPHA;
static BC2: Bc2Codec = Bc2Codec;
static BC3: Bc3Codec = Bc3Codec;
static BC4: Bc4Codec = Bc4Codec { signed: false };
static BC4_SIGNED: Bc4Codec = Bc4Codec { signed: true };
static BC5: Bc5Codec = Bc5Codec { signed: false };
static BC5_SIGNED: Bc5Codec = Bc5Codec { signed: true };
static BC6H: Bc6hCodec = Bc6hCodec { signed: false };
static BC6H_SIGNED: Bc6hCodec = Bc6hCodec { signed: true };
static BC7: Bc7Codec = Bc7Codec;
static ETC1: Etc1Codec = Etc1Codec;
static ETC2_RGB: Etc2RgbCodec = Etc2RgbCodec;
static ETC2_RGBA1: Etc2Rgba1Codec = Etc2Rgba1Codec;
static ETC2_RGBA8: Etc2Rgba8Codec = Etc2Rgba8Codec;
static EAC_R11: EacR11Codec = EacR11Codec { signed: false };
static EAC_R11_SIGNED: EacR11Codec = EacR11Codec { signed: true };
static EAC_RG11: EacRg11Codec = EacRg11Codec { signed: false };
static EAC_RG11_SIGNED: EacRg11Codec = EacRg11Codec { signed: true };

static ASTC_4X4: AstcCodec = AstcCodec::new(AstcFootprint::F4x4);
static ASTC_5X4: AstcCodec = AstcCodec::new(AstcFootprint::F5x4);
static ASTC_5X5: AstcCodec = AstcCodec::new(AstcFootprint::F5x5);
static ASTC_6X5: AstcCodec = AstcCodec::new(AstcFootprint::F6x5);
static ASTC_6X6: AstcCodec = AstcCodec::new(AstcFootprint::F6x6);
static ASTC_8X5: AstcCodec = AstcCodec::new(AstcFootprint::F8x5);
static ASTC_8X6: AstcCodec = AstcCodec::new(AstcFootprint::F8x6);
static ASTC_8X8: AstcCodec = AstcCodec::new(AstcFootprint::F8x8);
static ASTC_10X5: AstcCodec = AstcCodec::new(AstcFootprint::F10x5);
static ASTC_10X6: AstcCodec = AstcCodec::new(AstcFootprint::F10x6);
static ASTC_10X8: AstcCodec = AstcCodec::new(AstcFootprint::F10x8);
static ASTC_10X10: AstcCodec = AstcCodec::new(AstcFootprint::F10x10);
static ASTC_12X10: AstcCodec = AstcCodec::new(AstcFootprint::F12x10);
static ASTC_12X12: AstcCodec = AstcCodec::new(AstcFootprint::F12x12);

/// One record per [`TextureFormat`], in declaration order.
#[rustfmt::skip]
static FORMATS: [FormatInfo; 92] = [
    FormatInfo::packed(TextureFormat::R8Unorm, "R8_UNORM", [8, 0, 0, 0], [0, 0, 0, 0], false),
    FormatInfo::packed(TextureFormat::Rg8Unorm, "R8G8_UNORM", [8, 8, 0, 0], [0, 8, 0, 0], false),
    FormatInfo::packed(TextureFormat::Rgb8Unorm, "R8G8B8_UNORM", [8, 8, 8, 0], [0, 8, 16, 0], false),
    FormatInfo::packed(TextureFormat::Rgba8Unorm, "R8G8B8A8_UNORM", [8, 8, 8, 8], [0, 8, 16, 24], false),
    FormatInfo::packed(TextureFormat::Rgba8Srgb, "R8G8B8A8_SRGB", [8, 8, 8, 8], [0, 8, 16, 24], true),
    FormatInfo::packed(TextureFormat::Bgra8Unorm, "B8G8R8A8_UNORM", [8, 8, 8, 8], [16, 8, 0, 24], false),
    FormatInfo::packed(TextureFormat::Bgra8Srgb, "B8G8R8A8_SRGB", [8, 8, 8, 8], [16, 8, 0, 24], true),
    FormatInfo::packed(TextureFormat::A8Unorm, "A8_UNORM", [0, 0, 0, 8], [0, 0, 0, 0], false),
    FormatInfo::packed(TextureFormat::B5G6R5Unorm, "B5G6R5_UNORM", [5, 6, 5, 0], [11, 5, 0, 0], false),
    FormatInfo::packed(TextureFormat::B5G5R5A1Unorm, "B5G5R5A1_UNORM", [5, 5, 5, 1], [10, 5, 0, 15], false),
    FormatInfo::packed(TextureFormat::B4G4R4A4Unorm, "B4G4R4A4_UNORM", [4, 4, 4, 4], [8, 4, 0, 12], false),
    FormatInfo::packed(TextureFormat::Rgb10A2Unorm, "R10G10B10A2_UNORM", [10, 10, 10, 2], [0, 10, 20, 30], false),
    FormatInfo::packed(TextureFormat::R16Unorm, "R16_UNORM", [16, 0, 0, 0], [0, 0, 0, 0], false),
    FormatInfo::packed(TextureFormat::Rg16Unorm, "R16G16_UNORM", [16, 16, 0, 0], [0, 16, 0, 0], false),
    FormatInfo::packed(TextureFormat::Rgba16Unorm, "R16G16B16A16_UNORM", [16, 16, 16, 16], [0, 16, 32, 48], false),
    FormatInfo::float(TextureFormat::R16Float, "R16_SFLOAT", [16, 0, 0, 0]),
    FormatInfo::float(TextureFormat::Rg16Float, "R16G16_SFLOAT", [16, 16, 0, 0]),
    FormatInfo::float(TextureFormat::Rgba16Float, "R16G16B16A16_SFLOAT", [16, 16, 16, 16]),
    FormatInfo::float(TextureFormat::R32Float, "R32_SFLOAT", [32, 0, 0, 0]),
    FormatInfo::float(TextureFormat::Rg32Float, "R32G32_SFLOAT", [32, 32, 0, 0]),
    FormatInfo::float(TextureFormat::Rgba32Float, "R32G32B32A32_SFLOAT", [32, 32, 32, 32]),
    FormatInfo::block(TextureFormat::Bc1Unorm, "BC1_RGB_UNORM", BlockDims::new(4, 4), 8, [5, 6, 5, 0], false, Some(&BC1)),
    FormatInfo::block(TextureFormat::Bc1Srgb, "BC1_RGB_SRGB", BlockDims::new(4, 4), 8, [5, 6, 5, 0], true, Some(&BC1)),
    FormatInfo::block(TextureFormat::Bc1AlphaUnorm, "BC1_RGBA_UNORM", BlockDims::new(4, 4), 8, [5, 5, 5, 1], false, Some(&BC1_ALPHA)),
    FormatInfo::block(TextureFormat::Bc1AlphaSrgb, "BC1_RGBA_SRGB", BlockDims::new(4, 4), 8, [5, 5, 5, 1], true, Some(&BC1_ALPHA)),
    FormatInfo::block(TextureFormat::Bc2Unorm, "BC2_UNORM", BlockDims::new(4, 4), 16, [5, 6, 5, 4], false, Some(&BC2)),
    FormatInfo::block(TextureFormat::Bc2Srgb, "BC2_SRGB", BlockDims::new(4, 4), 16, [5, 6, 5, 4], true, Some(&BC2)),
    FormatInfo::block(TextureFormat::Bc3Unorm, "BC3_UNORM", BlockDims::new(4, 4), 16, [5, 6, 5, 8], false, Some(&BC3)),
    FormatInfo::block(TextureFormat::Bc3Srgb, "BC3_SRGB", BlockDims::new(4, 4), 16, [5, 6, 5, 8], true, Some(&BC3)),
    FormatInfo::block(TextureFormat::Bc4Unorm, "BC4_UNORM", BlockDims::new(4, 4), 8, [8, 0, 0, 0], false, Some(&BC4)),
    FormatInfo::block(TextureFormat::Bc4Snorm, "BC4_SNORM", BlockDims::new(4, 4), 8, [8, 0, 0, 0], false, Some(&BC4_SIGNED)),
    FormatInfo::block(TextureFormat::Bc5Unorm, "BC5_UNORM", BlockDims::new(4, 4), 16, [8, 8, 0, 0], false, Some(&BC5)),
    FormatInfo::block(TextureFormat::Bc5Snorm, "BC5_SNORM", BlockDims::new(4, 4), 16, [8, 8, 0, 0], false, Some(&BC5_SIGNED)),
    FormatInfo::block(TextureFormat::Bc6hUfloat, "BC6H_UFLOAT", BlockDims::new(4, 4), 16, [16, 16, 16, 0], false, Some(&BC6H)),
    FormatInfo::block(TextureFormat::Bc6hSfloat, "BC6H_SFLOAT", BlockDims::new(4, 4), 16, [16, 16, 16, 0], false, Some(&BC6H_SIGNED)),
    FormatInfo::block(TextureFormat::Bc7Unorm, "BC7_UNORM", BlockDims::new(4, 4), 16, [8, 8, 8, 8], false, Some(&BC7)),
    FormatInfo::block(TextureFormat::Bc7Srgb, "BC7_SRGB", BlockDims::new(4, 4), 16, [8, 8, 8, 8], true, Some(&BC7)),
    FormatInfo::block(TextureFormat::Etc1Rgb8, "ETC1_R8G8B8_UNORM", BlockDims::new(4, 4), 8, [8, 8, 8, 0], false, Some(&ETC1)),
    FormatInfo::block(TextureFormat::Etc2Rgb8Unorm, "ETC2_R8G8B8_UNORM", BlockDims::new(4, 4), 8, [8, 8, 8, 0], false, Some(&ETC2_RGB)),
    FormatInfo::block(TextureFormat::Etc2Rgb8Srgb, "ETC2_R8G8B8_SRGB", BlockDims::new(4, 4), 8, [8, 8, 8, 0], true, Some(&ETC2_RGB)),
    FormatInfo::block(TextureFormat::Etc2Rgb8A1Unorm, "ETC2_R8G8B8A1_UNORM", BlockDims::new(4, 4), 8, [8, 8, 8, 1], false, Some(&ETC2_RGBA1)),
    FormatInfo::block(TextureFormat::Etc2Rgb8A1Srgb, "ETC2_R8G8B8A1_SRGB", BlockDims::new(4, 4), 8, [8, 8, 8, 1], true, Some(&ETC2_RGBA1)),
    FormatInfo::block(TextureFormat::Etc2Rgba8Unorm, "ETC2_R8G8B8A8_UNORM", BlockDims::new(4, 4), 16, [8, 8, 8, 8], false, Some(&ETC2_RGBA8)),
    FormatInfo::block(TextureFormat::Etc2Rgba8Srgb, "ETC2_R8G8B8A8_SRGB", BlockDims::new(4, 4), 16, [8, 8, 8, 8], true, Some(&ETC2_RGBA8)),
    FormatInfo::block(TextureFormat::EacR11Unorm, "EAC_R11_UNORM", BlockDims::new(4, 4), 8, [11, 0, 0, 0], false, Some(&EAC_R11)),
    FormatInfo::block(TextureFormat::EacR11Snorm, "EAC_R11_SNORM", BlockDims::new(4, 4), 8, [11, 0, 0, 0], false, Some(&EAC_R11_SIGNED)),
    FormatInfo::block(TextureFormat::EacRg11Unorm, "EAC_R11G11_UNORM", BlockDims::new(4, 4), 16, [11, 11, 0, 0], false, Some(&EAC_RG11)),
    FormatInfo::block(TextureFormat::EacRg11Snorm, "EAC_R11G11_SNORM", BlockDims::new(4, 4), 16, [11, 11, 0, 0], false, Some(&EAC_RG11_SIGNED)),
    FormatInfo::block(TextureFormat::Astc4x4Unorm, "ASTC_4x4_UNORM", BlockDims::new(4, 4), 16, [8, 8, 8, 8], false, Some(&ASTC_4X4)),
    FormatInfo::block(TextureFormat::Astc5x4Unorm, "ASTC_5x4_UNORM", BlockDims::new(5, 4), 16, [8, 8, 8, 8], false, Some(&ASTC_5X4)),
    FormatInfo::block(TextureFormat::Astc5x5Unorm, "ASTC_5x5_UNORM", BlockDims::new(5, 5), 16, [8, 8, 8, 8], false, Some(&ASTC_5X5)),
    FormatInfo::block(TextureFormat::Astc6x5Unorm, "ASTC_6x5_UNORM", BlockDims::new(6, 5), 16, [8, 8, 8, 8], false, Some(&ASTC_6X5)),
    FormatInfo::block(TextureFormat::Astc6x6Unorm, "ASTC_6x6_UNORM", BlockDims::new(6, 6), 16, [8, 8, 8, 8], false, Some(&ASTC_6X6)),
    FormatInfo::block(TextureFormat::Astc8x5Unorm, "ASTC_8x5_UNORM", BlockDims::new(8, 5), 16, [8, 8, 8, 8], false, Some(&ASTC_8X5)),
    FormatInfo::block(TextureFormat::Astc8x6Unorm, "ASTC_8x6_UNORM", BlockDims::new(8, 6), 16, [8, 8, 8, 8], false, Some(&ASTC_8X6)),
    FormatInfo::block(TextureFormat::Astc8x8Unorm, "ASTC_8x8_UNORM", BlockDims::new(8, 8), 16, [8, 8, 8, 8], false, Some(&ASTC_8X8)),
    FormatInfo::block(TextureFormat::Astc10x5Unorm, "ASTC_10x5_UNORM", BlockDims::new(10, 5), 16, [8, 8, 8, 8], false, Some(&ASTC_10X5)),
    FormatInfo::block(TextureFormat::Astc10x6Unorm, "ASTC_10x6_UNORM", BlockDims::new(10, 6), 16, [8, 8, 8, 8], false, Some(&ASTC_10X6)),
    FormatInfo::block(TextureFormat::Astc10x8Unorm, "ASTC_10x8_UNORM", BlockDims::new(10, 8), 16, [8, 8, 8, 8], false, Some(&ASTC_10X8)),
    FormatInfo::block(TextureFormat::Astc10x10Unorm, "ASTC_10x10_UNORM", BlockDims::new(10, 10), 16, [8, 8, 8, 8], false, Some(&ASTC_10X10)),
    FormatInfo::block(TextureFormat::Astc12x10Unorm, "ASTC_12x10_UNORM", BlockDims::new(12, 10), 16, [8, 8, 8, 8], false, Some(&ASTC_12X10)),
    FormatInfo::block(TextureFormat::Astc12x12Unorm, "ASTC_12x12_UNORM", BlockDims::new(12, 12), 16, [8, 8, 8, 8], false, Some(&ASTC_12X12)),
    FormatInfo::block(TextureFormat::Astc4x4Srgb, "ASTC_4x4_SRGB", BlockDims::new(4, 4), 16, [8, 8, 8, 8], true, Some(&ASTC_4X4)),
    FormatInfo::block(TextureFormat::Astc5x4Srgb, "ASTC_5x4_SRGB", BlockDims::new(5, 4), 16, [8, 8, 8, 8], true, Some(&ASTC_5X4)),
    FormatInfo::block(TextureFormat::Astc5x5Srgb, "ASTC_5x5_SRGB", BlockDims::new(5, 5), 16, [8, 8, 8, 8], true, Some(&ASTC_5X5)),
    FormatInfo::block(TextureFormat::Astc6x5Srgb, "ASTC_6x5_SRGB", BlockDims::new(6, 5), 16, [8, 8, 8, 8], true, Some(&ASTC_6X5)),
    FormatInfo::block(TextureFormat::Astc6x6Srgb, "ASTC_6x6_SRGB", BlockDims::new(6, 6), 16, [8, 8, 8, 8], true, Some(&ASTC_6X6)),
    FormatInfo::block(TextureFormat::Astc8x5Srgb, "ASTC_8x5_SRGB", BlockDims::new(8, 5), 16, [8, 8, 8, 8], true, Some(&ASTC_8X5)),
    FormatInfo::block(TextureFormat::Astc8x6Srgb, "ASTC_8x6_SRGB", BlockDims::new(8, 6), 16, [8, 8, 8, 8], true, Some(&ASTC_8X6)),
    FormatInfo::block(TextureFormat::Astc8x8Srgb, "ASTC_8x8_SRGB", BlockDims::new(8, 8), 16, [8, 8, 8, 8], true, Some(&ASTC_8X8)),
    FormatInfo::block(TextureFormat::Astc10x5Srgb, "ASTC_10x5_SRGB", BlockDims::new(10, 5), 16, [8, 8, 8, 8], true, Some(&ASTC_10X5)),
    FormatInfo::block(TextureFormat::Astc10x6Srgb, "ASTC_10x6_SRGB", BlockDims::new(10, 6), 16, [8, 8, 8, 8], true, Some(&ASTC_10X6)),
    FormatInfo::block(TextureFormat::Astc10x8Srgb, "ASTC_10x8_SRGB", BlockDims::new(10, 8), 16, [8, 8, 8, 8], true, Some(&ASTC_10X8)),
    FormatInfo::block(TextureFormat::Astc10x10Srgb, "ASTC_10x10_SRGB", BlockDims::new(10, 10), 16, [8, 8, 8, 8], true, Some(&ASTC_10X10)),
    FormatInfo::block(TextureFormat::Astc12x10Srgb, "ASTC_12x10_SRGB", BlockDims::new(12, 10), 16, [8, 8, 8, 8], true, Some(&ASTC_12X10)),
    FormatInfo::block(TextureFormat::Astc12x12Srgb, "ASTC_12x12_SRGB", BlockDims::new(12, 12), 16, [8, 8, 8, 8], true, Some(&ASTC_12X12)),
    FormatInfo::block(TextureFormat::Astc4x4Hdr, "ASTC_4x4_SFLOAT", BlockDims::new(4, 4), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc5x4Hdr, "ASTC_5x4_SFLOAT", BlockDims::new(5, 4), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc5x5Hdr, "ASTC_5x5_SFLOAT", BlockDims::new(5, 5), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc6x5Hdr, "ASTC_6x5_SFLOAT", BlockDims::new(6, 5), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc6x6Hdr, "ASTC_6x6_SFLOAT", BlockDims::new(6, 6), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc8x5Hdr, "ASTC_8x5_SFLOAT", BlockDims::new(8, 5), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc8x6Hdr, "ASTC_8x6_SFLOAT", BlockDims::new(8, 6), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc8x8Hdr, "ASTC_8x8_SFLOAT", BlockDims::new(8, 8), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc10x5Hdr, "ASTC_10x5_SFLOAT", BlockDims::new(10, 5), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc10x6Hdr, "ASTC_10x6_SFLOAT", BlockDims::new(10, 6), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc10x8Hdr, "ASTC_10x8_SFLOAT", BlockDims::new(10, 8), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc10x10Hdr, "ASTC_10x10_SFLOAT", BlockDims::new(10, 10), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc12x10Hdr, "ASTC_12x10_SFLOAT", BlockDims::new(12, 10), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Astc12x12Hdr, "ASTC_12x12_SFLOAT", BlockDims::new(12, 12), 16, [16, 16, 16, 16], false, None),
    FormatInfo::block(TextureFormat::Pvrtc2Bpp, "PVRTC1_2BPP_UNORM", BlockDims::new(8, 4), 8, [8, 8, 8, 8], false, None),
    FormatInfo::block(TextureFormat::Pvrtc4Bpp, "PVRTC1_4BPP_UNORM", BlockDims::new(4, 4), 8, [8, 8, 8, 8], false, None),
];
