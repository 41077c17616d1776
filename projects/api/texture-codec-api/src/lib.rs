#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]
#![warn(missing_docs)]

pub mod error;
pub mod options;
pub mod registry;

mod pipeline;

#[cfg(test)]
pub mod test_prelude;

pub use error::TextureCodecError;
pub use options::{DecodeOptions, EncodeOptions};
pub use registry::{find, texture_size, FormatCodec, FormatInfo, TextureFormat};
pub use texture_codec_common::block_codec::{BlockDims, ColorDecodeMode, EncodeParams};
pub use texture_codec_common::texel::Texel;
pub use texture_codec_scheduler::SchedulerSettings;

fn lookup(format: TextureFormat) -> Result<&'static FormatInfo, TextureCodecError> {
    find(format).ok_or_else(|| TextureCodecError::UnknownFormat(format.to_string()))
}

/// Block footprint of `format`; `1x1x1` for uncompressed formats.
///
/// # Examples
///
/// ```
/// # use texture_codec_api::{get_block_dims, BlockDims, TextureFormat};
/// let dims = get_block_dims(TextureFormat::Astc8x5Unorm).unwrap();
/// assert_eq!(dims, BlockDims::new(8, 5));
/// ```
pub fn get_block_dims(format: TextureFormat) -> Result<BlockDims, TextureCodecError> {
    Ok(lookup(format)?.block_dims)
}

/// Size in bytes of one `width` x `height` image in `format`.
///
/// Also answers for known but unsupported formats, whose layout is still defined.
///
/// # Examples
///
/// ```
/// # use texture_codec_api::{compressed_size, TextureFormat};
/// assert_eq!(compressed_size(100, 37, TextureFormat::Bc1Unorm).unwrap(), 2000);
/// ```
pub fn compressed_size(
    width: usize,
    height: usize,
    format: TextureFormat,
) -> Result<usize, TextureCodecError> {
    texture_size(width, height, 1, lookup(format)?)
}

/// Decodes a surface into row-major canonical texels with default [`DecodeOptions`].
///
/// # Parameters
///
/// - `format`: Format of `src`
/// - `src`: Stored texture data; uncompressed rows are padded to 4 bytes
/// - `width`, `height`, `depth`: Surface size in texels; `depth` must be 1 for compressed formats
/// - `srgb`: Treat colour channels as sRGB encoded even if `format` is not an sRGB format
///
/// # Returns
///
/// `width * height * depth` texels with linear colour.
///
/// # Errors
///
/// - [`TextureCodecError::UnsupportedFormat`] if `format` has no decoder
/// - [`TextureCodecError::InvalidDimensions`] if the dimensions do not fit the format
/// - [`TextureCodecError::BufferTooSmall`] if `src` is shorter than [`texture_size`]
/// - [`TextureCodecError::AllocationFailed`] if the output cannot be allocated
///
/// # Examples
///
/// ```
/// # use texture_codec_api::{decode, TextureFormat};
/// // One BC1 block, endpoint 0 pure red, every index 0.
/// let block = [0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let texels = decode(TextureFormat::Bc1Unorm, &block, 4, 4, 1, false).unwrap();
/// assert_eq!(texels.len(), 16);
/// assert_eq!(texels[0].to_array(), [1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn decode(
    format: TextureFormat,
    src: &[u8],
    width: usize,
    height: usize,
    depth: usize,
    srgb: bool,
) -> Result<Vec<Texel>, TextureCodecError> {
    decode_with_options(format, src, width, height, depth, srgb, &DecodeOptions::default())
}

/// [`decode`] with explicit [`DecodeOptions`].
pub fn decode_with_options(
    format: TextureFormat,
    src: &[u8],
    width: usize,
    height: usize,
    depth: usize,
    srgb: bool,
    options: &DecodeOptions,
) -> Result<Vec<Texel>, TextureCodecError> {
    pipeline::decode_surface(lookup(format)?, src, width, height, depth, srgb, options)
}

/// Encodes row-major canonical texels into `format`.
///
/// Compressed formats are encoded in bands of block rows on up to
/// [`SchedulerSettings::max_workers`] threads; the output is identical for any worker count.
///
/// # Parameters
///
/// - `format`: Destination format
/// - `src`: At least `width * height * depth` texels with linear colour
/// - `width`, `height`, `depth`: Surface size in texels; `depth` must be 1 for compressed formats
/// - `srgb`: sRGB encode colour channels even if `format` is not an sRGB format
/// - `options`: Encoder parameters, premultiplied alpha and scheduling
///
/// # Errors
///
/// - [`TextureCodecError::UnsupportedFormat`] if `format` has no encoder
/// - [`TextureCodecError::InvalidDimensions`] if the dimensions do not fit the format
/// - [`TextureCodecError::BufferTooSmall`] if `src` holds fewer texels than the surface
/// - [`TextureCodecError::SchedulerLaunchFailed`] if the worker pool cannot start
/// - [`TextureCodecError::AllocationFailed`] if a buffer cannot be allocated
///
/// # Examples
///
/// ```
/// # use texture_codec_api::{encode, EncodeOptions, Texel, TextureFormat};
/// let texels = vec![Texel::new(0.25, 0.5, 0.75, 1.0); 8 * 8];
/// let options = EncodeOptions::new().max_workers(2);
/// let bc7 = encode(TextureFormat::Bc7Unorm, &texels, 8, 8, 1, false, &options).unwrap();
/// assert_eq!(bc7.len(), 4 * 16);
/// ```
pub fn encode(
    format: TextureFormat,
    src: &[Texel],
    width: usize,
    height: usize,
    depth: usize,
    srgb: bool,
    options: &EncodeOptions,
) -> Result<Vec<u8>, TextureCodecError> {
    pipeline::encode_surface(lookup(format)?, src, width, height, depth, srgb, options)
}
