//! Surface level conversion between a stored format and canonical texels.
//!
//! Decoding is cheap and runs on the calling thread, one block (or row) at a time. Encoding
//! prepares the whole surface first (edge replication, premultiplied alpha, sRGB) and then
//! hands bands of block rows to the worker pool.

use crate::error::TextureCodecError;
use crate::options::{DecodeOptions, EncodeOptions};
use crate::registry::{texture_size, FormatCodec, FormatInfo};
use texture_codec_common::allocate::{try_alloc_vec, AllocateError};
use texture_codec_common::block_codec::{BlockCodec, ColorDecodeMode};
use texture_codec_common::convert::{
    f32_texels_to_float, f32_texels_to_integer, float_texels_to_f32, integer_texels_to_f32, Gamma,
};
use texture_codec_common::edge::{
    apply_gamma, expand_edges, premultiply_alpha, read_block, write_block_clipped,
};
use texture_codec_common::texel::Texel;
use texture_codec_scheduler::{partition, run_pool, Band};
use tracing::{debug, warn};

/// Decodes a `width` x `height` x `depth` surface into canonical texels.
pub(crate) fn decode_surface(
    info: &FormatInfo,
    src: &[u8],
    width: usize,
    height: usize,
    depth: usize,
    srgb: bool,
    options: &DecodeOptions,
) -> Result<Vec<Texel>, TextureCodecError> {
    let codec = supported_codec(info)?;
    let expected = texture_size(width, height, depth, info)?;
    if src.len() < expected {
        return Err(TextureCodecError::BufferTooSmall {
            expected,
            actual: src.len(),
        });
    }

    let texel_count = texel_count(width, height, depth)?;
    let mut output = try_alloc_vec(texel_count, Texel::default())?;
    if texel_count == 0 {
        return Ok(output);
    }

    let gamma = if srgb || info.srgb {
        Gamma::SrgbToLinear
    } else {
        Gamma::None
    };
    debug!(format = %info.format, width, height, depth, ?gamma, "decoding surface");

    match codec {
        FormatCodec::Block(codec) => {
            decode_blocks(codec, src, width, height, options.color_mode, &mut output)?;
            apply_gamma(&mut output, gamma);
        }
        FormatCodec::Packed(layout) => {
            let pitch = texture_size(width, 1, 1, info)?;
            for (row, texels) in src.chunks_exact(pitch).zip(output.chunks_exact_mut(width)) {
                integer_texels_to_f32(&layout, row, texels, gamma);
            }
        }
        FormatCodec::Float(layout) => {
            let pitch = texture_size(width, 1, 1, info)?;
            for (row, texels) in src.chunks_exact(pitch).zip(output.chunks_exact_mut(width)) {
                float_texels_to_f32(&layout, row, texels, gamma);
            }
        }
    }

    Ok(output)
}

/// Decodes blocks in row-major order, clipping each to the image.
fn decode_blocks(
    codec: &dyn BlockCodec,
    src: &[u8],
    width: usize,
    height: usize,
    mode: ColorDecodeMode,
    output: &mut [Texel],
) -> Result<(), AllocateError> {
    let dims = codec.dims();
    let (blocks_x, blocks_y) = dims.blocks_for(width, height);
    let mut scratch = try_alloc_vec(dims.texel_count(), Texel::default())?;

    for (index, block) in src
        .chunks_exact(codec.block_bytes())
        .take(blocks_x * blocks_y)
        .enumerate()
    {
        codec.decode_block(block, mode, &mut scratch);
        let (block_x, block_y) = (index % blocks_x, index / blocks_x);
        write_block_clipped(&scratch, dims, block_x, block_y, output, width, height);
    }

    Ok(())
}

/// Encodes `width` x `height` x `depth` canonical texels into the format of `info`.
///
/// The returned buffer is only produced once every band has been written.
pub(crate) fn encode_surface(
    info: &FormatInfo,
    src: &[Texel],
    width: usize,
    height: usize,
    depth: usize,
    srgb: bool,
    options: &EncodeOptions,
) -> Result<Vec<u8>, TextureCodecError> {
    let codec = supported_codec(info)?;
    let size = texture_size(width, height, depth, info)?;
    let texel_count = texel_count(width, height, depth)?;
    if src.len() < texel_count {
        return Err(TextureCodecError::BufferTooSmall {
            expected: texel_count,
            actual: src.len(),
        });
    }

    let mut output = try_alloc_vec(size, 0u8)?;
    if texel_count == 0 {
        return Ok(output);
    }

    let src = &src[..texel_count];
    let gamma = if srgb || info.srgb {
        Gamma::LinearToSrgb
    } else {
        Gamma::None
    };
    debug!(
        format = %info.format,
        width,
        height,
        depth,
        ?gamma,
        workers = options.scheduler.max_workers,
        "encoding surface"
    );

    match codec {
        FormatCodec::Block(codec) => {
            if !codec.can_encode() {
                warn!(format = %info.format, "format has no encoder");
                return Err(TextureCodecError::UnsupportedFormat(info.format));
            }
            encode_blocks(codec, src, width, height, gamma, options, &mut output)?;
        }
        FormatCodec::Packed(layout) => {
            let pitch = texture_size(width, 1, 1, info)?;
            encode_rows(src, width, pitch, options, &mut output, |texels, row| {
                f32_texels_to_integer(&layout, texels, row, gamma)
            })?;
        }
        FormatCodec::Float(layout) => {
            let pitch = texture_size(width, 1, 1, info)?;
            encode_rows(src, width, pitch, options, &mut output, |texels, row| {
                f32_texels_to_float(&layout, texels, row, gamma)
            })?;
        }
    }

    Ok(output)
}

/// Expands the image to whole blocks and encodes one band of block rows per job.
fn encode_blocks(
    codec: &dyn BlockCodec,
    src: &[Texel],
    width: usize,
    height: usize,
    gamma: Gamma,
    options: &EncodeOptions,
    output: &mut [u8],
) -> Result<(), TextureCodecError> {
    let dims = codec.dims();
    let block_bytes = codec.block_bytes();

    let mut image = expand_edges(src, width, height, dims)?;
    if options.premultiply_alpha {
        premultiply_alpha(&mut image.texels);
    }
    apply_gamma(&mut image.texels, gamma);

    let (blocks_x, blocks_y) = dims.blocks_for(width, height);
    let row_bytes = blocks_x * block_bytes;
    let bands = partition(blocks_y, options.scheduler.rows_per_band);
    let image = &image;

    run_pool(
        output,
        row_bytes,
        &bands,
        &options.scheduler,
        |band: &Band, chunk: &mut [u8]| -> Result<(), TextureCodecError> {
            let mut block = try_alloc_vec(dims.texel_count(), Texel::default())?;
            for (block_y, row) in band.rows().zip(chunk.chunks_exact_mut(row_bytes)) {
                for (block_x, packed) in row.chunks_exact_mut(block_bytes).enumerate() {
                    read_block(&image.texels, image.width, dims, block_x, block_y, &mut block);
                    codec.encode_block(&block, &options.params, packed);
                }
            }
            Ok(())
        },
    )?;

    Ok(())
}

/// Converts bands of texel rows with `convert`, one padded output row at a time.
fn encode_rows<F>(
    src: &[Texel],
    width: usize,
    pitch: usize,
    options: &EncodeOptions,
    output: &mut [u8],
    convert: F,
) -> Result<(), TextureCodecError>
where
    F: Fn(&[Texel], &mut [u8]) + Sync,
{
    let premultiplied;
    let src = if options.premultiply_alpha {
        let mut copy = try_alloc_vec(src.len(), Texel::default())?;
        copy.copy_from_slice(src);
        premultiply_alpha(&mut copy);
        premultiplied = copy;
        &premultiplied[..]
    } else {
        src
    };

    let bands = partition(src.len() / width, options.scheduler.rows_per_band);
    run_pool(
        output,
        pitch,
        &bands,
        &options.scheduler,
        |band: &Band, chunk: &mut [u8]| -> Result<(), TextureCodecError> {
            for (row, packed) in band.rows().zip(chunk.chunks_exact_mut(pitch)) {
                convert(&src[row * width..][..width], packed);
            }
            Ok(())
        },
    )?;

    Ok(())
}

fn supported_codec(info: &FormatInfo) -> Result<FormatCodec, TextureCodecError> {
    info.codec.ok_or_else(|| {
        warn!(format = %info.format, "format is known but not supported");
        TextureCodecError::UnsupportedFormat(info.format)
    })
}

fn texel_count(width: usize, height: usize, depth: usize) -> Result<usize, TextureCodecError> {
    width
        .checked_mul(height)
        .and_then(|texels| texels.checked_mul(depth))
        .ok_or(TextureCodecError::InvalidDimensions {
            width,
            height,
            depth,
        })
}
