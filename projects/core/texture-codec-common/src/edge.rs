//! Preparation and edge handling around block codecs.
//!
//! Encoding never emits partial blocks: [`expand_edges`] grows the source to a whole number of
//! blocks by replicating the last column and row, which keeps spurious border colours out of
//! the endpoint search. Decoding clips instead, see [`write_block_clipped`].

use crate::allocate::{try_alloc_vec, AllocateError};
use crate::block_codec::BlockDims;
use crate::convert::Gamma;
use crate::texel::Texel;

/// A canonical image grown to a multiple of a block footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedImage {
    /// Row-major texels, `width * height` long.
    pub texels: Vec<Texel>,
    /// Width rounded up to the block width.
    pub width: usize,
    /// Height rounded up to the block height.
    pub height: usize,
}

/// Copies `src` (`width` x `height`) into a buffer whose dimensions are multiples of `dims`,
/// replicating the rightmost column and bottom row into the padding.
///
/// # Panics
///
/// If `src` holds fewer than `width * height` texels.
pub fn expand_edges(
    src: &[Texel],
    width: usize,
    height: usize,
    dims: BlockDims,
) -> Result<ExpandedImage, AllocateError> {
    let (blocks_x, blocks_y) = dims.blocks_for(width, height);
    let padded_width = blocks_x * dims.width as usize;
    let padded_height = blocks_y * dims.height as usize;
    let mut texels = try_alloc_vec(padded_width * padded_height, Texel::default())?;
    if width == 0 || height == 0 {
        return Ok(ExpandedImage {
            texels,
            width: padded_width,
            height: padded_height,
        });
    }

    for (y, row) in texels.chunks_exact_mut(padded_width).enumerate() {
        let src_row = &src[y.min(height - 1) * width..][..width];
        row[..width].copy_from_slice(src_row);
        let last = src_row[width - 1];
        row[width..].fill(last);
    }

    Ok(ExpandedImage {
        texels,
        width: padded_width,
        height: padded_height,
    })
}

/// Multiplies the colour channels by alpha.
pub fn premultiply_alpha(texels: &mut [Texel]) {
    for texel in texels {
        texel.r *= texel.a;
        texel.g *= texel.a;
        texel.b *= texel.a;
    }
}

/// Applies `gamma` to the colour channels, leaving alpha untouched.
pub fn apply_gamma(texels: &mut [Texel], gamma: Gamma) {
    if gamma == Gamma::None {
        return;
    }

    for texel in texels {
        texel.r = gamma.apply(texel.r as f64) as f32;
        texel.g = gamma.apply(texel.g as f64) as f32;
        texel.b = gamma.apply(texel.b as f64) as f32;
    }
}

/// Gathers the block at block coordinates (`block_x`, `block_y`) from a row-major image
/// `width` texels wide whose dimensions are multiples of `dims`.
#[inline]
pub fn read_block(
    src: &[Texel],
    width: usize,
    dims: BlockDims,
    block_x: usize,
    block_y: usize,
    out: &mut [Texel],
) {
    let block_width = dims.width as usize;
    let x0 = block_x * block_width;
    let y0 = block_y * dims.height as usize;
    for (local_y, out_row) in out
        .chunks_exact_mut(block_width)
        .take(dims.height as usize)
        .enumerate()
    {
        let start = (y0 + local_y) * width + x0;
        out_row.copy_from_slice(&src[start..start + block_width]);
    }
}

/// Scatters a decoded block into a `width` x `height` image, dropping texels that fall outside
/// the image.
#[inline]
pub fn write_block_clipped(
    block: &[Texel],
    dims: BlockDims,
    block_x: usize,
    block_y: usize,
    dst: &mut [Texel],
    width: usize,
    height: usize,
) {
    let block_width = dims.width as usize;
    let x0 = block_x * block_width;
    let y0 = block_y * dims.height as usize;
    if x0 >= width {
        return;
    }

    let visible = block_width.min(width - x0);
    for (local_y, block_row) in block
        .chunks_exact(block_width)
        .take(dims.height as usize)
        .enumerate()
    {
        let y = y0 + local_y;
        if y >= height {
            break;
        }
        let start = y * width + x0;
        dst[start..start + visible].copy_from_slice(&block_row[..visible]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn gradient(width: usize, height: usize) -> Vec<Texel> {
        (0..width * height)
            .map(|i| Texel::new((i % width) as f32, (i / width) as f32, 0.0, 1.0))
            .collect()
    }

    #[rstest]
    #[case(5, 3, 8, 4)]
    #[case(4, 4, 4, 4)]
    #[case(1, 1, 4, 4)]
    #[case(9, 7, 12, 8)]
    fn expand_replicates_edges(
        #[case] width: usize,
        #[case] height: usize,
        #[case] padded_width: usize,
        #[case] padded_height: usize,
    ) {
        let src = gradient(width, height);
        let expanded = expand_edges(&src, width, height, BlockDims::FOUR_BY_FOUR).unwrap();
        assert_eq!((expanded.width, expanded.height), (padded_width, padded_height));
        for y in 0..padded_height {
            for x in 0..padded_width {
                let texel = expanded.texels[y * padded_width + x];
                assert_eq!(texel.r, x.min(width - 1) as f32);
                assert_eq!(texel.g, y.min(height - 1) as f32);
            }
        }
    }

    #[test]
    fn expand_handles_non_square_blocks() {
        let src = gradient(6, 6);
        let expanded = expand_edges(&src, 6, 6, BlockDims::new(5, 4)).unwrap();
        assert_eq!((expanded.width, expanded.height), (10, 8));
        assert_eq!(expanded.texels[7 * 10 + 9], Texel::new(5.0, 5.0, 0.0, 1.0));
    }

    #[test]
    fn read_then_clip_write_restores_image() {
        let (width, height) = (7, 6);
        let src = gradient(width, height);
        let dims = BlockDims::FOUR_BY_FOUR;
        let expanded = expand_edges(&src, width, height, dims).unwrap();
        let mut restored = vec![Texel::default(); width * height];
        let mut block = [Texel::default(); 16];
        for by in 0..2 {
            for bx in 0..2 {
                read_block(&expanded.texels, expanded.width, dims, bx, by, &mut block);
                write_block_clipped(&block, dims, bx, by, &mut restored, width, height);
            }
        }
        assert_eq!(restored, src);
    }

    #[test]
    fn premultiply_scales_colour_only() {
        let mut texels = [Texel::new(1.0, 0.5, 0.25, 0.5)];
        premultiply_alpha(&mut texels);
        assert_eq!(texels[0], Texel::new(0.5, 0.25, 0.125, 0.5));
    }

    #[test]
    fn gamma_leaves_alpha() {
        let mut texels = [Texel::new(0.5, 0.5, 0.5, 0.5)];
        apply_gamma(&mut texels, Gamma::SrgbToLinear);
        assert_eq!(texels[0].a, 0.5);
        assert!(texels[0].r < 0.22);
    }
}
