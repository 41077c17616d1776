//! Single-partition LDR encoder.
//!
//! Endpoints lie on the principal axis of the block's colours, found by power iteration on the
//! RGBA covariance. Each weight grid point then takes the weight whose interpolated colour is
//! closest to the texel nearest that point.

use crate::layout::{interpolate, pack_block, GRID_SIZE, WEIGHT_VALUES};
use texture_codec_common::{
    block_codec::{BlockDims, EncodeParams},
    texel::{f32_to_unorm8, Texel},
};

const POWER_ITERATIONS: usize = 8;

/// Encodes `dims.texel_count()` row-major texels into one 16-byte block.
pub fn encode_astc_block(texels: &[Texel], dims: BlockDims, params: &EncodeParams, out: &mut [u8]) {
    let (width, height) = (dims.width as usize, dims.height as usize);
    let count = width * height;
    let pixels: Vec<[f32; 4]> = texels
        .iter()
        .take(count)
        .map(|t| t.to_array().map(|c| f32_to_unorm8(c) as f32))
        .collect();

    let endpoints = choose_endpoints(&pixels);

    let palette: [Texel; 4] = WEIGHT_VALUES.map(|w| {
        let channel = |c: usize| interpolate(endpoints[0][c], endpoints[1][c], w) as f32 / 255.0;
        Texel::new(channel(0), channel(1), channel(2), channel(3))
    });

    let mut weights = [0u8; GRID_SIZE * GRID_SIZE];
    for (i, weight) in weights.iter_mut().enumerate() {
        let (gx, gy) = (i % GRID_SIZE, i / GRID_SIZE);
        // Texel nearest to the grid point; exact for a 4x4 footprint.
        let x = (gx * (width - 1) + (GRID_SIZE - 1) / 2) / (GRID_SIZE - 1);
        let y = (gy * (height - 1) + (GRID_SIZE - 1) / 2) / (GRID_SIZE - 1);
        let target = texels[y * width + x];
        let target = Texel::from_array(target.to_array().map(|c| c.clamp(0.0, 1.0)));
        *weight = palette
            .iter()
            .enumerate()
            .map(|(index, p)| (index as u8, params.rgba_error(&target, p)))
            .fold((0, f32::INFINITY), |best, cur| if cur.1 < best.1 { cur } else { best })
            .0;
    }

    out[..16].copy_from_slice(&pack_block(endpoints, &weights));
}

/// Endpoints spanning the colours along their principal axis.
///
/// The endpoint with the larger RGB sum comes second so the decoder never applies blue
/// contraction.
fn choose_endpoints(pixels: &[[f32; 4]]) -> [[u8; 4]; 2] {
    let n = pixels.len().max(1) as f32;
    let mut mean = [0.0f32; 4];
    for p in pixels {
        for c in 0..4 {
            mean[c] += p[c] / n;
        }
    }

    let mut covariance = [[0.0f32; 4]; 4];
    for p in pixels {
        for i in 0..4 {
            for j in 0..4 {
                covariance[i][j] += (p[i] - mean[i]) * (p[j] - mean[j]);
            }
        }
    }

    let mut axis = [1.0f32; 4];
    for _ in 0..POWER_ITERATIONS {
        let mut next = [0.0f32; 4];
        for i in 0..4 {
            for j in 0..4 {
                next[i] += covariance[i][j] * axis[j];
            }
        }
        let length = next.iter().map(|v| v * v).sum::<f32>().sqrt();
        if length < 1e-6 {
            axis = [0.0; 4];
            break;
        }
        axis = next.map(|v| v / length);
    }

    let (mut lo, mut hi) = (0.0f32, 0.0f32);
    for p in pixels {
        let t: f32 = (0..4).map(|c| (p[c] - mean[c]) * axis[c]).sum();
        lo = lo.min(t);
        hi = hi.max(t);
    }

    let at = |t: f32| -> [u8; 4] {
        core::array::from_fn(|c| (mean[c] + axis[c] * t).round().clamp(0.0, 255.0) as u8)
    };
    let (a, b) = (at(lo), at(hi));
    let sum = |e: &[u8; 4]| e[0] as u32 + e[1] as u32 + e[2] as u32;
    if sum(&b) >= sum(&a) {
        [a, b]
    } else {
        [b, a]
    }
}
