#![no_main]

// Compares the BC1 decoder (1-bit alpha variant) against bcdec_rs.
// bcdec expands 565 endpoints with `(x * 527 + 23) >> 6` rather than bit replication and rounds
// interpolated colours, so channels may differ by one.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_codec_bc::Bc1Codec;
use texture_codec_common::block_codec::{BlockCodec, ColorDecodeMode};
use texture_codec_common::texel::Texel;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Block| {
    let mut ours = [Texel::TRANSPARENT_BLACK; 16];
    Bc1Codec::WITH_ALPHA.decode_block(&block.bytes, ColorDecodeMode::Rounded, &mut ours);

    let mut reference = [0u8; 4 * 16];
    bcdec_rs::bc1(&block.bytes, &mut reference, 4 * 4);

    for (i, (texel, expected)) in ours.iter().zip(reference.chunks_exact(4)).enumerate() {
        let actual = texel.to_color_8888().to_array();
        for channel in 0..4 {
            assert!(
                actual[channel].abs_diff(expected[channel]) <= 1,
                "texel {i}: {actual:?} vs {expected:?}"
            );
        }
    }
});
