#![no_main]

// Compares the BC3 decoder against bcdec_rs, within one unit per channel.
// bcdec truncates interpolated alpha while the decoder here rounds.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_codec_bc::Bc3Codec;
use texture_codec_common::block_codec::{BlockCodec, ColorDecodeMode};
use texture_codec_common::texel::Texel;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc3Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc3Block| {
    let mut ours = [Texel::TRANSPARENT_BLACK; 16];
    Bc3Codec.decode_block(&block.bytes, ColorDecodeMode::Rounded, &mut ours);

    let mut reference = [0u8; 4 * 16];
    bcdec_rs::bc3(&block.bytes, &mut reference, 4 * 4);

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
