#![no_main]

// Compares the BC7 decoder against bcdec_rs. Both use the same interpolation weights and
// rounding, so results must match exactly.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_codec_bc::bc7::decode_bc7_block;
use texture_codec_common::color_8888::Color8888;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc7Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc7Block| {
    let mut ours = [Color8888::default(); 16];
    decode_bc7_block(&block.bytes, &mut ours);

    let mut reference = [0u8; 4 * 16];
    bcdec_rs::bc7(&block.bytes, &mut reference, 4 * 4);

    for (i, (color, expected)) in ours.iter().zip(reference.chunks_exact(4)).enumerate() {
        assert_eq!(&color.to_array()[..], expected, "texel {i}");
    }
});
