#![no_main]

// Compares the unsigned BC4 decoder against the alpha half of bcdec_rs' BC3 decoder, which
// uses the same block layout.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_codec_bc::bc4::decode_scalar_block;
use texture_codec_common::texel::f32_to_unorm8;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc4Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc4Block| {
    let mut ours = [0.0f32; 16];
    decode_scalar_block(&block.bytes, false, &mut ours);

    // Alpha block followed by an all-black colour block.
    let mut bc3 = [0u8; 16];
    bc3[..8].copy_from_slice(&block.bytes);
    let mut reference = [0u8; 4 * 16];
    bcdec_rs::bc3(&bc3, &mut reference, 4 * 4);

    for (i, (&value, expected)) in ours.iter().zip(reference.chunks_exact(4)).enumerate() {
        let actual = f32_to_unorm8(value);
        assert!(
            actual.abs_diff(expected[3]) <= 1,
            "texel {i}: {actual} vs {}",
            expected[3]
        );
    }
});
