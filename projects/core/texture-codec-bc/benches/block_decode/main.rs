use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use texture_codec_bc::BcFamily;
use texture_codec_common::block_codec::{ColorDecodeMode, EncodeParams};
use texture_codec_common::texel::Texel;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const BLOCKS: usize = 4096;

/// Encodes a varied set of blocks so every bench decodes realistic data.
fn make_blocks(family: BcFamily) -> Vec<u8> {
    let codec = family.codec();
    let params = EncodeParams::default();
    let mut blocks = vec![0u8; BLOCKS * codec.block_bytes()];
    for (index, block) in blocks.chunks_exact_mut(codec.block_bytes()).enumerate() {
        let texels: [Texel; 16] = core::array::from_fn(|i| {
            let seed = (index * 16 + i) as f32;
            Texel::new(
                (seed * 0.013).sin().abs(),
                (seed * 0.007).cos().abs(),
                (seed * 0.011) % 1.0,
                1.0 - (seed * 0.003) % 1.0,
            )
        });
        if codec.can_encode() {
            codec.encode_block(&texels, &params, block);
        } else {
            block.iter_mut().enumerate().for_each(|(i, b)| *b = (index * 31 + i * 7) as u8);
        }
    }
    blocks
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Decode");
    group.throughput(Throughput::Elements((BLOCKS * 16) as u64));

    for &family in BcFamily::all_values() {
        let codec = family.codec();
        let blocks = make_blocks(family);
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        group.bench_with_input(
            BenchmarkId::new("family", format!("{family:?}")),
            &blocks,
            |b, blocks| {
                b.iter(|| {
                    for block in blocks.chunks_exact(codec.block_bytes()) {
                        codec.decode_block(block, ColorDecodeMode::Ideal, &mut out);
                        black_box(&out);
                    }
                })
            },
        );
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
