use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use texture_codec_common::block_codec::{ColorDecodeMode, EncodeParams};
use texture_codec_common::texel::Texel;
use texture_codec_etc::EtcFamily;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const BLOCKS: usize = 1024;

fn make_texels() -> Vec<[Texel; 16]> {
    (0..BLOCKS)
        .map(|index| {
            core::array::from_fn(|i| {
                let seed = (index * 16 + i) as f32;
                Texel::new(
                    (seed * 0.017).sin().abs(),
                    (seed * 0.005).cos().abs(),
                    (seed * 0.009) % 1.0,
                    (seed * 0.021) % 1.0,
                )
            })
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let texels = make_texels();
    let params = EncodeParams::default();

    let mut encode = c.benchmark_group("ETC Encode");
    encode.throughput(Throughput::Elements((BLOCKS * 16) as u64));
    for &family in EtcFamily::all_values() {
        let codec = family.codec();
        let mut blocks = vec![0u8; BLOCKS * codec.block_bytes()];
        encode.bench_with_input(
            BenchmarkId::new("family", format!("{family:?}")),
            &texels,
            |b, texels| {
                b.iter(|| {
                    for (block, texels) in blocks.chunks_exact_mut(codec.block_bytes()).zip(texels) {
                        codec.encode_block(texels, &params, block);
                    }
                })
            },
        );
    }
    encode.finish();

    let mut decode = c.benchmark_group("ETC Decode");
    decode.throughput(Throughput::Elements((BLOCKS * 16) as u64));
    for &family in EtcFamily::all_values() {
        let codec = family.codec();
        let mut blocks = vec![0u8; BLOCKS * codec.block_bytes()];
        for (block, texels) in blocks.chunks_exact_mut(codec.block_bytes()).zip(&texels) {
            codec.encode_block(texels, &params, block);
        }
        let mut out = [Texel::TRANSPARENT_BLACK; 16];
        decode.bench_with_input(
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
    decode.finish();
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
