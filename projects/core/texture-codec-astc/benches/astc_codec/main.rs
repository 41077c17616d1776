use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use texture_codec_astc::AstcFootprint;
use texture_codec_common::block_codec::{ColorDecodeMode, EncodeParams};
use texture_codec_common::texel::Texel;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const BLOCKS: usize = 1024;

fn criterion_benchmark(c: &mut Criterion) {
    let params = EncodeParams::default();
    let mut group = c.benchmark_group("ASTC");

    for footprint in [AstcFootprint::F4x4, AstcFootprint::F8x8, AstcFootprint::F12x12] {
        let codec = footprint.codec();
        let texel_count = codec.dims().texel_count();
        let texels: Vec<Texel> = (0..BLOCKS * texel_count)
            .map(|i| {
                let seed = i as f32;
                Texel::new((seed * 0.013).sin().abs(), (seed * 0.004).cos().abs(), 0.5, 1.0)
            })
            .collect();
        let mut blocks = vec![0u8; BLOCKS * codec.block_bytes()];
        group.throughput(Throughput::Elements(texels.len() as u64));

        group.bench_function(BenchmarkId::new("encode", format!("{footprint:?}")), |b| {
            b.iter(|| {
                for (block, texels) in blocks.chunks_exact_mut(16).zip(texels.chunks_exact(texel_count)) {
                    codec.encode_block(texels, &params, block);
                }
            })
        });

        let mut out = vec![Texel::TRANSPARENT_BLACK; texel_count];
        group.bench_function(BenchmarkId::new("decode", format!("{footprint:?}")), |b| {
            b.iter(|| {
                for block in blocks.chunks_exact(16) {
                    codec.decode_block(block, ColorDecodeMode::Ideal, &mut out);
                    black_box(&out);
                }
            })
        });
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
