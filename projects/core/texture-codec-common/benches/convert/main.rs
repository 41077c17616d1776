use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use texture_codec_common::allocate::allocate_align_64;
use texture_codec_common::convert::{
    convert_texels, f32_texels_to_integer, integer_texels_to_f32, Gamma,
};
use texture_codec_common::layout::PixelLayout;
use texture_codec_common::texel::Texel;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const RGBA8: PixelLayout = PixelLayout::unorm([8, 8, 8, 8], [0, 8, 16, 24]);
const B5G6R5: PixelLayout = PixelLayout::unorm([5, 6, 5, 0], [11, 5, 0, 0]);

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Texel Conversion");

    // 1M texels of RGBA8888
    let texel_count = 1024 * 1024;
    let mut input = allocate_align_64(texel_count * 4).unwrap();
    for (x, byte) in input.as_mut_slice().iter_mut().enumerate() {
        *byte = (x % 251) as u8;
    }

    let mut texels = vec![Texel::default(); texel_count];
    let mut packed = allocate_align_64(texel_count * 4).unwrap();
    group.throughput(Throughput::Bytes((texel_count * 4) as u64));

    group.bench_function("rgba8_to_f32", |b| {
        b.iter(|| integer_texels_to_f32(&RGBA8, input.as_slice(), &mut texels, Gamma::None))
    });

    group.bench_function("rgba8_to_f32_srgb", |b| {
        b.iter(|| {
            integer_texels_to_f32(&RGBA8, input.as_slice(), &mut texels, Gamma::SrgbToLinear)
        })
    });

    group.bench_function("f32_to_rgba8", |b| {
        b.iter(|| f32_texels_to_integer(&RGBA8, &texels, packed.as_mut_slice(), Gamma::None))
    });

    group.bench_function("rgba8_to_r5g6b5", |b| {
        b.iter(|| {
            convert_texels(
                &RGBA8,
                input.as_slice(),
                &B5G6R5,
                packed.as_mut_slice(),
                texel_count,
                Gamma::None,
            )
        })
    });

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
