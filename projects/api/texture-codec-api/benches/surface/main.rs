use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use texture_codec_api::{decode, encode, EncodeOptions, Texel, TextureFormat};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const SIZE: usize = 256;

const FORMATS: [TextureFormat; 5] = [
    TextureFormat::Bc1Unorm,
    TextureFormat::Bc3Unorm,
    TextureFormat::Etc2Rgb8Unorm,
    TextureFormat::Astc8x8Unorm,
    TextureFormat::Rgba8Unorm,
];

fn image() -> Vec<Texel> {
    (0..SIZE * SIZE)
        .map(|i| {
            let (x, y) = ((i % SIZE) as f32, (i / SIZE) as f32);
            Texel::new(
                (x * 0.05).sin() * 0.5 + 0.5,
                (y * 0.03).cos() * 0.5 + 0.5,
                ((x + y) / (2 * SIZE) as f32).min(1.0),
                1.0,
            )
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let src = image();
    let mut group = c.benchmark_group("Surface Encode");
    group.throughput(Throughput::Elements((SIZE * SIZE) as u64));
    group.sample_size(10);

    for format in FORMATS {
        for workers in [1, 4, 16] {
            let options = EncodeOptions::new().max_workers(workers);
            group.bench_with_input(
                BenchmarkId::new(format.name(), workers),
                &options,
                |b, options| {
                    b.iter(|| {
                        black_box(encode(format, &src, SIZE, SIZE, 1, false, options).unwrap())
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let src = image();
    let mut group = c.benchmark_group("Surface Decode");
    group.throughput(Throughput::Elements((SIZE * SIZE) as u64));

    for format in FORMATS {
        let stored = encode(format, &src, SIZE, SIZE, 1, false, &EncodeOptions::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("format", format.name()), &stored, |b, stored| {
            b.iter(|| black_box(decode(format, stored, SIZE, SIZE, 1, false).unwrap()))
        });
    }

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_encode(c);
    bench_decode(c);
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
