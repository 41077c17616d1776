use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::convert::Infallible;
use texture_codec_scheduler::{partition, run_pool, SchedulerSettings};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

#[derive(Debug)]
struct Never(Infallible);

impl std::fmt::Display for Never {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {}
    }
}

impl std::error::Error for Never {}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Band Dispatch");

    // 4096 rows of 16KiB each, a stand-in for a 4096x4096 RGBA8 surface.
    let height = 4096;
    let row_bytes = 16384;
    let mut output = vec![0u8; height * row_bytes];
    group.throughput(Throughput::Bytes(output.len() as u64));

    for workers in [1, 2, 4, 8, 16] {
        let settings = SchedulerSettings::default().with_max_workers(workers);
        let bands = partition(height, 64);
        group.bench_with_input(BenchmarkId::new("workers", workers), &bands, |b, bands| {
            b.iter(|| {
                run_pool(&mut output, row_bytes, bands, &settings, |band, rows| {
                    for (x, byte) in rows.iter_mut().enumerate() {
                        *byte = (x ^ band.start_row) as u8;
                    }
                    Ok::<(), Never>(())
                })
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
