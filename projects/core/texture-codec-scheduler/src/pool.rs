//! Bounded worker pool running one job per band.
//!
//! Bands are handed out through rayon's work queue; an idle worker picks up the next band as
//! soon as it finishes the previous one. Each job owns a disjoint slice of the output, so there
//! is no shared mutable state between bands and the result is identical for any worker count.

use crate::band::Band;
use crate::error::SchedulerError;
use crate::settings::SchedulerSettings;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{debug, trace};

/// Runs `job` once per band, each on its own rows of `output`.
///
/// # Parameters
///
/// - `output`: Destination buffer, at least `bands.last().end_row() * row_bytes` long.
/// - `row_bytes`: Bytes per output row.
/// - `bands`: Contiguous bands starting at row zero, as produced by [`partition`](crate::partition).
/// - `settings`: Worker count; `1` runs every band on the calling thread.
/// - `job`: Called with the band and its `band.row_count * row_bytes` byte slice.
///
/// # Returns
///
/// `Ok(())` once every band has completed. If any band fails, all bands still run to completion
/// and the error of the failing band with the lowest index is returned. The caller must discard
/// `output` on error.
///
/// # Errors
///
/// - [`SchedulerError::InvalidBands`] if `bands` are not numbered in order, leave a gap, overlap,
///   contain an empty band or span more bytes than fit in memory.
/// - [`SchedulerError::OutputTooSmall`] if `output` does not cover every band.
/// - [`SchedulerError::LaunchFailed`] if the worker pool cannot be created.
/// - [`SchedulerError::Job`] if a job fails.
pub fn run_pool<E, F>(
    output: &mut [u8],
    row_bytes: usize,
    bands: &[Band],
    settings: &SchedulerSettings,
    job: F,
) -> Result<(), SchedulerError<E>>
where
    E: std::error::Error + Send + 'static,
    F: Fn(&Band, &mut [u8]) -> Result<(), E> + Sync,
{
    let expected = band_extent(bands, row_bytes)?;
    if output.len() < expected {
        return Err(SchedulerError::OutputTooSmall {
            expected,
            actual: output.len(),
        });
    }

    let mut work = Vec::with_capacity(bands.len());
    let mut remaining = &mut output[..expected];
    for band in bands {
        let (chunk, rest) = remaining.split_at_mut(band.row_count * row_bytes);
        work.push((band, chunk));
        remaining = rest;
    }

    let workers = settings.max_workers.max(1).min(bands.len().max(1));
    debug!(bands = bands.len(), workers, row_bytes, "dispatching bands");

    let run_band = |(band, chunk): (&Band, &mut [u8])| {
        trace!(band = band.index, rows = ?band.rows(), "running band");
        job(band, chunk).map_err(|source| SchedulerError::Job {
            band: band.index,
            source,
        })
    };

    let results: Vec<Result<(), SchedulerError<E>>> = if workers == 1 {
        work.into_iter().map(run_band).collect()
    } else {
        let pool = shared_pool(workers).map_err(|e| SchedulerError::LaunchFailed(e.to_string()))?;
        pool.install(|| work.into_par_iter().map(run_band).collect())
    };

    // Results are in band order, so the first error is the lowest failing band.
    results.into_iter().collect()
}

/// Bytes covered by `bands`, which must tile rows `0..n` in index order.
fn band_extent<E>(bands: &[Band], row_bytes: usize) -> Result<usize, SchedulerError<E>>
where
    E: std::error::Error + 'static,
{
    let mut next_row = 0usize;
    for (position, band) in bands.iter().enumerate() {
        if band.index != position || band.start_row != next_row || band.row_count == 0 {
            return Err(SchedulerError::InvalidBands { band: position });
        }
        next_row = next_row
            .checked_add(band.row_count)
            .ok_or(SchedulerError::InvalidBands { band: position })?;
    }

    next_row
        .checked_mul(row_bytes)
        .ok_or(SchedulerError::InvalidBands {
            band: bands.len().saturating_sub(1),
        })
}

/// Pool with `workers` threads, built on first use and kept for later calls.
fn shared_pool(workers: usize) -> Result<Arc<ThreadPool>, ThreadPoolBuildError> {
    static POOLS: OnceLock<Mutex<HashMap<usize, Arc<ThreadPool>>>> = OnceLock::new();

    let mut pools = POOLS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(pool) = pools.get(&workers) {
        return Ok(Arc::clone(pool));
    }

    let pool = Arc::new(
        ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(move |index| format!("texture-codec-{workers}-worker-{index}"))
            .build()?,
    );
    pools.insert(workers, Arc::clone(&pool));
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("band refused")]
    struct Refused;

    fn fill_pattern(band: &Band, rows: &mut [u8], row_bytes: usize) {
        for (local_row, row) in rows.chunks_exact_mut(row_bytes).enumerate() {
            let y = band.start_row + local_row;
            for (x, byte) in row.iter_mut().enumerate() {
                *byte = (y.wrapping_mul(31) ^ x.wrapping_mul(7)) as u8;
            }
        }
    }

    fn render(height: usize, rows_per_band: usize, workers: usize) -> Vec<u8> {
        let row_bytes = 13;
        let mut output = vec![0u8; height * row_bytes];
        let bands = partition(height, rows_per_band);
        let settings = SchedulerSettings::default().with_max_workers(workers);
        run_pool(&mut output, row_bytes, &bands, &settings, |band, rows| {
            fill_pattern(band, rows, row_bytes);
            Ok::<(), Refused>(())
        })
        .unwrap();
        output
    }

    #[rstest]
    #[case(37, 24)]
    #[case(100, 3)]
    #[case(1, 16)]
    #[case(64, 1)]
    fn output_is_independent_of_worker_count(#[case] height: usize, #[case] rows: usize) {
        let single = render(height, rows, 1);
        for workers in [2, 3, 8, 16] {
            assert_eq!(single, render(height, rows, workers), "workers = {workers}");
        }
    }

    #[test]
    fn every_band_runs_exactly_once() {
        let bands = partition(50, 4);
        let calls = AtomicUsize::new(0);
        let mut output = vec![0u8; 50];
        let settings = SchedulerSettings::default().with_max_workers(4);
        run_pool(&mut output, 1, &bands, &settings, |band, rows| {
            calls.fetch_add(1, Ordering::Relaxed);
            assert_eq!(rows.len(), band.row_count);
            rows.fill(band.index as u8 + 1);
            Ok::<(), Refused>(())
        })
        .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), bands.len());
        assert!(output.iter().all(|&x| x != 0));
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    fn reports_lowest_failing_band_after_all_complete(#[case] workers: usize) {
        let bands = partition(40, 4);
        let completed = AtomicUsize::new(0);
        let mut output = vec![0u8; 40];
        let settings = SchedulerSettings::default().with_max_workers(workers);
        let result = run_pool(&mut output, 1, &bands, &settings, |band, _| {
            completed.fetch_add(1, Ordering::Relaxed);
            if band.index == 3 || band.index == 7 {
                Err(Refused)
            } else {
                Ok(())
            }
        });

        assert_eq!(completed.load(Ordering::Relaxed), bands.len());
        match result {
            Err(SchedulerError::Job { band, source }) => {
                assert_eq!(band, 3);
                assert_eq!(source, Refused);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn rejects_short_output() {
        let bands = partition(10, 4);
        let mut output = vec![0u8; 19];
        let result = run_pool(
            &mut output,
            2,
            &bands,
            &SchedulerSettings::default(),
            |_, _| Ok::<(), Refused>(()),
        );
        assert!(matches!(
            result,
            Err(SchedulerError::OutputTooSmall {
                expected: 20,
                actual: 19
            })
        ));
    }

    #[test]
    fn no_bands_is_a_no_op() {
        let mut output = Vec::new();
        run_pool(
            &mut output,
            4,
            &[],
            &SchedulerSettings::default(),
            |_, _| Ok::<(), Refused>(()),
        )
        .unwrap();
    }

    #[test]
    fn bands_are_written_at_their_own_rows() {
        let bands = [Band {
            index: 0,
            start_row: 2,
            row_count: 2,
        }];
        let mut output = vec![0u8; 4];
        let result = run_pool(&mut output, 1, &bands, &SchedulerSettings::default(), |_, rows| {
            rows.fill(9);
            Ok::<(), Refused>(())
        });
        assert!(matches!(result, Err(SchedulerError::InvalidBands { band: 0 })));
        assert_eq!(output, [0, 0, 0, 0]);
    }

    #[rstest]
    #[case::overlapping(&[(0, 0, 2), (1, 0, 2)], 1)]
    #[case::gap(&[(0, 0, 2), (1, 3, 1)], 1)]
    #[case::out_of_order(&[(1, 0, 2), (0, 2, 2)], 0)]
    #[case::empty_band(&[(0, 0, 2), (1, 2, 0)], 1)]
    fn rejects_bands_that_do_not_tile(#[case] shape: &[(usize, usize, usize)], #[case] bad: usize) {
        let bands: Vec<Band> = shape
            .iter()
            .map(|&(index, start_row, row_count)| Band {
                index,
                start_row,
                row_count,
            })
            .collect();
        let mut output = vec![0u8; 8];
        let settings = SchedulerSettings::default().with_max_workers(2);
        let result = run_pool(&mut output, 1, &bands, &settings, |_, rows| {
            rows.fill(1);
            Ok::<(), Refused>(())
        });
        match result {
            Err(SchedulerError::InvalidBands { band }) => assert_eq!(band, bad),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(output.iter().all(|&x| x == 0));
    }

    #[test]
    fn rejects_extent_overflow() {
        let bands = [Band {
            index: 0,
            start_row: 0,
            row_count: usize::MAX / 2 + 1,
        }];
        let result = run_pool(&mut [], 2, &bands, &SchedulerSettings::default(), |_, _| {
            Ok::<(), Refused>(())
        });
        assert!(matches!(result, Err(SchedulerError::InvalidBands { band: 0 })));
    }

    #[test]
    fn pools_are_reused_per_worker_count() {
        let a = shared_pool(3).unwrap();
        let b = shared_pool(3).unwrap();
        let c = shared_pool(5).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(a.current_num_threads(), 3);
    }
}
