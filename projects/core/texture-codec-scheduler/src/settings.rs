//! Worker pool configuration.

/// Upper bound on worker threads used by default.
pub const MAX_WORKERS: usize = 16;

/// The default worker count, `min(available_parallelism, MAX_WORKERS)`.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
        .min(MAX_WORKERS)
}

/// Settings for [`run_pool`](crate::run_pool) and for the band height used by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchedulerSettings {
    /// Maximum number of bands processed concurrently. `1` runs on the calling thread.
    pub max_workers: usize,
    /// Number of rows (block rows for compressed formats) per band.
    pub rows_per_band: usize,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            max_workers: default_worker_count(),
            rows_per_band: 16,
        }
    }
}

impl SchedulerSettings {
    /// Sets [`Self::max_workers`], clamped to at least one.
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Sets [`Self::rows_per_band`], clamped to at least one.
    pub fn with_rows_per_band(mut self, rows_per_band: usize) -> Self {
        self.rows_per_band = rows_per_band.max(1);
        self
    }
}
