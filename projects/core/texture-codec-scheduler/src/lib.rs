#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod band;
pub mod error;
pub mod pool;
pub mod settings;

#[cfg(test)]
pub mod test_prelude;

pub use band::{partition, Band};
pub use error::SchedulerError;
pub use pool::run_pool;
pub use settings::{default_worker_count, SchedulerSettings, MAX_WORKERS};
