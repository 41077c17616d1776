//! Common test imports for the scheduler tests

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::{partition, run_pool, Band, SchedulerError, SchedulerSettings};
