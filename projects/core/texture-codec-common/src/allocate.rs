//! Memory allocation utilities for texture codec operations.
//!
//! Every buffer the codecs hand back to a caller is allocated fallibly, so an out of memory
//! condition aborts the current decode/encode with an error instead of the process.
//!
//! ## Useful APIs
//!
//! [`allocate_align_64`]: Allocates uninitialized memory aligned to 64-bytes.
//! [`try_alloc_vec`]: Allocates a [`Vec`] filled with a value, reporting failure instead of aborting.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::allocator_api::*;
use safe_allocator_api::RawAlloc;
use std::collections::TryReserveError;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// Allocates a [`Vec`] of `len` elements, each a copy of `value`.
///
/// Unlike `vec![value; len]` this returns [`AllocateError::TryReserve`] when the
/// allocation cannot be satisfied.
pub fn try_alloc_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>, AllocateError> {
    let mut result = Vec::new();
    result.try_reserve_exact(len)?;
    result.resize(len, value);
    Ok(result)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` in `allocate_align_64` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),

    /// A growable buffer could not reserve the requested capacity.
    #[error("Failed to reserve buffer capacity: {0}")]
    TryReserve(#[from] TryReserveError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4096)]
    fn try_alloc_vec_fills_value(#[case] len: usize) {
        let result = try_alloc_vec(len, 7u8).unwrap();
        assert_eq!(result.len(), len);
        assert!(result.iter().all(|&x| x == 7));
    }

    #[test]
    fn try_alloc_vec_reports_capacity_overflow() {
        let result = try_alloc_vec(usize::MAX, 0u64);
        assert!(matches!(result, Err(AllocateError::TryReserve(_))));
    }

    #[test]
    fn allocate_align_64_is_aligned() {
        let alloc = allocate_align_64(256).unwrap();
        assert_eq!(alloc.as_ptr() as usize % 64, 0);
        assert_eq!(alloc.len(), 256);
    }

    #[test]
    fn allocate_align_64_rejects_oversized_layout() {
        let result = allocate_align_64(usize::MAX);
        assert!(matches!(result, Err(AllocateError::LayoutError(_))));
    }
}
