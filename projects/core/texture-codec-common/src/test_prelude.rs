//! Common test imports and utilities for the shared codec tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from this crate
pub use crate::color_8888::Color8888;
pub use crate::texel::Texel;
