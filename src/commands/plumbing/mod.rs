//! Plumbing commands (machine-readable output)
//!
//! - `delta`: print the delta between two files
//! - `apply_delta`: rebuild a file from its original and a delta

pub mod apply_delta;
pub mod delta;
