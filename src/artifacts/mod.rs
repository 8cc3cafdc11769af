//! Diff data structures and algorithms
//!
//! - `diff`: edit scripts and the engine that computes them
//! - `cleanup`: merge, semantic and efficiency passes over edit scripts
//! - `delta`: the compact tab-separated encoding of an edit script

pub mod cleanup;
pub mod delta;
pub mod diff;
