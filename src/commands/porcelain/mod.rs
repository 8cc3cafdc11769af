//! Porcelain commands (user-facing output)
//!
//! - `diff`: print a readable edit script between two files

pub mod diff;
