//! Session-level building blocks
//!
//! - `options`: caller-tunable diff parameters (timeout, edit cost)
//! - `workbench`: a configured differ plus the writer commands print to

pub mod options;
pub mod workbench;
