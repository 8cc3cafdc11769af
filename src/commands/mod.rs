//! Command implementations
//!
//! - `porcelain`: human-oriented output (`diff`)
//! - `plumbing`: machine-oriented output that round-trips (`delta`, `apply-delta`)
//!
//! Each command is an inherent method on [`Workbench`](crate::areas::workbench::Workbench)
//! writing to the workbench's writer.

pub mod plumbing;
pub mod porcelain;
