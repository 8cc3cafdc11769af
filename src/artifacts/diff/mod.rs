//! The diff engine
//!
//! - `edit`: edit operations, edit scripts and the queries over them
//! - `similarity`: common prefix, suffix and overlap of two texts
//! - `half_match`: split two texts around a long shared substring
//! - `lines`: one-token-per-line encoding for the line-mode speedup
//! - `bisect`: Myers' middle-snake search
//! - `deadline`: the soft wall-clock limit shared by one diff
//! - `differ`: the driver tying the strategies together
//!
//! Texts are handled as `char` slices, so every length and offset is a count
//! of Unicode scalar values rather than bytes.

pub mod bisect;
pub mod deadline;
pub mod differ;
pub mod edit;
pub mod half_match;
pub mod lines;
pub mod similarity;
