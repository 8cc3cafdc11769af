//! Diff, match and patch engine for plain text
//!
//! Compute a character-level edit script between two texts, clean it up for
//! humans or for machines, and serialize it as a compact delta.
//!
//! ```
//! use diffmatch::{Differ, DiffOptions, Edit};
//!
//! let differ = Differ::new(DiffOptions::default());
//! let diffs = differ.diff("jumps over", "jumped over");
//! assert_eq!(
//!     diffs,
//!     vec![Edit::equal("jump"), Edit::delete("s"), Edit::insert("ed"), Edit::equal(" over")]
//! );
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::options::DiffOptions;
pub use artifacts::cleanup::efficiency::cleanup_efficiency;
pub use artifacts::cleanup::merge::cleanup_merge;
pub use artifacts::cleanup::semantic::{cleanup_semantic, cleanup_semantic_lossless};
pub use artifacts::delta::codec::{from_delta, to_delta};
pub use artifacts::delta::error::DeltaError;
pub use artifacts::diff::differ::Differ;
pub use artifacts::diff::edit::{Edit, Operation, levenshtein, text1, text2, x_index};
