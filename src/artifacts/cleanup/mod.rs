//! Post-processing passes over edit scripts
//!
//! - `merge`: coalesce runs of like edits and slide edits over equalities
//! - `semantic`: fold trivial equalities and align edits to word and line boundaries
//! - `efficiency`: fold equalities that cost more to keep than to rewrite
//!
//! Every pass rewrites the script in place and preserves both texts it encodes.

pub mod efficiency;
pub mod merge;
pub mod semantic;
