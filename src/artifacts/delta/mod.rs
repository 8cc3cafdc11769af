//! Delta encoding of edit scripts
//!
//! A delta records an edit script without the text the source already holds:
//! `=n` keeps `n` chars, `-n` drops `n` chars and `+text` inserts
//! percent-escaped text, with tokens separated by tabs. Decoding needs the
//! original source text to fill the kept and dropped runs back in.

pub mod codec;
pub mod error;
