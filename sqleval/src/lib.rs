//! Text-similarity scoring for model-generated SQL queries.
//!
//! The library is the pure metric core: lexical tokenization, token-set
//! overlap scoring, length bucketing, and ROUGE-L / longest-common-substring
//! routines. File formats and command-line handling live in the `cli` crate.

pub mod length;
pub mod literal;
pub mod matcher;
pub mod rouge;
pub mod tokenize;

mod evaluate;
pub use evaluate::*;
