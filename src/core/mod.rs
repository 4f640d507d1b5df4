//! Core domain types for the opening-guess analysis
//!
//! Words as grapheme-cluster sequences and the feedback filters built from
//! them. Everything here is pure and free of concurrency concerns.

mod filter;
mod word;

pub use filter::{FilterError, FilterExpression, FilterField};
pub use word::{Word, WordError};
