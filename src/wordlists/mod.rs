//! Word list loading
//!
//! Word lists are runtime inputs: plain text files, one word per line.

pub mod loader;

pub use loader::read_words;
