//! Terminal output formatting

pub mod display;

pub use display::{print_ranked_word, print_result_header};
