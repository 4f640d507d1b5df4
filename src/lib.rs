//! Wordle Openers
//!
//! Ranks candidate opening guesses for Wordle-style games. For every
//! (candidate, solution) pair it simulates the colored feedback the game
//! would reveal, counts how many guess-list words stay consistent with that
//! feedback, and aggregates the counts per candidate with the interquartile
//! mean. Candidates that tend to leave few words standing rank first.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openers::analysis::{self, AnalysisOptions, CancelToken};
//! use wordle_openers::core::Word;
//!
//! let solutions: Vec<Word> = ["prune", "ruins"].iter().map(|&w| Word::new(w)).collect();
//! let candidates: Vec<Word> = ["prune", "ruins", "brine", "print"]
//!     .iter()
//!     .map(|&w| Word::new(w))
//!     .collect();
//!
//! let results = analysis::run(
//!     solutions,
//!     candidates,
//!     AnalysisOptions::default(),
//!     CancelToken::new(),
//! );
//! for (rank, result) in results.enumerate() {
//!     let scored = result.unwrap();
//!     println!("{} {} {:.3}", rank + 1, scored.word, scored.score);
//! }
//! ```

// Core domain types
pub mod core;

// Scoring pipeline and ranking
pub mod analysis;

// Word list loading
pub mod wordlists;

// Terminal output formatting
pub mod output;
