//! Word list loading
//!
//! Reads word lists from disk: one word per line, whitespace trimmed, empty
//! lines and `#` comments skipped, with optional random subsampling.

use crate::core::Word;
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, keeping each line with probability `sample`
///
/// A `sample` of 1.0 (or more) keeps every line without consulting the RNG,
/// so full loads are deterministic. The RNG is caller-supplied rather than
/// global so sampled loads can be reproduced in tests.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_openers::wordlists::loader::read_words;
///
/// let mut rng = rand::rng();
/// let words = read_words("data/answers.txt", 1.0, &mut rng).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_words<P: AsRef<Path>, R: Rng + ?Sized>(
    path: P,
    sample: f64,
    rng: &mut R,
) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            if sample < 1.0 && rng.random::<f64>() >= sample {
                return None;
            }
            Some(Word::new(trimmed))
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().map(|&s| Word::new(s)).collect()
}
