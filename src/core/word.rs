//! Grapheme-segmented word representation
//!
//! A Word stores its source string alongside the grapheme clusters it splits
//! into, so feedback filters can compare words one letter unit at a time.

use std::fmt;
use std::hash::{Hash, Hasher};
use unicode_segmentation::UnicodeSegmentation;

/// A word split into Unicode extended grapheme clusters for analysis
///
/// Equality and hashing are defined on the original source string, not on the
/// derived cluster sequence. Two words built from byte-identical strings are
/// equal; composed and decomposed spellings of the same text are not.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    units: Vec<String>,
}

/// Error type for word scratch-buffer operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    ScratchTooSmall { needed: usize, available: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScratchTooSmall { needed, available } => write!(
                f,
                "Scratch buffer holds {available} units but the word has {needed}"
            ),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Any string is accepted; words of mismatched lengths are rejected later,
    /// when a feedback filter is built from them.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Word;
    ///
    /// let word = Word::new("crane");
    /// assert_eq!(word.len(), 5);
    /// assert_eq!(word.unit(1), "r");
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let units = text.graphemes(true).map(str::to_owned).collect();
        Self { text, units }
    }

    /// Get the word's original source string
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of grapheme clusters in this word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True if the word has no grapheme clusters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Get the grapheme cluster at the given position
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn unit(&self, index: usize) -> &str {
        &self.units[index]
    }

    /// Iterate over the word's grapheme clusters in order
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }

    /// Copy this word's grapheme clusters into a caller-provided scratch slice
    ///
    /// Only the first `len()` slots of `dest` are written.
    ///
    /// # Errors
    /// Returns `WordError::ScratchTooSmall` if `dest` holds fewer slots than
    /// the word has clusters.
    pub fn copy_units_into<'a>(&'a self, dest: &mut [&'a str]) -> Result<(), WordError> {
        if dest.len() < self.units.len() {
            return Err(WordError::ScratchTooSmall {
                needed: self.units.len(),
                available: dest.len(),
            });
        }

        for (slot, unit) in dest.iter_mut().zip(&self.units) {
            *slot = unit;
        }
        Ok(())
    }

    /// True if every grapheme cluster in the word is used exactly once
    ///
    /// Checked pairwise; word lengths are small enough that the quadratic
    /// scan is cheaper than any bookkeeping.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Word;
    ///
    /// assert!(Word::new("crane").has_unique_units());
    /// assert!(!Word::new("speed").has_unique_units());
    /// ```
    #[must_use]
    pub fn has_unique_units(&self) -> bool {
        for i in 0..self.units.len() {
            for j in (i + 1)..self.units.len() {
                if self.units[i] == self.units[j] {
                    return false;
                }
            }
        }
        true
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl From<&str> for Word {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_splits_into_units() {
        let word = Word::new("crane");
        assert_eq!(word.len(), 5);
        let units: Vec<&str> = word.units().collect();
        assert_eq!(units, ["c", "r", "a", "n", "e"]);
    }

    #[test]
    fn word_unit_indexing() {
        let word = Word::new("crane");
        assert_eq!(word.unit(0), "c");
        assert_eq!(word.unit(4), "e");
    }

    #[test]
    fn word_equality_on_source_string() {
        assert_eq!(Word::new("test"), Word::new("test"));
        assert_ne!(Word::new("test"), Word::new("toast"));
        assert_ne!(Word::new("test"), Word::new("tttt"));
    }

    #[test]
    fn word_equality_distinguishes_normalization_forms() {
        // Composed é vs e + combining acute: same rendering, different
        // source strings, so the words are not equal.
        let composed = Word::new("caf\u{e9}");
        let decomposed = Word::new("cafe\u{301}");

        assert_eq!(composed.len(), 4);
        assert_eq!(decomposed.len(), 4);
        assert_ne!(composed, decomposed);
    }

    #[test]
    fn word_combining_marks_form_single_unit() {
        let word = Word::new("cafe\u{301}");
        assert_eq!(word.unit(3), "e\u{301}");
    }

    #[test]
    fn word_copy_units() {
        let word = Word::new("test");
        let mut dest = [""; 4];

        word.copy_units_into(&mut dest).unwrap();
        assert_eq!(dest, ["t", "e", "s", "t"]);
    }

    #[test]
    fn word_copy_units_into_larger_scratch() {
        let word = Word::new("test");
        let mut dest = ["x"; 6];

        word.copy_units_into(&mut dest).unwrap();
        assert_eq!(dest, ["t", "e", "s", "t", "x", "x"]);
    }

    #[test]
    fn word_copy_units_rejects_short_scratch() {
        let word = Word::new("test");
        let mut dest = [""; 3];

        assert_eq!(
            word.copy_units_into(&mut dest),
            Err(WordError::ScratchTooSmall {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn unique_units_accepts_distinct_letters() {
        assert!(Word::new("crane").has_unique_units());
        assert!(Word::new("").has_unique_units());
        assert!(Word::new("a").has_unique_units());
    }

    #[test]
    fn unique_units_rejects_repeats() {
        assert!(!Word::new("speed").has_unique_units());
        assert!(!Word::new("aabcd").has_unique_units());
        assert!(!Word::new("abbcd").has_unique_units());
        assert!(!Word::new("abcdd").has_unique_units());
    }

    #[test]
    fn unique_units_flips_when_duplicate_inserted() {
        let word = Word::new("crane");
        assert!(word.has_unique_units());

        // Duplicate one of its letters anywhere and the predicate flips.
        let duplicated = Word::new("crance");
        assert!(!duplicated.has_unique_units());
    }

    #[test]
    fn word_display_roundtrips_source() {
        let word = Word::new("crane");
        assert_eq!(format!("{word}"), "crane");
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_from_str() {
        let word: Word = "crane".into();
        assert_eq!(word, Word::new("crane"));
    }
}
