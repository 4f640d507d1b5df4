//! Feedback filter construction and matching
//!
//! A filter expression reproduces the information a Wordle score reveals:
//! built from a (reference, candidate) pair, it decides whether any third
//! word is still consistent with the colored feedback that guessing the
//! candidate against the reference would produce.
//!
//! - Green squares become `Exact` fields (only that unit matches)
//! - Yellow squares become `Exclude` fields (anything but that unit matches)
//! - Gray squares stay `Wildcard` (everything matches)

use super::Word;
use std::fmt;

/// A single per-position match predicate in a filter expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    /// Matches only the given unit value
    Exact(String),
    /// Matches any unit value except the given one
    Exclude(String),
    /// Matches any unit value
    Wildcard,
}

impl FilterField {
    /// True if the given unit value passes this field
    #[inline]
    #[must_use]
    pub fn is_match(&self, unit: &str) -> bool {
        match self {
            Self::Exact(value) => unit == value,
            Self::Exclude(value) => unit != value,
            Self::Wildcard => true,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "{value}"),
            Self::Exclude(value) => write!(f, "^{value}"),
            Self::Wildcard => write!(f, "*"),
        }
    }
}

/// Error type for filter construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Reference and candidate words differ in length
    LengthMismatch { reference: usize, candidate: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                reference,
                candidate,
            } => write!(
                f,
                "Candidate word length {candidate} does not match reference word length {reference}"
            ),
        }
    }
}

impl std::error::Error for FilterError {}

/// An ordered sequence of per-position predicates built by scoring a
/// candidate guess against a reference solution
///
/// Constructed once per (solution, candidate) pair inside the scoring loop
/// and discarded after filtering the candidate set.
#[derive(Debug, Clone)]
pub struct FilterExpression {
    fields: Vec<FilterField>,
}

impl FilterExpression {
    /// Build the filter for guessing `candidate` when the hidden word is
    /// `reference`
    ///
    /// Exact-position matches are resolved first and their reference letters
    /// consumed, so a repeated candidate letter only scores a partial match
    /// while the reference has unmatched occurrences left.
    ///
    /// # Errors
    /// Returns `FilterError::LengthMismatch` if the two words differ in
    /// grapheme-cluster count.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::{FilterExpression, Word};
    ///
    /// let filter = FilterExpression::new(&Word::new("prune"), &Word::new("crane")).unwrap();
    /// assert_eq!(filter.to_string(), "{*,r,*,n,e}");
    /// assert!(filter.is_match(&Word::new("brine")));
    /// assert!(!filter.is_match(&Word::new("brain")));
    /// ```
    pub fn new(reference: &Word, candidate: &Word) -> Result<Self, FilterError> {
        if reference.len() != candidate.len() {
            return Err(FilterError::LengthMismatch {
                reference: reference.len(),
                candidate: candidate.len(),
            });
        }

        let mut fields = vec![FilterField::Wildcard; reference.len()];

        // Working copy of the reference so matched letters can be consumed.
        let mut work: Vec<&str> = vec![""; reference.len()];
        reference
            .copy_units_into(&mut work)
            .expect("scratch sized to reference length");

        // Scan for exact matches first so those letters are not considered
        // again when searching for partial matches.
        // Allow: index needed to access work[i], candidate.unit(i), fields[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..work.len() {
            if work[i] == candidate.unit(i) {
                fields[i] = FilterField::Exact(work[i].to_owned());
                work[i] = "";
            }
        }

        // Scan for partial matches, consuming one reference occurrence per
        // hit. Positions resolved as exact above keep their fields; their
        // letters were already removed from the pool.
        // Allow: index needed to access fields[i] and candidate.unit(i)
        #[allow(clippy::needless_range_loop)]
        for i in 0..work.len() {
            if fields[i] != FilterField::Wildcard {
                continue;
            }
            let unit = candidate.unit(i);
            if let Some(ix) = work.iter().position(|&w| w == unit) {
                fields[i] = FilterField::Exclude(unit.to_owned());
                work[ix] = "";
            }
        }

        Ok(Self { fields })
    }

    /// The per-position predicates, in word order
    #[must_use]
    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    /// True if the word is consistent with this filter's feedback
    ///
    /// Short-circuits at the first rejecting position.
    #[must_use]
    pub fn is_match(&self, word: &Word) -> bool {
        self.fields
            .iter()
            .zip(word.units())
            .all(|(field, unit)| field.is_match(unit))
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, "}}")
    }
}
