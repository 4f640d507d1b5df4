//! Bounded top-N selection over the out-of-order result stream
//!
//! Results arrive in whatever order the workers finish. Rather than
//! materializing everything and sorting, the ranker keeps a max-heap of the
//! N best (lowest) scores seen so far and evicts the current worst on
//! overflow.

use super::ScoredWord;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by score so the worst retained result sits on top
#[derive(Debug)]
struct Entry(ScoredWord);

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.score.total_cmp(&other.0.score)
    }
}

/// Streaming selection of the N lowest-scoring words
///
/// Ties are kept or evicted in arbitrary encounter order.
#[derive(Debug)]
pub(crate) struct TopN {
    limit: usize,
    heap: BinaryHeap<Entry>,
}

impl TopN {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            heap: BinaryHeap::with_capacity(limit.saturating_add(1)),
        }
    }

    /// Offer one scored word, evicting the worst retained entry on overflow
    pub(crate) fn push(&mut self, scored: ScoredWord) {
        if self.limit == 0 {
            return;
        }

        self.heap.push(Entry(scored));
        if self.heap.len() > self.limit {
            self.heap.pop();
        }
    }

    /// Finalize into a vector ordered ascending by score
    pub(crate) fn into_sorted(self) -> Vec<ScoredWord> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(word: &str, score: f64) -> ScoredWord {
        ScoredWord {
            word: word.to_string(),
            score,
        }
    }

    #[test]
    fn keeps_lowest_scores() {
        let mut top = TopN::new(2);
        top.push(scored("worst", 9.0));
        top.push(scored("best", 1.0));
        top.push(scored("middle", 5.0));

        let ranked = top.into_sorted();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word, "best");
        assert_eq!(ranked[1].word, "middle");
    }

    #[test]
    fn orders_ascending() {
        let mut top = TopN::new(10);
        for (word, score) in [("c", 3.0), ("a", 1.0), ("d", 4.0), ("b", 2.0)] {
            top.push(scored(word, score));
        }

        let ranked = top.into_sorted();
        let words: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, ["a", "b", "c", "d"]);
    }

    #[test]
    fn fewer_results_than_limit() {
        let mut top = TopN::new(10);
        top.push(scored("only", 2.5));

        let ranked = top.into_sorted();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "only");
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut top = TopN::new(0);
        top.push(scored("anything", 1.0));

        assert!(top.into_sorted().is_empty());
    }

    #[test]
    fn ties_all_retained_within_limit() {
        let mut top = TopN::new(3);
        top.push(scored("x", 2.0));
        top.push(scored("y", 2.0));
        top.push(scored("z", 2.0));

        let ranked = top.into_sorted();
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|s| (s.score - 2.0).abs() < f64::EPSILON));
    }
}
