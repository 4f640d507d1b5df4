//! Opening-guess analysis
//!
//! For every eligible candidate (a solution-list word with pairwise distinct
//! letter units), simulates the feedback of guessing it against each possible
//! solution, counts how many guess-list words stay consistent with that
//! feedback, and aggregates the counts with the interquartile mean. Lower
//! scores leave fewer words standing and make better opening guesses.

mod pipeline;
mod ranker;
pub mod stats;

pub use pipeline::CancelToken;

use crate::core::FilterError;
use ranker::TopN;
use stats::StatsError;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;
use std::vec;

use crate::core::Word;

/// A candidate word and its aggregated score; lower is better
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

/// Error type for a failed analysis run
///
/// Any of these invalidates the whole run: a mixed-length word list breaks
/// every pair the offending word appears in, and a degenerate cutoff would
/// produce meaningless scores for every candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A solution/candidate pair had mismatched lengths
    Filter(FilterError),
    /// The per-solution counts could not be aggregated
    Stats(StatsError),
    /// The worker thread pool could not be built
    WorkerPool(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(err) => write!(f, "Word list integrity error: {err}"),
            Self::Stats(err) => write!(f, "Aggregation error: {err}"),
            Self::WorkerPool(err) => write!(f, "Failed to start worker pool: {err}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Filter(err) => Some(err),
            Self::Stats(err) => Some(err),
            Self::WorkerPool(_) => None,
        }
    }
}

impl From<FilterError> for AnalysisError {
    fn from(err: FilterError) -> Self {
        Self::Filter(err)
    }
}

impl From<StatsError> for AnalysisError {
    fn from(err: StatsError) -> Self {
        Self::Stats(err)
    }
}

/// Tunables for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Maximum number of ranked results to yield
    pub num_results: usize,
    /// Fraction trimmed from each tail when averaging per-solution counts
    pub cutoff: f64,
    /// Worker thread count; `None` resolves to [`default_worker_count`]
    pub threads: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            num_results: 20,
            cutoff: 0.2,
            threads: None,
        }
    }
}

/// Worker threads to use when none are requested: all cores minus two,
/// but never fewer than two
///
/// The scoring workload is CPU-bound and would otherwise saturate the host.
#[must_use]
pub fn default_worker_count() -> usize {
    let cores = thread::available_parallelism().map_or(2, NonZeroUsize::get);
    cores.saturating_sub(2).max(2)
}

/// Rank opening guesses for the given word lists
///
/// Streams at most `options.num_results` (word, score) pairs ascending by
/// score. The ranking can only be established once every candidate has been
/// scored, so the first call to `next()` blocks until the pipeline finishes
/// (or is cancelled); subsequent calls yield immediately.
///
/// Cancelling the token ends the stream early with whatever had already been
/// computed; cancelling before the pipeline starts yields an empty stream.
/// A word-list integrity error or aggregation error fails the whole run and
/// surfaces as the stream's single item.
///
/// # Examples
/// ```
/// use wordle_openers::analysis::{self, AnalysisOptions, CancelToken};
/// use wordle_openers::core::Word;
///
/// let solutions: Vec<Word> = ["prune", "ruins"].iter().map(|&w| Word::new(w)).collect();
/// let candidates: Vec<Word> = ["prune", "ruins", "brine"]
///     .iter()
///     .map(|&w| Word::new(w))
///     .collect();
///
/// let results = analysis::run(
///     solutions,
///     candidates,
///     AnalysisOptions::default(),
///     CancelToken::new(),
/// );
/// for result in results {
///     let scored = result.unwrap();
///     println!("{}\t{:.3}", scored.word, scored.score);
/// }
/// ```
#[must_use]
pub fn run(
    solutions: Vec<Word>,
    candidates: Vec<Word>,
    options: AnalysisOptions,
    cancel: CancelToken,
) -> RankedResults {
    let threads = options.threads.unwrap_or_else(default_worker_count);
    let pipeline = pipeline::spawn(solutions, candidates, options.cutoff, threads, cancel);

    RankedResults {
        limit: options.num_results,
        pipeline: Some(pipeline),
        ranked: None,
    }
}

/// Lazy, finite stream of ranked results
///
/// Pull-based and fused: after the last ranked word (or a single fatal
/// error) it yields `None` forever. Dropping it before exhaustion cancels
/// the underlying pipeline cooperatively.
pub struct RankedResults {
    limit: usize,
    pipeline: Option<pipeline::Pipeline>,
    ranked: Option<vec::IntoIter<ScoredWord>>,
}

impl Iterator for RankedResults {
    type Item = Result<ScoredWord, AnalysisError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pipeline) = self.pipeline.take() {
            match drain(&pipeline, self.limit) {
                Ok(ranked) => self.ranked = Some(ranked.into_iter()),
                Err(err) => return Some(Err(err)),
            }
        }

        self.ranked.as_mut()?.next().map(Ok)
    }
}

/// Observe the full result stream, keeping the top N by ascending score
///
/// The first error received cancels the pipeline; the remaining results are
/// drained (workers abort quickly once cancelled) and discarded.
fn drain(
    pipeline: &pipeline::Pipeline,
    limit: usize,
) -> Result<Vec<ScoredWord>, AnalysisError> {
    let mut top = TopN::new(limit);
    let mut failure: Option<AnalysisError> = None;

    for result in pipeline.results() {
        match result {
            Ok(scored) => top.push(scored),
            Err(err) => {
                pipeline.cancel();
                failure.get_or_insert(err);
            }
        }
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(top.into_sorted()),
    }
}
