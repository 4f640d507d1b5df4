//! Concurrent fan-out scoring pipeline
//!
//! A single producer enumerates eligible candidates into a bounded work
//! queue; a rayon pool drains the queue, scores one candidate per work unit,
//! and sends completed results into an unbounded results channel. The
//! producer suspends on a full queue, and every stage observes the shared
//! cancellation token.

use super::stats::interquartile_mean;
use super::{AnalysisError, ScoredWord};
use crate::core::{FilterExpression, Word};
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

/// Bound on the work queue; the producer blocks once this many candidates
/// are waiting for a worker.
const WORK_QUEUE_BOUND: usize = 64;

/// Cooperative cancellation signal shared by the producer, the workers, and
/// the consumer of the result stream
///
/// Cancelling stops the producer from enqueueing further candidates and
/// makes in-flight workers abort before their next filter construction.
/// Results that were already emitted are never rolled back.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a cooperative stop
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once `cancel` has been called on any handle
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One independently computable unit of work: a candidate plus the solution
/// list it is scored against
///
/// The solution list is shared read-only across units; each unit's scratch
/// state lives inside its filter constructions.
struct WorkUnit {
    candidate: Word,
    solutions: Arc<[Word]>,
}

/// Handles to a running pipeline and the channel its results arrive on
pub(crate) struct Pipeline {
    rx: Receiver<Result<ScoredWord, AnalysisError>>,
    cancel: CancelToken,
    producer: Option<JoinHandle<()>>,
    workers: Option<JoinHandle<()>>,
}

impl Pipeline {
    /// Completed results, in whatever order the workers finished them;
    /// blocks between items and ends when the pipeline winds down
    pub(crate) fn results(&self) -> impl Iterator<Item = Result<ScoredWord, AnalysisError>> + '_ {
        self.rx.iter()
    }

    pub(crate) fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        // Wind down instead of leaking detached threads when the result
        // stream is dropped early. After cancelling, the producer exits at
        // its next enqueue and the workers drain the remaining queue fast.
        self.cancel.cancel();
        if let Some(handle) = self.producer.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.workers.take() {
            let _ = handle.join();
        }
    }
}

/// Spawn the producer and worker pool for one analysis run
pub(crate) fn spawn(
    solutions: Vec<Word>,
    candidates: Vec<Word>,
    cutoff: f64,
    threads: usize,
    cancel: CancelToken,
) -> Pipeline {
    let solutions: Arc<[Word]> = solutions.into();
    let candidates: Arc<[Word]> = candidates.into();

    let (work_tx, work_rx) = mpsc::sync_channel::<WorkUnit>(WORK_QUEUE_BOUND);
    let (result_tx, result_rx) = mpsc::channel::<Result<ScoredWord, AnalysisError>>();

    let producer = thread::spawn({
        let solutions = Arc::clone(&solutions);
        let cancel = cancel.clone();
        move || populate_work_queue(&solutions, &work_tx, &cancel)
    });

    let workers = thread::spawn({
        let cancel = cancel.clone();
        move || {
            let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool,
                Err(err) => {
                    cancel.cancel();
                    let _ = result_tx.send(Err(AnalysisError::WorkerPool(err.to_string())));
                    return;
                }
            };

            pool.install(|| {
                work_rx
                    .into_iter()
                    .par_bridge()
                    .for_each_with(result_tx, |tx, unit| {
                        match score_candidate(&unit, &candidates, cutoff, &cancel) {
                            Ok(Some(scored)) => {
                                let _ = tx.send(Ok(scored));
                            }
                            // Cancelled mid-unit; partial counts are discarded.
                            Ok(None) => {}
                            Err(err) => {
                                // Fail fast: a malformed word list invalidates
                                // the whole analysis, not just this candidate.
                                cancel.cancel();
                                let _ = tx.send(Err(err));
                            }
                        }
                    });
            });
        }
    });

    Pipeline {
        rx: result_rx,
        cancel,
        producer: Some(producer),
        workers: Some(workers),
    }
}

/// Enqueue one work unit per eligible candidate: solution-list words whose
/// grapheme clusters are pairwise distinct
///
/// Dropping the sender on return marks the input as complete.
fn populate_work_queue(
    solutions: &Arc<[Word]>,
    work_tx: &SyncSender<WorkUnit>,
    cancel: &CancelToken,
) {
    for candidate in solutions.iter().filter(|word| word.has_unique_units()) {
        if cancel.is_cancelled() {
            break;
        }

        let unit = WorkUnit {
            candidate: candidate.clone(),
            solutions: Arc::clone(solutions),
        };
        // Blocks while the queue is full; a closed channel means the
        // consumer went away and there is nothing left to feed.
        if work_tx.send(unit).is_err() {
            break;
        }
    }
}

/// Score one candidate: the interquartile mean, over every other solution,
/// of how many words in the candidate list survive the feedback filter
///
/// Returns `Ok(None)` when cancellation interrupted the unit.
fn score_candidate(
    unit: &WorkUnit,
    candidates: &[Word],
    cutoff: f64,
    cancel: &CancelToken,
) -> Result<Option<ScoredWord>, AnalysisError> {
    let mut counts = Vec::with_capacity(unit.solutions.len().saturating_sub(1));

    for solution in unit.solutions.iter() {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        // A guess is never scored against guessing itself.
        if solution == &unit.candidate {
            continue;
        }

        let filter = FilterExpression::new(solution, &unit.candidate)?;
        let count = candidates.iter().filter(|word| filter.is_match(word)).count();
        counts.push(count);
    }

    let score = interquartile_mean(&counts, cutoff)?;
    Ok(Some(ScoredWord {
        word: unit.candidate.text().to_string(),
        score,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t)).collect()
    }

    fn collect(pipeline: &Pipeline) -> Vec<Result<ScoredWord, AnalysisError>> {
        pipeline.results().collect()
    }

    #[test]
    fn cancel_token_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();

        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn scores_known_fixture() {
        // Against the fixed 7-word candidate list, guessing "prune" leaves
        // only "ruins" possible when the solution is "ruins" (count 1),
        // while guessing "ruins" leaves 3 words when the solution is
        // "prune".
        let solutions = words(&["prune", "ruins"]);
        let candidates = words(&[
            "brain", "brine", "unite", "untie", "print", "prune", "ruins",
        ]);

        let pipeline = spawn(solutions, candidates, 0.2, 2, CancelToken::new());
        let mut results: Vec<ScoredWord> =
            collect(&pipeline).into_iter().map(Result::unwrap).collect();
        results.sort_by(|a, b| a.score.total_cmp(&b.score));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].word, "prune");
        assert!((results[0].score - 1.0).abs() < f64::EPSILON);
        assert_eq!(results[1].word, "ruins");
        assert!((results[1].score - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_candidates_with_repeated_units() {
        let solutions = words(&["speed", "crane"]);
        let candidates = words(&["speed", "crane", "slate"]);

        let pipeline = spawn(solutions, candidates, 0.2, 2, CancelToken::new());
        let results = collect(&pipeline);

        // Only "crane" is an eligible candidate; "speed" repeats an e.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().unwrap().word, "crane");
    }

    #[test]
    fn cancelled_token_produces_no_results() {
        let token = CancelToken::new();
        token.cancel();

        let solutions = words(&["prune", "ruins"]);
        let candidates = words(&["prune", "ruins"]);

        let pipeline = spawn(solutions, candidates, 0.2, 2, token);
        assert!(collect(&pipeline).is_empty());
    }

    #[test]
    fn length_mismatch_fails_the_run() {
        let solutions = words(&["prune", "abc"]);
        let candidates = words(&["prune", "abc"]);

        let pipeline = spawn(solutions, candidates, 0.2, 2, CancelToken::new());
        let results = collect(&pipeline);

        assert!(
            results
                .iter()
                .any(|r| matches!(r, Err(AnalysisError::Filter(_))))
        );
    }

    #[test]
    fn dropping_pipeline_early_winds_down() {
        let solutions = words(&["prune", "ruins", "brine", "crane", "slate"]);
        let candidates = solutions.clone();

        let pipeline = spawn(solutions, candidates, 0.2, 2, CancelToken::new());
        // Drop without draining; Drop cancels and joins both threads.
        drop(pipeline);
    }
}
