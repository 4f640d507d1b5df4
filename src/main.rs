//! Wordle Openers - CLI
//!
//! Ranks opening guesses for Wordle-style word lists: every unique-letter
//! solution word is scored against every possible solution, and the words
//! that leave the fewest consistent guesses rank first.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use wordle_openers::{
    analysis::{self, AnalysisOptions, CancelToken},
    output::{print_ranked_word, print_result_header},
    wordlists::read_words,
};

#[derive(Parser)]
#[command(
    name = "wordle_openers",
    about = "Find the best Wordle opening guesses for a pair of word lists",
    version
)]
struct Cli {
    /// File containing the set of possible solutions, one word per line
    answer_list: PathBuf,

    /// File containing the set of valid guess words, one word per line
    guess_list: PathBuf,

    /// Number of results to display
    #[arg(short = 'n', long, default_value_t = 20)]
    num_results: usize,

    /// Fraction of each input file to sample at random
    #[arg(short = 's', long, default_value_t = 1.0)]
    sample: f64,

    /// Fraction trimmed from each tail when averaging per-solution counts
    #[arg(long, default_value_t = 0.2)]
    cutoff: f64,

    /// Worker threads (default: all cores minus two, minimum two)
    #[arg(short = 't', long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = rand::rng();
    let solutions = read_words(&cli.answer_list, cli.sample, &mut rng)
        .with_context(|| format!("failed to read answer list {}", cli.answer_list.display()))?;
    let candidates = read_words(&cli.guess_list, cli.sample, &mut rng)
        .with_context(|| format!("failed to read guess list {}", cli.guess_list.display()))?;

    let eligible = solutions.iter().filter(|w| w.has_unique_units()).count();
    println!(
        "Scoring {eligible} eligible candidates against {} solutions ({} guess words)...",
        solutions.len(),
        candidates.len()
    );

    let options = AnalysisOptions {
        num_results: cli.num_results,
        cutoff: cli.cutoff,
        threads: cli.threads,
    };
    let results = analysis::run(solutions, candidates, options, CancelToken::new());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    spinner.set_message("scoring candidates");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut rank = 0;
    for result in results {
        match result {
            Ok(scored) => {
                if rank == 0 {
                    spinner.finish_and_clear();
                    print_result_header();
                }
                rank += 1;
                print_ranked_word(rank, &scored);
            }
            Err(err) => {
                spinner.finish_and_clear();
                return Err(err.into());
            }
        }
    }

    if rank == 0 {
        spinner.finish_and_clear();
        println!("No eligible candidates to score.");
    }

    Ok(())
}
