//! Terminal rendering of ranked results
//!
//! Printed incrementally, one line per result, so the caller can stream the
//! ranked sequence as it is consumed.

use crate::analysis::ScoredWord;
use colored::Colorize;

const TABLE_WIDTH: usize = 36;

/// Print the column header for the ranked-results table
pub fn print_result_header() {
    println!("\n{}", "─".repeat(TABLE_WIDTH).cyan());
    println!(
        " {:<6} {:<14} {}",
        "RANK".bright_cyan().bold(),
        "WORD".bright_cyan().bold(),
        "SCORE".bright_cyan().bold()
    );
    println!("{}", "─".repeat(TABLE_WIDTH).cyan());
}

/// Print one ranked word; the top result is highlighted
pub fn print_ranked_word(rank: usize, scored: &ScoredWord) {
    let line = format!(
        " {:<6} {:<14} {:.3}",
        rank,
        scored.word.to_uppercase(),
        scored.score
    );

    if rank == 1 {
        println!("{}", line.bright_yellow().bold());
    } else {
        println!("{line}");
    }
}
