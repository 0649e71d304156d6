// Colored terminal output for comparison results and frequency tables.
//
// main.rs delegates all human-readable rendering here. JSON output bypasses
// this module entirely.

use std::path::Path;

use colored::Colorize;

use super::truncate_chars;
use crate::engine::SimilarityResult;
use crate::similarity::cosine::SharedTerm;
use crate::similarity::frequency::FrequencyMap;

/// Longest word shown in a table before it gets cut off.
const MAX_WORD_WIDTH: usize = 24;

/// The one-line verdict shown under the percentage.
pub fn verdict_message(result: &SimilarityResult) -> &'static str {
    if result.flagged {
        "Plagiarism detected between the files."
    } else {
        "No plagiarism detected between the files."
    }
}

/// Display the outcome of comparing two files.
pub fn display_result(first: &Path, second: &Path, result: &SimilarityResult) {
    println!("\n{}", "=== Similarity Check ===".bold());
    println!("  First:  {}", first.display());
    println!("  Second: {}", second.display());
    println!();

    let percent = format!("{:.2}%", result.similarity_percent);
    let colored_percent = if result.flagged {
        percent.red().bold()
    } else if result.similarity_percent >= result.threshold / 2.0 {
        percent.yellow()
    } else {
        percent.green()
    };
    println!(
        "  Similarity: {}  {}",
        colored_percent,
        format!("(threshold {:.2}%)", result.threshold).dimmed()
    );

    let message = verdict_message(result);
    if result.flagged {
        println!("  {} {}", "!!".red().bold(), message.red());
    } else {
        println!("  {}", message.green());
    }
    println!();
}

/// Display the words both documents share, largest contribution first.
pub fn display_shared_terms(terms: &[SharedTerm], limit: usize) {
    if terms.is_empty() {
        println!("  No words in common.");
        return;
    }

    println!(
        "  {}",
        format!("Top shared words ({} of {})", terms.len().min(limit), terms.len()).bold()
    );
    println!(
        "  {:<26} {:>7} {:>7} {:>9}",
        "Word".dimmed(),
        "First".dimmed(),
        "Second".dimmed(),
        "Product".dimmed(),
    );
    println!("  {}", "-".repeat(52).dimmed());

    for term in terms.iter().take(limit) {
        println!(
            "  {:<26} {:>7} {:>7} {:>9}",
            truncate_chars(&term.word, MAX_WORD_WIDTH),
            term.count_a,
            term.count_b,
            term.contribution,
        );
    }
    println!();
}

/// Display a single document's frequency table.
pub fn display_word_table(path: &Path, map: &FrequencyMap, limit: usize) {
    println!(
        "\n{}",
        format!("=== Word Frequencies: {} ===", path.display()).bold()
    );
    println!(
        "  {} tokens, {} distinct words",
        map.total_tokens(),
        map.len()
    );

    if map.is_empty() {
        println!("  {}", "No words found (empty or punctuation-only file).".yellow());
        return;
    }
    println!();

    let rows = map.top_words(limit);
    let max_count = rows.first().map(|r| r.count).unwrap_or(1).max(1);
    let bar_width: usize = 20;

    for (i, row) in rows.iter().enumerate() {
        let filled = ((row.count as f64 / max_count as f64) * bar_width as f64).round() as usize;
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));
        println!(
            "  {:>3}. {:<26} {} {}",
            i + 1,
            truncate_chars(&row.word, MAX_WORD_WIDTH),
            bar.bright_blue(),
            row.count
        );
    }
    println!();
}
