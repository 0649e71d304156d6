use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use plagcheck::config::Config;
use plagcheck::output::terminal;
use plagcheck::similarity::frequency::build_frequency_map;
use plagcheck::{InputSide, SimilarityEngine, Source};

/// plagcheck: spot copied text with word-frequency cosine similarity.
///
/// Compares two files word by word (case and punctuation ignored) and flags
/// the pair when the similarity reaches the threshold.
#[derive(Parser)]
#[command(name = "plagcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two files and report how similar they are
    Compare {
        /// The first file
        first: PathBuf,

        /// The second file
        second: PathBuf,

        /// Flag the pair at or above this similarity percentage (default: 70)
        #[arg(long)]
        threshold: Option<f64>,

        /// Print the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Also list the top N words both files share
        #[arg(long, value_name = "N")]
        shared: Option<usize>,
    },

    /// Show the word frequency table for a single file
    Words {
        /// The file to analyze
        file: PathBuf,

        /// How many of the most frequent words to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging to stderr, so --json output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plagcheck=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            threshold,
            json,
            shared,
        } => {
            let config = Config::load()?.with_threshold(threshold)?;
            let engine = SimilarityEngine::new(config.threshold);

            info!(
                first = %first.display(),
                second = %second.display(),
                threshold = config.threshold,
                "Comparing files"
            );

            let comparison =
                engine.analyze(&Source::path(first.clone()), &Source::path(second.clone()))?;
            let result = comparison.result;

            if comparison.first.is_empty() || comparison.second.is_empty() {
                warn!("At least one file has no words to compare; similarity is 0%");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            terminal::display_result(&first, &second, &result);
            if let Some(limit) = shared {
                terminal::display_shared_terms(&comparison.shared_terms(), limit);
            }
        }

        Commands::Words { file, top } => {
            let text = Source::path(file.clone()).load(InputSide::First)?;
            let map = build_frequency_map(&text);

            terminal::display_word_table(&file, &map, top);
            if map.len() > top {
                println!(
                    "{}",
                    format!("Showing {top} of {} words. Use --top to see more.", map.len())
                        .dimmed()
                );
            }
        }
    }

    Ok(())
}
