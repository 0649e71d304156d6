// SimilarityEngine: the compare() entry point.
//
// Reads two documents, vectorizes them into word-frequency maps, scores them
// with cosine similarity, and flags the pair if the percentage reaches the
// plagiarism threshold. Stateless apart from the threshold: every call is
// independent. There is no partial result: either both inputs are read and
// scored, or an error comes back.
//
// Both documents are held fully in memory while they're compared, so the
// practical size limit is available RAM. That's fine for source files and
// essays; nothing here streams.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CompareError, InputSide};
use crate::similarity::cosine::{cosine_similarity, shared_terms, SharedTerm};
use crate::similarity::frequency::{build_frequency_map, FrequencyMap};

/// Similarity percentage at or above which a pair is flagged.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Where a document's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read the whole file at this path.
    Path(PathBuf),
    /// Use this text as-is.
    Text(String),
}

impl Source {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Source::Path(path.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Source::Text(text.into())
    }

    /// Load the document text.
    ///
    /// Files are read in one shot; the handle is closed before this returns,
    /// whether or not the read succeeded. Bytes that aren't valid UTF-8 are
    /// replaced rather than rejected, since normalization discards anything
    /// outside ASCII letters and digits anyway.
    pub fn load(&self, side: InputSide) -> Result<String, CompareError> {
        match self {
            Source::Text(text) => Ok(text.clone()),
            Source::Path(path) => read_document(path, side),
        }
    }
}

fn read_document(path: &Path, side: InputSide) -> Result<String, CompareError> {
    let bytes = fs::read(path).map_err(|source| CompareError::InputUnreadable {
        side,
        path: path.to_path_buf(),
        source,
    })?;
    debug!(%side, path = %path.display(), bytes = bytes.len(), "Read document");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Outcome of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// Cosine similarity scaled to 0.0..=100.0
    pub similarity_percent: f64,
    /// `similarity_percent >= threshold`
    pub flagged: bool,
    /// The cutoff this result was judged against
    pub threshold: f64,
}

impl SimilarityResult {
    fn new(similarity: f64, threshold: f64) -> Self {
        let similarity_percent = similarity * 100.0;
        Self {
            similarity_percent,
            flagged: is_plagiarism_at(similarity_percent, threshold),
            threshold,
        }
    }
}

/// A finished comparison along with the frequency maps it was computed from.
///
/// The CLI uses the maps to explain a score (which words drove it).
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: FrequencyMap,
    pub second: FrequencyMap,
    pub result: SimilarityResult,
}

impl Comparison {
    /// Words found in both documents, biggest contributors first.
    pub fn shared_terms(&self) -> Vec<SharedTerm> {
        shared_terms(&self.first, &self.second)
    }
}

/// Scores document pairs against a plagiarism threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityEngine {
    pub threshold: f64,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SimilarityEngine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Compare two documents and return the percentage plus flag.
    pub fn compare(
        &self,
        first: &Source,
        second: &Source,
    ) -> Result<SimilarityResult, CompareError> {
        Ok(self.analyze(first, second)?.result)
    }

    /// Like `compare`, but keep the frequency maps around.
    pub fn analyze(&self, first: &Source, second: &Source) -> Result<Comparison, CompareError> {
        // Read both before doing any work so a bad second path never
        // produces a half-finished comparison.
        let text_a = first.load(InputSide::First)?;
        let text_b = second.load(InputSide::Second)?;

        let comparison = self.analyze_text(&text_a, &text_b);
        info!(
            similarity = comparison.result.similarity_percent,
            flagged = comparison.result.flagged,
            words_a = comparison.first.len(),
            words_b = comparison.second.len(),
            "Compared documents"
        );
        Ok(comparison)
    }

    /// Compare two in-memory documents. Cannot fail.
    pub fn compare_text(&self, first: &str, second: &str) -> SimilarityResult {
        self.analyze_text(first, second).result
    }

    fn analyze_text(&self, first: &str, second: &str) -> Comparison {
        let map_a = build_frequency_map(first);
        let map_b = build_frequency_map(second);
        let similarity = cosine_similarity(&map_a, &map_b);
        Comparison {
            result: SimilarityResult::new(similarity, self.threshold),
            first: map_a,
            second: map_b,
        }
    }

    pub fn is_plagiarism(&self, similarity_percent: f64) -> bool {
        is_plagiarism_at(similarity_percent, self.threshold)
    }
}

/// Cosine similarity of two texts' word frequencies, from 0.0 to 1.0.
///
/// Texts with no words (empty, whitespace, punctuation only) score 0.0.
pub fn compute_similarity(first: &str, second: &str) -> f64 {
    cosine_similarity(&build_frequency_map(first), &build_frequency_map(second))
}

/// Whether a percentage reaches the default 70% threshold (inclusive).
pub fn is_plagiarism(similarity_percent: f64) -> bool {
    is_plagiarism_at(similarity_percent, DEFAULT_THRESHOLD)
}

fn is_plagiarism_at(similarity_percent: f64, threshold: f64) -> bool {
    similarity_percent >= threshold
}

/// Compare two sources with the default threshold.
pub fn compare(first: &Source, second: &Source) -> Result<SimilarityResult, CompareError> {
    SimilarityEngine::default().compare(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(is_plagiarism(70.0));
        assert!(!is_plagiarism(69.99));
        assert!(is_plagiarism(100.0));
        assert!(!is_plagiarism(0.0));
    }

    #[test]
    fn test_custom_threshold() {
        let engine = SimilarityEngine::new(50.0);
        assert!(engine.is_plagiarism(50.0));
        assert!(!engine.is_plagiarism(49.9));
    }

    #[test]
    fn test_identity_is_exactly_100() {
        let engine = SimilarityEngine::default();
        let result = engine.compare_text("The quick brown fox", "The quick brown fox");
        assert_eq!(result.similarity_percent, 100.0);
        assert!(result.flagged);
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        let result = SimilarityEngine::default().compare_text("Hello World!", "hello world");
        assert_eq!(result.similarity_percent, 100.0);
    }

    #[test]
    fn test_empty_is_zero_not_error() {
        let engine = SimilarityEngine::default();
        assert_eq!(engine.compare_text("", "anything").similarity_percent, 0.0);
        assert_eq!(engine.compare_text("", "").similarity_percent, 0.0);
        assert_eq!(
            engine.compare_text("!!! ??? ...", "text").similarity_percent,
            0.0
        );
        assert!(!engine.compare_text("", "").flagged);
    }

    #[test]
    fn test_result_carries_threshold() {
        let result = SimilarityEngine::new(90.0).compare_text("a b", "a b c");
        assert_eq!(result.threshold, 90.0);
        // 2 / sqrt(2 * 3) ≈ 81.6%
        assert!(!result.flagged);
    }

    #[test]
    fn test_text_sources_never_fail() {
        let result = compare(&Source::text("alpha beta"), &Source::text("beta gamma")).unwrap();
        assert!((result.similarity_percent - 50.0).abs() < 1e-9);
        assert!(!result.flagged);
    }

    #[test]
    fn test_missing_file_reports_side() {
        let missing = Source::path("/definitely/not/here/plagcheck.txt");
        let err = compare(&Source::text("x"), &missing).unwrap_err();
        assert_eq!(err.side(), InputSide::Second);

        let err = compare(&missing, &Source::text("x")).unwrap_err();
        assert_eq!(err.side(), InputSide::First);
        assert!(err.to_string().contains("first"));
    }
}
