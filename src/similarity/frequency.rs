// FrequencyMap: word counts for a single document.
//
// This is the document's vector in word space: each distinct normalized word
// is a dimension, and its count is the component along that dimension. Words
// that never appear are implicitly zero and are never stored.

use std::collections::HashMap;

use serde::Serialize;

use super::tokenize::tokenize;

/// Occurrence counts for every distinct word in one document.
///
/// Invariants: no empty keys, every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

/// One row of a frequency table, used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl FrequencyMap {
    /// Count an already-tokenized word stream.
    ///
    /// Empty strings are skipped so the no-empty-key invariant holds for any
    /// input iterator, not only `tokenize` output.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `word` (0 if absent). `word` must already be normalized.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens the document contained (sum of all counts).
    pub fn total_tokens(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |total, &c| total.saturating_add(c))
    }

    /// Sum of squared counts, the squared Euclidean norm of this vector.
    ///
    /// Kept as an integer so callers can combine norms without rounding.
    pub fn sum_of_squares(&self) -> u128 {
        self.counts
            .values()
            .map(|&c| u128::from(c) * u128::from(c))
            .sum()
    }

    /// Euclidean norm: sqrt(sum of count²).
    pub fn magnitude(&self) -> f64 {
        (self.sum_of_squares() as f64).sqrt()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `n` most frequent words, highest count first, ties broken
    /// alphabetically so the listing is stable across runs.
    pub fn top_words(&self, n: usize) -> Vec<WordCount> {
        let mut rows: Vec<WordCount> = self
            .iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        rows.truncate(n);
        rows
    }
}

/// Collect precomputed `(word, count)` pairs.
///
/// Empty words and zero counts are dropped; repeated words add up.
impl FromIterator<(String, u64)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for (word, count) in iter {
            if word.is_empty() || count == 0 {
                continue;
            }
            let entry = counts.entry(word).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        Self { counts }
    }
}

/// Tokenize `text` and count every normalized word.
pub fn build_frequency_map(text: &str) -> FrequencyMap {
    FrequencyMap::from_tokens(tokenize(text))
}
