// Cosine similarity between two word-frequency vectors.
//
// The vectors live in the space spanned by the union of both vocabularies.
// A word missing from one side contributes zero to the dot product, so it is
// enough to walk the smaller map:
//
//   similarity = dot(a, b) / (|a| * |b|)
//
// Counts are non-negative, so the result is in [0.0, 1.0]. Sums are kept as
// integers until the final division; that makes the result independent of
// hash iteration order and exactly symmetric.

use serde::Serialize;

use super::frequency::FrequencyMap;

/// A word present in both documents and how much it adds to the dot product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedTerm {
    pub word: String,
    pub count_a: u64,
    pub count_b: u64,
    /// `count_a * count_b`, widened so huge counts can't overflow
    pub contribution: u128,
}

/// Sum over shared words of count_a * count_b.
pub fn dot_product(a: &FrequencyMap, b: &FrequencyMap) -> u128 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .map(|(word, count)| u128::from(count) * u128::from(large.get(word)))
        .sum()
}

/// Cosine similarity of two frequency maps, from 0.0 (no shared words) to
/// 1.0 (same direction).
///
/// A document with no tokens has zero magnitude; that case returns 0.0
/// instead of dividing by zero.
pub fn cosine_similarity(a: &FrequencyMap, b: &FrequencyMap) -> f64 {
    let sq_a = a.sum_of_squares();
    let sq_b = b.sum_of_squares();
    if sq_a == 0 || sq_b == 0 {
        return 0.0;
    }

    let dot = dot_product(a, b) as f64;
    // sqrt(|a|² * |b|²) rather than |a| * |b|: for identical maps this is
    // sqrt(s²) = s exactly, so a document scores exactly 1.0 against itself.
    let denominator = ((sq_a as f64) * (sq_b as f64)).sqrt();

    (dot / denominator).min(1.0)
}

/// Every word both documents share, largest contribution first.
///
/// Ties are broken alphabetically. The contributions sum to `dot_product`.
pub fn shared_terms(a: &FrequencyMap, b: &FrequencyMap) -> Vec<SharedTerm> {
    let mut terms: Vec<SharedTerm> = a
        .iter()
        .filter_map(|(word, count_a)| {
            let count_b = b.get(word);
            (count_b > 0).then(|| SharedTerm {
                word: word.to_string(),
                count_a,
                count_b,
                contribution: u128::from(count_a) * u128::from(count_b),
            })
        })
        .collect();

    terms.sort_by(|x, y| {
        y.contribution
            .cmp(&x.contribution)
            .then_with(|| x.word.cmp(&y.word))
    });
    terms
}
