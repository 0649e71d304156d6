// Similarity math: tokenization, frequency vectors, and cosine scoring.

pub mod cosine;
pub mod frequency;
pub mod tokenize;
