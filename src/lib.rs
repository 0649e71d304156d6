// plagcheck: word-frequency cosine similarity between two documents.
//
// This is the library root. The math lives in `similarity`, the compare()
// entry point in `engine`; `config` and `output` back the CLI.

pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod similarity;

pub use engine::{
    compare, compute_similarity, is_plagiarism, Comparison, SimilarityEngine, SimilarityResult,
    Source, DEFAULT_THRESHOLD,
};
pub use error::{CompareError, InputSide};
