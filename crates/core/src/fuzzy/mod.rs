//! Tolerant name search.
//!
//! Fiscal year names and account names are looked up by partial or misspelled
//! input. Names are broken into word-boundary-aware character n-grams, weighted
//! with TF-IDF fitted on the candidate set, and compared to the query by cosine
//! similarity. Candidates scoring below the cutoff are dropped.

pub mod matcher;
pub mod ngram;

#[cfg(test)]
mod props;

pub use matcher::{DEFAULT_MIN_SCORE, FuzzyMatcher, ScoredMatch};
pub use ngram::char_wb_ngrams;
