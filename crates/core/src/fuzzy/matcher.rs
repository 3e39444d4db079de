//! TF-IDF cosine ranking of candidate names against a query.
//!
//! Similarity scores are inherently approximate, so this is the one place in
//! the workspace where floating-point arithmetic is used. Amounts never pass
//! through here.
#![allow(clippy::float_arithmetic, clippy::cast_precision_loss)]

use std::collections::HashMap;

use super::ngram::char_wb_ngrams;

/// Candidates scoring below this are not returned.
pub const DEFAULT_MIN_SCORE: f64 = 0.30;

/// A candidate that passed the cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    /// Index into the candidate slice.
    pub index: usize,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
}

/// Character n-gram similarity ranker.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    min_n: usize,
    max_n: usize,
    min_score: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            min_n: 2,
            max_n: 4,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl FuzzyMatcher {
    /// Creates a matcher with a custom n-gram range and cutoff.
    ///
    /// The range is normalised so that `1 <= min_n <= max_n`.
    #[must_use]
    pub fn new(min_n: usize, max_n: usize, min_score: f64) -> Self {
        let min_n = min_n.max(1);
        Self {
            min_n,
            max_n: max_n.max(min_n),
            min_score,
        }
    }

    /// Returns the indices of matching candidates, best first.
    ///
    /// Equal scores keep candidate order.
    #[must_use]
    pub fn rank<S: AsRef<str>>(&self, candidates: &[S], query: &str) -> Vec<usize> {
        self.rank_scored(candidates, query)
            .into_iter()
            .map(|m| m.index)
            .collect()
    }

    /// Returns matching candidates with their scores, best first.
    #[must_use]
    pub fn rank_scored<S: AsRef<str>>(&self, candidates: &[S], query: &str) -> Vec<ScoredMatch> {
        let mut matches: Vec<ScoredMatch> = self
            .scores(candidates, query)
            .into_iter()
            .enumerate()
            .filter(|(_, score)| *score >= self.min_score)
            .map(|(index, score)| ScoredMatch { index, score })
            .collect();

        // `sort_by` is stable, so ties stay in candidate order.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches
    }

    /// Scores every candidate against the query, in candidate order.
    #[must_use]
    pub fn scores<S: AsRef<str>>(&self, candidates: &[S], query: &str) -> Vec<f64> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let documents: Vec<Vec<String>> = candidates
            .iter()
            .map(|c| self.grams(&c.as_ref().to_lowercase()))
            .collect();
        let vocabulary = Vocabulary::fit(&documents);

        let query_vector = vocabulary.vectorize(&self.grams(&query.trim().to_lowercase()));

        documents
            .iter()
            .map(|doc| cosine(&vocabulary.vectorize(doc), &query_vector).clamp(0.0, 1.0))
            .collect()
    }

    /// Keeps the items whose name matches `query`, best first.
    ///
    /// A missing or blank query returns `items` unchanged.
    pub fn filter<T, F>(&self, items: Vec<T>, query: Option<&str>, name: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
            return items;
        };

        let ranked = {
            let names: Vec<&str> = items.iter().map(&name).collect();
            self.rank(&names, query)
        };

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        ranked
            .into_iter()
            .filter_map(|index| slots.get_mut(index).and_then(Option::take))
            .collect()
    }

    fn grams(&self, text: &str) -> Vec<String> {
        char_wb_ngrams(text, self.min_n, self.max_n)
    }
}

/// Inverse document frequencies fitted on the candidate set.
struct Vocabulary {
    idf: HashMap<String, f64>,
}

impl Vocabulary {
    /// Smoothed idf: `ln((1 + n) / (1 + df)) + 1`.
    fn fit(documents: &[Vec<String>]) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let mut seen: Vec<&str> = doc.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for gram in seen {
                *document_frequency.entry(gram).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(gram, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (gram.to_string(), weight)
            })
            .collect();

        Self { idf }
    }

    /// L2-normalised TF-IDF vector. Grams outside the vocabulary are ignored.
    fn vectorize<'a>(&'a self, grams: &[String]) -> HashMap<&'a str, f64> {
        let mut vector: HashMap<&'a str, f64> = HashMap::new();
        for gram in grams {
            if let Some((key, idf)) = self.idf.get_key_value(gram.as_str()) {
                *vector.entry(key.as_str()).or_insert(0.0) += idf;
            }
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }
        vector
    }
}

/// Dot product of two normalised sparse vectors.
fn cosine(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(gram, w)| large.get(gram).map(|v| w * v))
        .sum()
}
