//! Property-based tests for fuzzy ranking.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::matcher::{DEFAULT_MIN_SCORE, FuzzyMatcher};

/// Distinct, non-empty candidate names.
fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,10}( [a-z0-9]{1,6})?", 1..12)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

fn is_one(score: f64) -> bool {
    (score - 1.0).abs() < 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// An exact candidate string always comes back on top with score 1.0.
    #[test]
    fn prop_exact_query_ranks_first(
        candidates in candidates_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.index(candidates.len());
        let matcher = FuzzyMatcher::default();
        let ranked = matcher.rank_scored(&candidates, &candidates[target]);

        prop_assert!(!ranked.is_empty());
        prop_assert!(is_one(ranked[0].score), "top score was {}", ranked[0].score);

        let hit = ranked.iter().find(|m| m.index == target);
        prop_assert!(hit.is_some_and(|m| is_one(m.score)));

        // Anything ranked ahead of the target ties with it.
        for m in ranked.iter().take_while(|m| m.index != target) {
            prop_assert!(is_one(m.score));
        }
    }

    /// Nothing under the cutoff is ever returned, and results are sorted.
    #[test]
    fn prop_results_respect_cutoff_and_order(
        candidates in candidates_strategy(),
        query in "[a-z ]{0,12}",
    ) {
        let matcher = FuzzyMatcher::default();
        let ranked = matcher.rank_scored(&candidates, &query);

        prop_assert!(ranked.iter().all(|m| m.score >= DEFAULT_MIN_SCORE));
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(ranked.iter().all(|m| m.index < candidates.len()));
    }

    /// Scores always lie in [0, 1].
    #[test]
    fn prop_scores_are_bounded(
        candidates in candidates_strategy(),
        query in ".{0,16}",
    ) {
        let matcher = FuzzyMatcher::default();
        for score in matcher.scores(&candidates, &query) {
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }

    /// An empty candidate set never yields results.
    #[test]
    fn prop_empty_candidates_yield_nothing(query in ".{0,16}") {
        let empty: Vec<String> = Vec::new();
        prop_assert!(FuzzyMatcher::default().rank(&empty, &query).is_empty());
    }
}
