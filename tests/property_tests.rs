//! Property-based tests using proptest.
//!
//! These tests verify invariants of the rate, metric and audit functions.

use fairaudit::audit::run_fairness_audit;
use fairaudit::evaluation::{
    disparate_impact_ratio, equalized_odds_difference, false_positive_rate, gini_coefficient,
    positive_predictive_value, statistical_parity_difference, true_positive_rate,
};
use fairaudit::ConfusionMatrix;
use proptest::prelude::*;

// Strategy for confusion matrices, empty cells included
fn matrix_strategy() -> impl Strategy<Value = ConfusionMatrix> {
    (0u64..500, 0u64..500, 0u64..500, 0u64..500)
        .prop_map(|(tp, fp, tn, fn_)| ConfusionMatrix::new(tp, fp, tn, fn_))
}

// Strategy for (positives, total) with positives <= total
fn group_strategy() -> impl Strategy<Value = (u64, u64)> {
    (1u64..1000).prop_flat_map(|total| (0..=total, Just(total)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn rates_are_unit_interval(cm in matrix_strategy()) {
        for rate in [
            true_positive_rate(&cm),
            false_positive_rate(&cm),
            positive_predictive_value(&cm),
        ] {
            prop_assert!((0.0..=1.0).contains(&rate));
        }
    }

    #[test]
    fn empty_denominators_give_zero(cm in matrix_strategy()) {
        if cm.true_positives + cm.false_negatives == 0 {
            prop_assert_eq!(true_positive_rate(&cm), 0.0);
        }
        if cm.false_positives + cm.true_negatives == 0 {
            prop_assert_eq!(false_positive_rate(&cm), 0.0);
        }
        if cm.true_positives + cm.false_positives == 0 {
            prop_assert_eq!(positive_predictive_value(&cm), 0.0);
        }
    }

    #[test]
    fn equal_rates_give_unit_ratio((pos, total) in group_strategy(), k in 1u64..50) {
        prop_assert_eq!(disparate_impact_ratio(pos, total, pos * k, total * k), 1.0);
    }

    #[test]
    fn swapped_ratio_is_reciprocal(
        (pa, ta) in group_strategy(),
        (pb, tb) in group_strategy(),
    ) {
        prop_assume!(pa > 0 && pb > 0);
        let forward = disparate_impact_ratio(pa, ta, pb, tb);
        let backward = disparate_impact_ratio(pb, tb, pa, ta);
        prop_assert!((forward * backward - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parity_difference_is_symmetric(
        (pa, ta) in group_strategy(),
        (pb, tb) in group_strategy(),
    ) {
        let ab = statistical_parity_difference(pa, ta, pb, tb);
        let ba = statistical_parity_difference(pb, tb, pa, ta);
        prop_assert_eq!(ab, ba);
        prop_assert!(ab >= 0.0);
    }

    #[test]
    fn equalized_odds_against_self_is_zero(cm in matrix_strategy()) {
        prop_assert_eq!(equalized_odds_difference(&cm, &cm), 0.0);
    }

    #[test]
    fn gini_of_constant_is_zero(x in 0.001f64..1e6, n in 1usize..50) {
        let values = vec![x; n];
        prop_assert!(gini_coefficient(&values).abs() < 1e-9);
    }

    #[test]
    fn gini_is_scale_invariant(
        values in proptest::collection::vec(0.0f64..1000.0, 1..40),
        scale in 0.01f64..100.0,
    ) {
        let scaled: Vec<f64> = values.iter().map(|v| v * scale).collect();
        prop_assert!((gini_coefficient(&values) - gini_coefficient(&scaled)).abs() < 1e-9);
    }

    #[test]
    fn gini_is_bounded(values in proptest::collection::vec(0.0f64..1000.0, 0..40)) {
        let g = gini_coefficient(&values);
        prop_assert!(g >= -1e-12 && g <= 1.0);
    }

    #[test]
    fn audit_score_is_bounded_and_deterministic(
        protected in matrix_strategy(),
        privileged in matrix_strategy(),
    ) {
        let a = run_fairness_audit(&protected, &privileged, 0.8, 0.1);
        let b = run_fairness_audit(&protected, &privileged, 0.8, 0.1);
        prop_assert!((0.0..=100.0).contains(&a.overall_score));
        prop_assert!(!a.recommendations.is_empty());
        prop_assert_eq!(a, b);
    }
}
