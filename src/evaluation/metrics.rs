//! Group fairness statistics over two groups' outcomes.
//!
//! Empty groups are read as "no evidence of disparity": the ratio degrades
//! to 1 and the differences to 0. Callers that need a hard failure on
//! small samples must check group sizes themselves.
//!
//! References: disparate impact and the four-fifths rule (29 CFR 1607.4D,
//! Feldman et al. 2015), equalized odds (Hardt et al. 2016), predictive
//! parity (Chouldechova 2017).

use super::domain::ConfusionMatrix;
use super::rates::{false_positive_rate, positive_predictive_value, ratio, true_positive_rate};

/// Default minimum disparate impact ratio (the four-fifths rule).
pub const DEFAULT_DISPARATE_IMPACT_THRESHOLD: f64 = 0.8;

/// Default maximum gap for the difference-based metrics.
pub const DEFAULT_PARITY_THRESHOLD: f64 = 0.1;

/// Protected positive rate divided by privileged positive rate.
///
/// Returns 1 when either group is empty, and `f64::INFINITY` when only the
/// privileged rate is 0. Both rates 0 also yields 1.
pub fn disparate_impact_ratio(
    protected_positives: u64,
    protected_total: u64,
    privileged_positives: u64,
    privileged_total: u64,
) -> f64 {
    if protected_total == 0 || privileged_total == 0 {
        return 1.0;
    }

    let protected_rate = ratio(protected_positives, protected_total);
    let privileged_rate = ratio(privileged_positives, privileged_total);

    if privileged_rate == 0.0 {
        return if protected_rate > 0.0 { f64::INFINITY } else { 1.0 };
    }

    protected_rate / privileged_rate
}

/// Whether the disparate impact ratio reaches `threshold`.
pub fn passes_80_percent_rule(
    protected_positives: u64,
    protected_total: u64,
    privileged_positives: u64,
    privileged_total: u64,
    threshold: f64,
) -> bool {
    disparate_impact_ratio(
        protected_positives,
        protected_total,
        privileged_positives,
        privileged_total,
    ) >= threshold
}

/// `|rate_a - rate_b|` over positive-outcome rates; 0 when either group is empty.
pub fn statistical_parity_difference(
    group_a_positives: u64,
    group_a_total: u64,
    group_b_positives: u64,
    group_b_total: u64,
) -> f64 {
    if group_a_total == 0 || group_b_total == 0 {
        return 0.0;
    }

    (ratio(group_a_positives, group_a_total) - ratio(group_b_positives, group_b_total)).abs()
}

/// The larger of the TPR gap and the FPR gap.
pub fn equalized_odds_difference(group_a: &ConfusionMatrix, group_b: &ConfusionMatrix) -> f64 {
    let tpr_gap = (true_positive_rate(group_a) - true_positive_rate(group_b)).abs();
    let fpr_gap = (false_positive_rate(group_a) - false_positive_rate(group_b)).abs();
    tpr_gap.max(fpr_gap)
}

/// `|PPV_a - PPV_b|`.
pub fn predictive_parity_difference(group_a: &ConfusionMatrix, group_b: &ConfusionMatrix) -> f64 {
    (positive_predictive_value(group_a) - positive_predictive_value(group_b)).abs()
}
