//! Audit orchestration: metrics, verdicts, score and recommendations in a
//! single synchronous pass over two confusion matrices.

use crate::evaluation::metrics::{
    disparate_impact_ratio, equalized_odds_difference, predictive_parity_difference,
    statistical_parity_difference,
};
use crate::evaluation::ConfusionMatrix;

use super::domain::{
    AuditPolicy, AuditResult, FairnessMetric, GroupBreakdown, MetricCheck, ScoreWeights,
    Thresholds,
};
use super::recommend::recommendations;

/// Audit `protected` against `privileged` with the given thresholds and
/// the default score weights.
pub fn run_fairness_audit(
    protected: &ConfusionMatrix,
    privileged: &ConfusionMatrix,
    disparate_impact_threshold: f64,
    parity_threshold: f64,
) -> AuditResult {
    let policy = AuditPolicy::with_thresholds(Thresholds {
        disparate_impact: disparate_impact_threshold,
        parity: parity_threshold,
    });
    audit_with_policy(protected, privileged, &policy)
}

/// Audit with a full policy (thresholds, weights, small-sample advisory).
pub fn audit_with_policy(
    protected: &ConfusionMatrix,
    privileged: &ConfusionMatrix,
    policy: &AuditPolicy,
) -> AuditResult {
    let Thresholds {
        disparate_impact: di_threshold,
        parity: parity_threshold,
    } = policy.thresholds;

    let protected_positives = protected.predicted_positive();
    let protected_total = protected.total();
    let privileged_positives = privileged.predicted_positive();
    let privileged_total = privileged.total();

    let disparate_impact = MetricCheck::evaluate(
        FairnessMetric::DisparateImpact,
        disparate_impact_ratio(
            protected_positives,
            protected_total,
            privileged_positives,
            privileged_total,
        ),
        di_threshold,
    );
    let statistical_parity = MetricCheck::evaluate(
        FairnessMetric::StatisticalParity,
        statistical_parity_difference(
            protected_positives,
            protected_total,
            privileged_positives,
            privileged_total,
        ),
        parity_threshold,
    );
    let equalized_odds = MetricCheck::evaluate(
        FairnessMetric::EqualizedOdds,
        equalized_odds_difference(protected, privileged),
        parity_threshold,
    );
    let predictive_parity = MetricCheck::evaluate(
        FairnessMetric::PredictiveParity,
        predictive_parity_difference(protected, privileged),
        parity_threshold,
    );

    let checks = [
        &disparate_impact,
        &statistical_parity,
        &equalized_odds,
        &predictive_parity,
    ];

    log::debug!(
        target: "audit",
        "di={:.4} spd={:.4} eod={:.4} ppd={:.4} n_protected={} n_privileged={}",
        disparate_impact.value,
        statistical_parity.value,
        equalized_odds.value,
        predictive_parity.value,
        protected_total,
        privileged_total
    );
    for check in checks.iter().filter(|c| !c.passed) {
        log::warn!(
            target: "audit",
            "{} failed: {:.4} against threshold {}",
            check.metric.name(),
            check.value,
            check.threshold
        );
    }

    let overall_score = overall_score(&checks, &policy.weights);
    let protected_row = GroupBreakdown::from(protected);
    let privileged_row = GroupBreakdown::from(privileged);
    let recommendations = recommendations(
        &checks,
        &protected_row,
        &privileged_row,
        policy.min_group_size,
    );

    AuditResult {
        disparate_impact,
        statistical_parity,
        equalized_odds,
        predictive_parity,
        overall_score,
        protected: protected_row,
        privileged: privileged_row,
        recommendations,
    }
}

/// `100 · Σ weight · max(0, 1 − |target − value|)`, clamped to [0, 100].
pub fn overall_score(checks: &[&MetricCheck], weights: &ScoreWeights) -> f64 {
    let raw: f64 = checks
        .iter()
        .map(|c| weights.weight(c.metric) * c.closeness())
        .sum::<f64>()
        * 100.0;
    raw.clamp(0.0, 100.0)
}
