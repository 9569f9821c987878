//! Remediation text for an audit.
//!
//! Recommendations follow metric evaluation order, not severity.

use super::domain::{FairnessMetric, GroupBreakdown, MetricCheck};

pub const ALL_PASSED: &str =
    "All fairness metrics are within threshold. Continue monitoring outcomes as new data arrives.";

/// One sentence per failed check, or [`ALL_PASSED`] if none failed.
/// Small-sample advisories, if enabled, come last.
pub fn recommendations(
    checks: &[&MetricCheck],
    protected: &GroupBreakdown,
    privileged: &GroupBreakdown,
    min_group_size: u64,
) -> Vec<String> {
    let mut out: Vec<String> = checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| failure_message(c))
        .collect();

    if out.is_empty() {
        out.push(ALL_PASSED.to_string());
    }

    for (label, group) in [("protected", protected), ("privileged", privileged)] {
        if group.sample_size < min_group_size {
            out.push(format!(
                "The {label} group has only {} samples (minimum {min_group_size}); \
                 metric values may not be statistically reliable.",
                group.sample_size
            ));
        }
    }

    out
}

fn failure_message(check: &MetricCheck) -> String {
    let name = check.metric.name();
    let value = check.value;
    let threshold = check.threshold;
    match check.metric {
        FairnessMetric::DisparateImpact => format!(
            "{name} of {value:.3} is below the {threshold} threshold (four-fifths rule). \
             Review selection criteria and features that correlate with the protected attribute."
        ),
        FairnessMetric::StatisticalParity => format!(
            "{name} of {value:.3} exceeds the {threshold} threshold. \
             Positive-outcome rates differ between groups; consider reweighting training data."
        ),
        FairnessMetric::EqualizedOdds => format!(
            "{name} of {value:.3} exceeds the {threshold} threshold. \
             Error rates differ between groups; consider group-aware decision thresholds."
        ),
        FairnessMetric::PredictiveParity => format!(
            "{name} of {value:.3} exceeds the {threshold} threshold. \
             Precision differs between groups; review score calibration per group."
        ),
    }
}
