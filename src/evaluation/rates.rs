//! Per-group rates derived from a confusion matrix.
//!
//! All three rates are total: an empty denominator yields 0 rather than
//! NaN, so the aggregate score never sees a non-finite input from here.

use super::domain::ConfusionMatrix;

/// `num / den`, or 0 when `den` is 0.
pub(crate) fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// TP / (TP + FN).
pub fn true_positive_rate(cm: &ConfusionMatrix) -> f64 {
    ratio(cm.true_positives, cm.actual_positive())
}

/// FP / (FP + TN).
pub fn false_positive_rate(cm: &ConfusionMatrix) -> f64 {
    ratio(cm.false_positives, cm.actual_negative())
}

/// TP / (TP + FP), i.e. precision.
pub fn positive_predictive_value(cm: &ConfusionMatrix) -> f64 {
    ratio(cm.true_positives, cm.predicted_positive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_for_balanced_matrix() {
        let cm = ConfusionMatrix::new(40, 10, 40, 10);
        assert_eq!(true_positive_rate(&cm), 0.8);
        assert_eq!(false_positive_rate(&cm), 0.2);
        assert_eq!(positive_predictive_value(&cm), 0.8);
    }

    #[test]
    fn empty_denominators_yield_zero() {
        // no actual positives
        let cm = ConfusionMatrix::new(0, 3, 7, 0);
        assert_eq!(true_positive_rate(&cm), 0.0);

        // no actual negatives
        let cm = ConfusionMatrix::new(5, 0, 0, 5);
        assert_eq!(false_positive_rate(&cm), 0.0);

        // nothing predicted positive
        let cm = ConfusionMatrix::new(0, 0, 4, 6);
        assert_eq!(positive_predictive_value(&cm), 0.0);
    }

    #[test]
    fn all_rates_zero_on_empty_matrix() {
        let cm = ConfusionMatrix::default();
        assert_eq!(true_positive_rate(&cm), 0.0);
        assert_eq!(false_positive_rate(&cm), 0.0);
        assert_eq!(positive_predictive_value(&cm), 0.0);
    }
}
