//! Gini coefficient over an arbitrary non-negative distribution.
//!
//! Independent of the binary-outcome metrics; used to summarise how
//! unevenly any quantity (approvals, credit lines, scores) is spread.

/// `Σ((2·rank − n − 1)·x) / (n·Σx)` over values sorted ascending, rank 1-based.
///
/// Returns 0 for an empty input or a zero total; a degenerate distribution
/// counts as perfectly equal. For `n` values the maximum is `(n − 1) / n`.
pub fn gini_coefficient(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }

    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n_f = n as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| (2.0 * (i + 1) as f64 - n_f - 1.0) * x)
        .sum();

    weighted / (n_f * total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_and_zero_inputs_are_equal() {
        assert_eq!(gini_coefficient(&[]), 0.0);
        assert_eq!(gini_coefficient(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn constant_distribution_is_zero() {
        assert_eq!(gini_coefficient(&[10.0, 10.0, 10.0, 10.0]), 0.0);
    }

    #[test]
    fn single_holder_hits_the_maximum() {
        assert_abs_diff_eq!(gini_coefficient(&[0.0, 0.0, 0.0, 100.0]), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(gini_coefficient(&[100.0, 0.0, 0.0, 0.0]), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn known_value() {
        // sorted 1,2,3,4: (-3*1 - 1*2 + 1*3 + 3*4) / (4*10) = 10/40
        assert_abs_diff_eq!(gini_coefficient(&[4.0, 1.0, 3.0, 2.0]), 0.25, epsilon = 1e-12);
    }
}
