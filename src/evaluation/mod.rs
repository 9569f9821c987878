//! Group outcome statistics: confusion matrices, per-group rates and the
//! pairwise fairness metrics built on them.

pub mod domain;
pub mod gini;
pub mod metrics;
pub mod rates;

pub use domain::{ConfusionMatrix, GroupedOutcomes, Outcome, OutcomeRecord, Prediction};
pub use gini::gini_coefficient;
pub use metrics::{
    disparate_impact_ratio, equalized_odds_difference, passes_80_percent_rule,
    predictive_parity_difference, statistical_parity_difference,
};
pub use rates::{false_positive_rate, positive_predictive_value, true_positive_rate};
