//! Domain primitives for group outcome evaluation.
//!
//! A [`ConfusionMatrix`] is the sufficient statistic for one group's
//! outcomes. It is built once per audit, usually from raw
//! [`OutcomeRecord`]s, and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Counts of a binary classifier's outcomes against ground truth for one group.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    #[serde(rename = "tp")]
    pub true_positives: u64,
    #[serde(rename = "fp")]
    pub false_positives: u64,
    #[serde(rename = "tn")]
    pub true_negatives: u64,
    #[serde(rename = "fn")]
    pub false_negatives: u64,
}

impl ConfusionMatrix {
    /// Construct a matrix from its four counts in `(TP, FP, TN, FN)` order.
    pub const fn new(tp: u64, fp: u64, tn: u64, fn_: u64) -> Self {
        Self {
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_,
        }
    }

    /// Aggregate raw prediction/label pairs into a matrix.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Prediction>,
    {
        outcomes.into_iter().fold(Self::default(), |mut cm, p| {
            cm.record(p);
            cm
        })
    }

    fn record(&mut self, p: &Prediction) {
        let slot = match (p.predicted, p.actual) {
            (Outcome::Positive, Outcome::Positive) => &mut self.true_positives,
            (Outcome::Positive, Outcome::Negative) => &mut self.false_positives,
            (Outcome::Negative, Outcome::Negative) => &mut self.true_negatives,
            (Outcome::Negative, Outcome::Positive) => &mut self.false_negatives,
        };
        *slot = slot.saturating_add(1);
    }

    /// Group size: the sum of all four counts.
    pub fn total(&self) -> u64 {
        self.true_positives
            .saturating_add(self.false_positives)
            .saturating_add(self.true_negatives)
            .saturating_add(self.false_negatives)
    }

    /// Cases the classifier selected (TP + FP).
    pub fn predicted_positive(&self) -> u64 {
        self.true_positives.saturating_add(self.false_positives)
    }

    /// Cases whose ground truth is positive (TP + FN).
    pub fn actual_positive(&self) -> u64 {
        self.true_positives.saturating_add(self.false_negatives)
    }

    /// Cases whose ground truth is negative (FP + TN).
    pub fn actual_negative(&self) -> u64 {
        self.false_positives.saturating_add(self.true_negatives)
    }

    /// Positive-outcome rate, 0 for an empty group.
    pub fn selection_rate(&self) -> f64 {
        super::rates::ratio(self.predicted_positive(), self.total())
    }

    /// Share of correct predictions, 0 for an empty group.
    pub fn accuracy(&self) -> f64 {
        let correct = self.true_positives.saturating_add(self.true_negatives);
        super::rates::ratio(correct, self.total())
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Binary label used for both predictions and ground truth.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Positive,
    Negative,
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        if value {
            Outcome::Positive
        } else {
            Outcome::Negative
        }
    }
}

/// A single classifier decision paired with what actually happened.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted: Outcome,
    pub actual: Outcome,
}

impl Prediction {
    pub fn new<P: Into<Outcome>, A: Into<Outcome>>(predicted: P, actual: A) -> Self {
        Self {
            predicted: predicted.into(),
            actual: actual.into(),
        }
    }
}

/// Raw per-subject input tagged with the group it belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub group: String,
    #[serde(flatten)]
    pub prediction: Prediction,
}

impl OutcomeRecord {
    pub fn new<G, P, A>(group: G, predicted: P, actual: A) -> Self
    where
        G: Into<String>,
        P: Into<Outcome>,
        A: Into<Outcome>,
    {
        Self {
            group: group.into(),
            prediction: Prediction::new(predicted, actual),
        }
    }
}

/// Protected and privileged matrices split out of a tagged record stream.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupedOutcomes {
    pub protected: ConfusionMatrix,
    pub privileged: ConfusionMatrix,
}

impl GroupedOutcomes {
    /// Split records by group id. Records tagged with any other id are skipped.
    pub fn split<'a, I>(records: I, protected: &str, privileged: &str) -> Self
    where
        I: IntoIterator<Item = &'a OutcomeRecord>,
    {
        let mut out = Self::default();
        for record in records {
            if record.group == protected {
                out.protected.record(&record.prediction);
            } else if record.group == privileged {
                out.privileged.record(&record.prediction);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_outcomes_fills_each_cell() {
        let preds = [
            Prediction::new(true, true),
            Prediction::new(true, true),
            Prediction::new(true, false),
            Prediction::new(false, false),
            Prediction::new(false, true),
        ];
        let cm = ConfusionMatrix::from_outcomes(&preds);
        assert_eq!(cm, ConfusionMatrix::new(2, 1, 1, 1));
        assert_eq!(cm.total(), 5);
        assert_eq!(cm.predicted_positive(), 3);
        assert_eq!(cm.actual_positive(), 3);
        assert_eq!(cm.actual_negative(), 2);
    }

    #[test]
    fn empty_matrix_has_zero_rates() {
        let cm = ConfusionMatrix::default();
        assert!(cm.is_empty());
        assert_eq!(cm.selection_rate(), 0.0);
        assert_eq!(cm.accuracy(), 0.0);
    }

    #[test]
    fn selection_rate_counts_predicted_positives() {
        let cm = ConfusionMatrix::new(40, 10, 40, 10);
        assert_eq!(cm.selection_rate(), 0.5);
        assert_eq!(cm.accuracy(), 0.8);
    }

    #[test]
    fn split_ignores_unknown_groups() {
        let records = vec![
            OutcomeRecord::new("f", true, true),
            OutcomeRecord::new("m", true, false),
            OutcomeRecord::new("m", false, false),
            OutcomeRecord::new("x", true, true),
        ];
        let grouped = GroupedOutcomes::split(&records, "f", "m");
        assert_eq!(grouped.protected, ConfusionMatrix::new(1, 0, 0, 0));
        assert_eq!(grouped.privileged, ConfusionMatrix::new(0, 1, 1, 0));
    }

    #[test]
    fn matrix_serializes_with_short_keys() {
        let json = serde_json::to_string(&ConfusionMatrix::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"tp":1,"fp":2,"tn":3,"fn":4}"#);
    }

    #[test]
    fn record_deserializes_flat() {
        let record: OutcomeRecord =
            serde_json::from_str(r#"{"group":"f","predicted":"positive","actual":"negative"}"#)
                .unwrap();
        assert_eq!(record, OutcomeRecord::new("f", true, false));
    }
}
