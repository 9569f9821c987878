//! Policy parameters and the audit result value.

use serde::{Deserialize, Serialize};

use crate::common::error::{FairnessError, FairnessResult};
use crate::evaluation::metrics::{DEFAULT_DISPARATE_IMPACT_THRESHOLD, DEFAULT_PARITY_THRESHOLD};
use crate::evaluation::rates::{false_positive_rate, positive_predictive_value, true_positive_rate};
use crate::evaluation::ConfusionMatrix;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Pass/fail limits applied to the four metrics.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum acceptable disparate impact ratio.
    pub disparate_impact: f64,
    /// Maximum acceptable gap for the three difference metrics.
    pub parity: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            disparate_impact: DEFAULT_DISPARATE_IMPACT_THRESHOLD,
            parity: DEFAULT_PARITY_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(disparate_impact: f64, parity: f64) -> FairnessResult<Self> {
        let thresholds = Self {
            disparate_impact,
            parity,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> FairnessResult<()> {
        for (name, value) in [
            ("disparate_impact", self.disparate_impact),
            ("parity", self.parity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FairnessError::policy(format!(
                    "threshold {name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Contribution of each metric to the overall score. Always sums to 1.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct ScoreWeights {
    disparate_impact: f64,
    statistical_parity: f64,
    equalized_odds: f64,
    predictive_parity: f64,
}

#[derive(Deserialize)]
struct RawWeights {
    disparate_impact: f64,
    statistical_parity: f64,
    equalized_odds: f64,
    predictive_parity: f64,
}

impl TryFrom<RawWeights> for ScoreWeights {
    type Error = FairnessError;

    fn try_from(raw: RawWeights) -> FairnessResult<Self> {
        Self::new(
            raw.disparate_impact,
            raw.statistical_parity,
            raw.equalized_odds,
            raw.predictive_parity,
        )
    }
}

impl Default for ScoreWeights {
    /// Disparate impact carries the most weight as the only regulated metric.
    fn default() -> Self {
        Self {
            disparate_impact: 0.30,
            statistical_parity: 0.25,
            equalized_odds: 0.25,
            predictive_parity: 0.20,
        }
    }
}

impl ScoreWeights {
    /// Weights in metric evaluation order. Each must be finite and
    /// non-negative, and together they must sum to 1.
    pub fn new(
        disparate_impact: f64,
        statistical_parity: f64,
        equalized_odds: f64,
        predictive_parity: f64,
    ) -> FairnessResult<Self> {
        let weights = Self {
            disparate_impact,
            statistical_parity,
            equalized_odds,
            predictive_parity,
        };

        if weights
            .as_array()
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(FairnessError::policy(
                "score weights must be finite and non-negative",
            ));
        }

        let sum: f64 = weights.as_array().iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(FairnessError::policy(format!(
                "score weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(weights)
    }

    pub fn disparate_impact(&self) -> f64 {
        self.disparate_impact
    }

    pub fn statistical_parity(&self) -> f64 {
        self.statistical_parity
    }

    pub fn equalized_odds(&self) -> f64 {
        self.equalized_odds
    }

    pub fn predictive_parity(&self) -> f64 {
        self.predictive_parity
    }

    /// Weight for `metric`.
    pub fn weight(&self, metric: FairnessMetric) -> f64 {
        match metric {
            FairnessMetric::DisparateImpact => self.disparate_impact,
            FairnessMetric::StatisticalParity => self.statistical_parity,
            FairnessMetric::EqualizedOdds => self.equalized_odds,
            FairnessMetric::PredictiveParity => self.predictive_parity,
        }
    }

    fn as_array(&self) -> [f64; 4] {
        [
            self.disparate_impact,
            self.statistical_parity,
            self.equalized_odds,
            self.predictive_parity,
        ]
    }
}

/// Everything a caller can tune for one audit run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditPolicy {
    pub thresholds: Thresholds,
    pub weights: ScoreWeights,
    /// Groups smaller than this get an advisory recommendation; 0 disables it.
    pub min_group_size: u64,
}

impl AuditPolicy {
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FairnessResult<()> {
        // weights are validated on construction
        self.thresholds.validate()
    }
}

/// The four audited metrics, in evaluation order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessMetric {
    DisparateImpact,
    StatisticalParity,
    EqualizedOdds,
    PredictiveParity,
}

impl FairnessMetric {
    pub const ALL: [FairnessMetric; 4] = [
        Self::DisparateImpact,
        Self::StatisticalParity,
        Self::EqualizedOdds,
        Self::PredictiveParity,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::DisparateImpact => "Disparate impact ratio",
            Self::StatisticalParity => "Statistical parity difference",
            Self::EqualizedOdds => "Equalized odds difference",
            Self::PredictiveParity => "Predictive parity difference",
        }
    }

    /// Value a perfectly fair outcome would produce.
    pub const fn target(&self) -> f64 {
        match self {
            Self::DisparateImpact => 1.0,
            _ => 0.0,
        }
    }

    /// True for the ratio metric, whose threshold is a floor rather than a ceiling.
    pub const fn is_ratio(&self) -> bool {
        matches!(self, Self::DisparateImpact)
    }
}

/// One metric's value and verdict.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricCheck {
    pub metric: FairnessMetric,
    /// `+inf` is written as JSON `null` and read back as `+inf`.
    #[serde(with = "unbounded")]
    pub value: f64,
    pub threshold: f64,
    pub passed: bool,
}

/// JSON has no infinity; the only non-finite metric value is the unbounded
/// disparate impact ratio, carried as `null`.
mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl MetricCheck {
    /// Judge `value` against `threshold` in the direction `metric` requires.
    pub fn evaluate(metric: FairnessMetric, value: f64, threshold: f64) -> Self {
        let passed = if metric.is_ratio() {
            value >= threshold
        } else {
            value <= threshold
        };
        Self {
            metric,
            value,
            threshold,
            passed,
        }
    }

    /// `max(0, 1 − |target − value|)`.
    pub fn closeness(&self) -> f64 {
        (1.0 - (self.metric.target() - self.value).abs()).max(0.0)
    }
}

/// Per-group rates reported alongside the metrics.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupBreakdown {
    pub selection_rate: f64,
    pub true_positive_rate: f64,
    pub false_positive_rate: f64,
    pub positive_predictive_value: f64,
    pub sample_size: u64,
}

impl From<&ConfusionMatrix> for GroupBreakdown {
    fn from(cm: &ConfusionMatrix) -> Self {
        Self {
            selection_rate: cm.selection_rate(),
            true_positive_rate: true_positive_rate(cm),
            false_positive_rate: false_positive_rate(cm),
            positive_predictive_value: positive_predictive_value(cm),
            sample_size: cm.total(),
        }
    }
}

/// Outcome of one audit run. A plain value with no identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub disparate_impact: MetricCheck,
    pub statistical_parity: MetricCheck,
    pub equalized_odds: MetricCheck,
    pub predictive_parity: MetricCheck,
    /// Weighted closeness to perfect fairness, in [0, 100].
    pub overall_score: f64,
    pub protected: GroupBreakdown,
    pub privileged: GroupBreakdown,
    pub recommendations: Vec<String>,
}

impl AuditResult {
    /// The four checks in evaluation order.
    pub fn checks(&self) -> [&MetricCheck; 4] {
        [
            &self.disparate_impact,
            &self.statistical_parity,
            &self.equalized_odds,
            &self.predictive_parity,
        ]
    }

    /// True when every metric is within its threshold.
    pub fn passed(&self) -> bool {
        self.checks().iter().all(|c| c.passed)
    }

    pub fn failed_metrics(&self) -> Vec<FairnessMetric> {
        self.checks()
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.metric)
            .collect()
    }
}
