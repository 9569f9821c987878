//! Fairness audit of a protected group against a privileged reference group.
//!
//! Stateless: construct the inputs where needed and call
//! [`run_fairness_audit`] or [`audit_with_policy`]. Identical inputs always
//! produce an identical [`AuditResult`].

pub mod domain;
pub mod recommend;
pub mod service;

pub use domain::{
    AuditPolicy, AuditResult, FairnessMetric, GroupBreakdown, MetricCheck, ScoreWeights,
    Thresholds,
};
pub use service::{audit_with_policy, overall_score, run_fairness_audit};
