//! Group fairness auditing for binary classifiers.
//!
//! Computes disparate impact, statistical parity, equalized odds and
//! predictive parity between a protected and a privileged group, folds them
//! into a weighted score and emits remediation text. Everything is a pure
//! function of its inputs; there is no shared state to initialise.
pub mod common;
pub mod evaluation;
pub mod audit;
pub mod api;

pub use audit::{audit_with_policy, run_fairness_audit, AuditPolicy, AuditResult, Thresholds};
pub use common::{FairnessError, FairnessResult};
pub use evaluation::ConfusionMatrix;
