//! Runtime configuration loaded from the environment.
//!
//! Every key is optional; missing keys fall back to the documented audit
//! defaults. Present but unparsable keys are rejected.

use std::env;
use std::str::FromStr;

use log::LevelFilter;

use crate::audit::domain::{AuditPolicy, ScoreWeights, Thresholds};
use crate::common::error::{FairnessError, FairnessResult};

pub const DI_THRESHOLD_KEY: &str = "FAIRAUDIT_DI_THRESHOLD";
pub const PARITY_THRESHOLD_KEY: &str = "FAIRAUDIT_PARITY_THRESHOLD";
pub const SCORE_WEIGHTS_KEY: &str = "FAIRAUDIT_SCORE_WEIGHTS";
pub const MIN_GROUP_SIZE_KEY: &str = "FAIRAUDIT_MIN_GROUP_SIZE";
pub const LOG_LEVEL_KEY: &str = "FAIRAUDIT_LOG_LEVEL";

/// Snapshot of configuration values consumed by the core.
#[derive(Clone, Debug)]
pub struct AuditCfg {
    pub policy: AuditPolicy,
    pub log_level: LevelFilter,
}

impl Default for AuditCfg {
    fn default() -> Self {
        Self {
            policy: AuditPolicy::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AuditCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> FairnessResult<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Create a configuration snapshot from an arbitrary key lookup.
    pub fn load_from<F>(lookup: F) -> FairnessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Thresholds::default();
        let thresholds = Thresholds {
            disparate_impact: parse_or(&lookup, DI_THRESHOLD_KEY, defaults.disparate_impact)?,
            parity: parse_or(&lookup, PARITY_THRESHOLD_KEY, defaults.parity)?,
        };
        thresholds.validate()?;

        let weights = match lookup(SCORE_WEIGHTS_KEY) {
            Some(raw) => parse_weights(&raw)?,
            None => ScoreWeights::default(),
        };

        let min_group_size = parse_or(&lookup, MIN_GROUP_SIZE_KEY, 0u64)?;
        let log_level = parse_or(&lookup, LOG_LEVEL_KEY, LevelFilter::Info)?;

        Ok(Self {
            policy: AuditPolicy {
                thresholds,
                weights,
                min_group_size,
            },
            log_level,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> FairnessResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| FairnessError::config(key, format!("cannot parse {raw:?}"))),
        None => Ok(default),
    }
}

fn parse_weights(raw: &str) -> FairnessResult<ScoreWeights> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| FairnessError::config(SCORE_WEIGHTS_KEY, format!("cannot parse {raw:?}")))?;

    match parts.as_slice() {
        [di, sp, eo, pp] => ScoreWeights::new(*di, *sp, *eo, *pp)
            .map_err(|err| FairnessError::config(SCORE_WEIGHTS_KEY, err.to_string())),
        _ => Err(FairnessError::config(
            SCORE_WEIGHTS_KEY,
            format!("expected 4 weights, got {}", parts.len()),
        )),
    }
}
