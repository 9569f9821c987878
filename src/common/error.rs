//! Error handling primitives shared across the core.
//!
//! The metric engine is total; errors only surface at the edges (policy
//! construction, configuration, and the FFI boundary).

use thiserror::Error;

/// Stable error codes that cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// Input failed validation.
    InvalidInput = 1,
    /// Audit policy (thresholds or weights) is not usable.
    InvalidPolicy = 2,
    /// Environment configuration could not be parsed.
    Config = 3,
    /// Request or response payload could not be (de)serialized.
    Serialization = 4,
    /// Catch-all for bugs.
    Internal = 5,
}

/// Canonical error type for the core.
#[derive(Debug, Error)]
pub enum FairnessError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid audit policy: {0}")]
    InvalidPolicy(String),

    #[error("configuration error for {key}: {reason}")]
    Config { key: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// Result alias used throughout the crate.
pub type FairnessResult<T> = Result<T, FairnessError>;

impl FairnessError {
    /// Validation helper.
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Policy helper.
    pub fn policy<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPolicy(msg.into())
    }

    /// Configuration helper naming the offending key.
    pub fn config<K: Into<String>, R: Into<String>>(key: K, reason: R) -> Self {
        Self::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Machine parsable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::InvalidPolicy(_) => ErrorCode::InvalidPolicy,
            Self::Config { .. } => ErrorCode::Config,
            Self::Serialization(_) => ErrorCode::Serialization,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorCode::Ok as u32, 0);
        assert_eq!(ErrorCode::InvalidInput as u32, 1);
        assert_eq!(ErrorCode::InvalidPolicy as u32, 2);
        assert_eq!(ErrorCode::Config as u32, 3);
        assert_eq!(ErrorCode::Serialization as u32, 4);
        assert_eq!(ErrorCode::Internal as u32, 5);
    }

    #[test]
    fn errors_map_to_codes() {
        assert_eq!(FairnessError::invalid("x").code(), ErrorCode::InvalidInput);
        assert_eq!(FairnessError::policy("x").code(), ErrorCode::InvalidPolicy);
        assert_eq!(
            FairnessError::config("FAIRAUDIT_DI_THRESHOLD", "nan").code(),
            ErrorCode::Config
        );
        assert_eq!(FairnessError::Internal("bug").code(), ErrorCode::Internal);
    }

    #[test]
    fn config_error_names_key() {
        let err = FairnessError::config("FAIRAUDIT_PARITY_THRESHOLD", "not a number");
        assert_eq!(
            err.to_string(),
            "configuration error for FAIRAUDIT_PARITY_THRESHOLD: not a number"
        );
    }
}
