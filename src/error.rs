use thiserror::Error;

pub type Result<T> = std::result::Result<T, LazyError>;

/// Errors raised by the configuration layer.
///
/// Reconciliation itself never fails: every signal is accepted in every
/// state, so nothing in [`crate::lifecycle`] returns this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LazyError {
    #[error("Invalid configuration value for {key}: {value:?} ({reason})")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}

impl LazyError {
    /// Create an invalid configuration error
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
