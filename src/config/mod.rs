use crate::error::{LazyError, Result};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;

/// Environment key toggling per-notification diagnostic logging.
pub const LOG_ENABLED_KEY: &str = "LAZY_LIFECYCLE_LOG";

/// Environment key naming reconcilers in log records.
pub const LABEL_KEY: &str = "LAZY_LIFECYCLE_LABEL";

/// Configuration service
///
/// A string key/value store. [`ConfigService::new`] seeds it from the process
/// environment; [`ConfigService::default`] starts empty.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Read a boolean flag.
    ///
    /// Accepts `1/0`, `true/false`, `yes/no` and `on/off` in any case.
    /// A missing key is `Ok(None)`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(LazyError::invalid_config(key, raw, "expected a boolean")),
        }
    }
}

/// Per-reconciler settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Log every emitted notification at debug level. Off by default.
    pub log_enabled: bool,
    /// Name attached to this reconciler's log records.
    pub label: Option<String>,
}

impl ReconcilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_enabled(mut self, enabled: bool) -> Self {
        self.log_enabled = enabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build from [`LOG_ENABLED_KEY`] and [`LABEL_KEY`].
    ///
    /// An empty label is treated as unset.
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let log_enabled = config.get_bool(LOG_ENABLED_KEY)?.unwrap_or(false);
        let label = config
            .get(LABEL_KEY)
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty());

        Ok(Self { log_enabled, label })
    }

    /// Reads `LAZY_LIFECYCLE_LOG` and `LAZY_LIFECYCLE_LABEL` from the process
    /// environment. Wraps `from_config(&ConfigService::new())`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ConfigService::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let service = ConfigService::default();
        let config = ReconcilerConfig::from_config(&service).unwrap();
        assert_eq!(config, ReconcilerConfig::default());
        assert!(!config.log_enabled);
    }

    #[test]
    fn test_reads_flag_and_label() {
        let service = ConfigService::default();
        service.set(LOG_ENABLED_KEY, "On");
        service.set(LABEL_KEY, "  feed-tab ");

        let config = ReconcilerConfig::from_config(&service).unwrap();
        assert!(config.log_enabled);
        assert_eq!(config.label.as_deref(), Some("feed-tab"));
    }

    #[test]
    fn test_blank_label_is_unset() {
        let service = ConfigService::default();
        service.set(LABEL_KEY, "   ");
        let config = ReconcilerConfig::from_config(&service).unwrap();
        assert_eq!(config.label, None);
    }

    #[test]
    fn test_bool_spellings() {
        let service = ConfigService::default();
        for (raw, expected) in [
            ("1", true),
            ("TRUE", true),
            ("yes", true),
            ("0", false),
            ("False", false),
            ("off", false),
        ] {
            service.set("FLAG", raw);
            assert_eq!(service.get_bool("FLAG").unwrap(), Some(expected), "{raw}");
        }
        assert_eq!(service.get_bool("MISSING").unwrap(), None);
    }

    #[test]
    fn test_invalid_flag_is_reported() {
        let service = ConfigService::default();
        service.set(LOG_ENABLED_KEY, "maybe");

        let err = ReconcilerConfig::from_config(&service).unwrap_err();
        assert_eq!(
            err,
            LazyError::invalid_config(LOG_ENABLED_KEY, "maybe", "expected a boolean")
        );
        assert!(err.to_string().contains("LAZY_LIFECYCLE_LOG"));
    }

    #[test]
    fn test_builder() {
        let config = ReconcilerConfig::new().log_enabled(true).label("detail");
        assert!(config.log_enabled);
        assert_eq!(config.label.as_deref(), Some("detail"));
    }
}
