//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use board_infra::storage::DEFAULT_QUOTA_BYTES;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the durable storage slots.
    pub data_dir: PathBuf,
    /// Byte cap for a single stored value.
    pub storage_quota: usize,
    /// Whether API calls wait for their simulated round trip.
    pub simulated_latency: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".board"),
            storage_quota: DEFAULT_QUOTA_BYTES,
            simulated_latency: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            data_dir: lookup("BOARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_quota: lookup("BOARD_STORAGE_QUOTA_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.storage_quota),
            simulated_latency: lookup("BOARD_SIMULATED_LATENCY")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.simulated_latency),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.data_dir, PathBuf::from(".board"));
        assert_eq!(config.storage_quota, DEFAULT_QUOTA_BYTES);
        assert!(config.simulated_latency);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BOARD_DATA_DIR", "/tmp/board"),
            ("BOARD_STORAGE_QUOTA_BYTES", "1024"),
            ("BOARD_SIMULATED_LATENCY", "0"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/board"));
        assert_eq!(config.storage_quota, 1024);
        assert!(!config.simulated_latency);
    }

    #[test]
    fn test_bad_quota_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[("BOARD_STORAGE_QUOTA_BYTES", "lots")]));
        assert_eq!(config.storage_quota, DEFAULT_QUOTA_BYTES);
    }
}
