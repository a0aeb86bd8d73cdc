//! Runtime configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::{DEFAULT_KEY_HOLD_DELAY_MS, DEFAULT_KEY_RELEASE_TIMEOUT_MS, TICK_MS};

pub const ENV_SEED: &str = "LANDER_SEED";
pub const ENV_TICK_MS: &str = "LANDER_TICK_MS";
pub const ENV_KEY_HOLD_DELAY_MS: &str = "LANDER_KEY_HOLD_DELAY_MS";
pub const ENV_KEY_RELEASE_TIMEOUT_MS: &str = "LANDER_KEY_RELEASE_TIMEOUT_MS";
pub const ENV_LOG_PATH: &str = "LANDER_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanderConfig {
    /// Pad RNG seed.
    pub seed: u64,
    pub tick_ms: u32,
    /// Grace before the first auto-repeat of a fresh key press.
    pub key_hold_delay_ms: u32,
    /// 0 disables auto-release of held keys.
    pub key_release_timeout_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            tick_ms: TICK_MS,
            key_hold_delay_ms: DEFAULT_KEY_HOLD_DELAY_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl LanderConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Unset and blank values
    /// fall back to defaults; malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = get(ENV_SEED) {
            config.seed = raw
                .parse()
                .with_context(|| format!("{ENV_SEED}={raw:?} is not a u64"))?;
        }

        if let Some(raw) = get(ENV_TICK_MS) {
            let tick_ms: u32 = raw
                .parse()
                .with_context(|| format!("{ENV_TICK_MS}={raw:?} is not a u32"))?;
            if tick_ms == 0 {
                bail!("{ENV_TICK_MS} must be greater than zero");
            }
            config.tick_ms = tick_ms;
        }

        if let Some(raw) = get(ENV_KEY_HOLD_DELAY_MS) {
            config.key_hold_delay_ms = raw
                .parse()
                .with_context(|| format!("{ENV_KEY_HOLD_DELAY_MS}={raw:?} is not a u32"))?;
        }

        if let Some(raw) = get(ENV_KEY_RELEASE_TIMEOUT_MS) {
            config.key_release_timeout_ms = raw
                .parse()
                .with_context(|| format!("{ENV_KEY_RELEASE_TIMEOUT_MS}={raw:?} is not a u32"))?;
        }

        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        Ok(config)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LanderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.tick_ms, TICK_MS);
        assert_eq!(config.key_hold_delay_ms, DEFAULT_KEY_HOLD_DELAY_MS);
        assert_eq!(config.key_release_timeout_ms, DEFAULT_KEY_RELEASE_TIMEOUT_MS);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_reads_all_values() {
        let config = LanderConfig::from_lookup(lookup(&[
            (ENV_SEED, "42"),
            (ENV_TICK_MS, "16"),
            (ENV_KEY_HOLD_DELAY_MS, "500"),
            (ENV_KEY_RELEASE_TIMEOUT_MS, "0"),
            (ENV_LOG_PATH, "/tmp/lander.log"),
        ]))
        .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.key_hold_delay_ms, 500);
        assert_eq!(config.key_release_timeout_ms, 0);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/lander.log")));
    }

    #[test]
    fn test_blank_values_mean_unset() {
        let config =
            LanderConfig::from_lookup(lookup(&[(ENV_LOG_PATH, "  "), (ENV_TICK_MS, "")])).unwrap();
        assert_eq!(config.log_path, None);
        assert_eq!(config.tick_ms, TICK_MS);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = LanderConfig::from_lookup(lookup(&[(ENV_SEED, "abc")])).unwrap_err();
        assert!(err.to_string().contains(ENV_SEED));

        assert!(LanderConfig::from_lookup(lookup(&[(ENV_TICK_MS, "-5")])).is_err());
        assert!(LanderConfig::from_lookup(lookup(&[(ENV_KEY_RELEASE_TIMEOUT_MS, "soon")])).is_err());
        assert!(LanderConfig::from_lookup(lookup(&[(ENV_KEY_HOLD_DELAY_MS, "1.5")])).is_err());
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let err = LanderConfig::from_lookup(lookup(&[(ENV_TICK_MS, "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
