use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::vies::ViesConfig;

pub const ENV_BIND: &str = "BIZVERIFY_BIND";
pub const ENV_VIES_URL: &str = "BIZVERIFY_VIES_URL";
pub const ENV_VIES_TIMEOUT_MS: &str = "BIZVERIFY_VIES_TIMEOUT_MS";
pub const ENV_VIES_CACHE_TTL_SECS: &str = "BIZVERIFY_VIES_CACHE_TTL_SECS";
pub const ENV_VIES_CACHE_CAPACITY: &str = "BIZVERIFY_VIES_CACHE_CAPACITY";

const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Invalid server configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{key}: invalid socket address '{value}'")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key}: expected a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key}: timeout must be greater than zero")]
    ZeroTimeout { key: &'static str },
}

/// Settings of the `bizverify-server` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub vies: ViesConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            vies: ViesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let bind = lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        config.bind = SocketAddr::from_str(bind.trim()).map_err(|_| ConfigError::InvalidAddr {
            key: ENV_BIND,
            value: bind.clone(),
        })?;

        if let Some(url) = lookup(ENV_VIES_URL) {
            config.vies.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(ms) = parse_number(&lookup, ENV_VIES_TIMEOUT_MS)? {
            if ms == 0 {
                return Err(ConfigError::ZeroTimeout {
                    key: ENV_VIES_TIMEOUT_MS,
                });
            }
            config.vies.timeout = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_number(&lookup, ENV_VIES_CACHE_TTL_SECS)? {
            config.vies.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(cap) = parse_number(&lookup, ENV_VIES_CACHE_CAPACITY)? {
            config.vies.cache_capacity = usize::try_from(cap).unwrap_or(usize::MAX);
        }

        Ok(config)
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(from_pairs(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn overrides() {
        let c = from_pairs(&[
            (ENV_BIND, "127.0.0.1:3000"),
            (ENV_VIES_URL, "http://localhost:9000/vies/"),
            (ENV_VIES_TIMEOUT_MS, "1500"),
            (ENV_VIES_CACHE_TTL_SECS, "0"),
            (ENV_VIES_CACHE_CAPACITY, "10"),
        ])
        .unwrap();
        assert_eq!(c.bind.port(), 3000);
        assert_eq!(c.vies.base_url, "http://localhost:9000/vies");
        assert_eq!(c.vies.timeout, Duration::from_millis(1500));
        assert_eq!(c.vies.cache_ttl, Duration::ZERO);
        assert_eq!(c.vies.cache_capacity, 10);
    }

    #[test]
    fn bad_address() {
        let err = from_pairs(&[(ENV_BIND, "localhost")]).unwrap_err();
        assert!(err.to_string().contains(ENV_BIND));
    }

    #[test]
    fn bad_number() {
        let err = from_pairs(&[(ENV_VIES_TIMEOUT_MS, "5s")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = from_pairs(&[(ENV_VIES_TIMEOUT_MS, "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout { .. }));
    }
}
