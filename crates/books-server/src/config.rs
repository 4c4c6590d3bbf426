use std::{env, fmt::Display, net::IpAddr, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

pub const HOST_VAR: &str = "BOOKS_HOST";
pub const PORT_VAR: &str = "BOOKS_PORT";
pub const BODY_LIMIT_VAR: &str = "BOOKS_BODY_LIMIT";
pub const CHANNEL_CAPACITY_VAR: &str = "BOOKS_CHANNEL_CAPACITY";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Largest JSON body the body parser accepts, in bytes.
    pub body_limit: usize,
    /// Capacity of the store actor's request channel.
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            body_limit: 100 * 1024,
            channel_capacity: 32,
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            host: try_load(&lookup, HOST_VAR, defaults.host)?,
            port: try_load(&lookup, PORT_VAR, defaults.port)?,
            body_limit: try_load(&lookup, BODY_LIMIT_VAR, defaults.body_limit)?,
            channel_capacity: try_load(&lookup, CHANNEL_CAPACITY_VAR, defaults.channel_capacity)?,
        };

        if config.channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: CHANNEL_CAPACITY_VAR,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(config)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(value) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address(), "0.0.0.0:3000");
        assert_eq!(config.body_limit, 102_400);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, " 8080 "),
            (BODY_LIMIT_VAR, "512"),
            (CHANNEL_CAPACITY_VAR, "4"),
        ])
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.body_limit, 512);
        assert_eq!(config.channel_capacity, 4);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = load(&[(PORT_VAR, "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: PORT_VAR, .. }));
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = load(&[(CHANNEL_CAPACITY_VAR, "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: CHANNEL_CAPACITY_VAR,
                ..
            }
        ));
    }
}
