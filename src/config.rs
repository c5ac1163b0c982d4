use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PROCESSING_TIME_MS: u64 = 100;
const UNKNOWN_HOST: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub processing_time_ms: u64,
    pub host_id: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
    #[error("PROCESSING_TIME must be a non-negative integer of milliseconds, got {0:?}")]
    InvalidProcessingTime(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = read("PORT")
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort(value))
            })
            .transpose()?
            .unwrap_or(DEFAULT_PORT);
        let processing_time_ms = read("PROCESSING_TIME")
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidProcessingTime(value))
            })
            .transpose()?
            .unwrap_or(DEFAULT_PROCESSING_TIME_MS);
        let host_id = read("HOSTNAME").unwrap_or_else(|| UNKNOWN_HOST.to_string());

        Ok(Self {
            port,
            processing_time_ms,
            host_id,
        })
    }

    pub fn bind_socket(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_time_ms)
    }
}
