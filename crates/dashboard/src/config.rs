//! Application configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted session record; in-memory persistence when
    /// unset.
    pub session_file: Option<PathBuf>,
    /// Artificial latency applied to login and register, in ms.
    pub auth_latency_ms: u64,
    /// Artificial latency applied to rating submission, in ms.
    pub rating_latency_ms: u64,
    /// Whether to load the demo catalog at startup.
    pub seed_demo_data: bool,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            session_file: env::var("RATEHUB_SESSION_FILE").ok().map(PathBuf::from),
            auth_latency_ms: parse_ms("RATEHUB_AUTH_LATENCY_MS", session::DEFAULT_AUTH_LATENCY_MS)?,
            rating_latency_ms: parse_ms(
                "RATEHUB_RATING_LATENCY_MS",
                crate::rating::DEFAULT_RATING_LATENCY_MS,
            )?,
            seed_demo_data: env::var("RATEHUB_SEED_DEMO_DATA")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(true),
            log_level: env::var("RATEHUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The login/register latency as a duration.
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    /// The rating submission latency as a duration.
    pub fn rating_latency(&self) -> Duration {
        Duration::from_millis(self.rating_latency_ms)
    }
}

impl Default for Config {
    /// In-memory persistence, demo data, reference latencies.
    fn default() -> Self {
        Self {
            session_file: None,
            auth_latency_ms: session::DEFAULT_AUTH_LATENCY_MS,
            rating_latency_ms: crate::rating::DEFAULT_RATING_LATENCY_MS,
            seed_demo_data: true,
            log_level: "info".to_string(),
        }
    }
}

fn parse_ms(var: &str, default: u64) -> anyhow::Result<u64> {
    match env::var(var) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{var} must be a non-negative integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
