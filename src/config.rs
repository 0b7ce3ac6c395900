//! Environment-driven configuration.

use anyhow::{anyhow, Result};
use validator::Validate;

pub const ENV_API_HOST: &str = "EXPLORER_API_HOST";
/// Name used by existing front-end deployments; read when the primary is unset.
pub const ENV_API_HOST_LEGACY: &str = "VITE_API_HOST";
pub const ENV_BIND_ADDR: &str = "EXPLORER_BIND_ADDR";
pub const ENV_DEBUG_MODE: &str = "EXPLORER_DEBUG_MODE";
pub const ENV_LOG_DIR: &str = "EXPLORER_LOG_DIR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    /// Documentation endpoint serving `{ state, data }`.
    #[validate(url)]
    pub api_host: String,

    #[validate(length(min = 1))]
    pub bind_addr: String,

    pub debug_mode: bool,

    /// Directory for the daily rolling log file, if any.
    pub log_dir: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_host = non_empty(ENV_API_HOST)
            .or_else(|| non_empty(ENV_API_HOST_LEGACY))
            .ok_or_else(|| anyhow!("{} is not set", ENV_API_HOST))?;

        let cfg = Self {
            api_host: api_host.trim().to_string(),
            bind_addr: non_empty(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            debug_mode: non_empty(ENV_DEBUG_MODE)
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),
            log_dir: non_empty(ENV_LOG_DIR),
        };

        cfg.validate()
            .map_err(|e| anyhow!("invalid configuration: {}", e))?;

        Ok(cfg)
    }
}
