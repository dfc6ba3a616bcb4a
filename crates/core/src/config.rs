use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub data_mode: DataMode,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            data_mode: DataMode::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  api:        base_url={}, timeout={}ms", self.api.base_url, self.api.timeout_ms);
        tracing::info!("  data_mode:  {}", self.data_mode.label());
    }
}

// ── Dashboard API ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the telemetry backend, no trailing slash.
    pub base_url: String,
    /// Per-request deadline in milliseconds.
    pub timeout_ms: u64,
}

impl ApiConfig {
    fn from_env() -> Self {
        let mut base_url = env_or("PULSE_API_BASE_URL", "http://localhost:3001");
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout_ms: env_u64("PULSE_API_TIMEOUT_MS", 5000),
        }
    }
}

// ── Data mode ─────────────────────────────────────────────────

/// Strategy for where dashboard data comes from.
///
/// Threaded through every composite source constructor so that forcing
/// generated data (demos, offline development) is an explicit caller
/// decision rather than a process-wide switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Fetch live telemetry, falling back to generated data per source.
    Auto,
    /// Always serve generated data; the network is never touched.
    Synthetic,
}

impl DataMode {
    fn from_env() -> Self {
        match env_or("PULSE_DATA_MODE", "auto").to_lowercase().as_str() {
            "auto" => DataMode::Auto,
            "synthetic" => DataMode::Synthetic,
            other => {
                tracing::warn!(value = %other, "unknown PULSE_DATA_MODE, using auto");
                DataMode::Auto
            }
        }
    }

    pub fn is_forced_synthetic(self) -> bool {
        self == DataMode::Synthetic
    }

    pub fn label(self) -> &'static str {
        match self {
            DataMode::Auto => "auto",
            DataMode::Synthetic => "synthetic",
        }
    }
}

impl std::str::FromStr for DataMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DataMode::Auto),
            "synthetic" => Ok(DataMode::Synthetic),
            other => Err(format!("unknown data mode: {other} (expected auto|synthetic)")),
        }
    }
}
