//! Configuration system (layered: code > env > config file > defaults).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{BridgeError, Result};

/// Front-end address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

pub const BASE_URL_ENV: &str = "TUTOR_FRONTEND_BASE_URL";
pub const TIMEOUT_ENV: &str = "TUTOR_BRIDGE_TIMEOUT_MS";

/// Connection settings for [`crate::bridge::EditorBridge`].
///
/// Resolution order:
/// 1. Explicit values (`with_base_url`, `with_timeout`, CLI flags)
/// 2. Environment (`TUTOR_FRONTEND_BASE_URL`, `TUTOR_BRIDGE_TIMEOUT_MS`, `.env`)
/// 3. `~/.tutor-bridge/config.toml`
/// 4. Defaults (`http://localhost:8000`, 2s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    base_url: String,
    timeout: Duration,
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    timeout_ms: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeConfig {
    /// Config with default base URL and timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// Join an API path onto the base URL. One trailing slash on the base is dropped.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim();
        format!(
            "{}/{}",
            base.strip_suffix('/').unwrap_or(base),
            path.trim_start_matches('/')
        )
    }

    /// Load file, then environment, on top of the defaults.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_file(&default_config_path())?.apply_env()
    }

    /// Read `base_url` / `timeout_ms` from a TOML file. A missing file yields defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => return Err(err.into()),
        };
        let file: ConfigFile = toml::from_str(&raw)?;

        let mut config = Self::new();
        if let Some(url) = file.base_url {
            config.base_url = url;
        }
        if let Some(ms) = file.timeout_ms {
            config.timeout = Duration::from_millis(ms);
        }
        config.validate()?;
        Ok(config)
    }

    /// Overlay process environment variables.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay variables from an arbitrary lookup (environment in production).
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(BASE_URL_ENV) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let ms: u64 = raw.trim().parse().map_err(|_| {
                BridgeError::Configuration(format!("{TIMEOUT_ENV} must be milliseconds, got {raw:?}"))
            })?;
            self.timeout = Duration::from_millis(ms);
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings no request could succeed with.
    pub fn validate(&self) -> Result<()> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(BridgeError::Configuration("base URL is empty".into()));
        }
        let url = reqwest::Url::parse(raw).map_err(|e| {
            BridgeError::Configuration(format!("invalid base URL {raw:?}: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BridgeError::Configuration(format!(
                "base URL must use http or https, got {raw:?}"
            )));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(BridgeError::Configuration(format!(
                "base URL has no host: {raw:?}"
            )));
        }
        if self.timeout.is_zero() {
            return Err(BridgeError::Configuration("timeout must be non-zero".into()));
        }
        Ok(())
    }
}

/// `~/.tutor-bridge/config.toml`, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".tutor-bridge"))
        .unwrap_or_else(|| PathBuf::from(".tutor-bridge"))
        .join("config.toml")
}
