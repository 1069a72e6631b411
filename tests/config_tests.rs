//! Tests for environment-driven configuration.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use tutor_bridge::config::{BridgeConfig, BASE_URL_ENV, TIMEOUT_ENV};
use tutor_bridge::error::BridgeError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 2] = [BASE_URL_ENV, TIMEOUT_ENV];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn apply_env_without_variables_keeps_defaults() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let config = BridgeConfig::new().apply_env().unwrap();
    assert_eq!(config.base_url(), "http://localhost:8000");
    assert_eq!(config.timeout(), Duration::from_secs(2));
}

#[test]
fn apply_env_reads_base_url_and_timeout() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:9100");
    std::env::set_var(TIMEOUT_ENV, "750");

    let config = BridgeConfig::new().apply_env().unwrap();
    assert_eq!(config.base_url(), "http://127.0.0.1:9100");
    assert_eq!(config.timeout_ms(), 750);
    assert_eq!(
        config.endpoint("/api/validate-step"),
        "http://127.0.0.1:9100/api/validate-step"
    );
}

#[test]
fn apply_env_rejects_zero_timeout() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    std::env::remove_var(BASE_URL_ENV);
    std::env::set_var(TIMEOUT_ENV, "0");

    let err = BridgeConfig::new().apply_env().unwrap_err();
    assert!(matches!(err, BridgeError::Configuration(_)));
}

#[test]
fn explicit_values_win_over_environment() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    std::env::set_var(BASE_URL_ENV, "http://env-host:8000");
    std::env::remove_var(TIMEOUT_ENV);

    let config = BridgeConfig::new()
        .apply_env()
        .unwrap()
        .with_base_url("http://flag-host:8000");
    assert_eq!(config.base_url(), "http://flag-host:8000");
}
