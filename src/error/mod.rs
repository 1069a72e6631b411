//! Error types for the editor bridge.

use thiserror::Error;

/// Primary error type for all bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Failed with status code {status}")]
    Status { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

/// Coarse classification of a [`BridgeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Timeout,
    Status,
    Serialization,
    Configuration,
    Tool,
}

impl BridgeError {
    /// Map a reqwest error, surfacing client timeouts as [`BridgeError::Timeout`].
    pub fn from_request(error: reqwest::Error, timeout_ms: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout(timeout_ms)
        } else {
            Self::Network(error)
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) | Self::Io(_) => ErrorCategory::Transport,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Status { .. } => ErrorCategory::Status,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Configuration(_) | Self::ConfigFile(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) | Self::ToolNotFound(_) => ErrorCategory::Tool,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BridgeError>;
