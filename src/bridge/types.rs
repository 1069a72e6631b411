//! Payloads exchanged with the tutorial front-end.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Outcome tag of a write operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationStatus {
    Success,
    Error,
}

/// Result of a write operation, always returned rather than raised.
///
/// Serializes as `{"status": "success" | "error", "message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationResult {
    pub status: OperationStatus,
    pub message: String,
}

impl OperationResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }
}

/// Progress flag reported by `GET /api/validate-step`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepStatus {
    #[serde(default)]
    pub success: bool,
}

/// Learner session reported by `GET /api/session-info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub user_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
}
