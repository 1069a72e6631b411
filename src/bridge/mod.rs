//! HTTP bridge between the tutor agent and the tutorial front-end.
//!
//! Every operation is one request with no retries. The write operations never
//! fail: transport errors and non-200 statuses come back as an error-tagged
//! [`OperationResult`] so the agent always has something to relay.

pub mod types;

pub use types::{OperationResult, OperationStatus, SessionInfo, StepStatus};

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};

pub const EDITOR_CODE_PATH: &str = "/api/editor/code";
pub const VALIDATE_STEP_PATH: &str = "/api/validate-step";
pub const SESSION_INFO_PATH: &str = "/api/session-info";

/// Returned by [`EditorBridge::fetch_code`] when the editor could not be read.
pub const FETCH_CODE_SENTINEL: &str = "NoNNa";

pub const CODE_SAVED_MESSAGE: &str = "Code saved successfully.";
pub const STEP_COMPLETE_MESSAGE: &str = "Step marked complete.";

/// Stateless client for the front-end's editor and progress endpoints.
#[derive(Debug, Clone)]
pub struct EditorBridge {
    config: BridgeConfig,
    client: reqwest::Client,
}

impl EditorBridge {
    /// Build a bridge whose client enforces `config.timeout()` on every request.
    ///
    /// An unset base URL means the default `http://localhost:8000` (see
    /// [`BridgeConfig::new`]); if nothing listens there, every operation
    /// reports the transport failure (sentinel or `"Exception: ..."`). A base
    /// URL that is set but malformed (empty, non-http, no host) is rejected
    /// here with [`BridgeError::Configuration`] instead.
    pub fn new(config: BridgeConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Read the learner's current editor contents.
    ///
    /// A 200 response without a `code` field yields an empty string.
    pub async fn try_fetch_code(&self) -> Result<String> {
        let value: serde_json::Value = self.get_json(EDITOR_CODE_PATH).await?;
        let object = value.as_object().ok_or_else(|| {
            BridgeError::Serialization(<serde_json::Error as serde::de::Error>::custom(
                "editor response is not a JSON object",
            ))
        })?;

        Ok(match object.get("code") {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(code)) => code.clone(),
            Some(other) => other.to_string(),
        })
    }

    /// Like [`try_fetch_code`](Self::try_fetch_code), but any failure becomes
    /// [`FETCH_CODE_SENTINEL`].
    pub async fn fetch_code(&self) -> String {
        match self.try_fetch_code().await {
            Ok(code) => code,
            Err(e) => {
                warn!(error = %e, "failed to get code from frontend");
                FETCH_CODE_SENTINEL.to_string()
            }
        }
    }

    /// Replace the editor contents with `code`.
    pub async fn push_code(&self, code: &str) -> OperationResult {
        let body = serde_json::json!({ "code": code });
        self.post_for_result(EDITOR_CODE_PATH, &body, CODE_SAVED_MESSAGE)
            .await
    }

    /// Tell the front-end the current tutorial step is done.
    pub async fn mark_step_complete(&self) -> OperationResult {
        let body = serde_json::json!({ "success": true });
        self.post_for_result(VALIDATE_STEP_PATH, &body, STEP_COMPLETE_MESSAGE)
            .await
    }

    /// Whether the front-end currently considers the step complete.
    pub async fn step_status(&self) -> Result<bool> {
        let status: StepStatus = self.get_json(VALIDATE_STEP_PATH).await?;
        Ok(status.success)
    }

    pub async fn session_info(&self) -> Result<SessionInfo> {
        self.get_json(SESSION_INFO_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!(method = "GET", url = %url, "editor bridge request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BridgeError::from_request(e, self.config.timeout_ms()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(BridgeError::Status { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BridgeError::from_request(e, self.config.timeout_ms()))?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_for_result(
        &self,
        path: &str,
        body: &serde_json::Value,
        success_message: &str,
    ) -> OperationResult {
        let url = self.config.endpoint(path);
        debug!(method = "POST", url = %url, "editor bridge request");

        let sent = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(body)
            .send()
            .await;

        match sent {
            Ok(response) if response.status().as_u16() == 200 => {
                OperationResult::success(success_message)
            }
            Ok(response) => {
                let status = response.status().as_u16();
                warn!(url = %url, status, "front-end rejected request");
                OperationResult::error(BridgeError::Status { status }.to_string())
            }
            Err(e) => {
                warn!(url = %url, error = %e, "front-end request failed");
                OperationResult::error(format!("Exception: {e}"))
            }
        }
    }
}
