//! Convenience re-exports for common use.

pub use crate::agent::{tutor_agent, AgentDefinition};
pub use crate::bridge::{EditorBridge, OperationResult, OperationStatus, FETCH_CODE_SENTINEL};
pub use crate::config::BridgeConfig;
pub use crate::error::{BridgeError, Result};
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolArguments};
