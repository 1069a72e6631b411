//! Editor tools exposed to the tutor agent.
//!
//! One tool per [`EditorBridge`] operation, all sharing a single bridge:
//! `get_code_from_editor`, `write_code_to_editor`, and `update_progress`.
//! Bridge failures are reported inside the tool output, never as `Err`; the
//! only error a tool returns is a malformed argument.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tutor_bridge::bridge::EditorBridge;
//! use tutor_bridge::config::BridgeConfig;
//! use tutor_bridge::tools::editor::editor_tools;
//!
//! # fn example() -> tutor_bridge::error::Result<()> {
//! let bridge = Arc::new(EditorBridge::new(BridgeConfig::new())?);
//! let tools = editor_tools(bridge);
//! assert_eq!(tools.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::Deserialize;

use crate::bridge::EditorBridge;
use crate::error::BridgeError;
use crate::tools::tool::{AgentTool, Tool, ToolExecutionContext};
use crate::tools::types::AgentToolParameters;

pub const GET_CODE_TOOL: &str = "get_code_from_editor";
pub const WRITE_CODE_TOOL: &str = "write_code_to_editor";
pub const UPDATE_PROGRESS_TOOL: &str = "update_progress";

fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, BridgeError> {
    Ok(serde_json::to_value(value)?)
}

/// Create the `get_code_from_editor` tool.
///
/// Returns the editor contents as a JSON string, or `"NoNNa"` when the
/// front-end could not be read.
pub fn get_code_tool(bridge: Arc<EditorBridge>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        GET_CODE_TOOL,
        "Fetch the current code from the learner's editor",
        AgentToolParameters::empty(),
        move |_args, _ctx: ToolExecutionContext| {
            let bridge = Arc::clone(&bridge);
            async move { Ok::<_, BridgeError>(serde_json::Value::String(bridge.fetch_code().await)) }
        },
    ))
}

/// Arguments of `write_code_to_editor`.
#[derive(Debug, Deserialize)]
struct WriteCodeArgs {
    code: String,
}

/// Create the `write_code_to_editor` tool.
pub fn write_code_tool(bridge: Arc<EditorBridge>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        WRITE_CODE_TOOL,
        "Send the given code to the learner's editor, replacing its contents",
        AgentToolParameters::object()
            .string("code", "The full source code to place in the editor", true)
            .build(),
        move |args, _ctx: ToolExecutionContext| {
            let bridge = Arc::clone(&bridge);
            async move {
                let WriteCodeArgs { code } = args.deserialize()?;
                to_value(&bridge.push_code(&code).await)
            }
        },
    ))
}

/// Create the `update_progress` tool.
pub fn update_progress_tool(bridge: Arc<EditorBridge>) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        UPDATE_PROGRESS_TOOL,
        "Mark the learner's current tutorial step as complete",
        AgentToolParameters::empty(),
        move |_args, _ctx: ToolExecutionContext| {
            let bridge = Arc::clone(&bridge);
            async move { to_value(&bridge.mark_step_complete().await) }
        },
    ))
}

/// All editor tools, in the order they are presented to the model.
pub fn editor_tools(bridge: Arc<EditorBridge>) -> Vec<Arc<dyn Tool>> {
    vec![
        get_code_tool(Arc::clone(&bridge)),
        write_code_tool(Arc::clone(&bridge)),
        update_progress_tool(bridge),
    ]
}
