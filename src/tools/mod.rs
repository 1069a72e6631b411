//! Tool system for function calling.

pub mod arguments;
pub mod editor;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use editor::editor_tools;
pub use tool::{AgentTool, Tool, ToolExecutionContext, ToolSpec};
pub use types::AgentToolParameters;
