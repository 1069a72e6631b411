//! Agent definition: persona, model id, and tool registry.

use std::sync::Arc;

use bon::Builder;
use tracing::debug;

use crate::error::{BridgeError, Result};
use crate::tools::tool::{Tool, ToolExecutionContext, ToolSpec};
use crate::tools::ToolArguments;

/// A named agent persona handed to an external agent framework.
///
/// The framework owns prompting and the tool-calling loop; this type only
/// describes the agent and dispatches tool calls by name.
#[derive(Builder, Clone)]
pub struct AgentDefinition {
    #[builder(into)]
    name: String,
    #[builder(into)]
    description: String,
    #[builder(into)]
    model: String,
    #[builder(into)]
    instruction: String,
    #[builder(default)]
    tools: Vec<Arc<dyn Tool>>,
}

impl AgentDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Tool declarations for the model request.
    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    /// Run the named tool with raw model arguments.
    ///
    /// Required parameters are checked before the tool runs.
    pub async fn invoke_tool(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let tool = self
            .tool(name)
            .ok_or_else(|| BridgeError::ToolNotFound(name.to_string()))?;
        let args = ToolArguments::new(args);

        if let Some(missing) = tool
            .parameters()
            .required()
            .into_iter()
            .find(|key| args.raw().get(*key).is_none())
        {
            return Err(BridgeError::InvalidArgument(format!(
                "{name}: missing required field '{missing}'"
            )));
        }

        debug!(agent = %self.name, tool = name, "invoking tool");
        tool.execute(&args, &ToolExecutionContext::default()).await
    }
}

impl std::fmt::Debug for AgentDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentDefinition")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("tools", &self.tool_names())
            .finish()
    }
}
