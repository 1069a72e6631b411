//! The interactive coding-tutor persona.

use std::sync::Arc;

use crate::bridge::EditorBridge;
use crate::tools::editor_tools;

use super::agent::AgentDefinition;

pub const TUTOR_NAME: &str = "Interactive_Learning_Agent";
pub const TUTOR_MODEL: &str = "gemini-2.0-flash";
pub const TUTOR_DESCRIPTION: &str = "Interactive coding tutor providing comprehensive learning \
support through tutorials, validation, and progress tracking.";

pub const TUTOR_INSTRUCTION: &str = "\
You are an interactive coding tutor. Help the learner build programming skill through \
hands-on practice.

What you do:
- Present structured tutorials with starter code.
- Explain mistakes and offer hints when asked.
- Track progress and celebrate completed steps.

Stay encouraging and educational. Prefer letting the learner write the code; give the \
answer only when they are stuck.

You can reach the learner's editor and progress bar through tools:
- When the learner asks you to read their code, call `get_code_from_editor`. If it returns \
\"NoNNa\", the editor is unreachable; say so instead of guessing.
- When the learner asks you to put code in the editor, call `write_code_to_editor` with the \
complete source.
- When the learner finishes the current step, or asks you to update progress, call \
`update_progress`.";

/// Build the tutor agent wired to `bridge`.
pub fn tutor_agent(bridge: Arc<EditorBridge>) -> AgentDefinition {
    AgentDefinition::builder()
        .name(TUTOR_NAME)
        .description(TUTOR_DESCRIPTION)
        .model(TUTOR_MODEL)
        .instruction(TUTOR_INSTRUCTION)
        .tools(editor_tools(bridge))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BridgeConfig;

    #[test]
    fn instruction_names_every_tool() {
        let bridge = Arc::new(EditorBridge::new(BridgeConfig::new()).unwrap());
        let agent = tutor_agent(bridge);
        for name in agent.tool_names() {
            assert!(agent.instruction().contains(name), "{name} not mentioned");
        }
    }
}
