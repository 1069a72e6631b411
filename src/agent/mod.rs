//! Agent persona and tool dispatch.

pub mod agent;
pub mod tutor;

pub use agent::AgentDefinition;
pub use tutor::tutor_agent;
