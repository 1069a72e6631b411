//! CLI entry point for the editor bridge.

pub mod commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::BridgeConfig;
use crate::error::Result;

/// Drive the tutor front-end's editor and progress endpoints.
#[derive(Parser, Debug)]
#[command(name = "tutor-bridge", version, about = "Tutor editor bridge CLI")]
pub struct Cli {
    /// Front-end base URL (overrides TUTOR_FRONTEND_BASE_URL and config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read or replace the editor contents
    Code(CodeArgs),
    /// Tutorial step progress
    Step(StepArgs),
    /// Show the learner session
    Session,
    /// Print the tutor persona and its tool declarations
    Agent,
    /// Invoke one of the tutor's tools by name
    Tool(ToolArgs),
}

#[derive(Parser, Debug)]
pub struct CodeArgs {
    #[command(subcommand)]
    pub command: CodeCommands,
}

#[derive(Subcommand, Debug)]
pub enum CodeCommands {
    /// Print the current editor code
    Get,
    /// Replace the editor code with FILE (or stdin)
    Push(PushArgs),
}

#[derive(Parser, Debug)]
pub struct PushArgs {
    /// Source file to send; reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct StepArgs {
    #[command(subcommand)]
    pub command: StepCommands,
}

#[derive(Subcommand, Debug)]
pub enum StepCommands {
    /// Mark the current step complete
    Complete,
    /// Show whether the current step is complete
    Status,
}

#[derive(Parser, Debug)]
pub struct ToolArgs {
    /// Tool name (get_code_from_editor, write_code_to_editor, update_progress)
    pub name: String,

    /// Tool arguments as a JSON object
    #[arg(long, default_value = "{}")]
    pub args: String,
}

impl Cli {
    /// Layered config with flag overrides applied last.
    pub fn bridge_config(&self) -> Result<BridgeConfig> {
        let mut config = BridgeConfig::load()?;
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        config.validate()?;
        Ok(config)
    }
}
