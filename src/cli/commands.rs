//! Command handlers.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::AsyncReadExt;

use super::{Cli, CodeCommands, Commands, StepCommands};
use crate::agent::tutor_agent;
use crate::bridge::{EditorBridge, OperationResult};
use crate::error::{BridgeError, Result};

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let bridge = Arc::new(EditorBridge::new(cli.bridge_config()?)?);

    match cli.command {
        Commands::Code(args) => match args.command {
            CodeCommands::Get => {
                let code = bridge.try_fetch_code().await?;
                print!("{code}");
                Ok(ExitCode::SUCCESS)
            }
            CodeCommands::Push(args) => {
                let code = read_source(args.file.as_deref()).await?;
                report(&bridge.push_code(&code).await)
            }
        },
        Commands::Step(args) => match args.command {
            StepCommands::Complete => report(&bridge.mark_step_complete().await),
            StepCommands::Status => {
                let done = bridge.step_status().await?;
                println!("{}", serde_json::json!({ "success": done }));
                Ok(ExitCode::SUCCESS)
            }
        },
        Commands::Session => {
            let info = bridge.session_info().await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Agent => {
            let agent = tutor_agent(bridge);
            let summary = serde_json::json!({
                "name": agent.name(),
                "description": agent.description(),
                "model": agent.model(),
                "instruction": agent.instruction(),
                "tools": agent.tool_specs(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Tool(args) => {
            let raw: serde_json::Value = serde_json::from_str(&args.args).map_err(|e| {
                BridgeError::InvalidArgument(format!("--args is not valid JSON: {e}"))
            })?;
            let output = tutor_agent(bridge).invoke_tool(&args.name, raw).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print a write result; error-tagged results exit non-zero.
fn report(result: &OperationResult) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut code = String::new();
            tokio::io::stdin().read_to_string(&mut code).await?;
            Ok(code)
        }
    }
}
