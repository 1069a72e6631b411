//! tutor-bridge: coding-tutor agent tools for a tutorial front-end.
//!
//! Provides the [`bridge::EditorBridge`] that reads and writes the learner's
//! editor and marks tutorial steps complete over HTTP, the tools that expose
//! those operations to an agent's tool-calling loop, and the tutor persona
//! that bundles them.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tutor_bridge::prelude::*;
//!
//! # async fn example() -> tutor_bridge::error::Result<()> {
//! let bridge = Arc::new(EditorBridge::new(BridgeConfig::load()?)?);
//! let agent = tutor_agent(Arc::clone(&bridge));
//!
//! let result = agent
//!     .invoke_tool("write_code_to_editor", serde_json::json!({"code": "print('hi')"}))
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod bridge;
pub mod config;
pub mod error;
pub mod prelude;
pub mod tools;

#[cfg(feature = "cli")]
pub mod cli;
