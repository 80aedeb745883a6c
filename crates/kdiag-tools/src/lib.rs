// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tools exposed to the agent.

mod error;
mod node_debug;
mod registry;
mod tool;

pub use error::ToolError;
pub use node_debug::NodeDebugTool;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolContext, ToolDefinition};
