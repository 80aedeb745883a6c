// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kdiag_node_debug::{ExecutionRequest, FailureKind, NodeDebugError, NodeDebugExecutor};
use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::tool::{Tool, ToolContext};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeDebugArgs {
	node: String,
	command: Vec<String>,
	namespace: Option<String>,
	image: Option<String>,
	timeout_seconds: Option<f64>,
}

#[derive(Debug, Serialize)]
struct NodeDebugResult {
	output: String,
}

/// Runs a command on a node through a privileged debug pod.
pub struct NodeDebugTool {
	executor: Arc<NodeDebugExecutor>,
}

impl NodeDebugTool {
	pub fn new(executor: Arc<NodeDebugExecutor>) -> Self {
		Self { executor }
	}

	fn parse_args(args: serde_json::Value) -> Result<ExecutionRequest, ToolError> {
		let args: NodeDebugArgs = serde_json::from_value(args)
			.map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

		let timeout = args.timeout_seconds.map(parse_timeout).transpose()?;

		Ok(ExecutionRequest {
			node: args.node,
			command: args.command,
			namespace: args.namespace,
			image: args.image,
			timeout,
		})
	}
}

/// JSON numbers arrive as `30` or `30.0`; both mean seconds.
fn parse_timeout(secs: f64) -> Result<Duration, ToolError> {
	if !(secs.is_finite() && secs > 0.0) {
		return Err(ToolError::InvalidArguments(format!(
			"timeout_seconds must be a positive number, got {secs}"
		)));
	}
	Duration::try_from_secs_f64(secs).map_err(|e| {
		ToolError::InvalidArguments(format!("timeout_seconds {secs} is out of range: {e}"))
	})
}

impl From<NodeDebugError> for ToolError {
	fn from(err: NodeDebugError) -> Self {
		match err.kind() {
			FailureKind::InvalidInput => ToolError::InvalidArguments(err.to_string()),
			kind => ToolError::Execution {
				kind: kind.as_str().to_string(),
				message: err.to_string(),
			},
		}
	}
}

#[async_trait]
impl Tool for NodeDebugTool {
	fn name(&self) -> &str {
		"node_debug_exec"
	}

	fn description(&self) -> &str {
		"Run a command on a cluster node inside a short-lived privileged pod. \
		 The pod uses the host network, PID and IPC namespaces and mounts the \
		 node's root filesystem at /host, so use `chroot /host` to run host \
		 binaries. Returns the command output; the pod is always deleted afterwards."
	}

	fn input_schema(&self) -> serde_json::Value {
		serde_json::json!({
			"type": "object",
			"properties": {
				"node": {
					"type": "string",
					"description": "Name of the node to run the command on"
				},
				"command": {
					"type": "array",
					"items": { "type": "string" },
					"minItems": 1,
					"description": "Command and arguments to execute, e.g. [\"chroot\", \"/host\", \"uname\", \"-a\"]"
				},
				"namespace": {
					"type": "string",
					"description": "Namespace for the debug pod (default: configured namespace, then \"default\")"
				},
				"image": {
					"type": "string",
					"description": "Container image for the debug pod (default: registry.access.redhat.com/ubi9/toolbox:latest)"
				},
				"timeout_seconds": {
					"type": "number",
					"exclusiveMinimum": 0,
					"description": "Seconds to wait for the command to finish (default: 60)"
				}
			},
			"required": ["node", "command"]
		})
	}

	async fn invoke(
		&self,
		args: serde_json::Value,
		ctx: &ToolContext,
	) -> Result<serde_json::Value, ToolError> {
		let request = Self::parse_args(args)?;
		tracing::debug!(node = %request.node, argc = request.command.len(), "invoking node debug");

		let output = self
			.executor
			.execute_with_cancel(request, ctx.cancel.clone())
			.await?;

		Ok(serde_json::to_value(NodeDebugResult { output })?)
	}
}
