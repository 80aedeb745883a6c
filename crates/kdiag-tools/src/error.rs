// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors that can occur during tool execution.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ToolError {
	#[error("Tool not found: {0}")]
	NotFound(String),

	#[error("Invalid arguments: {0}")]
	InvalidArguments(String),

	#[error("{message}")]
	Execution { kind: String, message: String },

	#[error("Serialization error: {0}")]
	Serialization(String),
}

impl From<serde_json::Error> for ToolError {
	fn from(err: serde_json::Error) -> Self {
		ToolError::Serialization(err.to_string())
	}
}
