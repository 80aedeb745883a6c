// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Node debug error types.

use kdiag_k8s::K8sError;

/// Coarse category of a failed execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
	InvalidInput,
	PodCreation,
	ImagePull,
	StatusRead,
	PodFailed,
	NonZeroExit,
	Timeout,
	Incomplete,
	LogRetrieval,
}

impl FailureKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			FailureKind::InvalidInput => "invalid_input",
			FailureKind::PodCreation => "pod_creation",
			FailureKind::ImagePull => "image_pull",
			FailureKind::StatusRead => "status_read",
			FailureKind::PodFailed => "pod_failed",
			FailureKind::NonZeroExit => "non_zero_exit",
			FailureKind::Timeout => "timeout",
			FailureKind::Incomplete => "incomplete",
			FailureKind::LogRetrieval => "log_retrieval",
		}
	}
}

impl std::fmt::Display for FailureKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors that can occur while running a command on a node.
#[derive(Debug, thiserror::Error)]
pub enum NodeDebugError {
	/// Request rejected before touching the cluster
	#[error("{0}")]
	InvalidInput(String),

	/// The debug pod could not be created
	#[error("failed to create debug pod: {0}")]
	PodCreation(#[source] K8sError),

	/// The debug container image could not be pulled
	#[error("debug pod {pod} failed to pull image ({reason}){}", detail(.message))]
	ImagePull {
		pod: String,
		reason: String,
		message: Option<String>,
	},

	/// Reading the pod status failed while polling
	#[error("failed to get debug pod status: {0}")]
	StatusRead(#[source] K8sError),

	/// The pod failed without a terminated container state
	#[error("debug pod failed: {reason}{}", output_suffix(.output))]
	PodFailed { reason: String, output: String },

	/// The command ran and exited with a non-zero code
	#[error(
		"command exited with code {exit_code}{}{}{}",
		reason_suffix(.reason),
		detail(.message),
		output_suffix(.output)
	)]
	NonZeroExit {
		exit_code: i32,
		reason: Option<String>,
		message: Option<String>,
		output: String,
	},

	/// The deadline elapsed or the caller cancelled before completion
	#[error("timed out waiting for debug pod {pod} to complete: {cause}")]
	Timeout { pod: String, cause: String },

	/// Polling stopped without a usable terminal state
	#[error("{}{}", incomplete_message(.wait_message), output_suffix(.output))]
	Incomplete {
		wait_message: Option<String>,
		output: String,
	},

	/// Logs could not be fetched after the container stopped
	#[error("failed to retrieve debug pod logs: {0}")]
	LogRetrieval(#[source] K8sError),
}

impl NodeDebugError {
	pub fn kind(&self) -> FailureKind {
		match self {
			NodeDebugError::InvalidInput(_) => FailureKind::InvalidInput,
			NodeDebugError::PodCreation(_) => FailureKind::PodCreation,
			NodeDebugError::ImagePull { .. } => FailureKind::ImagePull,
			NodeDebugError::StatusRead(_) => FailureKind::StatusRead,
			NodeDebugError::PodFailed { .. } => FailureKind::PodFailed,
			NodeDebugError::NonZeroExit { .. } => FailureKind::NonZeroExit,
			NodeDebugError::Timeout { .. } => FailureKind::Timeout,
			NodeDebugError::Incomplete { .. } => FailureKind::Incomplete,
			NodeDebugError::LogRetrieval(_) => FailureKind::LogRetrieval,
		}
	}
}

fn detail(message: &Option<String>) -> String {
	match message.as_deref() {
		Some(m) if !m.is_empty() => format!(": {m}"),
		_ => String::new(),
	}
}

fn reason_suffix(reason: &Option<String>) -> String {
	match reason.as_deref() {
		Some(r) if !r.is_empty() => format!(" ({r})"),
		_ => String::new(),
	}
}

fn output_suffix(output: &str) -> String {
	if output.is_empty() {
		String::new()
	} else {
		format!("\nOutput:\n{output}")
	}
}

fn incomplete_message(wait_message: &Option<String>) -> String {
	match wait_message.as_deref() {
		Some(m) if !m.is_empty() => format!("debug container did not complete: {m}"),
		_ => "debug container did not reach a terminal state".to_string(),
	}
}
