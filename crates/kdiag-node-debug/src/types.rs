// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Node debug request types.

use std::time::Duration;

/// Request to run a command on a cluster node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionRequest {
	/// Target node name (required)
	pub node: String,
	/// Command and arguments, executed without a shell (required)
	pub command: Vec<String>,
	/// Namespace for the debug pod
	pub namespace: Option<String>,
	/// Container image for the debug pod
	pub image: Option<String>,
	/// How long to wait for the command to finish
	pub timeout: Option<Duration>,
}

impl ExecutionRequest {
	pub fn new<I, S>(node: impl Into<String>, command: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			node: node.into(),
			command: command.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}

	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = Some(image.into());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// Final container state captured while polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TerminatedState {
	pub exit_code: i32,
	pub reason: Option<String>,
	pub message: Option<String>,
}

/// What polling learned before it stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Observation {
	pub terminated: Option<TerminatedState>,
	pub pod_failure: Option<String>,
	pub wait_message: Option<String>,
}
