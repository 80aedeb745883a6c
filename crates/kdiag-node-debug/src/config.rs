// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Node debug executor configuration.

use std::time::Duration;

pub const DEFAULT_IMAGE: &str = "registry.access.redhat.com/ubi9/toolbox:latest";
pub const FALLBACK_NAMESPACE: &str = "default";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_CLEANUP_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_LOG_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the node debug executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDebugConfig {
	/// Namespace used when a request does not name one. Empty means
	/// fall back to `default`.
	pub default_namespace: String,
	/// Image used when a request does not name one
	pub default_image: String,
	/// Timeout used when a request does not set one
	pub default_timeout: Duration,
	/// Interval between pod status checks
	pub poll_interval: Duration,
	/// Bound on the best-effort pod deletion
	pub cleanup_timeout: Duration,
	/// Bound on fetching the container logs
	pub log_timeout: Duration,
}

impl Default for NodeDebugConfig {
	fn default() -> Self {
		Self {
			default_namespace: String::new(),
			default_image: DEFAULT_IMAGE.to_string(),
			default_timeout: DEFAULT_TIMEOUT,
			poll_interval: DEFAULT_POLL_INTERVAL,
			cleanup_timeout: DEFAULT_CLEANUP_TIMEOUT,
			log_timeout: DEFAULT_LOG_TIMEOUT,
		}
	}
}

impl NodeDebugConfig {
	pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.default_namespace = namespace.into();
		self
	}

	/// Request namespace, else the configured default, else `default`.
	pub fn resolve_namespace(&self, requested: Option<&str>) -> String {
		[requested.unwrap_or_default(), self.default_namespace.as_str()]
			.into_iter()
			.find(|ns| !ns.is_empty())
			.unwrap_or(FALLBACK_NAMESPACE)
			.to_string()
	}

	pub fn resolve_image(&self, requested: Option<&str>) -> String {
		match requested {
			Some(image) if !image.is_empty() => image.to_string(),
			_ if !self.default_image.is_empty() => self.default_image.clone(),
			_ => DEFAULT_IMAGE.to_string(),
		}
	}

	/// A zero timeout counts as unset.
	pub fn resolve_timeout(&self, requested: Option<Duration>) -> Duration {
		match requested {
			Some(t) if !t.is_zero() => t,
			_ => self.default_timeout,
		}
	}
}
