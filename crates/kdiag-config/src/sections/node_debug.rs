// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Node debug configuration section.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_IMAGE: &str = "registry.access.redhat.com/ubi9/toolbox:latest";

/// Node debug configuration layer (for merging).
///
/// All fields are optional to support layered configuration from
/// multiple sources (defaults, files, environment).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDebugConfigLayer {
	/// Namespace for debug pods when a request names none
	pub namespace: Option<String>,
	pub image: Option<String>,
	pub timeout_secs: Option<u64>,
	pub poll_interval_secs: Option<u64>,
	pub cleanup_timeout_secs: Option<u64>,
	pub log_timeout_secs: Option<u64>,
}

impl NodeDebugConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: NodeDebugConfigLayer) {
		if other.namespace.is_some() {
			self.namespace = other.namespace;
		}
		if other.image.is_some() {
			self.image = other.image;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.poll_interval_secs.is_some() {
			self.poll_interval_secs = other.poll_interval_secs;
		}
		if other.cleanup_timeout_secs.is_some() {
			self.cleanup_timeout_secs = other.cleanup_timeout_secs;
		}
		if other.log_timeout_secs.is_some() {
			self.log_timeout_secs = other.log_timeout_secs;
		}
	}

	/// Resolves this layer into a runtime configuration.
	pub fn resolve(self) -> Result<NodeDebugConfig, ConfigError> {
		let config = NodeDebugConfig {
			namespace: self.namespace.filter(|ns| !ns.trim().is_empty()),
			image: self
				.image
				.filter(|image| !image.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(60),
			poll_interval_secs: self.poll_interval_secs.unwrap_or(2),
			cleanup_timeout_secs: self.cleanup_timeout_secs.unwrap_or(30),
			log_timeout_secs: self.log_timeout_secs.unwrap_or(30),
		};

		for (key, value) in [
			("node_debug.timeout_secs", config.timeout_secs),
			("node_debug.poll_interval_secs", config.poll_interval_secs),
			("node_debug.cleanup_timeout_secs", config.cleanup_timeout_secs),
			("node_debug.log_timeout_secs", config.log_timeout_secs),
		] {
			if value == 0 {
				return Err(ConfigError::Validation(format!(
					"{key} must be greater than 0"
				)));
			}
		}

		Ok(config)
	}
}

/// Node debug configuration (runtime, resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDebugConfig {
	/// `None` leaves the choice to the cluster client's default namespace.
	pub namespace: Option<String>,
	pub image: String,
	pub timeout_secs: u64,
	pub poll_interval_secs: u64,
	pub cleanup_timeout_secs: u64,
	pub log_timeout_secs: u64,
}

impl Default for NodeDebugConfig {
	fn default() -> Self {
		Self {
			namespace: None,
			image: DEFAULT_IMAGE.to_string(),
			timeout_secs: 60,
			poll_interval_secs: 2,
			cleanup_timeout_secs: 30,
			log_timeout_secs: 30,
		}
	}
}
