// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::KdiagConfigLayer;
use crate::sections::{LogFormat, LoggingConfigLayer, NodeDebugConfigLayer};

pub const SYSTEM_CONFIG_PATH: &str = "/etc/kdiag/config.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<KdiagConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<KdiagConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(KdiagConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file contributes nothing.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<KdiagConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(KdiagConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: KdiagConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: KDIAG_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<KdiagConfigLayer, ConfigError> {
		debug!("loading environment variables");
		layer_from_env(&|name: &str| std::env::var(name).ok())
	}
}

type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

fn layer_from_env(lookup: &Lookup<'_>) -> Result<KdiagConfigLayer, ConfigError> {
	Ok(KdiagConfigLayer {
		node_debug: Some(load_node_debug_from_env(lookup)?),
		logging: Some(load_logging_from_env(lookup)?),
	})
}

fn env_var(lookup: &Lookup<'_>, name: &str) -> Option<String> {
	lookup(name).filter(|s| !s.is_empty())
}

fn env_u64(lookup: &Lookup<'_>, name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(lookup, name) {
		Some(v) => v
			.parse()
			.map(Some)
			.map_err(|_| ConfigError::invalid_value(name, format!("invalid u64 value '{v}'"))),
		None => Ok(None),
	}
}

fn load_node_debug_from_env(lookup: &Lookup<'_>) -> Result<NodeDebugConfigLayer, ConfigError> {
	Ok(NodeDebugConfigLayer {
		namespace: env_var(lookup, "KDIAG_NAMESPACE"),
		image: env_var(lookup, "KDIAG_NODE_DEBUG_IMAGE"),
		timeout_secs: env_u64(lookup, "KDIAG_NODE_DEBUG_TIMEOUT_SECS")?,
		poll_interval_secs: env_u64(lookup, "KDIAG_NODE_DEBUG_POLL_INTERVAL_SECS")?,
		cleanup_timeout_secs: env_u64(lookup, "KDIAG_NODE_DEBUG_CLEANUP_TIMEOUT_SECS")?,
		log_timeout_secs: env_u64(lookup, "KDIAG_NODE_DEBUG_LOG_TIMEOUT_SECS")?,
	})
}

fn load_logging_from_env(lookup: &Lookup<'_>) -> Result<LoggingConfigLayer, ConfigError> {
	let format = env_var(lookup, "KDIAG_LOG_FORMAT")
		.map(|v| v.parse::<LogFormat>())
		.transpose()
		.map_err(|message| ConfigError::invalid_value("KDIAG_LOG_FORMAT", message))?;

	Ok(LoggingConfigLayer {
		level: env_var(lookup, "KDIAG_LOG_LEVEL"),
		format,
	})
}
