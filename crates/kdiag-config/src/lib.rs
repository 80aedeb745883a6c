// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for kdiag.
//!
//! Sources are merged in precedence order:
//! 1. Environment variables (`KDIAG_*`)
//! 2. Config file (`/etc/kdiag/config.toml`, or the path given with `--config`)
//! 3. Built-in defaults
//!
//! # Usage
//!
//! ```ignore
//! use kdiag_config::load_config;
//!
//! let config = load_config()?;
//! println!("debug pods use {}", config.node_debug.image);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::KdiagConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::debug;

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KdiagConfig {
	pub node_debug: NodeDebugConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
pub fn load_config() -> Result<KdiagConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<KdiagConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<KdiagConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = KdiagConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: KdiagConfigLayer) -> Result<KdiagConfig, ConfigError> {
	let node_debug = layer.node_debug.unwrap_or_default().resolve()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	debug!(
		namespace = node_debug.namespace.as_deref().unwrap_or("<cluster default>"),
		image = %node_debug.image,
		timeout_secs = node_debug.timeout_secs,
		log_level = %logging.level,
		log_format = %logging.format,
		"configuration loaded"
	);

	Ok(KdiagConfig {
		node_debug,
		logging,
	})
}
