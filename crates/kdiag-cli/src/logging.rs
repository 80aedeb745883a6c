// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use kdiag_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise kdiag crates log at `level` and everything
/// else at warn.
pub fn default_directives(level: &str) -> String {
	format!("warn,kdiag={level}")
}

/// Logs go to stderr so stdout carries only command output.
pub fn init_tracing(config: &LoggingConfig, level_override: Option<&str>) {
	let level = level_override.unwrap_or(&config.level);
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

	let registry = tracing_subscriber::registry().with(filter);
	let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

	match config.format {
		LogFormat::Pretty => registry.with(layer.pretty()).init(),
		LogFormat::Compact => registry.with(layer.compact()).init(),
		LogFormat::Json => registry.with(layer.json()).init(),
	}
}
