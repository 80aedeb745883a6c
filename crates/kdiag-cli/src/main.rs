// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! kdiag - privileged diagnostics on Kubernetes nodes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kdiag_config::KdiagConfig;
use kdiag_k8s::KubeClient;
use kdiag_node_debug::{ExecutionRequest, NodeDebugConfig, NodeDebugExecutor};
use kdiag_tools::{NodeDebugTool, ToolContext, ToolRegistry};
use tokio_util::sync::CancellationToken;

mod logging;

#[derive(Parser, Debug)]
#[command(
	name = "kdiag",
	about = "Run one-shot diagnostic commands on cluster nodes",
	version
)]
struct Args {
	/// Path to a TOML config file (default: /etc/kdiag/config.toml)
	#[arg(long, global = true, env = "KDIAG_CONFIG")]
	config: Option<PathBuf>,

	/// Log level for kdiag crates; RUST_LOG takes precedence
	#[arg(long, global = true)]
	log_level: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run a command on a node inside a privileged debug pod
	NodeDebug(NodeDebugArgs),

	/// Print the agent tool definitions as JSON
	Tools,

	/// Invoke an agent tool with JSON arguments
	Call {
		/// Tool name, e.g. node_debug_exec
		tool: String,

		/// Tool arguments as a JSON object
		#[arg(default_value = "{}")]
		args: String,
	},
}

#[derive(clap::Args, Debug)]
struct NodeDebugArgs {
	/// Node to run the command on
	node: String,

	/// Namespace for the debug pod
	#[arg(short, long)]
	namespace: Option<String>,

	/// Container image for the debug pod
	#[arg(long)]
	image: Option<String>,

	/// Seconds to wait for the command to finish
	#[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
	timeout: Option<u64>,

	/// Command and arguments, after `--`
	#[arg(last = true, required = true, num_args = 1..)]
	command: Vec<String>,
}

impl NodeDebugArgs {
	fn into_request(self) -> ExecutionRequest {
		ExecutionRequest {
			node: self.node,
			command: self.command,
			namespace: self.namespace,
			image: self.image,
			timeout: self.timeout.map(Duration::from_secs),
		}
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => kdiag_config::load_config_with_file(path),
		None => kdiag_config::load_config(),
	}
	.context("failed to load configuration")?;

	logging::init_tracing(&config.logging, args.log_level.as_deref());

	let cancel = CancellationToken::new();
	spawn_ctrl_c_handler(cancel.clone());

	match args.command {
		Command::NodeDebug(node_args) => {
			let executor = connect(&config).await?;
			let output = executor
				.execute_with_cancel(node_args.into_request(), cancel)
				.await?;
			println!("{output}");
		}
		Command::Tools => {
			let registry = build_registry(connect(&config).await?);
			let definitions = serde_json::to_string_pretty(&registry.definitions())?;
			println!("{definitions}");
		}
		Command::Call { tool, args } => {
			let args: serde_json::Value =
				serde_json::from_str(&args).context("tool arguments must be valid JSON")?;
			let registry = build_registry(connect(&config).await?);
			let result = registry
				.invoke(&tool, args, &ToolContext::new(cancel))
				.await?;
			println!("{}", serde_json::to_string_pretty(&result)?);
		}
	}

	Ok(())
}

fn spawn_ctrl_c_handler(cancel: CancellationToken) {
	tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			tracing::info!("interrupt received, cancelling");
			cancel.cancel();
		}
	});
}

async fn connect(config: &KdiagConfig) -> anyhow::Result<Arc<NodeDebugExecutor>> {
	let client = KubeClient::new()
		.await
		.context("failed to create Kubernetes client")?;
	let executor_config = executor_config(config, client.default_namespace());
	tracing::debug!(
		namespace = %executor_config.default_namespace,
		image = %executor_config.default_image,
		"connected to cluster"
	);
	Ok(Arc::new(NodeDebugExecutor::new(
		Arc::new(client),
		executor_config,
	)))
}

fn build_registry(executor: Arc<NodeDebugExecutor>) -> ToolRegistry {
	let mut registry = ToolRegistry::new();
	registry.register(Box::new(NodeDebugTool::new(executor)));
	registry
}

/// The configured namespace wins over the client's kubeconfig namespace.
fn executor_config(config: &KdiagConfig, cluster_namespace: &str) -> NodeDebugConfig {
	let node_debug = &config.node_debug;
	NodeDebugConfig {
		default_namespace: node_debug
			.namespace
			.clone()
			.unwrap_or_else(|| cluster_namespace.to_string()),
		default_image: node_debug.image.clone(),
		default_timeout: Duration::from_secs(node_debug.timeout_secs),
		poll_interval: Duration::from_secs(node_debug.poll_interval_secs),
		cleanup_timeout: Duration::from_secs(node_debug.cleanup_timeout_secs),
		log_timeout: Duration::from_secs(node_debug.log_timeout_secs),
	}
}
