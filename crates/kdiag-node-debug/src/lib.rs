// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-shot privileged diagnostics on cluster nodes.
//!
//! A request to run a command on a node becomes a short-lived pod that is
//! bound to that node, shares its network, PID and IPC namespaces, and has
//! the host root mounted at `/host`. The executor:
//!
//! - creates the pod
//! - polls it until the container terminates, the pod fails, or the
//!   deadline passes (image pull failures abort immediately)
//! - fetches the container logs
//! - classifies the outcome
//! - deletes the pod on every exit path

mod cleanup;
pub mod config;
pub mod error;
pub mod executor;
pub mod naming;
pub mod pod;
pub mod types;

pub use config::NodeDebugConfig;
pub use error::{FailureKind, NodeDebugError};
pub use executor::NodeDebugExecutor;
pub use naming::{generate_pod_name, sanitize_node_name};
pub use types::ExecutionRequest;
