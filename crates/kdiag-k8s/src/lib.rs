// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Pod API abstraction for kdiag.
//!
//! This crate provides:
//! - A trait-based pod API abstraction for testability
//! - Production implementation using the kube crate
//! - A scripted mock for driving executors in tests

mod client;
mod error;
mod kube_client;
pub mod mock;
mod types;

pub use client::ClusterPodApi;
pub use error::{K8sError, K8sResult};
pub use kube_client::KubeClient;
pub use mock::{MockCall, MockPodApi};
pub use types::{
	Container, ContainerState, ContainerStateTerminated, ContainerStateWaiting, ContainerStatus,
	HostPathVolumeSource, LogOptions, ObjectMeta, Pod, PodSpec, PodStatus, SecurityContext,
	Toleration, Volume, VolumeMount,
};
