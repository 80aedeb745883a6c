// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

pub use k8s_openapi::api::core::v1::{
	Container, ContainerState, ContainerStateTerminated, ContainerStateWaiting, ContainerStatus,
	HostPathVolumeSource, Pod, PodSpec, PodStatus, SecurityContext, Toleration, Volume,
	VolumeMount,
};
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Options for a one-shot container log fetch.
///
/// `tail_lines: None` returns the whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
	pub previous: bool,
	pub tail_lines: Option<i64>,
}
