// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Debug pod construction.

use std::collections::BTreeMap;

use kdiag_k8s::{
	Container, HostPathVolumeSource, ObjectMeta, Pod, PodSpec, SecurityContext, Toleration, Volume,
	VolumeMount,
};

pub const CONTAINER_NAME: &str = "debug";
pub const HOST_ROOT_VOLUME: &str = "host-root";
pub const HOST_ROOT_MOUNT_PATH: &str = "/host";
const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";
const MANAGED_BY_VALUE: &str = "kdiag";
const COMPONENT_LABEL: &str = "kdiag.dev/component";
const COMPONENT_VALUE: &str = "node-debug";

/// Everything needed to build one debug pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugPodParams<'a> {
	pub name: &'a str,
	pub namespace: &'a str,
	pub node: &'a str,
	pub image: &'a str,
	pub command: &'a [String],
}

/// Build the privileged, host-mounted pod that runs `command` on `node`.
pub fn build_debug_pod(params: &DebugPodParams<'_>) -> Pod {
	let mut labels = BTreeMap::new();
	labels.insert(MANAGED_BY_LABEL.to_string(), MANAGED_BY_VALUE.to_string());
	labels.insert(COMPONENT_LABEL.to_string(), COMPONENT_VALUE.to_string());

	let security_context = SecurityContext {
		privileged: Some(true),
		run_as_user: Some(0),
		..Default::default()
	};

	let container = Container {
		name: CONTAINER_NAME.to_string(),
		image: Some(params.image.to_string()),
		command: Some(params.command.to_vec()),
		security_context: Some(security_context),
		volume_mounts: Some(vec![VolumeMount {
			name: HOST_ROOT_VOLUME.to_string(),
			mount_path: HOST_ROOT_MOUNT_PATH.to_string(),
			read_only: Some(false),
			..Default::default()
		}]),
		..Default::default()
	};

	Pod {
		metadata: ObjectMeta {
			name: Some(params.name.to_string()),
			namespace: Some(params.namespace.to_string()),
			labels: Some(labels),
			..Default::default()
		},
		spec: Some(PodSpec {
			node_name: Some(params.node.to_string()),
			restart_policy: Some("Never".to_string()),
			host_network: Some(true),
			host_pid: Some(true),
			host_ipc: Some(true),
			containers: vec![container],
			volumes: Some(vec![Volume {
				name: HOST_ROOT_VOLUME.to_string(),
				host_path: Some(HostPathVolumeSource {
					path: "/".to_string(),
					type_: None,
				}),
				..Default::default()
			}]),
			// Operator Exists with no key matches every taint, so cordoned
			// and tainted nodes still accept the pod.
			tolerations: Some(vec![Toleration {
				operator: Some("Exists".to_string()),
				..Default::default()
			}]),
			..Default::default()
		}),
		status: None,
	}
}
