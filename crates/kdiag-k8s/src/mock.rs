// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Scripted in-memory pod API for tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::client::ClusterPodApi;
use crate::error::K8sError;
use crate::types::{
	ContainerState, ContainerStateTerminated, ContainerStateWaiting, ContainerStatus, LogOptions,
	ObjectMeta, Pod, PodStatus,
};

/// Recorded call to the mock pod API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
	CreatePod { namespace: String },
	GetPod { name: String, namespace: String },
	DeletePod { name: String, namespace: String },
	PodLogs {
		name: String,
		namespace: String,
		container: String,
		opts: LogOptions,
	},
}

/// Mock pod API for testing.
///
/// `get_pod` walks through the scripted snapshots in order and keeps
/// returning the last one once the script is exhausted.
#[derive(Clone, Default)]
pub struct MockPodApi {
	/// If set, create_pod returns this error.
	pub create_error: Option<K8sError>,
	/// Name to assign on create; otherwise the submitted name is echoed.
	pub assigned_name: Option<String>,
	/// Responses for get_pod, in order.
	pub snapshots: Vec<Result<Pod, K8sError>>,
	/// Logs to return from pod_logs.
	pub logs: String,
	/// If set, pod_logs returns this error.
	pub logs_error: Option<K8sError>,
	/// If set, delete_pod returns this error.
	pub delete_error: Option<K8sError>,
	/// If set, pod_logs never completes.
	pub hang_logs: bool,
	/// If set, delete_pod never completes.
	pub hang_delete: bool,
	cursor: Arc<Mutex<usize>>,
	created: Arc<Mutex<Vec<Pod>>>,
	calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockPodApi {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_snapshot(mut self, pod: Pod) -> Self {
		self.snapshots.push(Ok(pod));
		self
	}

	pub fn with_get_error(mut self, error: K8sError) -> Self {
		self.snapshots.push(Err(error));
		self
	}

	pub fn with_logs(mut self, logs: impl Into<String>) -> Self {
		self.logs = logs.into();
		self
	}

	pub fn with_logs_error(mut self, error: K8sError) -> Self {
		self.logs_error = Some(error);
		self
	}

	pub fn with_create_error(mut self, error: K8sError) -> Self {
		self.create_error = Some(error);
		self
	}

	pub fn with_delete_error(mut self, error: K8sError) -> Self {
		self.delete_error = Some(error);
		self
	}

	pub fn with_hanging_logs(mut self) -> Self {
		self.hang_logs = true;
		self
	}

	pub fn with_hanging_delete(mut self) -> Self {
		self.hang_delete = true;
		self
	}

	pub fn with_assigned_name(mut self, name: impl Into<String>) -> Self {
		self.assigned_name = Some(name.into());
		self
	}

	/// Returns the recorded calls.
	pub fn get_calls(&self) -> Vec<MockCall> {
		lock(&self.calls).clone()
	}

	/// Returns every pod passed to create_pod.
	pub fn created_pods(&self) -> Vec<Pod> {
		lock(&self.created).clone()
	}

	pub fn count_creates(&self) -> usize {
		self
			.get_calls()
			.iter()
			.filter(|c| matches!(c, MockCall::CreatePod { .. }))
			.count()
	}

	pub fn count_deletes(&self) -> usize {
		self
			.get_calls()
			.iter()
			.filter(|c| matches!(c, MockCall::DeletePod { .. }))
			.count()
	}

	fn record(&self, call: MockCall) {
		lock(&self.calls).push(call);
	}
}

#[async_trait]
impl ClusterPodApi for MockPodApi {
	async fn create_pod(&self, namespace: &str, mut pod: Pod) -> Result<Pod, K8sError> {
		self.record(MockCall::CreatePod {
			namespace: namespace.to_string(),
		});
		if let Some(err) = &self.create_error {
			return Err(err.clone());
		}
		lock(&self.created).push(pod.clone());
		if let Some(name) = &self.assigned_name {
			pod.metadata.name = Some(name.clone());
		}
		pod.metadata.namespace = Some(namespace.to_string());
		Ok(pod)
	}

	async fn get_pod(&self, name: &str, namespace: &str) -> Result<Pod, K8sError> {
		self.record(MockCall::GetPod {
			name: name.to_string(),
			namespace: namespace.to_string(),
		});
		if self.snapshots.is_empty() {
			return Err(K8sError::PodNotFound { name: name.into() });
		}
		let mut cursor = lock(&self.cursor);
		let idx = (*cursor).min(self.snapshots.len() - 1);
		*cursor += 1;
		self.snapshots[idx].clone()
	}

	async fn delete_pod(&self, name: &str, namespace: &str) -> Result<(), K8sError> {
		self.record(MockCall::DeletePod {
			name: name.to_string(),
			namespace: namespace.to_string(),
		});
		if self.hang_delete {
			std::future::pending::<()>().await;
		}
		match &self.delete_error {
			Some(err) => Err(err.clone()),
			None => Ok(()),
		}
	}

	async fn pod_logs(
		&self,
		name: &str,
		namespace: &str,
		container: &str,
		opts: LogOptions,
	) -> Result<String, K8sError> {
		self.record(MockCall::PodLogs {
			name: name.to_string(),
			namespace: namespace.to_string(),
			container: container.to_string(),
			opts,
		});
		if self.hang_logs {
			std::future::pending::<()>().await;
		}
		match &self.logs_error {
			Some(err) => Err(err.clone()),
			None => Ok(self.logs.clone()),
		}
	}
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn pod_with(phase: &str, reason: Option<&str>, statuses: Vec<ContainerStatus>) -> Pod {
	Pod {
		metadata: ObjectMeta::default(),
		spec: None,
		status: Some(PodStatus {
			phase: Some(phase.to_string()),
			reason: reason.map(str::to_string),
			container_statuses: if statuses.is_empty() {
				None
			} else {
				Some(statuses)
			},
			..Default::default()
		}),
	}
}

fn status_with(container: &str, state: ContainerState) -> ContainerStatus {
	ContainerStatus {
		name: container.to_string(),
		state: Some(state),
		..Default::default()
	}
}

/// Pod snapshot in `Pending` with no container statuses yet.
pub fn pending_pod() -> Pod {
	pod_with("Pending", None, Vec::new())
}

/// Pod snapshot whose container is waiting with the given reason.
pub fn waiting_pod(container: &str, reason: &str, message: Option<&str>) -> Pod {
	let state = ContainerState {
		waiting: Some(ContainerStateWaiting {
			reason: Some(reason.to_string()),
			message: message.map(str::to_string),
		}),
		..Default::default()
	};
	pod_with("Pending", None, vec![status_with(container, state)])
}

/// Pod snapshot whose container has terminated.
pub fn terminated_pod(
	container: &str,
	exit_code: i32,
	reason: Option<&str>,
	message: Option<&str>,
) -> Pod {
	let state = ContainerState {
		terminated: Some(ContainerStateTerminated {
			exit_code,
			reason: reason.map(str::to_string),
			message: message.map(str::to_string),
			..Default::default()
		}),
		..Default::default()
	};
	let phase = if exit_code == 0 { "Succeeded" } else { "Failed" };
	pod_with(phase, None, vec![status_with(container, state)])
}

/// Pod snapshot in phase `Failed` without any container state.
pub fn failed_pod(reason: Option<&str>) -> Pod {
	pod_with("Failed", reason, Vec::new())
}
