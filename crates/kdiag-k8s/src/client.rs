// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::K8sError;
use crate::types::{LogOptions, Pod};

/// The pod operations kdiag needs from a cluster.
///
/// Implemented by [`crate::KubeClient`] against a live cluster and by
/// [`crate::MockPodApi`] in tests.
#[async_trait]
pub trait ClusterPodApi: Send + Sync {
	/// Create a new pod in the specified namespace.
	///
	/// Returns the pod as stored by the API server, including its assigned name.
	async fn create_pod(&self, namespace: &str, pod: Pod) -> Result<Pod, K8sError>;

	/// Get a specific pod by name from the specified namespace.
	async fn get_pod(&self, name: &str, namespace: &str) -> Result<Pod, K8sError>;

	/// Delete a pod by name from the specified namespace.
	async fn delete_pod(&self, name: &str, namespace: &str) -> Result<(), K8sError>;

	/// Fetch the logs of one container in a pod as text.
	async fn pod_logs(
		&self,
		name: &str,
		namespace: &str,
		container: &str,
		opts: LogOptions,
	) -> Result<String, K8sError>;
}
