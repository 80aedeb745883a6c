// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scoped ownership of a created debug pod.

use std::sync::Arc;
use std::time::Duration;

use kdiag_k8s::ClusterPodApi;

/// Deletes the debug pod exactly once when the run ends.
///
/// The normal path calls [`PodCleanupGuard::release`]. If the owning future
/// is dropped first, `Drop` spawns the deletion on the current runtime.
/// Either way the deletion runs under its own timeout, detached from the
/// caller's deadline and cancellation.
pub(crate) struct PodCleanupGuard {
	client: Arc<dyn ClusterPodApi>,
	name: String,
	namespace: String,
	timeout: Duration,
	armed: bool,
}

impl PodCleanupGuard {
	pub(crate) fn new(
		client: Arc<dyn ClusterPodApi>,
		name: String,
		namespace: String,
		timeout: Duration,
	) -> Self {
		Self {
			client,
			name,
			namespace,
			timeout,
			armed: true,
		}
	}

	/// Stays armed until the delete settles, so dropping this future
	/// mid-flight still hands the delete to `Drop`.
	pub(crate) async fn release(mut self) {
		delete_debug_pod(
			self.client.as_ref(),
			&self.name,
			&self.namespace,
			self.timeout,
		)
		.await;
		self.armed = false;
	}
}

impl Drop for PodCleanupGuard {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		self.armed = false;

		let client = Arc::clone(&self.client);
		let name = std::mem::take(&mut self.name);
		let namespace = std::mem::take(&mut self.namespace);
		let timeout = self.timeout;

		match tokio::runtime::Handle::try_current() {
			Ok(handle) => {
				tracing::debug!(pod_name = %name, "Debug run dropped, deleting pod in background");
				handle.spawn(async move {
					delete_debug_pod(client.as_ref(), &name, &namespace, timeout).await;
				});
			}
			Err(_) => {
				tracing::warn!(
					pod_name = %name,
					namespace = %namespace,
					"No runtime available to delete debug pod"
				);
			}
		}
	}
}

async fn delete_debug_pod(
	client: &dyn ClusterPodApi,
	name: &str,
	namespace: &str,
	timeout: Duration,
) {
	match tokio::time::timeout(timeout, client.delete_pod(name, namespace)).await {
		Ok(Ok(())) => {
			tracing::debug!(pod_name = %name, namespace = %namespace, "Deleted debug pod");
		}
		Ok(Err(e)) => {
			tracing::warn!(pod_name = %name, namespace = %namespace, error = %e, "Failed to delete debug pod");
		}
		Err(_) => {
			tracing::warn!(
				pod_name = %name,
				namespace = %namespace,
				timeout_secs = timeout.as_secs(),
				"Timed out deleting debug pod"
			);
		}
	}
}
