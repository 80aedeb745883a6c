// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Run a single command on a node through a short-lived privileged pod.

use std::sync::Arc;
use std::time::Duration;

use kdiag_k8s::{ClusterPodApi, ContainerState, K8sError, LogOptions, PodStatus};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::cleanup::PodCleanupGuard;
use crate::config::NodeDebugConfig;
use crate::error::NodeDebugError;
use crate::naming::generate_pod_name;
use crate::pod::{build_debug_pod, DebugPodParams, CONTAINER_NAME};
use crate::types::{ExecutionRequest, Observation, TerminatedState};

const PHASE_FAILED: &str = "Failed";
const IMAGE_PULL_FAILURES: [&str; 2] = ["ErrImagePull", "ImagePullBackOff"];

/// Executes diagnostic commands on cluster nodes.
///
/// Each call creates its own uniquely named pod, so one executor can serve
/// concurrent requests.
pub struct NodeDebugExecutor {
	client: Arc<dyn ClusterPodApi>,
	config: NodeDebugConfig,
}

impl NodeDebugExecutor {
	pub fn new(client: Arc<dyn ClusterPodApi>, config: NodeDebugConfig) -> Self {
		Self { client, config }
	}

	pub fn config(&self) -> &NodeDebugConfig {
		&self.config
	}

	/// Run `request` to completion and return the container output.
	pub async fn execute(&self, request: ExecutionRequest) -> Result<String, NodeDebugError> {
		self
			.execute_with_cancel(request, CancellationToken::new())
			.await
	}

	/// Like [`execute`](Self::execute), but polling also stops when `cancel`
	/// fires. The pod is deleted either way.
	#[instrument(skip(self, request, cancel), fields(node = %request.node))]
	pub async fn execute_with_cancel(
		&self,
		request: ExecutionRequest,
		cancel: CancellationToken,
	) -> Result<String, NodeDebugError> {
		if request.node.is_empty() {
			return Err(NodeDebugError::InvalidInput(
				"node name is required".to_string(),
			));
		}
		if request.command.is_empty() {
			return Err(NodeDebugError::InvalidInput("command is required".to_string()));
		}

		let namespace = self.config.resolve_namespace(request.namespace.as_deref());
		let image = self.config.resolve_image(request.image.as_deref());
		let timeout = self.config.resolve_timeout(request.timeout);
		let generated_name = generate_pod_name(&request.node);

		let pod = build_debug_pod(&DebugPodParams {
			name: &generated_name,
			namespace: &namespace,
			node: &request.node,
			image: &image,
			command: &request.command,
		});

		info!(
			pod_name = %generated_name,
			namespace = %namespace,
			image = %image,
			timeout_secs = timeout.as_secs(),
			"Creating debug pod"
		);

		let created = self
			.client
			.create_pod(&namespace, pod)
			.await
			.map_err(NodeDebugError::PodCreation)?;
		let pod_name = created
			.metadata
			.name
			.filter(|name| !name.is_empty())
			.unwrap_or(generated_name);

		let guard = PodCleanupGuard::new(
			Arc::clone(&self.client),
			pod_name.clone(),
			namespace.clone(),
			self.config.cleanup_timeout,
		);
		let result = self
			.run_created_pod(&pod_name, &namespace, timeout, &cancel)
			.await;
		guard.release().await;

		match &result {
			Ok(_) => info!(pod_name = %pod_name, "Debug command succeeded"),
			Err(e) => info!(pod_name = %pod_name, kind = %e.kind(), "Debug command failed"),
		}
		result
	}

	async fn run_created_pod(
		&self,
		pod_name: &str,
		namespace: &str,
		timeout: Duration,
		cancel: &CancellationToken,
	) -> Result<String, NodeDebugError> {
		let observation = self
			.wait_for_completion(pod_name, namespace, timeout, cancel)
			.await?;
		let logs = self.fetch_logs(pod_name, namespace).await?;
		classify(observation, logs)
	}

	async fn wait_for_completion(
		&self,
		pod_name: &str,
		namespace: &str,
		timeout: Duration,
		cancel: &CancellationToken,
	) -> Result<Observation, NodeDebugError> {
		tokio::select! {
			biased;
			_ = cancel.cancelled() => Err(NodeDebugError::Timeout {
				pod: pod_name.to_string(),
				cause: "operation cancelled".to_string(),
			}),
			polled = tokio::time::timeout(timeout, self.poll_until_stopped(pod_name, namespace)) => {
				match polled {
					Ok(result) => result,
					Err(_) => Err(NodeDebugError::Timeout {
						pod: pod_name.to_string(),
						cause: "deadline exceeded".to_string(),
					}),
				}
			}
		}
	}

	async fn poll_until_stopped(
		&self,
		pod_name: &str,
		namespace: &str,
	) -> Result<Observation, NodeDebugError> {
		let mut wait_message = None;

		loop {
			let pod = self
				.client
				.get_pod(pod_name, namespace)
				.await
				.map_err(NodeDebugError::StatusRead)?;
			let status = pod.status.unwrap_or_default();

			debug!(
				pod_name = %pod_name,
				phase = status.phase.as_deref().unwrap_or("Unknown"),
				"Polled debug pod"
			);

			if let Some(state) = debug_container_state(&status) {
				if let Some(waiting) = &state.waiting {
					let reason = waiting.reason.as_deref().unwrap_or_default();
					if IMAGE_PULL_FAILURES.contains(&reason) {
						return Err(NodeDebugError::ImagePull {
							pod: pod_name.to_string(),
							reason: reason.to_string(),
							message: waiting.message.clone(),
						});
					}
					if let Some(message) = describe_wait(reason, waiting.message.as_deref()) {
						wait_message = Some(message);
					}
				}

				if let Some(terminated) = &state.terminated {
					debug!(pod_name = %pod_name, exit_code = terminated.exit_code, "Debug container terminated");
					return Ok(Observation {
						terminated: Some(TerminatedState {
							exit_code: terminated.exit_code,
							reason: terminated.reason.clone(),
							message: terminated.message.clone(),
						}),
						pod_failure: None,
						wait_message,
					});
				}
			}

			if status.phase.as_deref() == Some(PHASE_FAILED) {
				return Ok(Observation {
					terminated: None,
					pod_failure: pod_failure_reason(&status),
					wait_message,
				});
			}

			tokio::time::sleep(self.config.poll_interval).await;
		}
	}

	async fn fetch_logs(&self, pod_name: &str, namespace: &str) -> Result<String, NodeDebugError> {
		let opts = LogOptions {
			previous: false,
			tail_lines: None,
		};
		let logs = tokio::time::timeout(
			self.config.log_timeout,
			self
				.client
				.pod_logs(pod_name, namespace, CONTAINER_NAME, opts),
		)
		.await
		.map_err(|_| NodeDebugError::LogRetrieval(K8sError::Timeout))?
		.map_err(NodeDebugError::LogRetrieval)?;

		Ok(logs.trim().to_string())
	}
}

fn debug_container_state(status: &PodStatus) -> Option<&ContainerState> {
	status
		.container_statuses
		.as_deref()
		.unwrap_or_default()
		.iter()
		.find(|c| c.name == CONTAINER_NAME)
		.and_then(|c| c.state.as_ref())
}

fn describe_wait(reason: &str, message: Option<&str>) -> Option<String> {
	match (reason, message.unwrap_or_default()) {
		("", "") => None,
		(reason, "") => Some(reason.to_string()),
		("", message) => Some(message.to_string()),
		(reason, message) => Some(format!("{reason}: {message}")),
	}
}

fn pod_failure_reason(status: &PodStatus) -> Option<String> {
	[status.reason.as_deref(), status.message.as_deref()]
		.into_iter()
		.flatten()
		.find(|s| !s.is_empty())
		.map(str::to_string)
}

/// Reduce what polling observed plus the captured logs to one outcome.
///
/// Logs only ever reach the caller through one channel: the success value
/// or the error text.
pub(crate) fn classify(observation: Observation, logs: String) -> Result<String, NodeDebugError> {
	match observation {
		Observation {
			terminated: Some(t),
			..
		} if t.exit_code == 0 => Ok(logs),
		Observation {
			terminated: Some(t),
			..
		} => Err(NodeDebugError::NonZeroExit {
			exit_code: t.exit_code,
			reason: t.reason,
			message: t.message,
			output: logs,
		}),
		Observation {
			pod_failure: Some(reason),
			..
		} => Err(NodeDebugError::PodFailed {
			reason,
			output: logs,
		}),
		Observation { wait_message, .. } => Err(NodeDebugError::Incomplete {
			wait_message,
			output: logs,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{
		DEFAULT_CLEANUP_TIMEOUT, DEFAULT_IMAGE, DEFAULT_LOG_TIMEOUT, DEFAULT_POLL_INTERVAL,
	};
	use crate::error::FailureKind;
	use kdiag_k8s::mock::{failed_pod, pending_pod, terminated_pod, waiting_pod};
	use kdiag_k8s::{MockCall, MockPodApi, Pod};
	use tokio::time::Instant;

	fn executor(mock: &Arc<MockPodApi>) -> NodeDebugExecutor {
		NodeDebugExecutor::new(mock.clone(), NodeDebugConfig::default())
	}

	fn uname() -> ExecutionRequest {
		ExecutionRequest::new("worker-0", ["uname", "-a"])
	}

	fn created_pod(mock: &MockPodApi) -> Pod {
		let mut created = mock.created_pods();
		assert_eq!(created.len(), 1);
		created.remove(0)
	}

	mod validation {
		use super::*;

		#[tokio::test]
		async fn empty_node_makes_no_cluster_calls() {
			let mock = Arc::new(MockPodApi::new());
			let err = executor(&mock)
				.execute(ExecutionRequest::new("", ["true"]))
				.await
				.unwrap_err();

			assert_eq!(err.kind(), FailureKind::InvalidInput);
			assert_eq!(err.to_string(), "node name is required");
			assert!(mock.get_calls().is_empty());
		}

		#[tokio::test]
		async fn empty_command_makes_no_cluster_calls() {
			let mock = Arc::new(MockPodApi::new());
			let err = executor(&mock)
				.execute(ExecutionRequest::new("worker-0", Vec::<String>::new()))
				.await
				.unwrap_err();

			assert_eq!(err.kind(), FailureKind::InvalidInput);
			assert_eq!(err.to_string(), "command is required");
			assert!(mock.get_calls().is_empty());
		}
	}

	mod success {
		use super::*;

		#[tokio::test(start_paused = true)]
		async fn worker_zero_scenario_uses_defaults() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, Some("Completed"), None))
					.with_logs("Linux 5.14\n"),
			);

			let output = executor(&mock).execute(uname()).await.unwrap();
			assert_eq!(output, "Linux 5.14");

			let pod = created_pod(&mock);
			assert_eq!(pod.metadata.namespace.as_deref(), Some("default"));
			let name = pod.metadata.name.clone().unwrap();
			assert!(name.starts_with("node-debug-worker-0-"));

			let spec = pod.spec.unwrap();
			let container = &spec.containers[0];
			assert_eq!(container.image.as_deref(), Some(DEFAULT_IMAGE));
			assert_eq!(
				container.command,
				Some(vec!["uname".to_string(), "-a".to_string()])
			);
			let security = container.security_context.as_ref().unwrap();
			assert_eq!(security.privileged, Some(true));
			let mounts = container.volume_mounts.as_ref().unwrap();
			assert_eq!(mounts[0].mount_path, "/host");

			assert_eq!(
				mock.get_calls(),
				vec![
					MockCall::CreatePod {
						namespace: "default".to_string()
					},
					MockCall::GetPod {
						name: name.clone(),
						namespace: "default".to_string()
					},
					MockCall::PodLogs {
						name: name.clone(),
						namespace: "default".to_string(),
						container: CONTAINER_NAME.to_string(),
						opts: LogOptions {
							previous: false,
							tail_lines: None,
						},
					},
					MockCall::DeletePod {
						name,
						namespace: "default".to_string()
					},
				]
			);
		}

		#[tokio::test]
		async fn exit_zero_returns_logs_verbatim() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None))
					.with_logs("ok"),
			);
			assert_eq!(executor(&mock).execute(uname()).await.unwrap(), "ok");
		}

		#[tokio::test]
		async fn exit_zero_with_no_output_is_empty_success() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None))
					.with_logs("  \n"),
			);
			assert_eq!(executor(&mock).execute(uname()).await.unwrap(), "");
		}

		#[tokio::test(start_paused = true)]
		async fn polls_until_container_terminates() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(pending_pod())
					.with_snapshot(waiting_pod(CONTAINER_NAME, "ContainerCreating", None))
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None))
					.with_logs("done"),
			);

			let start = Instant::now();
			let output = executor(&mock).execute(uname()).await.unwrap();

			assert_eq!(output, "done");
			assert_eq!(start.elapsed(), DEFAULT_POLL_INTERVAL * 2);
			let gets = mock
				.get_calls()
				.iter()
				.filter(|c| matches!(c, MockCall::GetPod { .. }))
				.count();
			assert_eq!(gets, 3);
		}

		#[tokio::test]
		async fn overrides_and_server_assigned_name_are_used() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_assigned_name("assigned-by-server")
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None)),
			);
			let request = uname()
				.with_namespace("ops")
				.with_image("busybox:1.36")
				.with_timeout(Duration::from_secs(5));

			executor(&mock).execute(request).await.unwrap();

			let pod = created_pod(&mock);
			assert_eq!(pod.metadata.namespace.as_deref(), Some("ops"));
			assert_eq!(
				pod.spec.unwrap().containers[0].image.as_deref(),
				Some("busybox:1.36")
			);
			assert!(mock.get_calls().contains(&MockCall::DeletePod {
				name: "assigned-by-server".to_string(),
				namespace: "ops".to_string(),
			}));
		}

		#[tokio::test]
		async fn configured_namespace_is_the_fallback() {
			let mock = Arc::new(
				MockPodApi::new().with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None)),
			);
			let config = NodeDebugConfig::default().with_default_namespace("diag");
			NodeDebugExecutor::new(mock.clone(), config)
				.execute(uname())
				.await
				.unwrap();

			assert_eq!(
				created_pod(&mock).metadata.namespace.as_deref(),
				Some("diag")
			);
		}
	}

	mod failures {
		use super::*;

		#[tokio::test]
		async fn non_zero_exit_reports_code_reason_message_and_logs() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 5, Some("Error"), Some("bad")))
					.with_logs("trace"),
			);

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			let text = err.to_string();

			assert_eq!(err.kind(), FailureKind::NonZeroExit);
			for needle in ["5", "Error", "bad", "trace"] {
				assert!(text.contains(needle), "{text:?} missing {needle:?}");
			}
			assert_eq!(mock.count_creates(), 1);
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test(start_paused = true)]
		async fn image_pull_backoff_fails_fast() {
			let mock = Arc::new(MockPodApi::new().with_snapshot(waiting_pod(
				CONTAINER_NAME,
				"ImagePullBackOff",
				Some("Back-off pulling image"),
			)));

			let start = Instant::now();
			let err = executor(&mock).execute(uname()).await.unwrap_err();

			assert_eq!(err.kind(), FailureKind::ImagePull);
			assert!(err.to_string().contains("ImagePullBackOff"));
			assert!(start.elapsed() < DEFAULT_POLL_INTERVAL);
			assert!(!mock
				.get_calls()
				.iter()
				.any(|c| matches!(c, MockCall::PodLogs { .. })));
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test(start_paused = true)]
		async fn err_image_pull_after_pending_fails() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(pending_pod())
					.with_snapshot(waiting_pod(CONTAINER_NAME, "ErrImagePull", None)),
			);

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::ImagePull);
			assert!(err.to_string().contains("ErrImagePull"));
		}

		#[tokio::test(start_paused = true)]
		async fn never_terminating_pod_times_out_after_deadline() {
			let mock = Arc::new(MockPodApi::new().with_snapshot(waiting_pod(
				CONTAINER_NAME,
				"ContainerCreating",
				None,
			)));

			let start = Instant::now();
			let err = executor(&mock)
				.execute(uname().with_timeout(Duration::from_secs(60)))
				.await
				.unwrap_err();
			let elapsed = start.elapsed();

			assert_eq!(err.kind(), FailureKind::Timeout);
			assert!(elapsed >= Duration::from_secs(60), "returned early: {elapsed:?}");
			assert!(
				elapsed < Duration::from_secs(60) + DEFAULT_POLL_INTERVAL,
				"returned late: {elapsed:?}"
			);
			let name = created_pod(&mock).metadata.name.unwrap();
			let text = err.to_string();
			assert!(text.contains(&name));
			assert!(text.contains("deadline exceeded"));
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test(start_paused = true)]
		async fn cancellation_stops_polling_and_still_cleans_up() {
			let mock = Arc::new(MockPodApi::new().with_snapshot(pending_pod()));
			let cancel = CancellationToken::new();

			let trigger = cancel.clone();
			tokio::spawn(async move {
				tokio::time::sleep(Duration::from_secs(5)).await;
				trigger.cancel();
			});

			let start = Instant::now();
			let err = executor(&mock)
				.execute_with_cancel(uname(), cancel)
				.await
				.unwrap_err();

			assert_eq!(err.kind(), FailureKind::Timeout);
			assert!(err.to_string().contains("operation cancelled"));
			assert!(start.elapsed() < Duration::from_secs(6));
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test(start_paused = true)]
		async fn dropped_execution_still_deletes_pod() {
			let mock = Arc::new(MockPodApi::new().with_snapshot(pending_pod()));
			let exec = Arc::new(executor(&mock));

			let task = {
				let exec = Arc::clone(&exec);
				tokio::spawn(async move { exec.execute(uname()).await })
			};
			tokio::time::sleep(Duration::from_secs(3)).await;
			task.abort();
			assert!(task.await.unwrap_err().is_cancelled());

			tokio::time::sleep(Duration::from_millis(10)).await;
			assert_eq!(mock.count_creates(), 1);
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test]
		async fn pod_level_failure_includes_reason_and_logs() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(failed_pod(Some("Evicted")))
					.with_logs("partial output"),
			);

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::PodFailed);
			assert_eq!(
				err.to_string(),
				"debug pod failed: Evicted\nOutput:\npartial output"
			);
		}

		#[tokio::test(start_paused = true)]
		async fn failed_pod_without_reason_reports_wait_message() {
			let mut failed = waiting_pod(CONTAINER_NAME, "CreateContainerError", Some("no such file"));
			if let Some(status) = failed.status.as_mut() {
				status.phase = Some("Failed".to_string());
			}
			let mock = Arc::new(MockPodApi::new().with_snapshot(failed));

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::Incomplete);
			assert_eq!(
				err.to_string(),
				"debug container did not complete: CreateContainerError: no such file"
			);
		}

		#[tokio::test]
		async fn failed_pod_without_any_detail_is_incomplete() {
			let mock = Arc::new(MockPodApi::new().with_snapshot(failed_pod(None)));

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::Incomplete);
			assert!(err.to_string().contains("did not reach a terminal state"));
		}

		#[tokio::test]
		async fn terminated_wins_over_failed_phase_in_same_snapshot() {
			let mut pod = terminated_pod(CONTAINER_NAME, 2, Some("Error"), None);
			if let Some(status) = pod.status.as_mut() {
				status.phase = Some("Failed".to_string());
				status.reason = Some("Evicted".to_string());
			}
			let mock = Arc::new(MockPodApi::new().with_snapshot(pod));

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::NonZeroExit);
		}

		#[tokio::test]
		async fn create_failure_skips_cleanup() {
			let mock = Arc::new(MockPodApi::new().with_create_error(K8sError::ApiError {
				message: "forbidden".to_string(),
			}));

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::PodCreation);
			assert!(err.to_string().contains("forbidden"));
			assert_eq!(mock.count_creates(), 1);
			assert_eq!(mock.count_deletes(), 0);
		}

		#[tokio::test]
		async fn status_read_failure_is_terminal() {
			let mock = Arc::new(MockPodApi::new().with_get_error(K8sError::ApiError {
				message: "connection reset".to_string(),
			}));

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::StatusRead);
			assert!(err
				.to_string()
				.starts_with("failed to get debug pod status: "));
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test]
		async fn log_failure_is_reported_distinctly() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None))
					.with_logs_error(K8sError::LogError {
						message: "stream closed".to_string(),
					}),
			);

			let err = executor(&mock).execute(uname()).await.unwrap_err();
			assert_eq!(err.kind(), FailureKind::LogRetrieval);
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test]
		async fn cleanup_failure_does_not_mask_result() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None))
					.with_logs("ok")
					.with_delete_error(K8sError::Timeout),
			);

			assert_eq!(executor(&mock).execute(uname()).await.unwrap(), "ok");
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test(start_paused = true)]
		async fn hung_log_fetch_times_out_as_log_retrieval() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None))
					.with_hanging_logs(),
			);

			let start = Instant::now();
			let err = executor(&mock).execute(uname()).await.unwrap_err();

			assert_eq!(err.kind(), FailureKind::LogRetrieval);
			assert!(err.to_string().contains("timed out"), "{err}");
			assert_eq!(start.elapsed(), DEFAULT_LOG_TIMEOUT);
			assert_eq!(mock.count_deletes(), 1);
		}

		#[tokio::test(start_paused = true)]
		async fn hung_delete_is_abandoned_after_cleanup_timeout() {
			let mock = Arc::new(
				MockPodApi::new()
					.with_snapshot(terminated_pod(CONTAINER_NAME, 0, None, None))
					.with_logs("ok")
					.with_hanging_delete(),
			);

			let start = Instant::now();
			let output = executor(&mock).execute(uname()).await.unwrap();

			assert_eq!(output, "ok");
			assert_eq!(start.elapsed(), DEFAULT_CLEANUP_TIMEOUT);
			assert_eq!(mock.count_deletes(), 1);
		}
	}

	mod classification {
		use super::*;

		fn terminated(exit_code: i32) -> Option<TerminatedState> {
			Some(TerminatedState {
				exit_code,
				reason: None,
				message: None,
			})
		}

		#[test]
		fn failures_never_return_output() {
			let observation = Observation {
				terminated: terminated(3),
				..Default::default()
			};
			match classify(observation, "logs".to_string()) {
				Err(NodeDebugError::NonZeroExit { output, .. }) => assert_eq!(output, "logs"),
				other => panic!("unexpected outcome: {other:?}"),
			}
		}

		#[test]
		fn terminated_takes_priority() {
			let observation = Observation {
				terminated: terminated(0),
				pod_failure: Some("Evicted".to_string()),
				wait_message: Some("x".to_string()),
			};
			assert_eq!(classify(observation, "out".to_string()).unwrap(), "out");
		}

		#[test]
		fn pod_failure_beats_wait_message() {
			let observation = Observation {
				terminated: None,
				pod_failure: Some("DeadlineExceeded".to_string()),
				wait_message: Some("ContainerCreating".to_string()),
			};
			let err = classify(observation, String::new()).unwrap_err();
			assert_eq!(err.to_string(), "debug pod failed: DeadlineExceeded");
		}

		#[test]
		fn describe_wait_combinations() {
			assert_eq!(describe_wait("", None), None);
			assert_eq!(describe_wait("A", None).as_deref(), Some("A"));
			assert_eq!(describe_wait("", Some("m")).as_deref(), Some("m"));
			assert_eq!(describe_wait("A", Some("m")).as_deref(), Some("A: m"));
		}
	}
}
