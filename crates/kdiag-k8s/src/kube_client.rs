// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{
	api::{Api, DeleteParams, LogParams, PostParams},
	Client,
};
use tracing::{debug, instrument};

use crate::client::ClusterPodApi;
use crate::error::K8sError;
use crate::types::LogOptions;

/// Production pod API implementation using the kube crate.
#[derive(Clone)]
pub struct KubeClient {
	client: Client,
}

impl KubeClient {
	/// Create a new KubeClient that auto-discovers cluster configuration.
	///
	/// This will attempt to load config from:
	/// 1. In-cluster service account (when running in K8s)
	/// 2. KUBECONFIG environment variable
	/// 3. ~/.kube/config
	pub async fn new() -> Result<Self, K8sError> {
		let client = Client::try_default().await?;
		debug!("K8s client initialized");
		Ok(Self { client })
	}

	/// Wrap an already configured kube client.
	pub fn from_client(client: Client) -> Self {
		Self { client }
	}

	/// The namespace of the loaded kubeconfig context, or `default`.
	pub fn default_namespace(&self) -> &str {
		self.client.default_namespace()
	}

	fn pods(&self, namespace: &str) -> Api<Pod> {
		Api::namespaced(self.client.clone(), namespace)
	}
}

#[async_trait]
impl ClusterPodApi for KubeClient {
	#[instrument(skip(self, pod), fields(namespace = %namespace))]
	async fn create_pod(&self, namespace: &str, pod: Pod) -> Result<Pod, K8sError> {
		let pod = self.pods(namespace).create(&PostParams::default(), &pod).await?;
		Ok(pod)
	}

	async fn get_pod(&self, name: &str, namespace: &str) -> Result<Pod, K8sError> {
		match self.pods(namespace).get(name).await {
			Ok(pod) => Ok(pod),
			Err(kube::Error::Api(err)) if err.code == 404 => {
				Err(K8sError::PodNotFound { name: name.into() })
			}
			Err(e) => Err(e.into()),
		}
	}

	#[instrument(skip(self), fields(namespace = %namespace))]
	async fn delete_pod(&self, name: &str, namespace: &str) -> Result<(), K8sError> {
		match self.pods(namespace).delete(name, &DeleteParams::default()).await {
			Ok(_) => Ok(()),
			Err(kube::Error::Api(err)) if err.code == 404 => {
				Err(K8sError::PodNotFound { name: name.into() })
			}
			Err(e) => Err(e.into()),
		}
	}

	async fn pod_logs(
		&self,
		name: &str,
		namespace: &str,
		container: &str,
		opts: LogOptions,
	) -> Result<String, K8sError> {
		let lp = LogParams {
			container: Some(container.to_string()),
			previous: opts.previous,
			tail_lines: opts.tail_lines,
			..Default::default()
		};

		self
			.pods(namespace)
			.logs(name, &lp)
			.await
			.map_err(|e| match e {
				kube::Error::Api(ref err) if err.code == 404 => K8sError::PodNotFound { name: name.into() },
				_ => K8sError::LogError {
					message: e.to_string(),
				},
			})
	}
}
