//! Kubernetes client abstraction

use crate::error::{PodctlError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::ListParams;
use kube::config::KubeConfigOptions;
use kube::{Api, Client, Config};

/// Get all available context names from kubeconfig
pub fn list_contexts() -> Result<Vec<String>> {
    let kubeconfig = kube::config::Kubeconfig::read()
        .map_err(|e| PodctlError::Config(format!("Failed to read kubeconfig: {e}")))?;

    Ok(kubeconfig.contexts.into_iter().map(|ctx| ctx.name).collect())
}

/// Create a Kubernetes client for the specified context
pub async fn create_client(context: &str) -> Result<Client> {
    let options = KubeConfigOptions {
        context: Some(context.to_string()),
        ..Default::default()
    };

    let config = Config::from_kubeconfig(&options)
        .await
        .map_err(|e| PodctlError::Config(format!("Failed to load kubeconfig: {e}")))?;

    Client::try_from(config).map_err(PodctlError::from)
}

/// Read operations the selection wizard issues against a cluster
#[async_trait]
pub trait ClusterQueries {
    /// Names of all namespaces in the cluster
    async fn list_namespaces(&self) -> Result<Vec<String>>;

    /// Names of pods in a namespace
    async fn list_pods(&self, namespace: &str) -> Result<Vec<String>>;

    /// Container names from a pod's spec
    async fn list_containers(&self, namespace: &str, pod: &str) -> Result<Vec<String>>;
}

/// Live cluster queries over a kube client
pub struct KubeQueries {
    client: Client,
}

impl KubeQueries {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterQueries for KubeQueries {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;

        Ok(list.into_iter().filter_map(|ns| ns.metadata.name).collect())
    }

    async fn list_pods(&self, namespace: &str) -> Result<Vec<String>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&ListParams::default()).await?;

        Ok(list.into_iter().filter_map(|pod| pod.metadata.name).collect())
    }

    async fn list_containers(&self, namespace: &str, pod: &str) -> Result<Vec<String>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let pod = api.get(pod).await?;

        Ok(pod
            .spec
            .map(|spec| spec.containers.into_iter().map(|c| c.name).collect())
            .unwrap_or_default())
    }
}
