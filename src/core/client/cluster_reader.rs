use anyhow::Result;
use async_trait::async_trait;
use kube::Client;

use crate::core::client::config_maps::fetch_config_map;
use crate::core::client::ingresses::fetch_ingresses;
use crate::core::client::kube_resources::{ConfigMap, Ingress};

/// Read-only view of the cluster used to build the homepage
#[async_trait]
pub trait ClusterReader: Send + Sync {
    /// List ingresses across all namespaces
    async fn list_ingresses(&self) -> Result<Vec<Ingress>>;

    /// Read a ConfigMap, `None` when it does not exist
    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>>;
}

/// `ClusterReader` backed by a live kube-rs client
#[derive(Clone)]
pub struct KubeClusterReader {
    client: Client,
}

impl KubeClusterReader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterReader for KubeClusterReader {
    async fn list_ingresses(&self) -> Result<Vec<Ingress>> {
        fetch_ingresses(&self.client).await
    }

    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>> {
        fetch_config_map(&self.client, namespace, name).await
    }
}
