use std::sync::Arc;

use anyhow::{Context, Result};
use kube::{Client, Config};
use tracing::{debug, info, warn};

use crate::core::client::cluster_reader::{ClusterReader, KubeClusterReader};
use crate::errors::AppError;

/// Creates a Kubernetes client from the in-cluster service account, falling
/// back to `KUBECONFIG` / `~/.kube/config` for local development
pub async fn build_kube_client() -> Result<Client> {
    let config = Config::infer()
        .await
        .context("no in-cluster config or kubeconfig available")?;
    debug!("Using Kubernetes API server at {}", config.cluster_url);

    let client = Client::try_from(config).context("failed to create Kubernetes client")?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}

/// Optional connection to the cluster.
///
/// Every call site asks `is_available()` first; an unavailable handle means
/// the process runs in demo mode with built-in data.
#[derive(Clone, Default)]
pub struct ClusterHandle {
    reader: Option<Arc<dyn ClusterReader>>,
}

impl ClusterHandle {
    pub fn connected(reader: Arc<dyn ClusterReader>) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    pub fn unavailable() -> Self {
        Self { reader: None }
    }

    /// Try to reach the cluster; on failure log it and return an unavailable handle
    pub async fn connect() -> Self {
        match build_kube_client().await {
            Ok(client) => {
                info!("Connected to Kubernetes API server");
                Self::connected(Arc::new(KubeClusterReader::new(client)))
            }
            Err(e) => {
                warn!("{}", AppError::ConnectionUnavailable(format!("{:#}", e)));
                warn!("Running in demo mode without Kubernetes integration");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.reader.is_some()
    }

    pub fn reader(&self) -> Option<&dyn ClusterReader> {
        self.reader.as_deref()
    }
}
