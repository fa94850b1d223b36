use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;

use crate::core::client::cluster_reader::ClusterReader;
use crate::core::client::kube_client::ClusterHandle;
use crate::core::client::kube_resources::{ConfigMap, Ingress};

/// In-memory cluster for service tests
#[derive(Default)]
pub struct FakeCluster {
    pub ingresses: Vec<Ingress>,
    pub config_map: Option<ConfigMap>,
    pub fail_list: bool,
    pub fail_get: bool,
    pub delay: Option<Duration>,
}

impl FakeCluster {
    pub fn into_handle(self) -> ClusterHandle {
        ClusterHandle::connected(Arc::new(self))
    }

    async fn maybe_delay(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ClusterReader for FakeCluster {
    async fn list_ingresses(&self) -> Result<Vec<Ingress>> {
        self.maybe_delay().await;
        if self.fail_list {
            return Err(anyhow!("failed to list ingresses: connection refused"));
        }
        Ok(self.ingresses.clone())
    }

    async fn get_config_map(&self, _namespace: &str, _name: &str) -> Result<Option<ConfigMap>> {
        self.maybe_delay().await;
        if self.fail_get {
            return Err(anyhow!("failed to read ConfigMap: forbidden"));
        }
        Ok(self.config_map.clone())
    }
}

pub fn ingress(name: &str, host: &str, tls: bool, hidden: bool) -> Ingress {
    let mut value = json!({
        "apiVersion": "networking.k8s.io/v1",
        "kind": "Ingress",
        "metadata": { "name": name, "namespace": "default" },
        "spec": { "rules": [{ "host": host }] }
    });
    if tls {
        value["spec"]["tls"] = json!([{ "hosts": [host] }]);
    }
    if hidden {
        value["metadata"]["annotations"] = json!({ "gohome.stringer.sh/hide": "true" });
    }
    serde_json::from_value(value).unwrap()
}

pub fn config_map(entries: &[(&str, &str)]) -> ConfigMap {
    let data: BTreeMap<String, String> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ConfigMap {
        data: Some(data),
        ..Default::default()
    }
}
