use anyhow::{Context, Result};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::ConfigMap;

/// Fetch a single ConfigMap by namespace and name.
///
/// A missing ConfigMap is `Ok(None)`; any other API failure is an error.
pub async fn fetch_config_map(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<Option<ConfigMap>> {
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), namespace);
    let config_map = config_maps
        .get_opt(name)
        .await
        .with_context(|| format!("failed to read ConfigMap {}/{}", namespace, name))?;

    match &config_map {
        Some(_) => debug!("Fetched ConfigMap: {}/{}", namespace, name),
        None => debug!("ConfigMap {}/{} does not exist", namespace, name),
    }
    Ok(config_map)
}
