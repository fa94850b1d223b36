use anyhow::{Context, Result};
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Ingress;

/// Fetch all ingresses in the cluster
pub async fn fetch_ingresses(client: &Client) -> Result<Vec<Ingress>> {
    let ingresses: Api<Ingress> = Api::all(client.clone());
    let ingress_list = ingresses
        .list(&ListParams::default())
        .await
        .context("failed to list ingresses")?;

    debug!("Discovered {} ingress(es)", ingress_list.items.len());
    Ok(ingress_list.items)
}
