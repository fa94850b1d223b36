use anyhow::Result;
use tracing::{debug, info};

use crate::core::client::kube_client::ClusterHandle;
use crate::core::client::kube_resources::Ingress;
use crate::core::client::mappers::{is_hidden, map_ingress_to_record};
use crate::domain::home::model::IngressRecord;
use crate::domain::home::service::demo_data::demo_ingresses;

/// Ingresses to show on the homepage, sorted by name.
///
/// Without a cluster connection this is the built-in demo list. Listing
/// errors are returned to the caller, which decides on a fallback.
pub async fn list_visible_ingresses(cluster: &ClusterHandle) -> Result<Vec<IngressRecord>> {
    let Some(reader) = cluster.reader() else {
        info!("Kubernetes client not available, returning demo ingresses");
        return Ok(demo_ingresses());
    };

    let ingresses = reader.list_ingresses().await?;
    Ok(visible_ingress_records(&ingresses))
}

/// Drops hidden and unroutable ingresses and sorts the rest by name
pub fn visible_ingress_records(ingresses: &[Ingress]) -> Vec<IngressRecord> {
    let mut records: Vec<IngressRecord> = ingresses
        .iter()
        .filter(|ingress| {
            if is_hidden(ingress) {
                info!(
                    "Hiding ingress {}/{} due to annotation",
                    ingress.metadata.namespace.as_deref().unwrap_or_default(),
                    ingress.metadata.name.as_deref().unwrap_or_default()
                );
                return false;
            }
            true
        })
        .filter_map(|ingress| {
            let record = map_ingress_to_record(ingress);
            if record.is_none() {
                debug!(
                    "Skipping ingress {} without a routable host",
                    ingress.metadata.name.as_deref().unwrap_or_default()
                );
            }
            record
        })
        .collect();

    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}
