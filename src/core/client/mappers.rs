/// Maps kube-rs / k8s-openapi types → homepage display models
use crate::core::client::kube_resources::Ingress;
use crate::domain::home::model::IngressRecord;

/// Annotation that removes an ingress from the homepage when set to `"true"`
pub const HIDE_ANNOTATION: &str = "gohome.stringer.sh/hide";

/// True when the ingress carries `gohome.stringer.sh/hide: "true"`
pub fn is_hidden(ingress: &Ingress) -> bool {
    ingress
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(HIDE_ANNOTATION))
        .is_some_and(|v| v == "true")
}

/// Converts an Ingress into an IngressRecord.
///
/// Only the first rule (and its first HTTP path) is used. Returns `None`
/// when there is no rule or the rule has no host.
pub fn map_ingress_to_record(ingress: &Ingress) -> Option<IngressRecord> {
    let spec = ingress.spec.as_ref()?;
    let rule = spec.rules.as_ref()?.first()?;

    let host = rule.host.clone().unwrap_or_default();
    if host.is_empty() {
        return None;
    }

    let path = rule
        .http
        .as_ref()
        .and_then(|http| http.paths.first())
        .and_then(|p| p.path.clone())
        .unwrap_or_default();

    let tls_covers_host = spec
        .tls
        .iter()
        .flatten()
        .filter_map(|tls| tls.hosts.as_ref())
        .flatten()
        .any(|h| *h == host);
    let protocol = if tls_covers_host { "https" } else { "http" };

    Some(IngressRecord {
        name: ingress.metadata.name.clone().unwrap_or_default(),
        namespace: ingress.metadata.namespace.clone().unwrap_or_default(),
        url: format!("{}://{}{}", protocol, host, path),
        host,
        path,
    })
}
