/// Re-export the Kubernetes resource types the homepage reads from k8s-openapi

pub use k8s_openapi::api::core::v1::ConfigMap;

pub use k8s_openapi::api::networking::v1::Ingress;
