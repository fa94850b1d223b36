// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod cluster_reader;
pub mod ingresses;
pub mod config_maps;
pub mod mappers;
