//! GoHome: a Kubernetes homepage listing cluster ingresses and configured bookmarks

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod routes;
