//! Homepage domain: display models and the services that build them

pub mod model;
pub mod service;
