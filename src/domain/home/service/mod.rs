pub mod bookmark_service;
pub mod demo_data;
pub mod ingress_service;
pub mod page_service;

#[cfg(test)]
pub(crate) mod test_support;
