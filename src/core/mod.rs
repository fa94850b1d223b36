pub mod client;
pub mod logging;
