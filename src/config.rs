//! Process configuration, read from environment variables (and `.env`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

pub const ENV_PORT: &str = "PORT";
pub const ENV_NAMESPACE: &str = "NAMESPACE";
pub const ENV_CONFIG_MAP_NAME: &str = "CONFIG_MAP_NAME";
pub const ENV_TEMPLATES_DIR: &str = "GOHOME_TEMPLATES_DIR";
pub const ENV_STATIC_DIR: &str = "GOHOME_STATIC_DIR";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "GOHOME_REQUEST_TIMEOUT_SECS";

/// Homepage server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen port (default: 8080)
    pub port: u16,

    /// Namespace of the bookmark ConfigMap (default: "default")
    pub namespace: String,

    /// Name of the bookmark ConfigMap (default: "gohome-config")
    pub config_map_name: String,

    /// Directory holding `*.html` templates (default: "templates")
    pub templates_dir: PathBuf,

    /// Directory served under `/static/` (default: "static")
    pub static_dir: PathBuf,

    /// Deadline for the cluster calls of a single page request (default: 30s)
    pub request_timeout: Duration,
}

fn default_port() -> u16 {
    8080
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_config_map_name() -> String {
    "gohome-config".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            namespace: default_namespace(),
            config_map_name: default_config_map_name(),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            request_timeout: Duration::from_secs(default_request_timeout_secs()),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            port: parse_or(ENV_PORT, get(ENV_PORT), default_port()),
            namespace: get(ENV_NAMESPACE).unwrap_or(defaults.namespace),
            config_map_name: get(ENV_CONFIG_MAP_NAME).unwrap_or(defaults.config_map_name),
            templates_dir: get(ENV_TEMPLATES_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),
            static_dir: get(ENV_STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            request_timeout: Duration::from_secs(parse_or(
                ENV_REQUEST_TIMEOUT_SECS,
                get(ENV_REQUEST_TIMEOUT_SECS),
                default_request_timeout_secs(),
            )),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
