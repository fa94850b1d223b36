//! Logging setup. `GOHOME_LOG_DIR` and `RUST_LOG` are read here, before
//! `AppConfig` is built.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG_DIR: &str = "GOHOME_LOG_DIR";

const DEFAULT_LOG_FILTER: &str = "info,gohome=debug,kube=warn";

/// Initialize tracing: stdout always, plus a daily rolling file when
/// `GOHOME_LOG_DIR` is set.
///
/// The returned guard flushes the file writer and must live until shutdown.
pub fn init_tracing() -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match log_dir_from(env::var_os(ENV_LOG_DIR)) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "gohome.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();

    guard
}

/// Empty values count as unset.
fn log_dir_from(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
