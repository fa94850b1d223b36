//! GoHome entry point. Loads configuration, connects to the cluster when one is
//! reachable, compiles the page templates and serves the homepage.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use gohome::api::view::page_renderer::PageRenderer;
use gohome::app_state::build_app_state;
use gohome::config::AppConfig;
use gohome::core::client::kube_client::ClusterHandle;
use gohome::core::logging::init_tracing;
use gohome::routes::app_router;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_TIME: &str = match option_env!("GOHOME_BUILD_TIME") {
    Some(t) => t,
    None => "unknown",
};

const ENV_HELP: &str = "\
Environment Variables:
  PORT                          Server port (default: 8080)
  NAMESPACE                     Kubernetes namespace of the bookmark ConfigMap (default: default)
  CONFIG_MAP_NAME               ConfigMap name for bookmarks (default: gohome-config)
  GOHOME_TEMPLATES_DIR          Directory of *.html templates (default: templates)
  GOHOME_STATIC_DIR             Directory served under /static/ (default: static)
  GOHOME_REQUEST_TIMEOUT_SECS   Cluster deadline per page request (default: 30)
  GOHOME_LOG_DIR                Also write daily log files to this directory
  RUST_LOG                      Log filter (default: info,gohome=debug,kube=warn)";

/// GoHome - Kubernetes Personal Homepage
#[derive(Parser, Debug)]
#[command(name = "gohome", disable_version_flag = true, after_help = ENV_HELP)]
struct Cli {
    /// Show version information
    #[arg(long)]
    version: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    dotenvy::dotenv().ok();
    let _log_guard = init_tracing();

    info!("Starting {}", version_line());
    let config = AppConfig::from_env();

    let renderer = PageRenderer::load(&config.templates_dir)
        .context("failed to load page templates")?;

    let cluster = ClusterHandle::connect().await;
    let state = build_app_state(&config, cluster, renderer);
    let app = app_router(&config.static_dir).with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server starting on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("GoHome stopped");
    Ok(())
}

fn version_line() -> String {
    format!("GoHome {} (built {})", VERSION, BUILD_TIME)
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received CTRL+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
