use std::sync::Arc;

use crate::api::view::page_renderer::PageRenderer;
use crate::config::AppConfig;
use crate::core::client::kube_client::ClusterHandle;
use crate::domain::home::service::bookmark_service::BookmarkLoader;
use crate::domain::home::service::page_service::PageComposer;

/// Shared per-process state. Read-only after startup, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub cluster: ClusterHandle,
    pub page_composer: Arc<PageComposer>,
    pub renderer: Arc<PageRenderer>,
}

pub fn build_app_state(config: &AppConfig, cluster: ClusterHandle, renderer: PageRenderer) -> AppState {
    let bookmark_loader = BookmarkLoader::new(&config.namespace, &config.config_map_name);

    AppState {
        cluster,
        page_composer: Arc::new(PageComposer::new(bookmark_loader, config.request_timeout)),
        renderer: Arc::new(renderer),
    }
}
