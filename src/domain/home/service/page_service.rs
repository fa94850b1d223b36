use std::time::Duration;

use tokio::time::{timeout_at, Instant};
use tracing::warn;

use crate::core::client::kube_client::ClusterHandle;
use crate::domain::home::model::PageViewModel;
use crate::domain::home::service::bookmark_service::{default_site_config, BookmarkLoader};
use crate::domain::home::service::ingress_service::list_visible_ingresses;
use crate::errors::AppError;

pub const INGRESS_ERROR_BANNER: &str = "Could not load services from the cluster";

/// Builds the homepage view model from bookmarks and ingresses
#[derive(Debug, Clone)]
pub struct PageComposer {
    bookmark_loader: BookmarkLoader,
    request_timeout: Duration,
}

impl PageComposer {
    pub fn new(bookmark_loader: BookmarkLoader, request_timeout: Duration) -> Self {
        Self {
            bookmark_loader,
            request_timeout,
        }
    }

    /// Always produces a page. Failures and timeouts of either source are
    /// logged and replaced by defaults (bookmarks) or an empty list plus an
    /// error banner (ingresses).
    pub async fn compose(&self, cluster: &ClusterHandle) -> PageViewModel {
        let deadline = Instant::now() + self.request_timeout;

        let (site, ingresses) = tokio::join!(
            timeout_at(deadline, self.bookmark_loader.load(cluster)),
            timeout_at(deadline, list_visible_ingresses(cluster)),
        );

        let site = site.unwrap_or_else(|_| {
            warn!(
                "Timed out after {:?} loading bookmarks, using defaults",
                self.request_timeout
            );
            default_site_config()
        });

        let (ingresses, error) = match ingresses {
            Ok(Ok(records)) => (records, None),
            Ok(Err(e)) => {
                warn!("{}", AppError::ListFailure(format!("{:#}", e)));
                (Vec::new(), Some(INGRESS_ERROR_BANNER.to_string()))
            }
            Err(_) => {
                warn!(
                    "Timed out after {:?} loading ingresses",
                    self.request_timeout
                );
                (Vec::new(), Some(INGRESS_ERROR_BANNER.to_string()))
            }
        };

        PageViewModel {
            title: site.title,
            bookmarks: site.bookmarks,
            ingresses,
            demo_mode: !cluster.is_available(),
            error,
        }
    }
}
