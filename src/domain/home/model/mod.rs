//! Display models for the homepage. Built per request, never persisted.

use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Go Home";
pub const DEFAULT_CATEGORY: &str = "General";

/// An ingress reduced to what the homepage links to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct IngressRecord {
    pub name: String,
    pub namespace: String,
    pub host: String,
    pub path: String,
    pub url: String,
}

/// One bookmark parsed from a `bookmark-<slug>` ConfigMap entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkRecord {
    pub name: String,
    pub url: String,
    pub category: String,
}

/// Bookmarks plus the page title, as read from the bookmark ConfigMap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub bookmarks: Vec<BookmarkRecord>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            bookmarks: Vec::new(),
        }
    }
}

/// Everything the page template renders
#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub title: String,
    pub bookmarks: Vec<BookmarkRecord>,
    pub ingresses: Vec<IngressRecord>,
    pub demo_mode: bool,
    pub error: Option<String>,
}
