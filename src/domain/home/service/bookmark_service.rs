use tracing::{info, warn};

use crate::core::client::kube_client::ClusterHandle;
use crate::core::client::kube_resources::ConfigMap;
use crate::domain::home::model::{BookmarkRecord, SiteConfig, DEFAULT_CATEGORY, DEFAULT_TITLE};
use crate::domain::home::service::demo_data::default_bookmarks;
use crate::errors::AppError;

pub const BOOKMARK_KEY_PREFIX: &str = "bookmark-";
pub const TITLE_KEY: &str = "title";

/// Reads bookmarks and the page title from a ConfigMap
#[derive(Debug, Clone)]
pub struct BookmarkLoader {
    namespace: String,
    config_map_name: String,
}

impl BookmarkLoader {
    pub fn new(namespace: impl Into<String>, config_map_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            config_map_name: config_map_name.into(),
        }
    }

    /// Never fails: a missing cluster or an unreadable ConfigMap yields the
    /// default bookmarks and title
    pub async fn load(&self, cluster: &ClusterHandle) -> SiteConfig {
        let Some(reader) = cluster.reader() else {
            info!("Kubernetes client not available, using default bookmarks and title");
            return default_site_config();
        };

        match reader
            .get_config_map(&self.namespace, &self.config_map_name)
            .await
        {
            Ok(Some(config_map)) => parse_site_config(&config_map),
            Ok(None) => {
                let err = AppError::ResourceNotFound(format!(
                    "ConfigMap {}/{}",
                    self.namespace, self.config_map_name
                ));
                warn!("{}, using default bookmarks", err);
                default_site_config()
            }
            Err(e) => {
                warn!(
                    "Could not load bookmarks ConfigMap {}/{}: {:#}",
                    self.namespace, self.config_map_name, e
                );
                default_site_config()
            }
        }
    }
}

pub fn default_site_config() -> SiteConfig {
    let mut bookmarks = default_bookmarks();
    sort_bookmarks(&mut bookmarks);
    SiteConfig {
        title: DEFAULT_TITLE.to_string(),
        bookmarks,
    }
}

/// Orders by category, then name
pub fn sort_bookmarks(bookmarks: &mut [BookmarkRecord]) {
    bookmarks.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Extracts `bookmark-*` entries and the optional `title` key.
///
/// Bookmarks come back sorted by category, then name.
pub fn parse_site_config(config_map: &ConfigMap) -> SiteConfig {
    let Some(data) = config_map.data.as_ref() else {
        return SiteConfig::default();
    };

    let mut bookmarks: Vec<BookmarkRecord> = data
        .iter()
        .filter(|(key, _)| key.starts_with(BOOKMARK_KEY_PREFIX))
        .filter_map(|(key, value)| parse_bookmark_entry(key, value))
        .collect();
    sort_bookmarks(&mut bookmarks);

    let title = data
        .get(TITLE_KEY)
        .filter(|t| !t.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    SiteConfig { title, bookmarks }
}

/// Parses `<url>` or `<url>|<category>`. Entries without a URL are dropped.
pub fn parse_bookmark_entry(key: &str, value: &str) -> Option<BookmarkRecord> {
    let (url, category) = match value.split_once('|') {
        Some((url, category)) => (url.trim(), category.trim()),
        None => (value.trim(), ""),
    };
    if url.is_empty() {
        return None;
    }

    let category = if category.is_empty() {
        DEFAULT_CATEGORY
    } else {
        category
    };

    Some(BookmarkRecord {
        name: bookmark_name_from_key(key),
        url: url.to_string(),
        category: category.to_string(),
    })
}

/// `bookmark-hacker-news` → `Hacker News`
pub fn bookmark_name_from_key(key: &str) -> String {
    let slug = key.strip_prefix(BOOKMARK_KEY_PREFIX).unwrap_or(key);

    let mut name = String::with_capacity(slug.len());
    let mut word_start = true;
    for c in slug.chars() {
        if c == '-' || c == '_' {
            name.push(' ');
            word_start = true;
        } else if word_start {
            name.extend(c.to_uppercase());
            word_start = false;
        } else {
            name.push(c);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::home::service::test_support::{config_map, FakeCluster};

    #[test]
    fn test_parse_entry_with_category() {
        let bookmark = parse_bookmark_entry("bookmark-a", "https://a.com|News").unwrap();
        assert_eq!(bookmark.url, "https://a.com");
        assert_eq!(bookmark.category, "News");
    }

    #[test]
    fn test_parse_entry_defaults_category() {
        let bookmark = parse_bookmark_entry("bookmark-a", "https://a.com").unwrap();
        assert_eq!(bookmark.url, "https://a.com");
        assert_eq!(bookmark.category, "General");

        let blank = parse_bookmark_entry("bookmark-a", " https://a.com |  ").unwrap();
        assert_eq!(blank.url, "https://a.com");
        assert_eq!(blank.category, "General");
    }

    #[test]
    fn test_parse_entry_splits_on_first_pipe() {
        let bookmark = parse_bookmark_entry("bookmark-a", "https://a.com | Media | TV").unwrap();
        assert_eq!(bookmark.url, "https://a.com");
        assert_eq!(bookmark.category, "Media | TV");
    }

    #[test]
    fn test_parse_entry_without_url_is_dropped() {
        assert!(parse_bookmark_entry("bookmark-a", "").is_none());
        assert!(parse_bookmark_entry("bookmark-a", "  |News").is_none());
    }

    #[test]
    fn test_name_from_key() {
        assert_eq!(bookmark_name_from_key("bookmark-hacker-news"), "Hacker News");
        assert_eq!(bookmark_name_from_key("bookmark-home_assistant"), "Home Assistant");
        assert_eq!(bookmark_name_from_key("bookmark-bbc"), "Bbc");
        assert_eq!(bookmark_name_from_key("bookmark-iPlayer"), "IPlayer");
    }

    #[test]
    fn test_parse_site_config_sorts_and_filters() {
        let cm = config_map(&[
            ("title", "My Lab"),
            ("bookmark-zebra", "https://z.com|Animals"),
            ("bookmark-ant", "https://a.com|Animals"),
            ("bookmark-news", "https://n.com"),
            ("bookmark-empty", "|Animals"),
            ("unrelated", "https://ignored.com"),
        ]);

        let site = parse_site_config(&cm);
        assert_eq!(site.title, "My Lab");
        let names: Vec<&str> = site.bookmarks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Ant", "Zebra", "News"]);
        assert_eq!(site.bookmarks[2].category, "General");
    }

    #[test]
    fn test_parse_site_config_empty_title_uses_default() {
        let site = parse_site_config(&config_map(&[("title", "")]));
        assert_eq!(site.title, "Go Home");
        assert!(site.bookmarks.is_empty());
    }

    #[tokio::test]
    async fn test_load_without_cluster_uses_defaults() {
        let loader = BookmarkLoader::new("default", "gohome-config");
        let site = loader.load(&ClusterHandle::unavailable()).await;
        assert_eq!(site, default_site_config());
    }

    #[tokio::test]
    async fn test_load_missing_config_map_uses_defaults() {
        let loader = BookmarkLoader::new("default", "gohome-config");
        let cluster = FakeCluster::default().into_handle();
        let site = loader.load(&cluster).await;
        assert_eq!(site, default_site_config());
    }

    #[test]
    fn test_default_site_config_is_sorted() {
        let site = default_site_config();
        assert_eq!(site.title, "Go Home");
        let keys: Vec<(&str, &str)> = site
            .bookmarks
            .iter()
            .map(|b| (b.category.as_str(), b.name.as_str()))
            .collect();
        assert_eq!(keys, vec![("Games", "Bracket City"), ("News", "Hacker News")]);
    }

    #[tokio::test]
    async fn test_load_unreadable_config_map_uses_defaults() {
        let loader = BookmarkLoader::new("default", "gohome-config");
        let cluster = FakeCluster {
            fail_get: true,
            ..Default::default()
        }
        .into_handle();
        assert_eq!(loader.load(&cluster).await, default_site_config());
    }

    #[tokio::test]
    async fn test_load_reads_config_map() {
        let loader = BookmarkLoader::new("default", "gohome-config");
        let cluster = FakeCluster {
            config_map: Some(config_map(&[
                ("title", "Homelab"),
                ("bookmark-hacker-news", "https://news.ycombinator.com|News"),
            ])),
            ..Default::default()
        }
        .into_handle();

        let site = loader.load(&cluster).await;
        assert_eq!(site.title, "Homelab");
        assert_eq!(
            site.bookmarks,
            vec![BookmarkRecord {
                name: "Hacker News".to_string(),
                url: "https://news.ycombinator.com".to_string(),
                category: "News".to_string(),
            }]
        );
    }
}
