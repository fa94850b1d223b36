//! Built-in data shown when the cluster or the bookmark ConfigMap is unavailable

use crate::domain::home::model::{BookmarkRecord, IngressRecord};

fn demo_ingress(name: &str, namespace: &str, host: &str) -> IngressRecord {
    IngressRecord {
        name: name.to_string(),
        namespace: namespace.to_string(),
        host: host.to_string(),
        path: "/".to_string(),
        url: format!("https://{}/", host),
    }
}

/// Sample ingresses for demo mode, already sorted by name
pub fn demo_ingresses() -> Vec<IngressRecord> {
    vec![
        demo_ingress("grafana", "monitoring", "grafana.example.com"),
        demo_ingress("home-assistant", "home-automation", "hass.example.com"),
        demo_ingress("jellyfin", "media", "media.example.com"),
        demo_ingress("nextcloud", "productivity", "cloud.example.com"),
        demo_ingress("portainer", "management", "portainer.example.com"),
    ]
}

/// Bookmarks used when no bookmark ConfigMap can be read, sorted by category
pub fn default_bookmarks() -> Vec<BookmarkRecord> {
    vec![
        BookmarkRecord {
            name: "Bracket City".to_string(),
            url: "https://www.theatlantic.com/games/bracket-city/".to_string(),
            category: "Games".to_string(),
        },
        BookmarkRecord {
            name: "Hacker News".to_string(),
            url: "https://news.ycombinator.com".to_string(),
            category: "News".to_string(),
        },
    ]
}
