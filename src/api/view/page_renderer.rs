use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use minijinja::Environment;
use tracing::debug;

use crate::domain::home::model::PageViewModel;
use crate::errors::AppError;

pub const PAGE_TEMPLATE: &str = "index.html";

/// Replacement for links whose scheme is not allowed
pub const UNSAFE_URL: &str = "#ZgotmplZ";

const SAFE_URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Compiled page templates, loaded once at startup and shared by all requests
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Loads every `*.html` file in `dir`. Fails when the directory cannot be
    /// read, a template does not compile, or `index.html` is missing.
    pub fn load(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read templates directory {}", dir.display()))?;

        let mut sources = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            debug!("Loaded template {}", name);
            sources.push((name.to_string(), source));
        }

        Self::from_sources(sources)
    }

    pub fn from_sources(sources: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("safe_url", safe_url);
        for (name, source) in sources {
            env.add_template_owned(name.clone(), source)
                .with_context(|| format!("failed to parse template {}", name))?;
        }

        if env.get_template(PAGE_TEMPLATE).is_err() {
            bail!("template {} not found", PAGE_TEMPLATE);
        }
        Ok(Self { env })
    }

    pub fn render_page(&self, page: &PageViewModel) -> Result<String, AppError> {
        self.env
            .get_template(PAGE_TEMPLATE)
            .and_then(|tmpl| tmpl.render(page))
            .map_err(|e| AppError::RenderFailure(e.to_string()))
    }
}

/// Template filter for `href` values: keeps relative links and
/// http/https/mailto URLs, replaces anything else (`javascript:`, `data:`).
pub fn safe_url(value: String) -> String {
    let trimmed = value.trim();
    let scheme_end = trimmed.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if trimmed[i..].starts_with(':') => {
            let scheme = trimmed[..i].to_ascii_lowercase();
            if SAFE_URL_SCHEMES.contains(&scheme.as_str()) {
                value
            } else {
                UNSAFE_URL.to_string()
            }
        }
        _ => value,
    }
}
