//! Site configuration: which pages are navigable and where things live in
//! the markup.
//!
//! Every field has a default, so an override only needs the keys it
//! changes.

use crate::shared::page::SiteMap;
use anyhow::{bail, ensure};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub pages: Vec<String>,
    pub default_page: String,
    pub gallery_page: String,
    pub selectors: SelectorConfig,
    pub gallery: GalleryConfig,
}

/// CSS selectors, element ids and state classes the client relies on.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
    pub content: String,
    pub tab: String,
    pub scroll_container: String,
    pub year_button: String,
    /// Year lists have ids of the form `{news_list_prefix}{year}`.
    pub news_list_prefix: String,
    pub gallery_grid_id: String,
    pub active_class: String,
    pub hidden_class: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    pub manifest: String,
    /// Name of the `window` property holding the static fallback items.
    pub fallback_global: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pages: [
                "index.html",
                "education.html",
                "research.html",
                "others.html",
                "gallery.html",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            default_page: "index.html".into(),
            gallery_page: "gallery.html".into(),
            selectors: SelectorConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            content: ".page-content".into(),
            tab: ".notebook-tab".into(),
            scroll_container: ".notebook-page".into(),
            year_button: ".year-btn".into(),
            news_list_prefix: "news-".into(),
            gallery_grid_id: "gallery-grid".into(),
            active_class: "active".into(),
            hidden_class: "hidden".into(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest: "gallery_thumbnail.json".into(),
            fallback_global: "galleryItems".into(),
        }
    }
}

impl SiteConfig {
    /// Check the whitelist and build the [`SiteMap`] from it.
    pub fn site_map(&self) -> anyhow::Result<SiteMap> {
        ensure!(!self.pages.is_empty(), "page whitelist is empty");
        for (idx, page) in self.pages.iter().enumerate() {
            ensure!(!page.is_empty(), "page #{} has an empty name", idx);
            ensure!(
                !page.contains(['/', '?', '#']),
                "page '{}' must be a bare file name",
                page
            );
            ensure!(
                !self.pages[..idx].contains(page),
                "page '{}' is listed twice",
                page
            );
        }
        match SiteMap::new(self.pages.iter().cloned(), &self.default_page, &self.gallery_page) {
            Some(site) => Ok(site),
            None => bail!(
                "default page '{}' and gallery page '{}' must both be whitelisted",
                self.default_page,
                self.gallery_page
            ),
        }
    }
}

/// Load the configuration.
///
/// Parses `override_toml` when given (typically the text of an inline config
/// element); keys it leaves out keep their [`Default`] values. Without an
/// override the defaults are used as is. The result is validated before it
/// is returned.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<SiteConfig> {
    let config = match override_toml {
        Some(source) => toml::from_str(source)?,
        None => SiteConfig::default(),
    };
    config.site_map()?;
    Ok(config)
}
