//! Page names and the navigable-page whitelist.
//!
//! A [`PageName`] can only be obtained from a [`SiteMap`], so holding one is
//! proof that the page is whitelisted.

use std::fmt;

/// Reduce a URL or href to its bare file name.
///
/// Fragment, query and directory components are stripped in that order.
/// An empty result normalizes to `default_page`.
///
/// # Example
/// ```rust
/// use contracts::shared::page::page_name_from_url;
/// assert_eq!(
///     page_name_from_url("https://example.org/site/research.html?lang=ko#talks", "index.html"),
///     "research.html"
/// );
/// assert_eq!(page_name_from_url("https://example.org/", "index.html"), "index.html");
/// ```
pub fn page_name_from_url(url: &str, default_page: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();
    let file = without_query.rsplit('/').next().unwrap_or_default();
    if file.is_empty() {
        default_page.to_string()
    } else {
        file.to_string()
    }
}

/// Whitelisted page identifier, e.g. `research.html`.
///
/// Only a [`SiteMap`] hands these out; there is no way to build or
/// deserialize one from an arbitrary string:
///
/// ```compile_fail
/// use contracts::shared::page::PageName;
/// let forged: PageName = serde_json::from_str("\"evil/../x.pdf\"").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageName(String);

impl PageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The fixed set of pages the client is allowed to swap between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMap {
    pages: Vec<PageName>,
    default_page: PageName,
    gallery_page: PageName,
}

impl SiteMap {
    /// Build a site map. Returns `None` when the default or gallery page
    /// is missing from `pages`.
    pub fn new<I, S>(pages: I, default_page: &str, gallery_page: &str) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<PageName> = Vec::new();
        for page in pages {
            let page = PageName(page.into());
            if !unique.contains(&page) {
                unique.push(page);
            }
        }
        let find = |name: &str| unique.iter().find(|p| p.as_str() == name).cloned();
        let default_page = find(default_page)?;
        let gallery_page = find(gallery_page)?;
        Some(Self {
            pages: unique,
            default_page,
            gallery_page,
        })
    }

    /// Pages in whitelist order.
    pub fn pages(&self) -> &[PageName] {
        &self.pages
    }

    pub fn default_page(&self) -> &PageName {
        &self.default_page
    }

    pub fn gallery_page(&self) -> &PageName {
        &self.gallery_page
    }

    pub fn is_gallery(&self, page: &PageName) -> bool {
        page == &self.gallery_page
    }

    /// Raw (possibly non-whitelisted) page name for a URL.
    pub fn raw_name(&self, url: &str) -> String {
        page_name_from_url(url, self.default_page.as_str())
    }

    /// Whitelisted page a URL or href points at, if any.
    pub fn resolve(&self, url: &str) -> Option<PageName> {
        let name = self.raw_name(url);
        self.pages.iter().find(|p| p.as_str() == name).cloned()
    }
}
