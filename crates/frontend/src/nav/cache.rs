//! In-memory fragment cache.
//!
//! Every whitelisted page moves through
//! `uncached -> in flight -> cached | unavailable` at most once per session.
//! Both end states are terminal: a cached entry is never refreshed and a
//! failed page is never fetched again.

use contracts::shared::page::PageName;
use std::collections::HashMap;

/// Content-region markup and title extracted from a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub content: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    InFlight,
    Cached(CacheEntry),
    /// Fetch or extraction failed; the reason is kept for logging and tests.
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct FragmentCache {
    pages: HashMap<PageName, PageStatus>,
}

impl FragmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `page` as being fetched. Returns `false` if the page already
    /// left the uncached state, in which case no fetch must be started.
    pub fn begin(&mut self, page: &PageName) -> bool {
        if self.pages.contains_key(page) {
            return false;
        }
        self.pages.insert(page.clone(), PageStatus::InFlight);
        true
    }

    /// Record the outcome of a fetch started with [`begin`](Self::begin).
    /// Results for pages that are not in flight are ignored.
    pub fn settle(&mut self, page: &PageName, result: Result<CacheEntry, String>) -> bool {
        match self.pages.get_mut(page) {
            Some(status) if matches!(status, PageStatus::InFlight) => {
                *status = match result {
                    Ok(entry) => PageStatus::Cached(entry),
                    Err(reason) => PageStatus::Unavailable(reason),
                };
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, page: &PageName) -> Option<&CacheEntry> {
        match self.pages.get(page) {
            Some(PageStatus::Cached(entry)) => Some(entry),
            _ => None,
        }
    }

    /// `None` means the page was never requested.
    pub fn status(&self, page: &PageName) -> Option<&PageStatus> {
        self.pages.get(page)
    }

    pub fn in_flight(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::InFlight))
    }

    pub fn cached(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Cached(_)))
    }

    pub fn unavailable(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Unavailable(_)))
    }

    fn count(&self, pred: impl Fn(&PageStatus) -> bool) -> usize {
        self.pages.values().filter(|s| pred(s)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page::SiteMap;

    fn pages() -> (PageName, PageName) {
        let site = SiteMap::new(["index.html", "gallery.html"], "index.html", "gallery.html").unwrap();
        (
            site.resolve("index.html").unwrap(),
            site.resolve("gallery.html").unwrap(),
        )
    }

    fn entry(content: &str) -> CacheEntry {
        CacheEntry {
            content: content.into(),
            title: "Title".into(),
        }
    }

    #[test]
    fn test_begin_only_once() {
        let (index, _) = pages();
        let mut cache = FragmentCache::new();
        assert!(cache.status(&index).is_none());
        assert!(cache.begin(&index));
        assert!(!cache.begin(&index));
        assert_eq!(cache.status(&index), Some(&PageStatus::InFlight));
        assert!(cache.get(&index).is_none());
    }

    #[test]
    fn test_cached_entry_is_never_replaced() {
        let (index, _) = pages();
        let mut cache = FragmentCache::new();
        cache.begin(&index);
        assert!(cache.settle(&index, Ok(entry("<p>first</p>"))));
        assert!(!cache.settle(&index, Ok(entry("<p>second</p>"))));
        assert!(!cache.begin(&index));
        assert_eq!(cache.get(&index).unwrap().content, "<p>first</p>");
    }

    #[test]
    fn test_failure_is_terminal() {
        let (index, gallery) = pages();
        let mut cache = FragmentCache::new();
        cache.begin(&index);
        cache.begin(&gallery);
        cache.settle(&gallery, Err("HTTP error: 404".into()));
        cache.settle(&index, Ok(entry("<p>home</p>")));
        assert!(cache.get(&gallery).is_none());
        assert!(!cache.begin(&gallery));
        assert_eq!(
            cache.status(&gallery),
            Some(&PageStatus::Unavailable("HTTP error: 404".into()))
        );
        assert_eq!((cache.cached(), cache.unavailable(), cache.in_flight()), (1, 1, 0));
    }

    #[test]
    fn test_settle_without_begin_is_ignored() {
        let (index, _) = pages();
        let mut cache = FragmentCache::new();
        assert!(!cache.settle(&index, Ok(entry("x"))));
        assert!(cache.status(&index).is_none());
    }
}
