use super::cache::{CacheEntry, FragmentCache};
use super::host::Host;
use contracts::shared::page::{PageName, SiteMap};

/// Navigation state that the DOM classes are projected from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    /// Page shown in the content region; `None` on a non-whitelisted page.
    pub current: Option<PageName>,
    /// Selected year filter of the current page.
    pub active_year: Option<String>,
}

/// The single process-wide navigation controller.
///
/// Created once at startup and kept for the whole session. The swap,
/// re-initialization and history operations are implemented in the
/// sibling modules.
pub struct Navigator<H: Host> {
    pub(super) host: H,
    pub(super) site: SiteMap,
    pub(super) cache: FragmentCache,
    pub(super) state: NavState,
}

impl<H: Host> Navigator<H> {
    pub fn new(host: H, site: SiteMap) -> Self {
        let current = site.resolve(&host.current_url());
        Self {
            host,
            site,
            cache: FragmentCache::new(),
            state: NavState {
                current,
                active_year: None,
            },
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn site(&self) -> &SiteMap {
        &self.site
    }

    pub fn cache(&self) -> &FragmentCache {
        &self.cache
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Mark every whitelisted page that was never requested as in flight
    /// and return them. The caller starts one fetch per returned page and
    /// reports back through [`record_preload`](Self::record_preload).
    pub fn begin_preload(&mut self) -> Vec<PageName> {
        let pages: Vec<PageName> = self
            .site
            .pages()
            .iter()
            .filter(|page| self.cache.begin(page))
            .cloned()
            .collect();
        log::debug!("preloading {} page(s)", pages.len());
        pages
    }

    /// Store the result of one preload fetch.
    pub fn record_preload(&mut self, page: &PageName, result: Result<CacheEntry, String>) {
        if let Err(reason) = &result {
            log::warn!("preload of {} failed: {}", page, reason);
        }
        if !self.cache.settle(page, result) {
            log::debug!("ignoring preload result for {}: not in flight", page);
            return;
        }
        if self.cache.in_flight() == 0 {
            log::info!(
                "preload finished: {} cached, {} unavailable",
                self.cache.cached(),
                self.cache.unavailable()
            );
        }
    }

    /// First activation of the page the session started on: project the
    /// active tab and run the page-local behaviors.
    pub fn activate_initial(&mut self) {
        self.project_tabs();
        if let Some(page) = self.state.current.clone() {
            self.reinit(&page);
        }
    }
}
