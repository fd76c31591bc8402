//! Content swapper: puts a cached fragment into the live page.

use super::host::Host;
use super::navigator::Navigator;
use contracts::shared::history::HistoryState;
use contracts::shared::page::PageName;

impl<H: Host> Navigator<H> {
    /// Show `page` without reloading the document.
    ///
    /// Falls back to a full navigation when the page is not cached yet (or
    /// never will be). `record_history` must be `false` for swaps driven by
    /// back/forward, otherwise the history stack gets a duplicate entry.
    pub fn swap(&mut self, page: &PageName, record_history: bool) {
        let Some(entry) = self.cache.get(page) else {
            log::debug!("{} not cached, full navigation", page);
            self.host.navigate(page.as_str());
            return;
        };

        if let Err(err) = self.host.replace_content(&entry.content) {
            log::warn!("cannot swap to {}: {}", page, err);
            self.host.navigate(page.as_str());
            return;
        }
        if !entry.title.is_empty() {
            self.host.set_title(&entry.title);
        }

        self.state.current = Some(page.clone());
        self.project_tabs();
        self.host.scroll_to_top();

        if record_history {
            self.host
                .push_history(&HistoryState::new(page.as_str()), page.as_str());
        }
        log::debug!("swapped to {} (history: {})", page, record_history);

        self.reinit(page);
    }

    /// Handle a click on a navigation tab with the given `href`.
    ///
    /// Returns `true` when the click was taken over (the caller must then
    /// prevent the default navigation). Links outside the whitelist are
    /// left to the browser.
    pub fn handle_tab_click(&mut self, href: Option<&str>) -> bool {
        let Some(page) = href.and_then(|href| self.site.resolve(href)) else {
            return false;
        };
        self.swap(&page, true);
        true
    }

    /// Write the active-tab classes from the current page. Only the first
    /// tab pointing at the current page is marked, so at most one tab is
    /// ever active.
    pub(super) fn project_tabs(&mut self) {
        let current = self.state.current.as_ref().map(PageName::as_str);
        let mut marked = false;
        for (idx, href) in self.host.tab_hrefs().into_iter().enumerate() {
            let is_current = !marked
                && current.is_some()
                && href.map(|h| self.site.raw_name(&h)).as_deref() == current;
            marked |= is_current;
            self.host.set_tab_active(idx, is_current);
        }
    }
}
