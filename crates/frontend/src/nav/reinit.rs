//! Page-local behavior that has to be re-established whenever the
//! content region is replaced.

use super::host::Host;
use super::navigator::Navigator;
use contracts::shared::page::PageName;

impl<H: Host> Navigator<H> {
    /// Re-initialize the content region for `page`. Safe to call any number
    /// of times for the same markup.
    pub fn reinit(&mut self, page: &PageName) {
        self.host.block_image_drag();
        self.init_year_filter();

        if self.site.is_gallery(page) {
            match self.host.gallery_container_empty() {
                Some(true) => {
                    log::debug!("gallery container empty, rendering");
                    self.host.request_gallery();
                }
                Some(false) => log::debug!("gallery already rendered"),
                None => log::debug!("no gallery container on {}", page),
            }
        }
    }

    /// A year-filter control was activated.
    pub fn select_year(&mut self, year: &str) {
        if !self.has_year_filter() {
            return;
        }
        self.state.active_year = Some(year.to_string());
        self.host.show_year(Some(year));
    }

    fn init_year_filter(&mut self) {
        if !self.has_year_filter() {
            self.state.active_year = None;
            return;
        }
        // The control marked active in the delivered markup wins.
        self.state.active_year = self
            .host
            .year_controls()
            .into_iter()
            .find(|control| control.pre_active)
            .map(|control| control.year);
        self.host.show_year(self.state.active_year.as_deref());
    }

    fn has_year_filter(&self) -> bool {
        !self.host.year_controls().is_empty() && self.host.has_news_lists()
    }
}
