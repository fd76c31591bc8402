//! Bridge between browser back/forward and the swapper.

use super::host::Host;
use super::navigator::Navigator;
use contracts::shared::history::HistoryState;

impl<H: Host> Navigator<H> {
    /// Tag the entry the session started on, so going back to it later
    /// carries the same state shape as entries pushed by swaps.
    pub fn init_history(&mut self) {
        let page = self.site.raw_name(&self.host.current_url());
        self.host.replace_history(&HistoryState::new(page));
    }

    /// Browser back/forward: show whatever page the restored URL names.
    pub fn on_popstate(&mut self) {
        let url = self.host.current_url();
        match self.site.resolve(&url) {
            Some(page) => self.swap(&page, false),
            None => log::debug!("popstate to {} is not a navigable page", url),
        }
    }
}
