//! Seams between the navigation logic and the browser.
//!
//! [`Host`] is everything the controller needs from the window and the
//! document. The web implementation lives in `crate::web::dom`; tests use
//! `crate::nav::testing::FakeHost`.

use contracts::shared::gallery::GalleryItem;
use contracts::shared::history::HistoryState;

/// A year-filter control as found in the current markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearControl {
    pub year: String,
    /// Carries the active class in the markup as delivered.
    pub pre_active: bool,
}

pub trait Host {
    /// Location of the current document.
    fn current_url(&self) -> String;

    /// Full-document navigation, like following a plain link.
    fn navigate(&mut self, url: &str);

    /// Replace the inner markup of the content region.
    ///
    /// Returns `Err` when the live document has no content region.
    fn replace_content(&mut self, html: &str) -> Result<(), String>;

    fn set_title(&mut self, title: &str);

    /// `href` attribute of every navigation tab, in document order.
    fn tab_hrefs(&self) -> Vec<Option<String>>;

    fn set_tab_active(&mut self, index: usize, active: bool);

    /// Scroll the window and the inner scroll container back to the top.
    fn scroll_to_top(&mut self);

    fn push_history(&mut self, state: &HistoryState, url: &str);

    fn replace_history(&mut self, state: &HistoryState);

    /// Make every image in the content region non-draggable.
    fn block_image_drag(&mut self);

    /// Year-filter controls present in the content region.
    fn year_controls(&self) -> Vec<YearControl>;

    /// Whether the markup has at least one year-indexed news list.
    fn has_news_lists(&self) -> bool;

    /// Project the selected year onto controls and news lists.
    /// `None` clears every control and hides every list.
    fn show_year(&mut self, year: Option<&str>);

    /// `None` when the gallery container is absent, otherwise whether it
    /// has no children.
    fn gallery_container_empty(&self) -> Option<bool>;

    /// Start the asynchronous manifest fetch and card render.
    fn request_gallery(&mut self);
}

/// Container the gallery cards are appended to.
pub trait GallerySink {
    fn is_empty(&self) -> bool;

    /// Append one card per item, in order.
    fn append_cards(&mut self, items: &[GalleryItem]);
}
