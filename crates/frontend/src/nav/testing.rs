//! In-memory stand-ins for the browser, shared by the unit tests.

use super::cache::CacheEntry;
use super::host::{GallerySink, Host, YearControl};
use super::navigator::Navigator;
use contracts::shared::config::SiteConfig;
use contracts::shared::gallery::GalleryItem;
use contracts::shared::history::HistoryState;
use std::collections::HashMap;

/// Mutating host operations, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Navigate,
    ReplaceContent,
    SetTitle,
    SetTab,
    ScrollToTop,
    PushHistory,
    ReplaceHistory,
    BlockDrag,
    ShowYear,
    RequestGallery,
}

/// What the markup currently in the content region contains.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub years: Vec<YearControl>,
    pub news_lists: bool,
    /// Child count of the gallery container, `None` when absent.
    pub gallery: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct FakeTab {
    pub href: Option<String>,
    pub active: bool,
}

#[derive(Debug)]
pub struct FakeHost {
    pub url: String,
    pub back_stack: Vec<String>,
    pub content: String,
    pub has_content_region: bool,
    pub title: String,
    pub tabs: Vec<FakeTab>,
    pub fixture: Fixture,
    /// Fixture applied when the keyed markup is swapped in.
    pub fixtures: HashMap<String, Fixture>,
    pub history: Vec<HistoryState>,
    pub replaced: Vec<HistoryState>,
    pub navigations: Vec<String>,
    pub shown_year: Option<Option<String>>,
    pub scroll_resets: usize,
    pub drag_blocks: usize,
    pub gallery_requests: usize,
    pub calls: Vec<Call>,
}

impl FakeHost {
    pub fn new(url: &str) -> Self {
        let tabs = SiteConfig::default()
            .pages
            .into_iter()
            .map(|page| FakeTab {
                href: Some(page),
                active: false,
            })
            .collect();
        Self {
            url: url.to_string(),
            back_stack: Vec::new(),
            content: "<h2>initial</h2>".to_string(),
            has_content_region: true,
            title: "Home".to_string(),
            tabs,
            fixture: Fixture::default(),
            fixtures: HashMap::new(),
            history: Vec::new(),
            replaced: Vec::new(),
            navigations: Vec::new(),
            shown_year: None,
            scroll_resets: 0,
            drag_blocks: 0,
            gallery_requests: 0,
            calls: Vec::new(),
        }
    }

    pub fn add_tab(&mut self, href: &str) {
        self.tabs.push(FakeTab {
            href: Some(href.to_string()),
            active: false,
        });
    }

    pub fn active_tabs(&self) -> Vec<String> {
        self.tabs
            .iter()
            .filter(|t| t.active)
            .filter_map(|t| t.href.clone())
            .collect()
    }

    /// Browser back button: restore the previous URL.
    pub fn go_back(&mut self) {
        if let Some(url) = self.back_stack.pop() {
            self.url = url;
        }
    }

    fn resolve_url(&self, relative: &str) -> String {
        match self.url.rsplit_once('/') {
            Some((dir, _)) => format!("{}/{}", dir, relative),
            None => relative.to_string(),
        }
    }
}

impl Host for FakeHost {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn navigate(&mut self, url: &str) {
        self.calls.push(Call::Navigate);
        self.navigations.push(url.to_string());
    }

    fn replace_content(&mut self, html: &str) -> Result<(), String> {
        if !self.has_content_region {
            return Err("no content region".to_string());
        }
        self.calls.push(Call::ReplaceContent);
        self.content = html.to_string();
        self.fixture = self.fixtures.get(html).cloned().unwrap_or_default();
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(Call::SetTitle);
        self.title = title.to_string();
    }

    fn tab_hrefs(&self) -> Vec<Option<String>> {
        self.tabs.iter().map(|t| t.href.clone()).collect()
    }

    fn set_tab_active(&mut self, index: usize, active: bool) {
        self.calls.push(Call::SetTab);
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.active = active;
        }
    }

    fn scroll_to_top(&mut self) {
        self.calls.push(Call::ScrollToTop);
        self.scroll_resets += 1;
    }

    fn push_history(&mut self, state: &HistoryState, url: &str) {
        self.calls.push(Call::PushHistory);
        self.history.push(state.clone());
        let next = self.resolve_url(url);
        self.back_stack.push(std::mem::replace(&mut self.url, next));
    }

    fn replace_history(&mut self, state: &HistoryState) {
        self.calls.push(Call::ReplaceHistory);
        self.replaced.push(state.clone());
    }

    fn block_image_drag(&mut self) {
        self.calls.push(Call::BlockDrag);
        self.drag_blocks += 1;
    }

    fn year_controls(&self) -> Vec<YearControl> {
        self.fixture.years.clone()
    }

    fn has_news_lists(&self) -> bool {
        self.fixture.news_lists
    }

    fn show_year(&mut self, year: Option<&str>) {
        self.calls.push(Call::ShowYear);
        self.shown_year = Some(year.map(str::to_string));
    }

    fn gallery_container_empty(&self) -> Option<bool> {
        self.fixture.gallery.map(|children| children == 0)
    }

    fn request_gallery(&mut self) {
        self.calls.push(Call::RequestGallery);
        self.gallery_requests += 1;
    }
}

#[derive(Debug, Default)]
pub struct FakeGallery {
    pub cards: Vec<GalleryItem>,
}

impl GallerySink for FakeGallery {
    fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn append_cards(&mut self, items: &[GalleryItem]) {
        self.cards.extend_from_slice(items);
    }
}

pub fn entry(content: &str, title: &str) -> CacheEntry {
    CacheEntry {
        content: content.to_string(),
        title: title.to_string(),
    }
}

pub fn gallery_item(n: usize) -> GalleryItem {
    GalleryItem {
        title: format!("Work {}", n),
        thumbnail: format!("img/thumb-{}.jpg", n),
        page: format!("gallery/work-{}.html", n),
    }
}

/// Navigator over a [`FakeHost`] with the default site configuration.
pub fn navigator_at(url: &str) -> Navigator<FakeHost> {
    let site = SiteConfig::default()
        .site_map()
        .expect("default config is valid");
    Navigator::new(FakeHost::new(url), site)
}

/// Like [`navigator_at`], with every page preloaded as
/// `<h2>{page}</h2>` titled `{page} | Portfolio`. The host's call log is
/// cleared.
pub fn preloaded(url: &str) -> Navigator<FakeHost> {
    let mut nav = navigator_at(url);
    for page in nav.begin_preload() {
        let content = format!("<h2>{}</h2>", page);
        nav.record_preload(&page, Ok(entry(&content, &format!("{} | Portfolio", page))));
    }
    nav.host_mut().calls.clear();
    nav
}
