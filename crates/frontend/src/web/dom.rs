//! [`Host`] over the live browser document.

use crate::nav::host::{Host, YearControl};
use crate::web::gallery_view;
use contracts::shared::config::{GalleryConfig, SelectorConfig, SiteConfig};
use contracts::shared::history::HistoryState;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, NodeList, Window};

pub struct DomHost {
    window: Window,
    document: Document,
    selectors: SelectorConfig,
    gallery: GalleryConfig,
}

impl DomHost {
    pub fn new(window: Window, document: Document, config: &SiteConfig) -> Self {
        Self {
            window,
            document,
            selectors: config.selectors.clone(),
            gallery: config.gallery.clone(),
        }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }

    fn content_region(&self) -> Option<Element> {
        self.query(&self.selectors.content)
    }

    fn news_lists(&self) -> Vec<Element> {
        self.query_all(&format!("[id^=\"{}\"]", self.selectors.news_list_prefix))
    }

    fn set_class(&self, element: &Element, class: &str, on: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, on) {
            log::warn!("Failed to toggle class '{}': {:?}", class, err);
        }
    }
}

/// Collect the element nodes of a `NodeList`.
pub(crate) fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Host for DomHost {
    fn current_url(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn navigate(&mut self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            log::warn!("Failed to navigate to {}: {:?}", url, err);
        }
    }

    fn replace_content(&mut self, html: &str) -> Result<(), String> {
        let region = self
            .content_region()
            .ok_or_else(|| format!("no element matches '{}'", self.selectors.content))?;
        region.set_inner_html(html);
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn tab_hrefs(&self) -> Vec<Option<String>> {
        self.query_all(&self.selectors.tab)
            .iter()
            .map(|tab| tab.get_attribute("href"))
            .collect()
    }

    fn set_tab_active(&mut self, index: usize, active: bool) {
        if let Some(tab) = self.query_all(&self.selectors.tab).get(index) {
            self.set_class(tab, &self.selectors.active_class, active);
        }
    }

    fn scroll_to_top(&mut self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
        if let Some(container) = self.query(&self.selectors.scroll_container) {
            container.set_scroll_top(0);
        }
    }

    fn push_history(&mut self, state: &HistoryState, url: &str) {
        let result = serde_wasm_bindgen::to_value(state)
            .map_err(|e| format!("Failed to serialize history state: {}", e))
            .and_then(|state| {
                self.window
                    .history()
                    .and_then(|history| history.push_state_with_url(&state, "", Some(url)))
                    .map_err(|e| format!("pushState failed: {:?}", e))
            });
        if let Err(err) = result {
            log::warn!("{}", err);
        }
    }

    fn replace_history(&mut self, state: &HistoryState) {
        let result = serde_wasm_bindgen::to_value(state)
            .map_err(|e| format!("Failed to serialize history state: {}", e))
            .and_then(|state| {
                self.window
                    .history()
                    .and_then(|history| history.replace_state(&state, ""))
                    .map_err(|e| format!("replaceState failed: {:?}", e))
            });
        if let Err(err) = result {
            log::warn!("{}", err);
        }
    }

    fn block_image_drag(&mut self) {
        let Some(region) = self.content_region() else {
            return;
        };
        let images = region
            .query_selector_all("img")
            .map(elements)
            .unwrap_or_default();
        for img in images {
            if let Err(err) = img.set_attribute("draggable", "false") {
                log::warn!("Failed to set draggable on image: {:?}", err);
            }
        }
    }

    fn year_controls(&self) -> Vec<YearControl> {
        self.query_all(&self.selectors.year_button)
            .iter()
            .filter_map(|button| {
                Some(YearControl {
                    year: button.get_attribute("data-year")?,
                    pre_active: button.class_list().contains(&self.selectors.active_class),
                })
            })
            .collect()
    }

    fn has_news_lists(&self) -> bool {
        !self.news_lists().is_empty()
    }

    fn show_year(&mut self, year: Option<&str>) {
        for button in self.query_all(&self.selectors.year_button) {
            let on = year.is_some() && button.get_attribute("data-year").as_deref() == year;
            self.set_class(&button, &self.selectors.active_class, on);
        }
        let visible_id = year.map(|y| format!("{}{}", self.selectors.news_list_prefix, y));
        for list in self.news_lists() {
            let visible = visible_id.as_deref() == Some(list.id().as_str());
            self.set_class(&list, &self.selectors.hidden_class, !visible);
        }
    }

    fn gallery_container_empty(&self) -> Option<bool> {
        self.document
            .get_element_by_id(&self.selectors.gallery_grid_id)
            .map(|grid| grid.child_element_count() == 0)
    }

    fn request_gallery(&mut self) {
        spawn_local(gallery_view::render_gallery(
            self.gallery.clone(),
            self.selectors.gallery_grid_id.clone(),
        ));
    }
}
