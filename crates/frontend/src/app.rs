//! Session start: configuration, controller, listeners and preload.

use crate::nav::Navigator;
use crate::web::{events, preload, DomHost, SharedNavigator};
use contracts::shared::config::{load_config, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Document;

/// Id of the optional inline `<script type="application/toml">` element
/// that overrides the embedded configuration.
pub const CONFIG_ELEMENT_ID: &str = "spa-nav-config";

fn read_config(document: &Document) -> SiteConfig {
    let inline = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match load_config(inline.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Invalid #{} config, using defaults: {:#}", CONFIG_ELEMENT_ID, err);
            SiteConfig::default()
        }
    }
}

/// Wire up navigation for the current document.
pub fn boot() -> Result<SharedNavigator, String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document")?;
    let config = read_config(&document);
    let site = config.site_map().map_err(|e| format!("{:#}", e))?;

    let host = DomHost::new(window, document, &config);
    let nav: SharedNavigator = Rc::new(RefCell::new(Navigator::new(host, site)));
    {
        let mut nav = nav.borrow_mut();
        nav.init_history();
        nav.activate_initial();
        log::info!(
            "navigation ready on {}",
            nav.state()
                .current
                .as_ref()
                .map(|p| p.as_str())
                .unwrap_or("a non-navigable page")
        );
    }

    events::install(&nav, &config.selectors)?;
    preload::start(&nav, &config.selectors.content);
    Ok(nav)
}
