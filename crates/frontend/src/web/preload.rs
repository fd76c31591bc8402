use crate::web::events::SharedNavigator;
use crate::web::fetch::{fetch_page, parse_fragment};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Fire one independent fetch per whitelisted page. Results land in the
/// navigator's cache in whatever order they complete.
pub fn start(nav: &SharedNavigator, content_selector: &str) {
    let pages = nav.borrow_mut().begin_preload();
    for page in pages {
        let nav = Rc::clone(nav);
        let selector = content_selector.to_string();
        spawn_local(async move {
            let result = fetch_page(page.as_str())
                .await
                .and_then(|raw| parse_fragment(&raw, &selector));
            nav.borrow_mut().record_preload(&page, result);
        });
    }
}
