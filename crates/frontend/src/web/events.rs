//! Document-level listeners.
//!
//! Clicks and drag starts are delegated from the document, so they keep
//! working after the content region is replaced and need no per-element
//! closures.

use crate::nav::Navigator;
use crate::web::dom::DomHost;
use contracts::shared::config::SelectorConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

pub type SharedNavigator = Rc<RefCell<Navigator<DomHost>>>;

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub fn install(nav: &SharedNavigator, selectors: &SelectorConfig) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document")?;

    // Tab clicks swap pages, year buttons switch the news list.
    let tab_selector = selectors.tab.clone();
    let year_selector = selectors.year_button.clone();
    let nav_click = Rc::clone(nav);
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = event_element(&event) else {
            return;
        };
        if let Some(tab) = closest(&target, &tab_selector) {
            let href = tab.get_attribute("href");
            if nav_click.borrow_mut().handle_tab_click(href.as_deref()) {
                event.prevent_default();
            }
            return;
        }
        if let Some(year) =
            closest(&target, &year_selector).and_then(|button| button.get_attribute("data-year"))
        {
            nav_click.borrow_mut().select_year(&year);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to add click listener: {:?}", e))?;
    on_click.forget();

    // Native image dragging is off inside the content region.
    let content_selector = selectors.content.clone();
    let on_dragstart = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event_element(&event) else {
            return;
        };
        if target.tag_name().eq_ignore_ascii_case("img")
            && closest(&target, &content_selector).is_some()
        {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(Event)>);
    document
        .add_event_listener_with_callback("dragstart", on_dragstart.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to add dragstart listener: {:?}", e))?;
    on_dragstart.forget();

    let nav_pop = Rc::clone(nav);
    let on_popstate = Closure::wrap(Box::new(move |_: Event| {
        nav_pop.borrow_mut().on_popstate();
    }) as Box<dyn FnMut(Event)>);
    window
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to add popstate listener: {:?}", e))?;
    on_popstate.forget();

    Ok(())
}
