//! Gallery cards rendered with leptos into the page's existing grid.

use crate::nav::gallery;
use crate::nav::host::GallerySink;
use crate::web::fetch::{fallback_items, fetch_manifest};
use contracts::shared::config::GalleryConfig;
use contracts::shared::gallery::GalleryItem;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
fn GalleryCard(item: GalleryItem) -> impl IntoView {
    view! {
        <a class="gallery-card" href=item.page>
            <img src=item.thumbnail alt=item.title.clone() draggable="false" />
            <div class="gallery-card-title">{item.title}</div>
        </a>
    }
}

pub struct DomGallery {
    grid: web_sys::HtmlElement,
}

impl DomGallery {
    pub fn find(grid_id: &str) -> Option<Self> {
        let grid = web_sys::window()?.document()?.get_element_by_id(grid_id)?;
        grid.dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(|grid| Self { grid })
    }
}

impl GallerySink for DomGallery {
    fn is_empty(&self) -> bool {
        self.grid.child_element_count() == 0
    }

    fn append_cards(&mut self, items: &[GalleryItem]) {
        let items = items.to_vec();
        // Cards are static; nothing ever unmounts them.
        leptos::mount::mount_to(self.grid.clone(), move || {
            items
                .into_iter()
                .map(|item| view! { <GalleryCard item=item /> })
                .collect_view()
        })
        .forget();
    }
}

/// Fetch the manifest (or fall back) and fill the grid, if it is still
/// on the page and still empty once the data arrives.
pub async fn render_gallery(config: GalleryConfig, grid_id: String) {
    let manifest = fetch_manifest(&config.manifest).await;
    let items = gallery::resolve_items(manifest, || fallback_items(&config.fallback_global));
    let Some(mut grid) = DomGallery::find(&grid_id) else {
        log::debug!("gallery grid '{}' gone before render", grid_id);
        return;
    };
    let added = gallery::render(&mut grid, &items);
    log::debug!("gallery rendered {} card(s)", added);
}
