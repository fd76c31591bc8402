//! Gallery renderer: picks the item source and fills the grid once.

use super::host::GallerySink;
use contracts::shared::gallery::{GalleryItem, GalleryManifest};

/// Items to render: the manifest when it loaded, otherwise the static
/// fallback list, otherwise nothing.
pub fn resolve_items<F>(manifest: Result<GalleryManifest, String>, fallback: F) -> Vec<GalleryItem>
where
    F: FnOnce() -> Option<Vec<GalleryItem>>,
{
    match manifest {
        Ok(manifest) => manifest.items,
        Err(err) => {
            log::warn!("gallery manifest unavailable: {}", err);
            fallback().unwrap_or_default()
        }
    }
}

/// Append one card per item unless the container already has content.
/// Returns the number of cards added.
pub fn render<S: GallerySink>(sink: &mut S, items: &[GalleryItem]) -> usize {
    if !sink.is_empty() {
        log::debug!("gallery container already filled, skipping render");
        return 0;
    }
    if items.is_empty() {
        return 0;
    }
    sink.append_cards(items);
    items.len()
}
