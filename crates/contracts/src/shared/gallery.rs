use serde::{Deserialize, Serialize};

/// One card in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub thumbnail: String,
    /// Link target of the card.
    pub page: String,
}

/// Shape of `gallery_thumbnail.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryManifest {
    pub items: Vec<GalleryItem>,
}
