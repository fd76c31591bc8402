//! Browser bindings for the navigation core.

pub mod dom;
pub mod events;
pub mod fetch;
pub mod gallery_view;
pub mod preload;

pub use dom::DomHost;
pub use events::SharedNavigator;
