//! Navigation core: fragment cache, content swap, page re-initialization,
//! gallery rendering and back/forward handling.
//!
//! Everything in here talks to the browser only through [`host::Host`] and
//! [`host::GallerySink`], so it runs unchanged under native unit tests.

pub mod cache;
pub mod gallery;
pub mod history;
pub mod host;
pub mod navigator;
pub mod reinit;
pub mod swap;

#[cfg(test)]
pub mod testing;

pub use cache::{CacheEntry, FragmentCache, PageStatus};
pub use host::{GallerySink, Host, YearControl};
pub use navigator::{NavState, Navigator};
