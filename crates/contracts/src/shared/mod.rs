pub mod config;
pub mod gallery;
pub mod history;
pub mod page;
