//! Storefront web server: fetches the catalog and renders the product page.

pub mod app;
pub mod config;
pub mod middleware;
pub mod page;

pub use config::{ConfigError, StorefrontConfig};
