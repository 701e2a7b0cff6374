//! `storefront-catalog` — product data and the upstream catalog client.
//!
//! The catalog is an external, read-only service. This crate only knows how to
//! fetch its product list once and hand it back untouched.

pub mod client;
pub mod error;
pub mod product;

pub use client::{CatalogClient, DEFAULT_CATALOG_URL};
pub use error::CatalogError;
pub use product::{format_price, Product, Rating};
