//! HTTP client for the upstream product catalog.

use crate::{CatalogError, Product};

/// Endpoint used when no override is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Single-shot catalog client.
///
/// One `GET` per call, no query parameters, no retries, and the platform's
/// default timeouts. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full product list, in the order the catalog returns it.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(url = %self.url, "fetching products");

        let res = self.http.get(&self.url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(CatalogError::status(status));
        }

        let body = res.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;

        tracing::debug!(count = products.len(), "catalog responded");
        Ok(products)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}
