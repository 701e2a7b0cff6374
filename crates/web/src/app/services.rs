use storefront_catalog::CatalogClient;

use crate::config::StorefrontConfig;

/// Dependencies shared by every request. Nothing here is mutable.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: CatalogClient,
}

impl AppServices {
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }
}

pub fn build_services(config: &StorefrontConfig) -> AppServices {
    AppServices::new(CatalogClient::new(config.catalog_url.clone()))
}
