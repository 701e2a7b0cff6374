use storefront_catalog::{CatalogClient, CatalogError, Product};

/// Everything the page render needs, already shaped for display.
///
/// Either `error` is set and `products` is empty, or `products` is exactly
/// what the catalog returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageViewModel {
    pub products: Vec<Product>,
    pub error: Option<String>,
}

/// Which of the two page variants a view model renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState<'a> {
    /// Show the banner with this message.
    HasError(&'a str),
    NoError,
}

impl PageViewModel {
    pub fn loaded(products: Vec<Product>) -> Self {
        Self {
            products,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn render_state(&self) -> RenderState<'_> {
        match &self.error {
            Some(message) => RenderState::HasError(message),
            None => RenderState::NoError,
        }
    }
}

impl From<Result<Vec<Product>, CatalogError>> for PageViewModel {
    fn from(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self::loaded(products),
            Err(err) => Self::failed(err.to_string()),
        }
    }
}

/// Fetch the catalog once and turn the outcome into a view model.
///
/// Never fails: an upstream failure is logged and becomes an error view.
pub async fn prepare_view_model(catalog: &CatalogClient) -> PageViewModel {
    let result = catalog.fetch_products().await;
    if let Err(err) = &result {
        tracing::error!(error = ?err, url = %catalog.url(), "error fetching products");
    }
    result.into()
}
