//! Upstream fetch failures.

use thiserror::Error;

/// Failure to obtain the product list from the upstream catalog.
///
/// Every variant is terminal for the current request: there is exactly one
/// attempt per page view.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent, or the body could not be read.
    ///
    /// The message is shown to shoppers, so the request URL is stripped.
    #[error("failed to reach catalog: {0}")]
    Transport(#[source] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Failed to fetch products: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The body was not a JSON array of products.
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

impl CatalogError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}
