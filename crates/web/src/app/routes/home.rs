use std::sync::Arc;

use axum::extract::Extension;
use maud::Markup;

use crate::app::services::AppServices;
use crate::page::{prepare_view_model, render_page};

/// `GET /`: fetch the catalog, then render. Always answers `200 OK`.
pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> Markup {
    let view = prepare_view_model(services.catalog()).await;
    render_page(&view)
}
