use anyhow::Context;

use storefront_web::{
    app::{build_app, build_services},
    StorefrontConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env().context("invalid configuration")?;
    storefront_observability::init_with(&config.observability());

    let app = build_app(build_services(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        catalog = %config.catalog_url,
        "listening"
    );

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
