use axum::{http::StatusCode as AxumStatus, routing::get, Router};
use reqwest::StatusCode;
use serde_json::json;

use storefront_catalog::CatalogClient;
use storefront_web::app::{build_app, AppServices};

/// Serve `app` on an ephemeral localhost port until dropped.
struct Spawned {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Spawned {
    async fn serve(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for Spawned {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A storefront wired to the given catalog URL (same router as prod).
async fn storefront(catalog_url: String) -> Spawned {
    let services = AppServices::new(CatalogClient::new(catalog_url));
    Spawned::serve(build_app(services)).await
}

/// Stub catalog answering `GET /products` with a fixed status and body.
async fn stub_catalog(status: AxumStatus, body: String) -> Spawned {
    let app = Router::new().route(
        "/products",
        get(move || async move { (status, body) }),
    );
    Spawned::serve(app).await
}

fn products_json(titles: &[&str]) -> String {
    let items: Vec<serde_json::Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            json!({
                "id": i + 1,
                "title": title,
                "price": 9.5,
                "description": format!("About {title}"),
                "category": "electronics",
                "image": format!("https://example.com/{}.jpg", i + 1),
                "rating": { "rate": 4.2, "count": 17 }
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

async fn get_page(base_url: &str) -> (StatusCode, Option<String>, String) {
    let res = reqwest::Client::new()
        .get(format!("{}/", base_url))
        .send()
        .await
        .unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    (status, content_type, res.text().await.unwrap())
}

fn card_count(html: &str) -> usize {
    html.matches(r#"class="product-card""#).count()
}

#[tokio::test]
async fn renders_every_upstream_product_in_order() {
    let catalog = stub_catalog(
        AxumStatus::OK,
        products_json(&["Backpack", "T-Shirt", "Jacket"]),
    )
    .await;
    let srv = storefront(format!("{}/products", catalog.base_url)).await;

    let (status, content_type, body) = get_page(&srv.base_url).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(card_count(&body), 3);

    let backpack = body.find("Backpack").unwrap();
    let tshirt = body.find("T-Shirt").unwrap();
    let jacket = body.find("Jacket").unwrap();
    assert!(backpack < tshirt && tshirt < jacket);
    assert!(body.contains("$9.50"));
    assert!(!body.contains(r#"class="error-banner""#));
}

#[tokio::test]
async fn empty_catalog_renders_no_products_message() {
    let catalog = stub_catalog(AxumStatus::OK, "[]".to_string()).await;
    let srv = storefront(format!("{}/products", catalog.base_url)).await;

    let (status, _, body) = get_page(&srv.base_url).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No products found."));
    assert!(!body.contains(r#"class="error-banner""#));
    assert_eq!(card_count(&body), 0);
}

#[tokio::test]
async fn upstream_500_still_serves_page_with_banner() {
    let catalog = stub_catalog(AxumStatus::INTERNAL_SERVER_ERROR, "boom".to_string()).await;
    let srv = storefront(format!("{}/products", catalog.base_url)).await;

    let (status, _, body) = get_page(&srv.base_url).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(
        "Error loading products: Failed to fetch products: 500 Internal Server Error. Please try again later."
    ));
    assert!(!body.contains("No products found."));
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("Welcome to Our Store!"));
}

#[tokio::test]
async fn malformed_upstream_body_still_serves_page_with_banner() {
    let catalog = stub_catalog(AxumStatus::OK, "<html>not json</html>".to_string()).await;
    let srv = storefront(format!("{}/products", catalog.base_url)).await;

    let (status, _, body) = get_page(&srv.base_url).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error loading products: malformed catalog response"));
    assert_eq!(card_count(&body), 0);
}

#[tokio::test]
async fn unreachable_upstream_still_serves_page_with_banner() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let srv = storefront(format!("http://{}/products", addr)).await;

    let (status, _, body) = get_page(&srv.base_url).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error loading products: failed to reach catalog"));
    assert!(!body.contains(&format!("http://{}", addr)));
    assert_eq!(card_count(&body), 0);
}

#[tokio::test]
async fn each_request_fetches_fresh_data() {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/products",
        get(move || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                let titles: Vec<String> = (0..n).map(|i| format!("Item {i}")).collect();
                let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
                products_json(&titles)
            }
        }),
    );
    let catalog = Spawned::serve(app).await;
    let srv = storefront(format!("{}/products", catalog.base_url)).await;

    let (_, _, first) = get_page(&srv.base_url).await;
    let (_, _, second) = get_page(&srv.base_url).await;

    assert_eq!(card_count(&first), 1);
    assert_eq!(card_count(&second), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn health_is_ok_without_touching_upstream() {
    let srv = storefront("http://127.0.0.1:9/products".to_string()).await;

    let res = reqwest::Client::new()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}
