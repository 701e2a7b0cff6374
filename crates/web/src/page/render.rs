//! Pure HTML render of the product page.
//!
//! Output depends only on the view model. Long titles and descriptions are
//! clipped with CSS; the text itself is emitted in full.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use storefront_catalog::Product;

use super::view_model::{PageViewModel, RenderState};

const PAGE_TITLE: &str = "My E-commerce App";
const PAGE_DESCRIPTION: &str = "A simple e-commerce application";

const STYLES: &str = r#"
*,*::before,*::after{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif}
.page{min-height:100vh;background:#f3f4f6;padding:2rem}
.page-title{font-size:2.25rem;font-weight:700;text-align:center;color:#1f2937;margin:0 0 2rem}
.error-banner{text-align:center;color:#ef4444;font-size:1.125rem;margin:0 0 1rem}
.empty-state{text-align:center;color:#4b5563;font-size:1.125rem}
.product-grid{display:grid;grid-template-columns:repeat(1,minmax(0,1fr));gap:1.5rem}
@media (min-width:640px){.product-grid{grid-template-columns:repeat(2,minmax(0,1fr))}}
@media (min-width:768px){.product-grid{grid-template-columns:repeat(3,minmax(0,1fr))}}
@media (min-width:1024px){.product-grid{grid-template-columns:repeat(4,minmax(0,1fr))}}
.product-card{background:#fff;border-radius:.5rem;box-shadow:0 10px 15px -3px rgba(0,0,0,.1);overflow:hidden;display:flex;flex-direction:column;transition:transform .3s}
.product-card:hover{transform:scale(1.05)}
.product-image{width:100%;height:12rem;object-fit:contain;padding:1rem}
.product-body{padding:1.25rem;display:flex;flex-direction:column;flex-grow:1}
.product-title{font-size:1.25rem;font-weight:600;color:#111827;margin:0 0 .5rem;white-space:nowrap;overflow:hidden;text-overflow:ellipsis}
.product-description{color:#4b5563;font-size:.875rem;margin:0 0 .75rem;flex-grow:1;display:-webkit-box;-webkit-box-orient:vertical;-webkit-line-clamp:3;line-clamp:3;overflow:hidden}
.product-footer{display:flex;justify-content:space-between;align-items:center;margin-top:auto}
.product-price{font-size:1.5rem;font-weight:700;color:#15803d}
.add-to-cart{background:#2563eb;color:#fff;border:0;padding:.5rem 1rem;border-radius:.5rem;cursor:pointer;transition:background .2s}
.add-to-cart:hover{background:#1d4ed8}
"#;

/// Render the whole document for a view model.
pub fn render_page(view: &PageViewModel) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                meta name="description" content=(PAGE_DESCRIPTION);
                link rel="icon" href="/favicon.ico";
                style { (PreEscaped(STYLES)) }
            }
            body {
                main class="page" {
                    h1 class="page-title" { "Welcome to Our Store!" }
                    (page_body(view))
                }
            }
        }
    }
}

fn page_body(view: &PageViewModel) -> Markup {
    html! {
        @match view.render_state() {
            RenderState::HasError(message) => {
                p class="error-banner" role="alert" {
                    "Error loading products: " (message) ". Please try again later."
                }
            }
            RenderState::NoError => {
                @if view.products.is_empty() {
                    p class="empty-state" { "No products found." }
                }
            }
        }
        @if !view.products.is_empty() {
            div class="product-grid" {
                @for product in &view.products {
                    (product_card(product))
                }
            }
        }
    }
}

fn product_card(product: &Product) -> Markup {
    html! {
        div class="product-card" data-product-id=(product.id) {
            img class="product-image" src=(product.image) alt=(product.title);
            div class="product-body" {
                h2 class="product-title" title=(product.title) { (product.title) }
                p class="product-description" { (product.description) }
                div class="product-footer" {
                    span class="product-price" { (product.display_price()) }
                    // No cart yet: the control is inert.
                    button type="button" class="add-to-cart" { "Add to Cart" }
                }
            }
        }
    }
}
