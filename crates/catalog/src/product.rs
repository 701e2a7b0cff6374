use serde::{Deserialize, Serialize};

/// Customer rating summary attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    pub count: u64,
}

/// A catalog product, exactly as the upstream API reports it.
///
/// Products are read-only here: fetched per request, rendered, dropped.
/// `category` and `rating` are never displayed, so a product missing them
/// still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Absolute image URL.
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Display price, e.g. `$9.50`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price with a dollar prefix and exactly two decimals.
///
/// Exact half-cent ties round up (`0.125` is `$0.13`); everything else
/// rounds to the nearest cent of the stored value.
pub fn format_price(price: f64) -> String {
    let cents = price * 100.0;
    let floor = cents.floor();
    // Only multiples of 1/8 can sit exactly on a half cent.
    if cents - floor == 0.5 && (price * 8.0).fract() == 0.0 {
        return format!("${:.2}", (floor + 1.0) / 100.0);
    }
    format!("${price:.2}")
}
