//! Cart contents as mirrored from the server.

use serde::{Deserialize, Serialize};

/// Product snapshot embedded in a cart line.
///
/// Owned by the server. Pricing and discount logic live there, so the
/// client never derives money values from these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    pub product: Product,
}

/// Cart payload returned by `GET /shop/cart`.
///
/// `total` is computed server-side and mirrored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
}
