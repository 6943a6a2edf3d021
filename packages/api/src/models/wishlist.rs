//! Wishlist entries as mirrored from the server.

use serde::{Deserialize, Serialize};

/// One saved product. Membership is tested by `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub product_id: String,
}
