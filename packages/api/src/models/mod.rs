//! Client-side data model, mirrored from server responses.

mod cart;
mod user;
mod wishlist;

pub use cart::{Cart, CartItem, Product};
pub use user::{AcademyRole, AcademyUser, ShopRole, ShopUser};
pub use wishlist::WishlistItem;
