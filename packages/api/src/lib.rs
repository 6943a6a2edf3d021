//! # API crate — HTTP client for the Skillforge REST API
//!
//! Everything the session stores need to talk to the remote server: the
//! transport wrapper, the endpoint surface for both application areas, and
//! the shared data model.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base-URL configuration (`/api` default, env override) |
//! | [`http`] | [`HttpClient`] — reqwest wrapper with bearer-token attachment and uniform error mapping |
//! | [`academy`] | [`AcademyApi`] — login and signup for the learning academy |
//! | [`shop`] | [`ShopApi`] — current user, cart, and wishlist for the digital-goods shop |
//! | [`models`] | Client-safe records mirrored from server responses |
//! | [`error`] | [`ApiError`] — network / rejected / invalid-session / decode |
//!
//! The endpoint surfaces are traits implemented by [`HttpClient`], so the
//! store layer can be exercised against canned implementations in tests.

pub mod academy;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod shop;

pub use academy::{AcademyApi, AcademyAuth};
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::HttpClient;
pub use models::{AcademyRole, AcademyUser, Cart, CartItem, Product, ShopRole, ShopUser, WishlistItem};
pub use shop::{ShopApi, ShopAuth};
