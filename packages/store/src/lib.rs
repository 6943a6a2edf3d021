//! # Store crate — session state for the Skillforge client
//!
//! Two session stores, one per application area, each a constructed object
//! with an injected API client and storage backend:
//!
//! - [`AcademyStore`] — who is logged in to the learning academy, durable
//!   across restarts via [`SessionStorage`].
//! - [`ShopStore`] — shop authentication plus cart and wishlist, kept in
//!   sync with the server after every mutation.
//!
//! Storage backends mirror the platforms the client runs on: browser
//! localStorage on web (behind the `web` feature), a JSON file on desktop
//! and mobile, and an in-memory map for tests.

pub mod error;
pub mod storage;

mod reactive;
pub use reactive::Reactive;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::LocalStorage;

mod academy;
pub use academy::{AcademySnapshot, AcademyStore};

mod shop;
pub use shop::{ShopSnapshot, ShopStore};

pub use error::StoreError;
pub use storage::{keys, SessionStorage};
