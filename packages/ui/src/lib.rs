//! This crate contains the shared state containers for the Skillforge
//! frontends: providers that construct the session stores, hydrate them on
//! mount, and mirror their snapshots into signals for view components to
//! read. Views, routing, and presentational components live in the app
//! crates that consume this one.

mod platform;
pub use platform::{platform_storage, PlatformStorage};

mod academy;
pub use academy::{use_academy_auth, AcademyAuthContext, AcademyAuthProvider};

mod shop;
pub use shop::{use_shop, ShopContext, ShopProvider};
