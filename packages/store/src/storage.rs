//! Durable key/value storage behind the session stores.

/// Storage keys shared by the session stores.
pub mod keys {
    /// Academy bearer token, current scheme.
    pub const ACADEMY_TOKEN: &str = "academy_token";
    /// Academy user snapshot (JSON), current scheme.
    pub const ACADEMY_USER: &str = "academy_user";
    /// Academy token under the legacy scheme, read once and migrated.
    pub const LEGACY_TOKEN: &str = "token";
    /// Academy user under the legacy scheme, read once and migrated.
    pub const LEGACY_USER: &str = "user";
    /// Shop bearer token.
    pub const SHOP_TOKEN: &str = "shop_token";
}

/// Synchronous string key/value storage.
///
/// Implementations must tolerate an unavailable backend (e.g. localStorage
/// disabled in private browsing) by behaving as empty rather than failing:
/// reads return `None`, writes do nothing.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
