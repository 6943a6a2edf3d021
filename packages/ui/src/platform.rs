//! Platform-appropriate session storage selection.
//!
//! - **Web** (WASM + `web` feature): browser localStorage
//! - **Desktop / Mobile** (native): JSON file under the platform data dir
//! - **WASM without `web`** (e.g. SSR prepass): in-memory, nothing persists

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;

/// Create the storage backend for the current platform.
pub fn platform_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("skillforge");
        store::FileStorage::new(base)
    }
}
