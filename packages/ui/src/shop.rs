//! Shop context: authentication, cart, and wishlist state.

use dioxus::prelude::*;

use api::{ApiConfig, HttpClient, ShopUser};
use store::{ShopSnapshot, ShopStore, StoreError};

use crate::platform::{platform_storage, PlatformStorage};

/// Concrete store type behind the provider.
pub type ShopAuth = ShopStore<HttpClient, PlatformStorage>;

/// Handle exposed through context.
#[derive(Clone)]
pub struct ShopContext {
    store: ShopAuth,
    snapshot: Signal<ShopSnapshot>,
}

impl ShopContext {
    /// Current session snapshot. Reading it subscribes the component.
    pub fn snapshot(&self) -> ShopSnapshot {
        self.snapshot.cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.read().user.is_some()
    }

    /// Wishlist membership without a network call, for icon toggling.
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.snapshot
            .read()
            .wishlist
            .iter()
            .any(|item| item.product_id == product_id)
    }

    /// Number of cart lines, for the header badge.
    pub fn cart_count(&self) -> usize {
        self.snapshot.read().cart.len()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<ShopUser, StoreError> {
        self.store.login(email, password).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<ShopUser, StoreError> {
        self.store.register(name, email, password).await
    }

    pub async fn logout(&self) {
        self.store.logout().await;
    }

    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<(), StoreError> {
        self.store.add_to_cart(product_id, quantity).await
    }

    pub async fn update_cart_item(&self, item_id: &str, quantity: u32) -> Result<(), StoreError> {
        self.store.update_cart_item(item_id, quantity).await
    }

    pub async fn remove_from_cart(&self, item_id: &str) -> Result<(), StoreError> {
        self.store.remove_from_cart(item_id).await
    }

    pub async fn clear_cart(&self) -> Result<(), StoreError> {
        self.store.clear_cart().await
    }

    pub async fn add_to_wishlist(&self, product_id: &str) -> Result<(), StoreError> {
        self.store.add_to_wishlist(product_id).await
    }

    pub async fn remove_from_wishlist(&self, product_id: &str) -> Result<(), StoreError> {
        self.store.remove_from_wishlist(product_id).await
    }
}

/// Get the shop context provided by [`ShopProvider`].
pub fn use_shop() -> ShopContext {
    use_context::<ShopContext>()
}

/// Provider component that owns the shop session store.
/// Wrap the shop area with this to enable auth, cart, and wishlist state.
#[component]
pub fn ShopProvider(children: Element) -> Element {
    let store = use_hook(|| {
        ShopStore::new(HttpClient::new(ApiConfig::from_env()), platform_storage())
    });

    let snapshot = use_signal(|| store.snapshot());

    // Mirror store changes into the signal.
    use_hook(|| {
        let observed = store.clone();
        let mut snapshot = snapshot;
        store.subscribe(move || snapshot.set(observed.snapshot()));
    });

    // Initial hydration: the user refresh resolves before cart and wishlist
    // are fetched together.
    let _ = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move {
                store.hydrate().await;
            }
        }
    });

    use_context_provider(|| ShopContext {
        store: store.clone(),
        snapshot,
    });

    rsx! {
        {children}
    }
}
